//! Cycle detection and processing order (Kahn's algorithm)
//!
//! Both passes consume their own copy of the in-degree table, so the graph
//! stays untouched and either pass can run on its own.

use std::collections::VecDeque;

use super::graph::DependencyGraph;

/// Result of one Kahn traversal
struct Traversal {
    order: Vec<usize>,
    visited: Vec<bool>,
}

/// Items with no pending anchors are dequeued first, in collection order;
/// dependents are released in collection order as their anchors complete.
fn kahn(graph: &DependencyGraph) -> Traversal {
    let mut in_degree = graph.in_degrees();
    let mut queue: VecDeque<usize> = (0..graph.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(graph.len());
    let mut visited = vec![false; graph.len()];

    while let Some(current) = queue.pop_front() {
        order.push(current);
        visited[current] = true;
        for dependent in graph.dependents(current) {
            let degree = &mut in_degree[dependent];
            *degree = degree.saturating_sub(1);
            if *degree == 0 && !visited[dependent] {
                queue.push_back(dependent);
            }
        }
    }

    Traversal { order, visited }
}

/// Items that cannot be ordered because they sit on, or depend on, a cycle.
///
/// Returns `None` when every item is reachable.
pub fn detect_cycle(graph: &DependencyGraph) -> Option<Vec<usize>> {
    let traversal = kahn(graph);
    if traversal.order.len() == graph.len() {
        return None;
    }
    let unresolved = (0..graph.len()).filter(|&i| !traversal.visited[i]).collect();
    Some(unresolved)
}

/// Order in which items are sized and positioned: every anchor precedes
/// the items depending on it. Only meaningful for an acyclic graph; items
/// on a cycle are left out.
pub fn topological_order(graph: &DependencyGraph) -> Vec<usize> {
    kahn(graph).order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::diagnostic::Diagnostics;
    use crate::layout::rules::{AlignRules, HorizontalAlign, VerticalAlign};
    use crate::scene::SceneItem;

    fn graph_of(items: &[SceneItem]) -> DependencyGraph {
        DependencyGraph::build(items, &mut Diagnostics::new())
    }

    fn item(id: &str, rules: AlignRules) -> SceneItem {
        SceneItem::new(id, 10.0, 10.0).with_rules(rules)
    }

    #[test]
    fn test_anchor_precedes_dependent_regardless_of_declaration() {
        let items = vec![
            item("b", AlignRules::new().left("a", HorizontalAlign::End)),
            item("a", AlignRules::new()),
        ];
        let graph = graph_of(&items);

        assert_eq!(detect_cycle(&graph), None);
        assert_eq!(topological_order(&graph), vec![1, 0]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let items = vec![
            item("c", AlignRules::new()),
            item("d", AlignRules::new().left("a", HorizontalAlign::End)),
            item("a", AlignRules::new()),
            item("e", AlignRules::new().top("a", VerticalAlign::Bottom)),
            item("b", AlignRules::new()),
        ];
        let graph = graph_of(&items);

        assert_eq!(topological_order(&graph), vec![0, 2, 4, 1, 3]);
    }

    #[test]
    fn test_diamond_dependency() {
        let items = vec![
            item("top", AlignRules::new()),
            item("l", AlignRules::new().top("top", VerticalAlign::Bottom)),
            item("r", AlignRules::new().top("top", VerticalAlign::Bottom)),
            item(
                "bottom",
                AlignRules::new()
                    .left("l", HorizontalAlign::Start)
                    .right("r", HorizontalAlign::End),
            ),
        ];
        let graph = graph_of(&items);

        assert_eq!(topological_order(&graph), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_two_item_cycle_is_detected() {
        let items = vec![
            item("a", AlignRules::new().left("b", HorizontalAlign::End)),
            item("b", AlignRules::new().left("a", HorizontalAlign::End)),
            item("free", AlignRules::new()),
        ];
        let graph = graph_of(&items);

        assert_eq!(detect_cycle(&graph), Some(vec![0, 1]));
    }

    #[test]
    fn test_dependents_of_a_cycle_are_unresolved_too() {
        let items = vec![
            item("x", AlignRules::new().left("x", HorizontalAlign::Start)),
            item("y", AlignRules::new().left("x", HorizontalAlign::End)),
        ];
        let graph = graph_of(&items);

        assert_eq!(detect_cycle(&graph), Some(vec![0, 1]));
    }

    #[test]
    fn test_detection_does_not_consume_the_graph() {
        let items = vec![
            item("a", AlignRules::new()),
            item("b", AlignRules::new().left("a", HorizontalAlign::End)),
        ];
        let graph = graph_of(&items);

        assert_eq!(detect_cycle(&graph), None);
        assert_eq!(graph.in_degree(1), 1);
        assert_eq!(topological_order(&graph), vec![0, 1]);
        assert_eq!(topological_order(&graph), vec![0, 1]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = graph_of(&[]);
        assert_eq!(detect_cycle(&graph), None);
        assert!(topological_order(&graph).is_empty());
    }
}

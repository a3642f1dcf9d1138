//! Relative container orchestration
//!
//! One layout pass runs the phases in a fixed order:
//!
//! ```text
//! Idle -> GraphBuilt -> Sequenced     -> Sized -> Positioned -> Idle
//!                    \-> CycleDetected -> Sized -> Positioned -> Idle   (all items at 0x0)
//! ```
//!
//! Nothing survives a pass except what is handed back to the items and the
//! returned [`LayoutOutcome`].

use serde::Serialize;
use tracing::{debug, trace};

use super::config::LayoutConfig;
use super::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use super::graph::DependencyGraph;
use super::item::LayoutItem;
use super::position::resolve_offset;
use super::size::{resolve_constraint, AnchorSpace, BoundaryCache, Frame};
use super::topo::{detect_cycle, topological_order};
use super::types::{Constraint, Offset, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    GraphBuilt,
    CycleDetected,
    Sequenced,
    Sized,
    Positioned,
    Idle,
}

fn advance(phase: Phase) {
    trace!(?phase, "layout phase");
}

/// Final geometry of one item, as reported by a pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFrame {
    /// Item id, or `<item #N>` for items without one
    pub name: String,
    pub size: Size,
    pub position: Offset,
}

/// Everything a layout pass produced
#[derive(Debug, Clone)]
pub struct LayoutOutcome {
    /// The container's own resolved size
    pub container_size: Size,
    /// One frame per item, in collection order
    pub frames: Vec<ItemFrame>,
    /// Collection positions in the order items were processed; empty when
    /// the pass degenerated
    pub order: Vec<usize>,
    /// Whether a cyclic dependency forced every item to (0, 0)
    pub degenerate: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl LayoutOutcome {
    /// True when the pass reported nothing
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Frame of the item with the given id or display name; with duplicate
    /// ids the last one is returned.
    pub fn frame(&self, name: &str) -> Option<&ItemFrame> {
        self.frames.iter().rev().find(|f| f.name == name)
    }

    /// Diagnostics of one kind
    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind() == kind)
    }
}

/// Run one layout pass over `items` inside a container with `constraint`.
///
/// Every item ends the pass with a size and a position, even when its rules
/// are inconsistent; check [`LayoutOutcome::diagnostics`] to find out.
pub fn compute<I: LayoutItem>(
    items: &mut [I],
    constraint: Constraint,
    config: &LayoutConfig,
) -> LayoutOutcome {
    let span = tracing::debug_span!("relative_layout", items = items.len());
    let _enter = span.enter();

    let container = constraint.resolve_container(config.default_viewport);
    let fallback = Constraint::new(constraint.min, container);

    let mut diagnostics = Diagnostics::new();
    let graph = DependencyGraph::build(items, &mut diagnostics);
    advance(Phase::GraphBuilt);

    if let Some(cyclic) = detect_cycle(&graph) {
        advance(Phase::CycleDetected);
        let names = cyclic.iter().map(|&i| graph.name(i).to_string()).collect();
        diagnostics.report(Diagnostic::cyclic(names));

        let frames = lay_out_degenerate(items);
        advance(Phase::Sized);
        advance(Phase::Positioned);
        advance(Phase::Idle);
        return LayoutOutcome {
            container_size: container,
            frames: report_frames(&graph, &frames),
            order: Vec::new(),
            degenerate: true,
            diagnostics: diagnostics.into_vec(),
        };
    }

    let order = topological_order(&graph);
    advance(Phase::Sequenced);

    let mut frames = vec![Frame::default(); items.len()];
    for &index in &order {
        let item = &mut items[index];
        item.set_active(true);

        let space = AnchorSpace {
            graph: &graph,
            frames: &frames,
            container,
        };
        let mut boundaries = BoundaryCache::default();
        let child_constraint =
            match resolve_constraint(item.align_rules(), &mut boundaries, &space, fallback) {
                Ok(c) => c,
                Err(axes) => {
                    for axis in axes {
                        diagnostics.report(Diagnostic::illegal_axis(graph.name(index), axis));
                    }
                    Constraint::zero()
                }
            };
        let size = child_constraint.constrain(item.layout(child_constraint));
        let position = resolve_offset(item.align_rules(), size, &space);
        item.set_position(position);

        trace!(item = graph.name(index), %size, %position, "item resolved");
        frames[index] = Frame { size, position };
    }
    advance(Phase::Sized);
    advance(Phase::Positioned);

    debug!(
        container = %container,
        diagnostics = diagnostics.len(),
        "layout pass complete"
    );
    advance(Phase::Idle);

    LayoutOutcome {
        container_size: container,
        frames: report_frames(&graph, &frames),
        order,
        degenerate: false,
        diagnostics: diagnostics.into_vec(),
    }
}

/// Deactivate every item and lay it out at (0, 0), placed at the origin
fn lay_out_degenerate<I: LayoutItem>(items: &mut [I]) -> Vec<Frame> {
    items
        .iter_mut()
        .map(|item| {
            item.set_active(false);
            let zero = Constraint::zero();
            let size = zero.constrain(item.layout(zero));
            item.set_position(Offset::zero());
            Frame {
                size,
                position: Offset::zero(),
            }
        })
        .collect()
}

fn report_frames(graph: &DependencyGraph, frames: &[Frame]) -> Vec<ItemFrame> {
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| ItemFrame {
            name: graph.name(index).to_string(),
            size: frame.size,
            position: frame.position,
        })
        .collect()
}

/// A container that owns its items and lays them out relative to each other
#[derive(Debug, Clone, Default)]
pub struct RelativeContainer<I> {
    items: Vec<I>,
    config: LayoutConfig,
}

impl<I: LayoutItem> RelativeContainer<I> {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
        }
    }

    /// Append a child; later children win id collisions
    pub fn push(&mut self, item: I) {
        self.items.push(item);
    }

    /// Builder form of [`RelativeContainer::push`]
    pub fn with_item(mut self, item: I) -> Self {
        self.push(item);
        self
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [I] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<I> {
        self.items
    }

    /// Run one full layout pass
    pub fn layout(&mut self, constraint: Constraint) -> LayoutOutcome {
        compute(&mut self.items, constraint, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::layout::rules::{AlignRules, HorizontalAlign, VerticalAlign, CONTAINER_ANCHOR};
    use crate::layout::types::Axis;
    use crate::scene::SceneItem;

    fn container() -> Constraint {
        Constraint::loose(Size::new(2000.0, 1000.0))
    }

    fn run(items: &mut [SceneItem]) -> LayoutOutcome {
        compute(items, container(), &LayoutConfig::default())
    }

    #[test]
    fn test_empty_container() {
        let outcome = run(&mut []);
        assert!(outcome.is_clean());
        assert!(outcome.frames.is_empty());
        assert_eq!(outcome.container_size, Size::new(2000.0, 1000.0));
    }

    #[test]
    fn test_unbounded_container_uses_viewport() {
        let rules = AlignRules::new().right(CONTAINER_ANCHOR, HorizontalAlign::End);
        let mut items = vec![SceneItem::new("a", 100.0, 100.0).with_rules(rules)];
        let config = LayoutConfig::new().with_viewport(400.0, 300.0);
        let outcome = compute(&mut items, Constraint::unbounded(), &config);

        assert_eq!(outcome.container_size, Size::new(400.0, 300.0));
        assert_eq!(items[0].position(), Offset::new(300.0, 0.0));
    }

    #[test]
    fn test_chain_is_resolved_in_dependency_order() {
        let after = |anchor: &str| AlignRules::new().left(anchor, HorizontalAlign::End);
        let mut items = vec![
            SceneItem::new("c", 50.0, 50.0).with_rules(after("b")),
            SceneItem::new("b", 100.0, 100.0).with_rules(after("a")),
            SceneItem::new("a", 200.0, 200.0).with_rules(after(CONTAINER_ANCHOR)),
        ];
        let outcome = run(&mut items);

        assert_eq!(outcome.order, vec![2, 1, 0]);
        assert_eq!(items[1].position().x, 200.0);
        assert_eq!(items[0].position().x, 300.0);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_cycle_degrades_every_item() {
        let a_rules = AlignRules::new().left("b", HorizontalAlign::End);
        let b_rules = AlignRules::new().top("a", VerticalAlign::Bottom);
        let mut items = vec![
            SceneItem::new("free", 200.0, 200.0),
            SceneItem::new("a", 200.0, 200.0).with_rules(a_rules),
            SceneItem::new("b", 200.0, 200.0).with_rules(b_rules),
        ];
        let outcome = run(&mut items);

        assert!(outcome.degenerate);
        assert!(outcome.order.is_empty());
        for item in &items {
            assert_eq!(item.size(), Size::zero());
            assert!(!item.is_active());
        }
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::cyclic(vec!["a".to_string(), "b".to_string()])]
        );
    }

    #[test]
    fn test_illegal_axis_zeroes_both_axes() {
        let a_rules = AlignRules::new()
            .left(CONTAINER_ANCHOR, HorizontalAlign::Start)
            .top(CONTAINER_ANCHOR, VerticalAlign::Center);
        let b_rules = AlignRules::new()
            .left("a", HorizontalAlign::End)
            .right("a", HorizontalAlign::Start);
        let mut items = vec![
            SceneItem::new("a", 200.0, 200.0).with_rules(a_rules),
            SceneItem::new("b", 200.0, 200.0).with_rules(b_rules),
        ];
        let outcome = run(&mut items);

        assert_eq!(items[0].position(), Offset::new(0.0, 500.0));
        assert_eq!(items[1].size(), Size::zero());
        assert_eq!(items[1].position(), Offset::new(200.0, 0.0));
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::illegal_axis("b", Axis::Horizontal)]
        );
        assert!(items[1].is_active());
    }

    #[test]
    fn test_outcome_frames_follow_collection_order() {
        let below_a = AlignRules::new().top("a", VerticalAlign::Bottom);
        let mut items = vec![
            SceneItem::new("b", 10.0, 10.0).with_rules(below_a),
            SceneItem::new("", 20.0, 20.0),
            SceneItem::new("a", 30.0, 30.0),
        ];
        let outcome = run(&mut items);

        let names: Vec<_> = outcome.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "<item #2>", "a"]);
        assert_eq!(outcome.frame("b").unwrap().position, Offset::new(0.0, 30.0));
        assert_eq!(outcome.frame("<item #2>").unwrap().size, Size::new(20.0, 20.0));
    }

    #[test]
    fn test_relative_container_owns_items() {
        let rules = AlignRules::new().bottom(CONTAINER_ANCHOR, VerticalAlign::Bottom);
        let mut container = RelativeContainer::new(LayoutConfig::default())
            .with_item(SceneItem::new("a", 200.0, 200.0).with_rules(rules));
        let outcome = container.layout(Constraint::loose(Size::new(500.0, 500.0)));

        assert!(outcome.is_clean());
        assert_eq!(container.items()[0].position(), Offset::new(0.0, 300.0));
        assert_eq!(container.into_items().len(), 1);
    }
}

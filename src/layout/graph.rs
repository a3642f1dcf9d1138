//! Dependency graph between the items of one layout pass
//!
//! Nodes are item positions in the collection, so items with an empty or
//! shadowed id still take part in the pass. Ids only matter for resolving
//! anchors: an edge `anchor -> dependent` exists for every distinct item a
//! dependent's rules refer to. Container anchors and unknown ids add no edge.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::diagnostic::{Diagnostic, Diagnostics};
use super::item::{display_name, LayoutItem};
use super::rules::Anchor;

/// Anchor relations of the current item set, rebuilt on every pass
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    names: Vec<String>,
    /// Addressable id -> item position; later items win
    ids: HashMap<String, usize>,
    /// For each item, the items whose rules reference it
    relied_on: Vec<BTreeSet<usize>>,
    /// For each item, the number of distinct items it references
    in_degree: Vec<u32>,
}

impl DependencyGraph {
    /// Build the graph from the items' rules, reporting duplicate ids,
    /// dangling anchors and self references.
    pub fn build<I: LayoutItem>(items: &[I], diagnostics: &mut Diagnostics) -> Self {
        let mut ids = HashMap::new();
        let mut names = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let id = item.id();
            names.push(display_name(id, index));
            if id.is_empty() {
                continue;
            }
            if let Some(shadowed) = ids.insert(id.to_string(), index) {
                diagnostics.report(Diagnostic::duplicate_id(id, shadowed + 1));
            }
        }

        let mut relied_on = vec![BTreeSet::new(); items.len()];
        let mut in_degree = vec![0; items.len()];
        for (index, item) in items.iter().enumerate() {
            let mut anchors = BTreeSet::new();
            let mut dangling = HashSet::new();
            for (_, rule) in item.align_rules().iter() {
                let Anchor::Item(anchor_id) = rule.anchor() else {
                    continue;
                };
                match ids.get(anchor_id.as_str()) {
                    Some(&anchor) => {
                        if anchor == index && anchors.insert(anchor) {
                            diagnostics.report(Diagnostic::self_reference(&names[index]));
                        } else {
                            anchors.insert(anchor);
                        }
                    }
                    None => {
                        if dangling.insert(anchor_id.as_str()) {
                            diagnostics.report(Diagnostic::dangling(&names[index], anchor_id));
                        }
                    }
                }
            }
            in_degree[index] = anchors.len() as u32;
            for anchor in anchors {
                relied_on[anchor].insert(index);
            }
        }

        Self {
            names,
            ids,
            relied_on,
            in_degree,
        }
    }

    /// Number of items (nodes)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Item position an anchor id currently addresses
    pub fn resolve(&self, id: &str) -> Option<usize> {
        self.ids.get(id).copied()
    }

    /// Diagnostic name of an item
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Items that depend on `anchor`, in collection order
    pub fn dependents(&self, anchor: usize) -> impl Iterator<Item = usize> + '_ {
        self.relied_on[anchor].iter().copied()
    }

    /// Distinct anchors `index` depends on
    pub fn in_degree(&self, index: usize) -> u32 {
        self.in_degree[index]
    }

    /// Copy of the in-degree table for a traversal to consume
    pub(crate) fn in_degrees(&self) -> Vec<u32> {
        self.in_degree.clone()
    }
}

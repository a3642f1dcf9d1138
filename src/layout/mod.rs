//! Anchor-based relative layout
//!
//! Items are positioned by pinning their edges to edges of the container or
//! of sibling items. A pass builds the anchor dependency graph, orders it
//! topologically, then sizes and positions each item once all of its anchors
//! are final.

pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod graph;
pub mod item;
pub mod position;
pub mod rules;
pub mod size;
pub mod topo;
pub mod types;

pub use config::LayoutConfig;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use engine::{compute, ItemFrame, LayoutOutcome, RelativeContainer};
pub use graph::DependencyGraph;
pub use item::{display_name, LayoutItem};
pub use rules::{
    AlignDirection, AlignKind, AlignRule, AlignRules, Anchor, Edge, HorizontalAlign,
    VerticalAlign, CONTAINER_ANCHOR,
};
pub use topo::{detect_cycle, topological_order};
pub use types::{Axis, Constraint, Offset, Size};

//! Non-fatal problems found while resolving a layout pass
//!
//! A pass always produces a size and position for every item. When rules
//! are inconsistent the affected items degrade instead, and the reason is
//! reported here so callers can tell a clean pass from a degraded one.

use std::fmt;

use thiserror::Error;

use super::types::Axis;

/// A problem detected during a layout pass
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// Two items share a non-empty id; the later one is the anchor target
    #[error("component id '{id}' is duplicated, item #{shadowed} can no longer be used as an anchor")]
    DuplicateId { id: String, shadowed: usize },

    /// A rule references an id that no current item has
    #[error("anchor '{anchor}' of component {item} is not found, will be ignored")]
    DanglingAnchor { item: String, anchor: String },

    /// A rule anchors an item to itself
    #[error("component {item} has dependency on itself")]
    SelfReference { item: String },

    /// The dependency graph has a cycle; every item was laid out at (0, 0)
    #[error("components [{}] have loop dependency, layout skipped", items.join(", "))]
    CyclicDependency { items: Vec<String> },

    /// Two boundaries on one axis span a non-positive extent
    #[error("component {item} {axis} alignment illegal, will layout with size (0, 0)")]
    IllegalAxisResolution { item: String, axis: Axis },
}

impl Diagnostic {
    pub fn duplicate_id(id: impl Into<String>, shadowed: usize) -> Self {
        Self::DuplicateId {
            id: id.into(),
            shadowed,
        }
    }

    pub fn dangling(item: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self::DanglingAnchor {
            item: item.into(),
            anchor: anchor.into(),
        }
    }

    pub fn self_reference(item: impl Into<String>) -> Self {
        Self::SelfReference { item: item.into() }
    }

    pub fn cyclic(items: Vec<String>) -> Self {
        Self::CyclicDependency { items }
    }

    pub fn illegal_axis(item: impl Into<String>, axis: Axis) -> Self {
        Self::IllegalAxisResolution {
            item: item.into(),
            axis,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::DuplicateId { .. } => DiagnosticKind::DuplicateId,
            Self::DanglingAnchor { .. } => DiagnosticKind::DanglingAnchor,
            Self::SelfReference { .. } => DiagnosticKind::SelfReference,
            Self::CyclicDependency { .. } => DiagnosticKind::CyclicDependency,
            Self::IllegalAxisResolution { .. } => DiagnosticKind::IllegalAxis,
        }
    }
}

/// Category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    DuplicateId,
    DanglingAnchor,
    SelfReference,
    CyclicDependency,
    IllegalAxis,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::DuplicateId => write!(f, "duplicate-id"),
            DiagnosticKind::DanglingAnchor => write!(f, "dangling-anchor"),
            DiagnosticKind::SelfReference => write!(f, "self-reference"),
            DiagnosticKind::CyclicDependency => write!(f, "cyclic-dependency"),
            DiagnosticKind::IllegalAxis => write!(f, "illegal-axis"),
        }
    }
}

/// Collects the diagnostics of one pass, logging each as it arrives
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(kind = %diagnostic.kind(), "{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

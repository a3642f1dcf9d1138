//! Size resolution from pinned boundaries
//!
//! Each rule pins one boundary of an item (an edge or its center line) to an
//! absolute coordinate. Once two boundaries of the same axis are pinned the
//! item's extent on that axis is fixed; otherwise the item may size itself
//! freely within the container.

use super::graph::DependencyGraph;
use super::rules::{AlignDirection, AlignRule, AlignRules, Anchor};
use super::types::{Axis, Constraint, Offset, Size};

/// Final geometry of an item within the current pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    pub size: Size,
    pub position: Offset,
}

/// Everything an anchor can resolve against during a pass: the container
/// box and the frames of items already processed. Shared with the position
/// resolver.
pub struct AnchorSpace<'a> {
    pub graph: &'a DependencyGraph,
    pub frames: &'a [Frame],
    pub container: Size,
}

impl AnchorSpace<'_> {
    /// Start coordinate and extent of an anchor along `axis`, or `None` when
    /// the anchor id matches no current item.
    pub fn span(&self, anchor: &Anchor, axis: Axis) -> Option<(f64, f64)> {
        match anchor {
            Anchor::Container => Some((0.0, self.container.along(axis))),
            Anchor::Item(id) => {
                let frame = self.frames.get(self.graph.resolve(id)?)?;
                Some((frame.position.along(axis), frame.size.along(axis)))
            }
        }
    }

    /// Absolute coordinate the rule's anchor edge sits at
    pub fn coordinate(&self, rule: &AlignRule, axis: Axis) -> Option<f64> {
        let (start, extent) = self.span(rule.anchor(), axis)?;
        Some(start + rule.edge().within(extent))
    }
}

/// Per-direction boundary coordinates of one item, valid for a single pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundaryCache {
    coords: [Option<f64>; 6],
}

impl BoundaryCache {
    pub fn get(&self, direction: AlignDirection) -> Option<f64> {
        self.coords[direction.index()]
    }

    fn set(&mut self, direction: AlignDirection, value: f64) {
        self.coords[direction.index()] = Some(value);
    }

    /// Number of resolved boundaries on an axis
    pub fn resolved_on(&self, axis: Axis) -> usize {
        AlignDirection::on_axis(axis)
            .iter()
            .filter(|d| self.get(**d).is_some())
            .count()
    }

    /// Whether two boundaries of the axis are known
    pub fn is_pinned(&self, axis: Axis) -> bool {
        self.resolved_on(axis) >= 2
    }

    /// Resolve the boundaries of `axis` from the item's rules, in direction
    /// order, until two are known. Rules whose anchor cannot be found are
    /// skipped.
    pub fn pin(&mut self, rules: &AlignRules, axis: Axis, space: &AnchorSpace<'_>) {
        for (direction, rule) in rules.on_axis(axis) {
            if self.is_pinned(axis) {
                break;
            }
            if let Some(value) = space.coordinate(rule, axis) {
                self.set(direction, value);
            }
        }
    }

    /// Extent implied by the pinned boundaries of an axis
    pub fn extent(&self, axis: Axis) -> AxisExtent {
        let [start, center, end] = AlignDirection::on_axis(axis).map(|d| self.get(d));
        let (raw, factor) = match (start, center, end) {
            (Some(start), Some(center), _) => (center - start, 2.0),
            (_, Some(center), Some(end)) => (end - center, 2.0),
            (Some(start), None, Some(end)) => (end - start, 1.0),
            _ => return AxisExtent::Free,
        };
        if raw <= 0.0 {
            AxisExtent::Illegal
        } else {
            AxisExtent::Fixed(factor * raw)
        }
    }
}

/// What the pinned boundaries say about one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisExtent {
    /// Fewer than two boundaries; the item sizes itself
    Free,
    /// Exactly this extent
    Fixed(f64),
    /// The boundaries span a non-positive extent
    Illegal,
}

/// Derive the constraint an item is laid out with.
///
/// Free axes fall back to `fallback`; pinned axes are forced to their
/// extent. When any axis is illegal the failing axes are returned and the
/// item must be laid out at (0, 0).
pub fn resolve_constraint(
    rules: &AlignRules,
    cache: &mut BoundaryCache,
    space: &AnchorSpace<'_>,
    fallback: Constraint,
) -> Result<Constraint, Vec<Axis>> {
    let mut constraint = fallback;
    let mut illegal = Vec::new();

    for axis in Axis::BOTH {
        cache.pin(rules, axis, space);
        match cache.extent(axis) {
            AxisExtent::Free => {}
            AxisExtent::Fixed(extent) => {
                constraint.min.set_along(axis, extent);
                constraint.max.set_along(axis, extent);
            }
            AxisExtent::Illegal => illegal.push(axis),
        }
    }

    if illegal.is_empty() {
        Ok(constraint)
    } else {
        Err(illegal)
    }
}

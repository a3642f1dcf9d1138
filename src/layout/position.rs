//! Offset resolution for sized items

use super::rules::{AlignDirection, AlignRules, Edge};
use super::size::AnchorSpace;
use super::types::{Axis, Offset, Size};

/// Compute the offset of an item of `size` from its rules.
///
/// Per axis only the first rule whose anchor resolves is used, in direction
/// order. Axes without such a rule stay at 0.
pub fn resolve_offset(rules: &AlignRules, size: Size, space: &AnchorSpace<'_>) -> Offset {
    let mut offset = Offset::zero();
    for axis in Axis::BOTH {
        let placed = rules.on_axis(axis).find_map(|(direction, rule)| {
            let (anchor_position, anchor_extent) = space.span(rule.anchor(), axis)?;
            let raw = axis_offset(direction, rule.edge(), anchor_extent, size.along(axis));
            Some(anchor_position + raw)
        });
        if let Some(value) = placed {
            offset.set_along(axis, value);
        }
    }
    offset
}

/// Offset of the item relative to its anchor's start, for one axis
fn axis_offset(direction: AlignDirection, anchor_edge: Edge, anchor: f64, item: f64) -> f64 {
    match (direction.edge(), anchor_edge) {
        (Edge::Start, Edge::Start) => 0.0,
        (Edge::Start, Edge::Center) => anchor / 2.0,
        (Edge::Start, Edge::End) => anchor,
        (Edge::Center, Edge::Start) => -item / 2.0,
        (Edge::Center, Edge::Center) => (anchor - item) / 2.0,
        (Edge::Center, Edge::End) => anchor - item / 2.0,
        (Edge::End, Edge::Start) => -item,
        (Edge::End, Edge::Center) => anchor / 2.0 - item,
        (Edge::End, Edge::End) => anchor - item,
    }
}

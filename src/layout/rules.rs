//! Alignment rules attached to relatively positioned items
//!
//! A rule pins one edge (or the center line) of the *subject* item to an edge
//! of an *anchor*: either the container itself or a sibling item addressed by
//! id. Rules are keyed by [`AlignDirection`], so an item carries at most six of
//! them, three per axis.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use super::types::Axis;

/// Reserved anchor id meaning "the container's own box"
pub const CONTAINER_ANCHOR: &str = "__container__";

/// Which edge or center line of the subject item is being pinned.
///
/// The declaration order is also the iteration order of [`AlignRules`]:
/// horizontal directions first, then vertical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignDirection {
    Left,
    Middle,
    Right,
    Top,
    Center,
    Bottom,
}

impl AlignDirection {
    pub const ALL: [AlignDirection; 6] = [
        AlignDirection::Left,
        AlignDirection::Middle,
        AlignDirection::Right,
        AlignDirection::Top,
        AlignDirection::Center,
        AlignDirection::Bottom,
    ];

    /// The axis group this direction belongs to
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Middle | Self::Right => Axis::Horizontal,
            Self::Top | Self::Center | Self::Bottom => Axis::Vertical,
        }
    }

    /// Where along its own extent the subject is pinned
    pub fn edge(self) -> Edge {
        match self {
            Self::Left | Self::Top => Edge::Start,
            Self::Middle | Self::Center => Edge::Center,
            Self::Right | Self::Bottom => Edge::End,
        }
    }

    /// The three directions of an axis, in iteration order
    pub fn on_axis(axis: Axis) -> [AlignDirection; 3] {
        match axis {
            Axis::Horizontal => [Self::Left, Self::Middle, Self::Right],
            Axis::Vertical => [Self::Top, Self::Center, Self::Bottom],
        }
    }

    /// Slot of this direction in per-direction tables
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AlignDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Horizontal edge of the anchor a rule refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    Start,
    Center,
    End,
}

/// Vertical edge of the anchor a rule refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Axis-neutral position along an extent: leading edge, center, trailing edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    /// Coordinate of this edge within an extent that starts at 0
    pub fn within(self, extent: f64) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => extent / 2.0,
            Edge::End => extent,
        }
    }
}

impl From<HorizontalAlign> for Edge {
    fn from(align: HorizontalAlign) -> Self {
        match align {
            HorizontalAlign::Start => Edge::Start,
            HorizontalAlign::Center => Edge::Center,
            HorizontalAlign::End => Edge::End,
        }
    }
}

impl From<VerticalAlign> for Edge {
    fn from(align: VerticalAlign) -> Self {
        match align {
            VerticalAlign::Top => Edge::Start,
            VerticalAlign::Center => Edge::Center,
            VerticalAlign::Bottom => Edge::End,
        }
    }
}

/// How the anchor's edge is selected, tagged by axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignKind {
    Horizontal(HorizontalAlign),
    Vertical(VerticalAlign),
}

impl AlignKind {
    /// Parse a lowercase alignment name as used in scene files:
    /// `start|center|end` horizontally, `top|center|bottom` vertically.
    pub fn parse(axis: Axis, name: &str) -> Option<Self> {
        let kind = match (axis, name) {
            (Axis::Horizontal, "start") => AlignKind::Horizontal(HorizontalAlign::Start),
            (Axis::Horizontal, "center") => AlignKind::Horizontal(HorizontalAlign::Center),
            (Axis::Horizontal, "end") => AlignKind::Horizontal(HorizontalAlign::End),
            (Axis::Vertical, "top") => AlignKind::Vertical(VerticalAlign::Top),
            (Axis::Vertical, "center") => AlignKind::Vertical(VerticalAlign::Center),
            (Axis::Vertical, "bottom") => AlignKind::Vertical(VerticalAlign::Bottom),
            _ => return None,
        };
        Some(kind)
    }

    pub fn edge(self) -> Edge {
        match self {
            AlignKind::Horizontal(h) => h.into(),
            AlignKind::Vertical(v) => v.into(),
        }
    }
}

/// The reference box of a rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The container itself; never part of the dependency graph
    Container,
    /// A sibling item, by id
    Item(String),
}

impl Anchor {
    pub fn item(id: impl Into<String>) -> Self {
        Anchor::Item(id.into())
    }

    /// The id as written in a rule (the sentinel for the container)
    pub fn as_str(&self) -> &str {
        match self {
            Anchor::Container => CONTAINER_ANCHOR,
            Anchor::Item(id) => id,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Anchor::Container)
    }
}

impl From<&str> for Anchor {
    fn from(id: &str) -> Self {
        if id == CONTAINER_ANCHOR {
            Anchor::Container
        } else {
            Anchor::Item(id.to_string())
        }
    }
}

impl From<String> for Anchor {
    fn from(id: String) -> Self {
        if id == CONTAINER_ANCHOR {
            Anchor::Container
        } else {
            Anchor::Item(id)
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single alignment rule: anchor plus the anchor edge to pin to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignRule {
    anchor: Anchor,
    kind: AlignKind,
}

impl AlignRule {
    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    pub fn kind(&self) -> AlignKind {
        self.kind
    }

    /// Edge of the anchor this rule refers to
    pub fn edge(&self) -> Edge {
        self.kind.edge()
    }
}

/// The alignment rules of one item, keyed by direction.
///
/// Horizontal directions can only be given a [`HorizontalAlign`] and vertical
/// directions a [`VerticalAlign`], so a stored rule always matches its axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignRules {
    rules: BTreeMap<AlignDirection, AlignRule>,
}

impl AlignRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the left edge
    pub fn left(self, anchor: impl Into<Anchor>, align: HorizontalAlign) -> Self {
        self.with(
            AlignDirection::Left,
            anchor.into(),
            AlignKind::Horizontal(align),
        )
    }

    /// Pin the horizontal center line
    pub fn middle(self, anchor: impl Into<Anchor>, align: HorizontalAlign) -> Self {
        self.with(
            AlignDirection::Middle,
            anchor.into(),
            AlignKind::Horizontal(align),
        )
    }

    /// Pin the right edge
    pub fn right(self, anchor: impl Into<Anchor>, align: HorizontalAlign) -> Self {
        self.with(
            AlignDirection::Right,
            anchor.into(),
            AlignKind::Horizontal(align),
        )
    }

    /// Pin the top edge
    pub fn top(self, anchor: impl Into<Anchor>, align: VerticalAlign) -> Self {
        self.with(
            AlignDirection::Top,
            anchor.into(),
            AlignKind::Vertical(align),
        )
    }

    /// Pin the vertical center line
    pub fn center(self, anchor: impl Into<Anchor>, align: VerticalAlign) -> Self {
        self.with(
            AlignDirection::Center,
            anchor.into(),
            AlignKind::Vertical(align),
        )
    }

    /// Pin the bottom edge
    pub fn bottom(self, anchor: impl Into<Anchor>, align: VerticalAlign) -> Self {
        self.with(
            AlignDirection::Bottom,
            anchor.into(),
            AlignKind::Vertical(align),
        )
    }

    /// Set a rule from an untyped alignment, returning `None` when the kind
    /// belongs to the other axis.
    pub fn try_with(
        self,
        direction: AlignDirection,
        anchor: impl Into<Anchor>,
        kind: AlignKind,
    ) -> Option<Self> {
        let matches_axis = match kind {
            AlignKind::Horizontal(_) => direction.axis() == Axis::Horizontal,
            AlignKind::Vertical(_) => direction.axis() == Axis::Vertical,
        };
        matches_axis.then(|| self.with(direction, anchor.into(), kind))
    }

    fn with(mut self, direction: AlignDirection, anchor: Anchor, kind: AlignKind) -> Self {
        self.rules.insert(direction, AlignRule { anchor, kind });
        self
    }

    pub fn get(&self, direction: AlignDirection) -> Option<&AlignRule> {
        self.rules.get(&direction)
    }

    /// All rules in direction order
    pub fn iter(&self) -> impl Iterator<Item = (AlignDirection, &AlignRule)> {
        self.rules.iter().map(|(d, r)| (*d, r))
    }

    /// Rules of one axis, in direction order
    pub fn on_axis(&self, axis: Axis) -> impl Iterator<Item = (AlignDirection, &AlignRule)> {
        self.iter().filter(move |(d, _)| d.axis() == axis)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

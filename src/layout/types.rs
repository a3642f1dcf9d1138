//! Core geometry types for the layout engine

use std::fmt;

use serde::Serialize;

/// One of the two layout axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero-sized extent
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Unbounded in both directions
    pub fn infinite() -> Self {
        Self::new(f64::INFINITY, f64::INFINITY)
    }

    /// Extent along the given axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Replace the extent along the given axis
    pub fn set_along(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A position relative to the container's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Coordinate along the given axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set_along(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Minimum and maximum size an item may take
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub min: Size,
    pub max: Size,
}

impl Constraint {
    pub fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Anything from zero up to `max`
    pub fn loose(max: Size) -> Self {
        Self::new(Size::zero(), max)
    }

    /// Exactly `size`
    pub fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    /// The degenerate constraint that forces a (0, 0) layout
    pub fn zero() -> Self {
        Self::tight(Size::zero())
    }

    /// No bounds at all
    pub fn unbounded() -> Self {
        Self::loose(Size::infinite())
    }

    /// Clamp a size into this constraint
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            clamp(size.width, self.min.width, self.max.width),
            clamp(size.height, self.min.height, self.max.height),
        )
    }

    /// Resolve the concrete size a container with this constraint occupies.
    ///
    /// Bounded axes take the max constraint; unbounded axes fall back to
    /// the viewport.
    pub fn resolve_container(&self, viewport: Size) -> Size {
        let pick = |max: f64, fallback: f64| if max.is_finite() { max } else { fallback };
        Size::new(
            pick(self.max.width, viewport.width),
            pick(self.max.height, viewport.height),
        )
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::unbounded()
    }
}

// min wins when the bounds cross, and NaN collapses to min
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max.max(min)
    } else if value >= min {
        value
    } else {
        min
    }
}

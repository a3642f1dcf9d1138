//! Errors raised while loading a scene
//!
//! A layout pass itself never fails; see [`crate::layout::Diagnostic`] for
//! the problems it reports instead.

use thiserror::Error;

use crate::layout::{AlignDirection, Axis};

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("item {item}: '{align}' is not a valid alignment for direction {direction}")]
    InvalidAlign {
        item: String,
        direction: AlignDirection,
        align: String,
    },

    #[error("container {axis} bounds invalid: {reason}")]
    InvalidContainer { axis: Axis, reason: &'static str },

    #[error("item {item}: intrinsic size {width}x{height} must be non-negative numbers")]
    NegativeSize {
        item: String,
        width: f64,
        height: f64,
    },
}

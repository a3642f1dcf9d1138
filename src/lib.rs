//! Anchor Layout - relative positioning of items by alignment rules
//!
//! Each item pins its edges (or center lines) to edges of the container or of
//! sibling items. The resolver orders items by their anchors, sizes every item
//! from the boundaries it pins, and positions it against its anchor.
//!
//! # Example
//!
//! ```rust
//! use anchor_layout::{resolve_scene, Offset};
//!
//! let outcome = resolve_scene(r#"
//! [container]
//! width = 2000.0
//! height = 1000.0
//!
//! [[items]]
//! id = "box"
//! width = 200.0
//! height = 200.0
//! rules.middle = { anchor = "__container__", align = "center" }
//! rules.center = { anchor = "__container__", align = "center" }
//! "#).unwrap();
//!
//! assert!(outcome.is_clean());
//! assert_eq!(outcome.frame("box").unwrap().position, Offset::new(900.0, 400.0));
//! ```

pub mod error;
pub mod layout;
pub mod scene;

pub use error::SceneError;
pub use layout::{
    compute, AlignDirection, AlignRules, Anchor, Constraint, Diagnostic, DiagnosticKind,
    HorizontalAlign, ItemFrame, LayoutConfig, LayoutItem, LayoutOutcome, Offset,
    RelativeContainer, Size, VerticalAlign, CONTAINER_ANCHOR,
};
pub use scene::{Scene, SceneItem};

/// Parse a TOML scene and run one layout pass with the default configuration
pub fn resolve_scene(source: &str) -> Result<LayoutOutcome, SceneError> {
    resolve_scene_with_config(source, &LayoutConfig::default())
}

/// Parse a TOML scene and run one layout pass
pub fn resolve_scene_with_config(
    source: &str,
    config: &LayoutConfig,
) -> Result<LayoutOutcome, SceneError> {
    let mut scene = Scene::from_str(source)?;
    Ok(scene.layout(config))
}

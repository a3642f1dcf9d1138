//! Scene files: a container and a list of fixed-size items in TOML
//!
//! ```toml
//! [container]
//! width = 2000.0
//! height = 1000.0
//!
//! [[items]]
//! id = "a"
//! width = 200.0
//! height = 200.0
//! [items.rules]
//! middle = { anchor = "__container__", align = "center" }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::SceneError;
use crate::layout::{
    compute, display_name, AlignDirection, AlignKind, AlignRules, Axis, Constraint,
    LayoutConfig, LayoutItem, LayoutOutcome, Offset, Size,
};

/// A leaf item with a fixed intrinsic size
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    id: String,
    intrinsic: Size,
    rules: AlignRules,
    size: Size,
    position: Offset,
    active: bool,
}

impl SceneItem {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            intrinsic: Size::new(width, height),
            rules: AlignRules::new(),
            size: Size::zero(),
            position: Offset::zero(),
            active: true,
        }
    }

    pub fn with_rules(mut self, rules: AlignRules) -> Self {
        self.rules = rules;
        self
    }

    /// The size the item asks for when unconstrained
    pub fn intrinsic(&self) -> Size {
        self.intrinsic
    }

    /// Size from the last layout pass
    pub fn size(&self) -> Size {
        self.size
    }

    /// Position from the last layout pass
    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl LayoutItem for SceneItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn align_rules(&self) -> &AlignRules {
        &self.rules
    }

    fn layout(&mut self, constraint: Constraint) -> Size {
        self.size = constraint.constrain(self.intrinsic);
        self.size
    }

    fn set_position(&mut self, position: Offset) {
        self.position = position;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// A container constraint together with its items
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub container: Constraint,
    pub items: Vec<SceneItem>,
}

#[derive(Deserialize)]
struct TomlScene {
    #[serde(default)]
    container: TomlContainer,
    #[serde(default)]
    items: Vec<TomlItem>,
}

#[derive(Deserialize, Default)]
struct TomlContainer {
    width: Option<f64>,
    height: Option<f64>,
    #[serde(default)]
    min_width: f64,
    #[serde(default)]
    min_height: f64,
}

#[derive(Deserialize)]
struct TomlItem {
    #[serde(default)]
    id: String,
    width: f64,
    height: f64,
    #[serde(default)]
    rules: BTreeMap<AlignDirection, TomlRule>,
}

#[derive(Deserialize)]
struct TomlRule {
    anchor: String,
    align: String,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let container = parsed.container.into_constraint()?;
        let items = parsed
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_scene_item(index))
            .collect::<Result<_, _>>()?;

        Ok(Scene { container, items })
    }

    /// Run one layout pass over the scene's items
    pub fn layout(&mut self, config: &LayoutConfig) -> LayoutOutcome {
        compute(&mut self.items, self.container, config)
    }
}

impl TomlContainer {
    /// Missing maxima are unbounded. Bounds must be non-negative numbers
    /// with min not above max.
    fn into_constraint(self) -> Result<Constraint, SceneError> {
        let mut constraint = Constraint::unbounded();
        let axes = [
            (Axis::Horizontal, self.min_width, self.width),
            (Axis::Vertical, self.min_height, self.height),
        ];
        for (axis, min, max) in axes {
            let max = max.unwrap_or(f64::INFINITY);
            let invalid = |reason| SceneError::InvalidContainer { axis, reason };
            if max.is_nan() || max < 0.0 {
                return Err(invalid("max must be a non-negative number"));
            }
            if !min.is_finite() || min < 0.0 {
                return Err(invalid("min must be a finite non-negative number"));
            }
            if min > max {
                return Err(invalid("min exceeds max"));
            }
            constraint.min.set_along(axis, min);
            constraint.max.set_along(axis, max);
        }
        Ok(constraint)
    }
}

impl TomlItem {
    fn into_scene_item(self, index: usize) -> Result<SceneItem, SceneError> {
        let name = display_name(&self.id, index);
        let negative = |v: f64| v.is_nan() || v < 0.0;
        if negative(self.width) || negative(self.height) {
            return Err(SceneError::NegativeSize {
                item: name,
                width: self.width,
                height: self.height,
            });
        }

        let mut rules = AlignRules::new();
        for (direction, rule) in self.rules {
            let invalid = || SceneError::InvalidAlign {
                item: name.clone(),
                direction,
                align: rule.align.clone(),
            };
            let kind = AlignKind::parse(direction.axis(), &rule.align).ok_or_else(invalid)?;
            rules = rules
                .try_with(direction, rule.anchor.as_str(), kind)
                .ok_or_else(invalid)?;
        }

        Ok(SceneItem::new(self.id, self.width, self.height).with_rules(rules))
    }
}

//! The contract between the resolver and the items it positions

use super::rules::AlignRules;
use super::types::{Constraint, Offset, Size};

/// A child of a relative container.
///
/// The resolver never inspects an item's content: it only reads the id and
/// rules, asks the item to size itself within a constraint, and hands back
/// the final position.
pub trait LayoutItem {
    /// Identifier other items use as an anchor. An empty id makes the item
    /// unaddressable.
    fn id(&self) -> &str;

    fn align_rules(&self) -> &AlignRules;

    /// Size the item within `constraint` and return the size it chose.
    ///
    /// The resolver clamps the returned size into `constraint`.
    fn layout(&mut self, constraint: Constraint) -> Size;

    /// Receive the final offset from the container's top-left corner.
    fn set_position(&mut self, position: Offset);

    /// Called once per pass before sizing; `false` when the pass degenerated
    /// because of a cyclic dependency.
    fn set_active(&mut self, _active: bool) {}
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn align_rules(&self) -> &AlignRules {
        (**self).align_rules()
    }

    fn layout(&mut self, constraint: Constraint) -> Size {
        (**self).layout(constraint)
    }

    fn set_position(&mut self, position: Offset) {
        (**self).set_position(position)
    }

    fn set_active(&mut self, active: bool) {
        (**self).set_active(active)
    }
}

/// Name used for an item in diagnostics: its id, or its 1-based position
/// in the collection when the id is empty.
pub fn display_name(id: &str, index: usize) -> String {
    if id.is_empty() {
        format!("<item #{}>", index + 1)
    } else {
        id.to_string()
    }
}

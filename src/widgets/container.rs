//! Container widget: a plain flexbox box with no behavior of its own.

use std::any::Any;

use crate::widget::Widget;

/// The default widget: paints its box and lays out children, nothing more.
///
/// # Examples
///
/// ```ignore
/// let node = tree.insert(NodeData::with_widget(Container::new()));
/// ```
#[derive(Debug, Default)]
pub struct Container;

impl Container {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Container {
    fn widget_type(&self) -> &str {
        "Container"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

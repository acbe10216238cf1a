//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::layout::LayoutStyle;
use crate::style::VisualStyle;
use crate::widget::Widget;
use crate::widgets::Container;

new_key_type! {
    /// Unique identifier for a tree node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single tree node: the widget behavior, the layout
/// and visual styles, and the paint-dirty flags.
///
/// The `dirty` flag is independent of taffy's internal layout cache; it marks
/// "visual output may have changed" and is what the window bridge polls on
/// the root. `styles_dirty` additionally marks that a visual-style property
/// changed since it was last cleared.
pub struct NodeData {
    pub widget: Box<dyn Widget>,
    pub layout: LayoutStyle,
    pub style: VisualStyle,
    pub dirty: bool,
    pub styles_dirty: bool,
}

impl NodeData {
    /// A plain container node with default styles.
    pub fn new() -> Self {
        Self::with_widget(Container::new())
    }

    pub fn with_widget(widget: impl Widget + 'static) -> Self {
        Self {
            widget: Box::new(widget),
            layout: LayoutStyle::default(),
            style: VisualStyle::default(),
            dirty: true,
            styles_dirty: false,
        }
    }

    /// Set the layout style (builder).
    pub fn layout(mut self, layout: LayoutStyle) -> Self {
        self.layout = layout;
        self
    }

    /// Set the visual style (builder).
    pub fn style(mut self, style: VisualStyle) -> Self {
        self.style = style;
        self
    }

    pub fn widget_type(&self) -> &str {
        self.widget.widget_type()
    }
}

impl Default for NodeData {
    fn default() -> Self {
        Self::new()
    }
}

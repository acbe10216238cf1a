//! Button widget: a clickable control with per-state styling.
//!
//! The button runs a small state machine over mouse events
//! (`Normal -> Hover -> Pressed -> Hover`) and paints itself from a style
//! table keyed by that state. Properties set on the node's own
//! [`VisualStyle`] override the table in every state.

use std::any::Any;

use crate::event::{MouseButton, MouseEvent, MouseEventKind};
use crate::geometry::Size;
use crate::layout::{BoxLayout, LayoutStyle};
use crate::render::{paint_box, Painter};
use crate::style::{Color, TextAlign, VisualStyle};
use crate::widget::{estimate_text_size, Widget};

use super::ControlState;

/// A clickable, focusable button with a centered label.
///
/// # Examples
///
/// ```ignore
/// let mut button = Button::new("Submit");
/// button.set_on_click(|_| log::info!("submitted"));
/// ```
pub struct Button {
    label: String,
    state: ControlState,
    disabled: bool,
    normal: VisualStyle,
    hover: VisualStyle,
    pressed: VisualStyle,
    focused: VisualStyle,
    disabled_style: VisualStyle,
    on_click: Option<Box<dyn FnMut(&MouseEvent)>>,
}

impl Button {
    /// Create a button with the given label and the stock blue palette.
    pub fn new(label: impl Into<String>) -> Self {
        let base = Color::from_rgb8(74, 144, 217, 255);
        let mut normal = VisualStyle::new();
        normal.background_color = Some(base);
        normal.text_color = Some(Color::WHITE);

        let mut hover = normal.clone();
        hover.background_color = Some(base.lerp(Color::WHITE, 0.15));

        let mut pressed = normal.clone();
        pressed.background_color = Some(base.lerp(Color::BLACK, 0.2));

        let mut focused = normal.clone();
        focused.border_color = Some(base.lerp(Color::BLACK, 0.35));

        let mut disabled_style = VisualStyle::new();
        disabled_style.background_color = Some(Color::from_rgb8(204, 204, 204, 255));
        disabled_style.text_color = Some(Color::from_rgb8(120, 120, 120, 255));

        Self {
            label: label.into(),
            state: ControlState::Normal,
            disabled: false,
            normal,
            hover,
            pressed,
            focused,
            disabled_style,
            on_click: None,
        }
    }

    /// Set whether the button is disabled (builder pattern).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.state = if disabled {
            ControlState::Disabled
        } else {
            ControlState::Normal
        };
    }

    /// Invoked on a completed click (press and release on the button).
    pub fn set_on_click(&mut self, callback: impl FnMut(&MouseEvent) + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    pub fn set_normal_background(&mut self, color: Color) {
        self.normal.background_color = Some(color);
    }

    pub fn set_hover_background(&mut self, color: Color) {
        self.hover.background_color = Some(color);
    }

    pub fn set_pressed_background(&mut self, color: Color) {
        self.pressed.background_color = Some(color);
    }

    pub fn set_disabled_background(&mut self, color: Color) {
        self.disabled_style.background_color = Some(color);
    }

    /// The style fragment painted in `state`. Mutate to restyle a state.
    pub fn state_style_mut(&mut self, state: ControlState) -> &mut VisualStyle {
        match state {
            ControlState::Normal => &mut self.normal,
            ControlState::Hover => &mut self.hover,
            ControlState::Pressed => &mut self.pressed,
            ControlState::Focused => &mut self.focused,
            ControlState::Disabled => &mut self.disabled_style,
        }
    }

    fn state_style(&self) -> &VisualStyle {
        match self.state {
            ControlState::Normal => &self.normal,
            ControlState::Hover => &self.hover,
            ControlState::Pressed => &self.pressed,
            ControlState::Focused => &self.focused,
            ControlState::Disabled => &self.disabled_style,
        }
    }

    /// Current state table merged under the node's own style, with the label
    /// and centered alignment as fallbacks.
    fn effective_style(&self, node_style: &VisualStyle) -> VisualStyle {
        let mut effective = self.state_style().clone();
        effective.apply(node_style);
        if effective.text.is_none() {
            effective.text = Some(self.label.clone());
        }
        if effective.text_align.is_none() {
            effective.text_align = Some(TextAlign::Center);
        }
        effective
    }
}

impl Widget for Button {
    fn widget_type(&self) -> &str {
        "Button"
    }

    fn can_focus(&self) -> bool {
        !self.disabled
    }

    fn render(&self, painter: &mut dyn Painter, layout: &BoxLayout, style: &VisualStyle) {
        paint_box(painter, layout, &self.effective_style(style));
    }

    fn measure(
        &self,
        style: &VisualStyle,
        layout: &LayoutStyle,
        known_width: Option<f32>,
        known_height: Option<f32>,
    ) -> Size {
        let estimate = estimate_text_size(&self.effective_style(style), layout);
        Size::new(
            known_width.unwrap_or(estimate.width),
            known_height.unwrap_or(estimate.height),
        )
    }

    fn on_mouse(&mut self, event: &MouseEvent, _style: &mut VisualStyle) -> bool {
        if self.disabled {
            return false;
        }
        let next = match event.kind {
            MouseEventKind::Entered => Some(ControlState::Hover),
            MouseEventKind::Exited => Some(ControlState::Normal),
            MouseEventKind::Pressed(MouseButton::Left) => Some(ControlState::Pressed),
            MouseEventKind::Released(MouseButton::Left) => {
                if self.state == ControlState::Pressed {
                    Some(ControlState::Hover)
                } else {
                    None
                }
            }
            MouseEventKind::Clicked(MouseButton::Left) => {
                if let Some(callback) = &mut self.on_click {
                    callback(event);
                }
                None
            }
            _ => None,
        };
        match next {
            Some(state) if state != self.state => {
                self.state = state;
                true
            }
            _ => false,
        }
    }

    fn on_focus_changed(&mut self, focused: bool, _style: &mut VisualStyle) -> bool {
        if self.disabled {
            return false;
        }
        let next = if focused {
            ControlState::Focused
        } else {
            ControlState::Normal
        };
        // Focus restyles only from the resting states; hover and pressed win.
        if matches!(self.state, ControlState::Normal | ControlState::Focused) && next != self.state
        {
            self.state = next;
            return true;
        }
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

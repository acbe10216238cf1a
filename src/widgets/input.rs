//! Input widget: a single-line text field with editing, selection, undo,
//! and cursor blink.
//!
//! The cursor and selection are tracked in codepoints, clamped into
//! `[0, len]` on every mutation. Undo snapshots the full value before each
//! edit, bounded to the most recent [`UNDO_LIMIT`] entries; any new edit
//! clears the redo stack.

use std::any::Any;

use crate::event::{Key, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
use crate::geometry::{Point, Size};
use crate::layout::{BoxLayout, LayoutStyle};
use crate::render::{paint_box, Painter};
use crate::style::{Color, VisualStyle};
use crate::widget::{estimate_text_size, Widget};

use super::ControlState;

const UNDO_LIMIT: usize = 50;

const PLACEHOLDER_COLOR: Color = Color::new(0.6, 0.6, 0.6, 1.0);
const SELECTION_COLOR: Color = Color::new(0.6, 0.75, 0.95, 0.6);

/// What an input accepts and how it displays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    /// Rendered as mask dots; accepts anything.
    Password,
    /// Digits, sign, and decimal point.
    Number,
    /// Anything but whitespace.
    Email,
    /// Digits and phone punctuation.
    Tel,
}

impl InputType {
    fn accepts(self, c: char) -> bool {
        match self {
            InputType::Text | InputType::Password => true,
            InputType::Number => c.is_ascii_digit() || matches!(c, '-' | '+' | '.'),
            InputType::Email => !c.is_whitespace(),
            InputType::Tel => c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')'),
        }
    }
}

#[derive(Clone)]
struct Snapshot {
    value: String,
    cursor: usize,
}

/// A focusable single-line text input.
///
/// # Examples
///
/// ```ignore
/// let input = Input::new()
///     .with_placeholder("Search...")
///     .with_max_length(64);
/// ```
pub struct Input {
    value: String,
    placeholder: String,
    cursor: usize,
    selection: Option<(usize, usize)>,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    clipboard: String,
    input_type: InputType,
    read_only: bool,
    max_length: Option<usize>,
    disabled: bool,
    state: ControlState,
    focused: bool,
    cursor_visible: bool,
    on_text_changed: Option<Box<dyn FnMut(&str)>>,
    on_enter_pressed: Option<Box<dyn FnMut(&str)>>,
    on_focus_changed: Option<Box<dyn FnMut(bool)>>,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            cursor: 0,
            selection: None,
            undo: Vec::new(),
            redo: Vec::new(),
            clipboard: String::new(),
            input_type: InputType::Text,
            read_only: false,
            max_length: None,
            disabled: false,
            state: ControlState::Normal,
            focused: false,
            cursor_visible: true,
            on_text_changed: None,
            on_enter_pressed: None,
            on_focus_changed: None,
        }
    }

    // ── Builders ─────────────────────────────────────────────────────

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.char_len();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Shorthand for `with_input_type(InputType::Password)`.
    pub fn password(self) -> Self {
        self.with_input_type(InputType::Password)
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected range as `[start, end)` in codepoints, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Replace the value, clamping the cursor and dropping the selection.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.char_len());
        self.selection = None;
    }

    /// Move the cursor, clamped into `[0, len]`.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.char_len());
        self.selection = None;
    }

    /// Select `[start, end)`, clamped and reordered as needed.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (start, end) = (start.min(len), end.min(len));
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.selection = if start == end { None } else { Some((start, end)) };
        self.cursor = end;
    }

    pub fn select_all(&mut self) {
        self.select(0, self.char_len());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.state = if disabled {
            ControlState::Disabled
        } else {
            ControlState::Normal
        };
    }

    // ── Callbacks ────────────────────────────────────────────────────

    pub fn set_on_text_changed(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_text_changed = Some(Box::new(callback));
    }

    pub fn set_on_enter_pressed(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_enter_pressed = Some(Box::new(callback));
    }

    pub fn set_on_focus_changed(&mut self, callback: impl FnMut(bool) + 'static) {
        self.on_focus_changed = Some(Box::new(callback));
    }

    // ── Editing internals ────────────────────────────────────────────

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn push_undo(&mut self) {
        if self.undo.len() == UNDO_LIMIT {
            self.undo.remove(0);
        }
        self.undo.push(Snapshot {
            value: self.value.clone(),
            cursor: self.cursor,
        });
        self.redo.clear();
    }

    fn fire_text_changed(&mut self) {
        if let Some(callback) = &mut self.on_text_changed {
            let value = self.value.clone();
            callback(&value);
        }
    }

    /// Remove the selected range, if any. Returns `true` if text was removed.
    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection.take() else {
            return false;
        };
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        self.value.replace_range(from..to, "");
        self.cursor = start;
        true
    }

    fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection?;
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        Some(self.value[from..to].to_owned())
    }

    fn insert_filtered(&mut self, text: &str) -> bool {
        let input_type = self.input_type;
        let accepted: String = text.chars().filter(|&c| input_type.accepts(c)).collect();
        if accepted.is_empty() {
            return false;
        }
        self.push_undo();
        let had_selection = self.delete_selection();

        let room = match self.max_length {
            Some(max) => max.saturating_sub(self.char_len()),
            None => usize::MAX,
        };
        let clipped: String = accepted.chars().take(room).collect();
        if clipped.is_empty() && !had_selection {
            self.undo.pop();
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, &clipped);
        self.cursor += clipped.chars().count();
        self.fire_text_changed();
        true
    }

    fn delete_backward(&mut self) -> bool {
        if self.selection.is_some() {
            self.push_undo();
            self.delete_selection();
            self.fire_text_changed();
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.push_undo();
        let from = self.byte_index(self.cursor - 1);
        let to = self.byte_index(self.cursor);
        self.value.replace_range(from..to, "");
        self.cursor -= 1;
        self.fire_text_changed();
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.selection.is_some() {
            self.push_undo();
            self.delete_selection();
            self.fire_text_changed();
            return true;
        }
        if self.cursor >= self.char_len() {
            return false;
        }
        self.push_undo();
        let from = self.byte_index(self.cursor);
        let to = self.byte_index(self.cursor + 1);
        self.value.replace_range(from..to, "");
        self.fire_text_changed();
        true
    }

    /// Undo the most recent edit. Returns `true` if anything was restored.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo.pop() else {
            return false;
        };
        self.redo.push(Snapshot {
            value: self.value.clone(),
            cursor: self.cursor,
        });
        self.value = snapshot.value;
        self.cursor = snapshot.cursor.min(self.char_len());
        self.selection = None;
        self.fire_text_changed();
        true
    }

    /// Redo the most recently undone edit.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo.pop() else {
            return false;
        };
        self.undo.push(Snapshot {
            value: self.value.clone(),
            cursor: self.cursor,
        });
        self.value = snapshot.value;
        self.cursor = snapshot.cursor.min(self.char_len());
        self.selection = None;
        self.fire_text_changed();
        true
    }

    fn copy(&mut self) -> bool {
        if let Some(text) = self.selected_text() {
            self.clipboard = text;
        }
        false
    }

    fn cut(&mut self) -> bool {
        let Some(text) = self.selected_text() else {
            return false;
        };
        self.clipboard = text;
        self.push_undo();
        self.delete_selection();
        self.fire_text_changed();
        true
    }

    fn paste(&mut self) -> bool {
        if self.clipboard.is_empty() {
            return false;
        }
        let text = self.clipboard.clone();
        self.insert_filtered(&text)
    }

    fn shortcut(&mut self, c: char) -> bool {
        match c.to_ascii_lowercase() {
            'a' => {
                self.select_all();
                true
            }
            'c' => self.copy(),
            'x' if !self.read_only => self.cut(),
            'v' if !self.read_only => self.paste(),
            'z' if !self.read_only => self.undo(),
            'y' if !self.read_only => self.redo(),
            _ => false,
        }
    }

    /// Value as displayed: password inputs show mask dots.
    fn display_text(&self) -> String {
        if self.input_type == InputType::Password {
            "•".repeat(self.char_len())
        } else {
            self.value.clone()
        }
    }

    fn effective_style(&self, node_style: &VisualStyle) -> VisualStyle {
        let mut effective = node_style.clone();
        let display = self.display_text();
        if display.is_empty() && !self.placeholder.is_empty() {
            effective.text = Some(self.placeholder.clone());
            effective.text_color = Some(PLACEHOLDER_COLOR);
        } else {
            effective.text = Some(display);
        }
        effective
    }
}

impl Widget for Input {
    fn widget_type(&self) -> &str {
        "Input"
    }

    fn can_focus(&self) -> bool {
        !self.disabled
    }

    fn render(&self, painter: &mut dyn Painter, layout: &BoxLayout, style: &VisualStyle) {
        let effective = self.effective_style(style);
        let content = layout.content_rect();
        let display = self.display_text();

        // Selection highlight goes under the glyphs.
        if let Some((start, end)) = self.selection {
            painter.set_font(
                effective.font_family.as_deref().unwrap_or("sans-serif"),
                effective.font_size(),
                effective.font_weight(),
                effective.font_style(),
            );
            let prefix: String = display.chars().take(start).collect();
            let selected: String = display.chars().take(end).skip(start).collect();
            let x = content.x + painter.measure_text(&prefix).width;
            let width = painter.measure_text(&selected).width;
            painter.set_source_color(SELECTION_COLOR);
            painter.fill_rect(crate::geometry::Rect::new(
                x,
                content.y,
                width,
                effective.line_pitch(),
            ));
        }

        paint_box(painter, layout, &effective);

        if self.focused && self.cursor_visible && !self.disabled {
            let prefix: String = display.chars().take(self.cursor).collect();
            let x = content.x + painter.measure_text(&prefix).width;
            painter.set_source_color(effective.text_color());
            painter.set_line_width(1.0);
            painter.stroke_line(
                Point::new(x, content.y + 1.0),
                Point::new(x, content.y + effective.line_pitch() - 1.0),
            );
        }
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
        match event.kind {
            MouseEventKind::Entered if self.state == ControlState::Normal => {
                self.state = ControlState::Hover;
                true
            }
            MouseEventKind::Exited if self.state == ControlState::Hover => {
                self.state = ControlState::Normal;
                true
            }
            MouseEventKind::Pressed(MouseButton::Left) if self.state != ControlState::Pressed => {
                self.state = ControlState::Pressed;
                true
            }
            MouseEventKind::Released(MouseButton::Left) if self.state == ControlState::Pressed => {
                // Focus, when it follows the click, restyles again right after.
                self.state = if self.focused {
                    ControlState::Focused
                } else {
                    ControlState::Hover
                };
                true
            }
            _ => false,
        }
    }

    fn on_key(&mut self, event: &KeyEvent, _style: &mut VisualStyle) -> bool {
        if self.disabled {
            return false;
        }
        // Typing resets the blink phase so the cursor is visible.
        self.cursor_visible = true;
        match event.key {
            Key::Char(c) if event.modifiers.contains(Modifiers::CTRL) => self.shortcut(c),
            Key::Char(c) => {
                if self.read_only {
                    return false;
                }
                self.insert_filtered(&c.to_string())
            }
            Key::Backspace => !self.read_only && self.delete_backward(),
            Key::Delete => !self.read_only && self.delete_forward(),
            Key::Left => {
                self.selection = None;
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                true
            }
            Key::Right => {
                self.selection = None;
                if self.cursor < self.char_len() {
                    self.cursor += 1;
                }
                true
            }
            Key::Home => {
                self.selection = None;
                self.cursor = 0;
                true
            }
            Key::End => {
                self.selection = None;
                self.cursor = self.char_len();
                true
            }
            Key::Enter => {
                if let Some(callback) = &mut self.on_enter_pressed {
                    let value = self.value.clone();
                    callback(&value);
                }
                false
            }
            _ => false,
        }
    }

    fn on_focus_changed(&mut self, focused: bool, _style: &mut VisualStyle) -> bool {
        if self.disabled {
            return false;
        }
        self.focused = focused;
        self.cursor_visible = true;
        if !focused {
            self.selection = None;
        }
        self.state = if focused {
            ControlState::Focused
        } else {
            ControlState::Normal
        };
        if let Some(callback) = &mut self.on_focus_changed {
            callback(focused);
        }
        true
    }

    fn on_tick(&mut self) -> bool {
        if !self.focused || self.disabled {
            return false;
        }
        self.cursor_visible = !self.cursor_visible;
        true
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

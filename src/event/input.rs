//! Input event vocabulary.
//!
//! The toolkit's own event types, decoupled from winit. The window bridge
//! converts raw winit input through the `From` impls at the bottom of this
//! file before dispatching into the tree.

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// A key press, normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Anything the toolkit does not handle.
    Unknown,
}

/// Modifier key bitflags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check if these modifiers contain all of `other`'s bits.
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 & rhs.0)
    }
}

/// A keyboard event delivered to the focused node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What happened, pointer-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEventKind {
    /// Pointer entered the node's bounds.
    Entered,
    /// Pointer left the node's bounds.
    Exited,
    Moved,
    Pressed(MouseButton),
    Released(MouseButton),
    /// Press and release on the same node.
    Clicked(MouseButton),
    Scrolled { dx: f32, dy: f32 },
}

/// A mouse event delivered to a node, with the pointer position in the
/// node's local coordinate space (origin at the node's top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub position: Point,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

// ---------------------------------------------------------------------------
// winit conversions
// ---------------------------------------------------------------------------

impl From<&winit::keyboard::Key> for Key {
    fn from(key: &winit::keyboard::Key) -> Self {
        use winit::keyboard::{Key as WinitKey, NamedKey};
        match key {
            WinitKey::Named(named) => match named {
                NamedKey::Enter => Key::Enter,
                NamedKey::Escape => Key::Escape,
                NamedKey::Backspace => Key::Backspace,
                NamedKey::Delete => Key::Delete,
                NamedKey::Tab => Key::Tab,
                NamedKey::ArrowLeft => Key::Left,
                NamedKey::ArrowRight => Key::Right,
                NamedKey::ArrowUp => Key::Up,
                NamedKey::ArrowDown => Key::Down,
                NamedKey::Home => Key::Home,
                NamedKey::End => Key::End,
                NamedKey::PageUp => Key::PageUp,
                NamedKey::PageDown => Key::PageDown,
                _ => Key::Unknown,
            },
            WinitKey::Character(text) => match text.chars().next() {
                Some(c) => Key::Char(c),
                None => Key::Unknown,
            },
            _ => Key::Unknown,
        }
    }
}

impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        let mut modifiers = Modifiers::NONE;
        if state.shift_key() {
            modifiers = modifiers | Modifiers::SHIFT;
        }
        if state.control_key() {
            modifiers = modifiers | Modifiers::CTRL;
        }
        if state.alt_key() {
            modifiers = modifiers | Modifiers::ALT;
        }
        modifiers
    }
}

impl TryFrom<winit::event::MouseButton> for MouseButton {
    type Error = ();

    fn try_from(button: winit::event::MouseButton) -> Result<Self, ()> {
        match button {
            winit::event::MouseButton::Left => Ok(MouseButton::Left),
            winit::event::MouseButton::Right => Ok(MouseButton::Right),
            winit::event::MouseButton::Middle => Ok(MouseButton::Middle),
            _ => Err(()),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! Input events and dispatch.

pub mod dispatch;
pub mod input;

pub use dispatch::DispatchContext;
pub use input::{Key, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};

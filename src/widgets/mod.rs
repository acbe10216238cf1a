//! Built-in widgets: plain containers and the interactive controls.

pub mod button;
pub mod container;
pub mod input;

pub use button::Button;
pub use container::Container;
pub use input::{Input, InputType};

/// Interaction state shared by the control widgets.
///
/// `Disabled` is terminal until the control is re-enabled; every event
/// handler short-circuits on it before looking at the event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    #[default]
    Normal,
    Hover,
    Pressed,
    Focused,
    Disabled,
}

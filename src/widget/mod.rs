//! The object-safe [`Widget`] trait.

pub mod traits;

pub use traits::{estimate_text_size, Widget, CHAR_WIDTH_FACTOR};

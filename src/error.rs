//! Crate-level error type.
//!
//! Construction-time failures (fonts, windows, surfaces) surface as [`Error`];
//! paint-time resource problems degrade silently per the toolkit's contract.

/// Errors surfaced by lattice-ui.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no usable font found (searched caller path and system locations)")]
    FontNotFound,
    #[error("failed to parse font data from {path}")]
    FontParse { path: String },
    #[error("layout computation failed: {0}")]
    Layout(#[from] taffy::TaffyError),
    #[error("window creation failed: {0}")]
    WindowCreation(String),
    #[error("surface creation failed: {0}")]
    Surface(String),
    #[error("event loop error: {0}")]
    EventLoop(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

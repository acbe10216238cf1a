//! # lattice-ui
//!
//! A retained-mode GUI widget toolkit: a tree of styleable, flexbox-laid-out
//! containers (plain containers, buttons, text inputs) painted through a 2D
//! raster backend and driven by a winit window.
//!
//! ## Core Systems
//!
//! - **[`geometry`]** — Point, Size, Rect primitives
//! - **[`style`]** — Colors, layout values, gradients, text and visual style state
//! - **[`layout`]** — Taffy-powered flexbox layout with per-unit value resolution
//! - **[`tree`]** — Slotmap-backed widget tree with engine mirroring, dirty
//!   tracking, and the recursive paint walk
//! - **[`widget`]** — The `Widget` trait: per-node paint, measure, and event hooks
//! - **[`widgets`]** — Built-in controls: Button, Input
//! - **[`event`]** — Input events, hit-testing, and dispatch
//! - **[`render`]** — Painter trait, box paint routines, CPU raster backend
//! - **[`window`]** — winit window bridge and frame loop

// Foundation
pub mod error;
pub mod geometry;

// Core systems
pub mod layout;
pub mod style;
pub mod tree;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Windowing
pub mod window;

pub use error::{Error, Result};

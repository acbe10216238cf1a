//! Painting: the painter abstraction, box paint routines, and the CPU
//! raster backend.

pub mod box_paint;
pub mod painter;
pub mod raster;

pub use box_paint::{paint_background, paint_border, paint_box, paint_text};
pub use painter::{PaintOp, Painter, RecordingPainter};
pub use raster::RasterPainter;

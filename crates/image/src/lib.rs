//! Frame utilities for the hand capture workspace.
//!
//! Frames are packed byte buffers described by a size and a `PixelFormat`.
//! Camera formats (YUYV, MJPEG) are converted to RGB8 before any transform;
//! mirroring, cropping, text overlay and JPEG encoding all operate on RGB8.

mod error;
pub use error::*;

mod image;
pub use image::*;

mod jpeg;
pub use jpeg::*;

mod packed;
pub use packed::*;

mod pixelformat;
pub use pixelformat::*;

mod rgb;
pub use rgb::*;

mod text;
pub use text::*;

mod transform;
pub use transform::*;


//! Camera and display abstractions for the hand capture workspace.
//!
//! `VideoInDevice` yields raw camera frames one blocking read at a time and
//! `Display` shows RGB8 frames in a local window. Both are scoped handles:
//! the device and the window are released when the value is dropped.

mod error;
pub use error::*;

pub mod display;
pub use display::{Display, EscapeLatch, MinifbDisplay};

pub mod videoin;
pub use videoin::*;

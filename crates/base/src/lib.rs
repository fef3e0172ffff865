pub mod log;
pub use log::*;

mod vec2;
pub use vec2::*;

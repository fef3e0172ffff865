//! Webcam hand capture behind a two-page web front end.
//!
//! `GET /` serves a page with a Capture button. `POST /capture` opens camera
//! 0, shows a mirrored half-frame with instructions in a local window and,
//! when ESC is pressed, saves that frame as `hand_<Hand>.jpg`.

mod backend;
pub use backend::*;

mod config;
pub use config::*;

mod session;
pub use session::*;

mod web;
pub use web::*;

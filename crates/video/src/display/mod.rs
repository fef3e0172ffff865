use {crate::*, image::Image};

/// A local on-screen window that shows frames and reports key state.
pub trait Display {
    /// Show an RGB8 frame, creating or resizing the window as needed.
    fn show(&mut self, image: &Image) -> Result<(), VideoError>;

    /// Whether ESC was held during the last `show`.
    fn escape_pressed(&self) -> bool;

    /// Whether the window is still open. A display that has not shown a frame yet counts as open.
    fn is_open(&self) -> bool;
}

impl<T: Display + ?Sized> Display for Box<T> {
    fn show(&mut self, image: &Image) -> Result<(), VideoError> {
        (**self).show(image)
    }

    fn escape_pressed(&self) -> bool {
        (**self).escape_pressed()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

mod window;
pub use window::{EscapeLatch, MinifbDisplay};

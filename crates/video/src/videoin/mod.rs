use {crate::*, image::Image};

/// A camera that hands out frames one blocking read at a time.
///
/// Frames come back in the device's native format (see `image::PixelFormat`);
/// callers convert with `image::to_rgb`. Dropping the device releases it.
pub trait VideoInDevice {
    fn blocking_capture(&mut self) -> Result<Image, VideoError>;
}

impl<T: VideoInDevice + ?Sized> VideoInDevice for Box<T> {
    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        (**self).blocking_capture()
    }
}

#[cfg(feature = "v4l2")]
pub mod v4l2;

#[cfg(feature = "v4l2")]
pub use v4l2::{V4l2, V4l2Config};

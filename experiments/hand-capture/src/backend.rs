use {
    image::{DEFAULT_JPEG_QUALITY, Image, ImageError},
    std::path::Path,
    video::{Display, VideoError, VideoInDevice},
};

/// The outside world a capture session talks to: a camera, a window and the
/// file system.
///
/// Handles returned by `open_camera` and `open_display` are owned by one
/// session and release their resources when dropped. They are created and
/// used on a single blocking thread, so they need not be `Send`.
pub trait CaptureBackend: Send + Sync + 'static {
    type Camera: VideoInDevice;
    type Display: Display;

    fn open_camera(&self, index: usize) -> Result<Self::Camera, VideoError>;

    fn open_display(&self, title: &str) -> Result<Self::Display, VideoError>;

    /// Write the final frame, replacing whatever is at `path`.
    fn save(&self, image: &Image, path: &Path) -> Result<(), ImageError> {
        image::save_jpeg(image, path, DEFAULT_JPEG_QUALITY)
    }
}

/// V4L2 camera plus a minifb window.
#[cfg(feature = "v4l2")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBackend;

#[cfg(feature = "v4l2")]
impl CaptureBackend for SystemBackend {
    type Camera = video::V4l2;
    type Display = video::MinifbDisplay;

    fn open_camera(&self, index: usize) -> Result<Self::Camera, VideoError> {
        video::V4l2::open(&video::V4l2Config::with_index(index))
    }

    fn open_display(&self, title: &str) -> Result<Self::Display, VideoError> {
        Ok(video::MinifbDisplay::new(title))
    }
}

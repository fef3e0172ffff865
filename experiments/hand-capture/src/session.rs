use {
    crate::*,
    base::{Vec2, log_info, log_warn},
    image::{Image, ImageError},
    std::{fmt, path::PathBuf},
    video::{Display, VideoError, VideoInDevice},
};

/// How a capture session that opened the camera came to an end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// ESC was pressed and the frame on screen was written here.
    Saved(PathBuf),
    /// The camera stopped delivering frames. Nothing was written.
    FrameReadFailed,
    /// The window was closed without pressing ESC. Nothing was written.
    WindowClosed,
}

#[derive(Debug)]
pub enum CaptureError {
    DeviceOpen(VideoError),
    Display(VideoError),
    Image(ImageError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::DeviceOpen(err) => write!(f, "unable to open device: {err}"),
            CaptureError::Display(err) => write!(f, "display failed: {err}"),
            CaptureError::Image(err) => write!(f, "frame processing failed: {err}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<ImageError> for CaptureError {
    fn from(err: ImageError) -> Self {
        CaptureError::Image(err)
    }
}

/// Turn a raw camera frame into what is shown and saved: RGB8, mirrored,
/// cropped to the configured hand's half, with the instructions drawn on top.
pub fn prepare_frame(frame: &Image, config: &CaptureConfig) -> Result<Image, ImageError> {
    let rgb = image::to_rgb(frame)?;
    let mirrored = image::flip_horizontal(&rgb)?;
    let mut cropped = image::crop_half(&mirrored, config.hand().half())?;
    for (text, (x, y)) in INSTRUCTIONS.iter().zip(INSTRUCTION_ORIGINS) {
        image::draw_text(&mut cropped, text, Vec2::new(x, y), TEXT_COLOR, TEXT_SCALE)?;
    }
    Ok(cropped)
}

/// Run one interactive capture session to completion.
///
/// Blocks until ESC is pressed, the window is closed or the camera fails.
/// The camera and window are owned by this call and released on every
/// return path, including errors.
pub fn run_capture<B: CaptureBackend>(
    backend: &B,
    config: &CaptureConfig,
) -> Result<CaptureOutcome, CaptureError> {
    let mut camera = backend
        .open_camera(config.device_index())
        .map_err(CaptureError::DeviceOpen)?;
    let mut display = backend
        .open_display(config.window_title())
        .map_err(CaptureError::Display)?;
    log_info!(
        "capture: camera {} open, hand {}",
        config.device_index(),
        config.hand().label()
    );

    let mut frames: u64 = 0;
    loop {
        let frame = match camera.blocking_capture() {
            Ok(frame) => frame,
            Err(error) => {
                log_warn!("capture: frame read failed after {} frames: {}", frames, error);
                return Ok(CaptureOutcome::FrameReadFailed);
            }
        };
        frames += 1;

        let image = prepare_frame(&frame, config)?;
        display.show(&image).map_err(CaptureError::Display)?;

        if display.escape_pressed() {
            let path = config.output_path().to_path_buf();
            backend.save(&image, &path)?;
            log_info!(
                "capture: saved {} frame to {} after {} frames",
                image.size,
                path.display(),
                frames
            );
            return Ok(CaptureOutcome::Saved(path));
        }

        if !display.is_open() {
            log_info!("capture: window closed after {} frames", frames);
            return Ok(CaptureOutcome::WindowClosed);
        }
    }
}

#![allow(dead_code)]

use {
    base::Vec2,
    hand_capture::CaptureBackend,
    image::{DEFAULT_JPEG_QUALITY, Image, ImageError, PixelFormat},
    std::{
        collections::VecDeque,
        path::{Path, PathBuf},
        sync::{Arc, Mutex},
    },
    video::{Display, VideoError, VideoInDevice},
};

/// Everything the fakes observed, shared between the backend and its handles.
#[derive(Debug, Default)]
pub struct Events {
    pub cameras_opened: usize,
    pub cameras_released: usize,
    pub displays_opened: usize,
    pub displays_closed: usize,
    pub frames_shown: usize,
    pub saved: Vec<(PathBuf, Image)>,
}

/// Scripted camera and window.
///
/// The camera serves `frames` in order and fails once they run out. The
/// display reports ESC on the `escape_at`-th shown frame (1-based) and a
/// closed window after the `close_at`-th.
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub camera_missing: bool,
    pub frames: Vec<Image>,
    pub escape_at: Option<usize>,
    pub close_at: Option<usize>,
    pub events: Arc<Mutex<Events>>,
}

impl FakeBackend {
    pub fn with_frames(frames: Vec<Image>) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    pub fn escape_at(mut self, n: usize) -> Self {
        self.escape_at = Some(n);
        self
    }

    pub fn close_at(mut self, n: usize) -> Self {
        self.close_at = Some(n);
        self
    }

    pub fn missing_camera() -> Self {
        Self {
            camera_missing: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> std::sync::MutexGuard<'_, Events> {
        self.events.lock().unwrap()
    }
}

pub struct FakeCamera {
    frames: VecDeque<Image>,
    events: Arc<Mutex<Events>>,
}

impl VideoInDevice for FakeCamera {
    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        self.frames
            .pop_front()
            .ok_or_else(|| VideoError::Stream("no more frames".to_string()))
    }
}

impl Drop for FakeCamera {
    fn drop(&mut self) {
        self.events.lock().unwrap().cameras_released += 1;
    }
}

pub struct FakeDisplay {
    shown: usize,
    escape_at: Option<usize>,
    close_at: Option<usize>,
    events: Arc<Mutex<Events>>,
}

impl Display for FakeDisplay {
    fn show(&mut self, image: &Image) -> Result<(), VideoError> {
        image.format.ensure_format(PixelFormat::Rgb8)?;
        self.shown += 1;
        self.events.lock().unwrap().frames_shown += 1;
        Ok(())
    }

    fn escape_pressed(&self) -> bool {
        self.escape_at == Some(self.shown)
    }

    fn is_open(&self) -> bool {
        self.close_at.is_none_or(|n| self.shown < n)
    }
}

impl Drop for FakeDisplay {
    fn drop(&mut self) {
        self.events.lock().unwrap().displays_closed += 1;
    }
}

impl CaptureBackend for FakeBackend {
    type Camera = FakeCamera;
    type Display = FakeDisplay;

    fn open_camera(&self, _index: usize) -> Result<FakeCamera, VideoError> {
        if self.camera_missing {
            return Err(VideoError::Device("No such device".to_string()));
        }
        self.events.lock().unwrap().cameras_opened += 1;
        Ok(FakeCamera {
            frames: self.frames.iter().cloned().collect(),
            events: Arc::clone(&self.events),
        })
    }

    fn open_display(&self, _title: &str) -> Result<FakeDisplay, VideoError> {
        self.events.lock().unwrap().displays_opened += 1;
        Ok(FakeDisplay {
            shown: 0,
            escape_at: self.escape_at,
            close_at: self.close_at,
            events: Arc::clone(&self.events),
        })
    }

    fn save(&self, image: &Image, path: &Path) -> Result<(), ImageError> {
        image::save_jpeg(image, path, DEFAULT_JPEG_QUALITY)?;
        self.events
            .lock()
            .unwrap()
            .saved
            .push((path.to_path_buf(), image.clone()));
        Ok(())
    }
}

/// Solid-colour RGB8 camera frame.
pub fn solid_frame(width: usize, height: usize, gray: u8) -> Image {
    Image::filled(Vec2::new(width, height), [gray, gray, gray])
}

/// Fresh, empty directory under the system temp dir, unique per process and test.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hand-capture-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

use {
    crate::*,
    base::{Vec2, log_debug, log_info},
    image::{Image, PixelFormat},
    std::path::PathBuf,
    v4l::{
        Device, Format, FourCC, Fraction, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

// number of mmap buffers queued with the driver
const BUFFER_COUNT: u32 = 4;

/// Frames per second for a V4L2 frame interval (seconds per frame as a
/// fraction). `None` when either term is zero.
pub fn interval_to_fps(interval: Fraction) -> Option<f32> {
    if interval.numerator == 0 || interval.denominator == 0 {
        return None;
    }
    Some(interval.denominator as f32 / interval.numerator as f32)
}

/// Requested V4L2 settings. `None` fields keep whatever the device is currently set to.
#[derive(Debug, Clone, Default)]
pub struct V4l2Config {
    pub index: usize,
    pub path: Option<PathBuf>,
    pub size: Option<Vec2<usize>>,
    pub format: Option<PixelFormat>,
    pub frame_rate: Option<f32>,
}

impl V4l2Config {
    pub fn with_index(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }
}

pub struct V4l2 {
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
    frame_rate: Option<f32>,
}

impl std::fmt::Debug for V4l2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2")
            .field("stream", &self.stream.is_some())
            .field("size", &self.size)
            .field("format", &self.format)
            .field("frame_rate", &self.frame_rate)
            .finish()
    }
}

impl V4l2 {
    /// Open the device at `config.path`, or `/dev/video{config.index}` when no
    /// path is given, negotiate format and frame rate, and start streaming.
    pub fn open(config: &V4l2Config) -> Result<Self, VideoError> {
        let device = match &config.path {
            Some(path) => Device::with_path(path)?,
            None => Device::new(config.index)?,
        };
        let device_format = Capture::format(&device)?;

        // build size
        let desired_size = match config.size {
            Some(size) => size,
            None => Vec2::new(device_format.width as usize, device_format.height as usize),
        };

        // build pixel format
        let desired_fourcc = match config.format {
            Some(format) => FourCC::new(&format.as_fourcc().to_le_bytes()),
            None => device_format.fourcc,
        };

        // set the format and get the actual format back
        let actual_format = Capture::set_format(
            &device,
            &Format::new(desired_size.x as u32, desired_size.y as u32, desired_fourcc),
        )?;
        let size = Vec2::new(actual_format.width as usize, actual_format.height as usize);
        let format = PixelFormat::from_fourcc(u32::from_le_bytes(actual_format.fourcc.repr))
            .ok_or_else(|| {
                VideoError::Device(format!(
                    "Unsupported pixel format: {}",
                    actual_format.fourcc
                ))
            })?;

        // build frame rate, drivers that report a zero interval keep their current setting
        let current_frame_rate = interval_to_fps(Capture::params(&device)?.interval);
        let desired_frame_rate = config
            .frame_rate
            .or(current_frame_rate)
            .filter(|rate| rate.is_finite() && *rate >= 1.0);

        // set the frame rate and get the actual frame rate back
        let frame_rate = match desired_frame_rate {
            Some(rate) => {
                let actual_params = Capture::set_params(
                    &device,
                    &v4l::video::capture::Parameters::with_fps(rate.round() as u32),
                )?;
                interval_to_fps(actual_params.interval).or(current_frame_rate)
            }
            None => None,
        };

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
            .map_err(|error| VideoError::Stream(error.to_string()))?;

        log_info!(
            "v4l2: opened camera {} ({}, {:?}, {} fps)",
            config.index,
            size,
            format,
            frame_rate.map_or("unknown".to_string(), |rate| rate.to_string())
        );

        Ok(Self {
            stream: Some(stream),
            size,
            format,
            frame_rate,
        })
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Negotiated frame rate, `None` when the driver does not report one.
    pub fn frame_rate(&self) -> Option<f32> {
        self.frame_rate
    }

    /// Stop streaming and release the device. Safe to call more than once.
    pub fn close(&mut self) {
        if self.stream.take().is_some() {
            log_debug!("v4l2: camera released");
        }
    }
}

impl VideoInDevice for V4l2 {
    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Stream("No stream".to_string()))?;
        let (frame_data, metadata) =
            CaptureStream::next(stream).map_err(|error| VideoError::Stream(error.to_string()))?;

        // drivers may hand out buffers larger than the payload
        let used = metadata.bytesused as usize;
        let payload = if used > 0 && used <= frame_data.len() {
            &frame_data[..used]
        } else {
            frame_data
        };

        Ok(Image::new(self.size, payload.to_vec(), self.format))
    }
}

impl Drop for V4l2 {
    fn drop(&mut self) {
        self.close();
    }
}

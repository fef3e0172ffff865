use base::Vec2;
use image::{Image, PixelFormat};
use video::{Display, VideoError, VideoInDevice};

// serves a fixed number of gray YUYV frames, then fails like an unplugged camera
struct MockCamera {
    remaining: usize,
    frame_count: usize,
}

impl VideoInDevice for MockCamera {
    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        if self.remaining == 0 {
            return Err(VideoError::Stream("device unplugged".to_string()));
        }
        self.remaining -= 1;
        self.frame_count += 1;
        Ok(Image::new(Vec2::new(2, 2), vec![128; 8], PixelFormat::Yuyv))
    }
}

#[derive(Default)]
struct MockDisplay {
    shown: Vec<Vec2<usize>>,
}

impl Display for MockDisplay {
    fn show(&mut self, image: &Image) -> Result<(), VideoError> {
        image.format.ensure_format(PixelFormat::Rgb8)?;
        self.shown.push(image.size);
        Ok(())
    }

    fn escape_pressed(&self) -> bool {
        self.shown.len() >= 2
    }

    fn is_open(&self) -> bool {
        true
    }
}

#[test]
fn test_camera_trait_mock_implementation() {
    let mut cam = MockCamera {
        remaining: 2,
        frame_count: 0,
    };

    let frame = cam.blocking_capture().unwrap();
    assert_eq!(frame.size, Vec2::new(2, 2));
    assert!(cam.blocking_capture().is_ok());
    assert!(matches!(cam.blocking_capture(), Err(VideoError::Stream(_))));
    assert_eq!(cam.frame_count, 2);
}

#[test]
fn test_boxed_camera_forwards() {
    let mut cam: Box<dyn VideoInDevice> = Box::new(MockCamera {
        remaining: 1,
        frame_count: 0,
    });
    assert!(cam.blocking_capture().is_ok());
    assert!(cam.blocking_capture().is_err());
}

#[test]
fn test_display_pipeline_with_mocks() {
    let mut cam = MockCamera {
        remaining: 5,
        frame_count: 0,
    };
    let mut display: Box<dyn Display> = Box::new(MockDisplay::default());

    let mut shown = 0;
    while display.is_open() {
        let frame = image::to_rgb(&cam.blocking_capture().unwrap()).unwrap();
        display.show(&frame).unwrap();
        shown += 1;
        if display.escape_pressed() {
            break;
        }
    }
    assert_eq!(shown, 2);
    assert_eq!(cam.frame_count, 2);
}

#[test]
fn test_display_rejects_raw_frames() {
    let mut display = MockDisplay::default();
    let raw = Image::new(Vec2::new(2, 1), vec![128; 4], PixelFormat::Yuyv);
    assert!(matches!(display.show(&raw), Err(VideoError::Image(_))));
}

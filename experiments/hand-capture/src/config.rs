use {
    image::Half,
    std::path::{Path, PathBuf},
};

/// Address the web front end binds to.
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Day-rolling log files are written here, next to stdout.
pub const LOG_DIR: &str = "logs";

pub const WINDOW_TITLE: &str = "Webcam";

pub const INSTRUCTIONS: [&str; 2] = ["Hold your hand inside the box", "Press ESC to quit."];

// baseline-left origin of each instruction line
pub const INSTRUCTION_ORIGINS: [(i64, i64); 2] = [(10, 30), (10, 60)];

pub const TEXT_COLOR: [u8; 3] = [255, 0, 0];

pub const TEXT_SCALE: usize = 2;

/// Which hand is being photographed. Selects the half of the mirrored frame that is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn label(&self) -> &'static str {
        match self {
            Hand::Left => "Left",
            Hand::Right => "Right",
        }
    }

    pub fn half(&self) -> Half {
        match self {
            Hand::Left => Half::Left,
            Hand::Right => Half::Right,
        }
    }
}

/// Settings for one capture session.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    device_index: usize,
    hand: Hand,
    output_dir: PathBuf,
    output_path: PathBuf,
    window_title: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self::new(0, Hand::Right, PathBuf::from("."))
    }
}

impl CaptureConfig {
    fn new(device_index: usize, hand: Hand, output_dir: PathBuf) -> Self {
        let output_path = output_dir.join(format!("hand_{}.jpg", hand.label()));
        Self {
            device_index,
            hand,
            output_dir,
            output_path,
            window_title: WINDOW_TITLE.to_string(),
        }
    }

    /// Set the camera index (`/dev/video{index}`).
    pub fn with_device_index(self, device_index: usize) -> Self {
        Self::new(device_index, self.hand, self.output_dir)
    }

    /// Set the hand, which also renames the output file.
    pub fn with_hand(self, hand: Hand) -> Self {
        Self::new(self.device_index, hand, self.output_dir)
    }

    /// Set the directory the output file is written to.
    pub fn with_output_dir(self, output_dir: impl Into<PathBuf>) -> Self {
        Self::new(self.device_index, self.hand, output_dir.into())
    }

    // Getters
    pub fn device_index(&self) -> usize {
        self.device_index
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }
}

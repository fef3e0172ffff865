use {
    crate::*,
    base::{Vec2, log_debug},
    image::{Image, PixelFormat},
    minifb::{InputCallback, Key, Window, WindowOptions},
    std::{cell::Cell, rc::Rc},
};

const TARGET_FPS: usize = 30;

/// Remembers an ESC press between polls.
///
/// `Window::is_key_down` only reports keys still held at the last update, so a
/// tap that starts and ends between two frames is lost. The window forwards
/// every key event to its input callback, and the latch records the press.
#[derive(Clone, Default)]
pub struct EscapeLatch(Rc<Cell<bool>>);

impl EscapeLatch {
    pub fn is_set(&self) -> bool {
        self.0.get()
    }
}

impl InputCallback for EscapeLatch {
    fn add_char(&mut self, _uni_char: u32) {}

    fn set_key_state(&mut self, key: Key, state: bool) {
        if key == Key::Escape && state {
            self.0.set(true);
        }
    }
}

pub struct MinifbDisplay {
    title: String,
    window: Option<Window>,
    size: Vec2<usize>,
    escape: EscapeLatch,
}

impl MinifbDisplay {
    /// The window itself is created by the first `show`, once the frame size is known.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window: None,
            size: Vec2::default(),
            escape: EscapeLatch::default(),
        }
    }

    fn ensure_window(&mut self, size: Vec2<usize>) -> Result<&mut Window, VideoError> {
        if self.window.is_none() || self.size != size {
            // replacing the old window closes it
            let mut window = Window::new(&self.title, size.x, size.y, WindowOptions::default())?;
            window.set_target_fps(TARGET_FPS);
            window.set_input_callback(Box::new(self.escape.clone()));
            log_debug!("display: opened \"{}\" at {}", self.title, size);
            self.window = Some(window);
            self.size = size;
        }
        self.window
            .as_mut()
            .ok_or_else(|| VideoError::Display("window not created".to_string()))
    }
}

impl Display for MinifbDisplay {
    fn show(&mut self, image: &Image) -> Result<(), VideoError> {
        image.format.ensure_format(PixelFormat::Rgb8)?;
        let buffer = image::rgb_to_u32(image.size, &image.data);
        let window = self.ensure_window(image.size)?;
        window.update_with_buffer(&buffer, image.size.x, image.size.y)?;
        Ok(())
    }

    fn escape_pressed(&self) -> bool {
        self.escape.is_set()
            || self
                .window
                .as_ref()
                .is_some_and(|window| window.is_key_down(Key::Escape))
    }

    fn is_open(&self) -> bool {
        self.window.as_ref().is_none_or(|window| window.is_open())
    }
}

impl Drop for MinifbDisplay {
    fn drop(&mut self) {
        if self.window.take().is_some() {
            log_debug!("display: closed \"{}\"", self.title);
        }
    }
}

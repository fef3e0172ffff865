use {crate::*, base::Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Solid RGB8 image.
    pub fn filled(size: Vec2<usize>, color: [u8; 3]) -> Self {
        let data = color.repeat(size.area());
        Self::new(size, data, PixelFormat::Rgb8)
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// RGB value at column `x`, row `y`, or `None` outside the image or for non-RGB8 images.
    pub fn rgb_at(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if self.format != PixelFormat::Rgb8 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        let i = (y * self.size.x + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    pub(crate) fn ensure_rgb(&self) -> Result<(), ImageError> {
        self.format.ensure_format(PixelFormat::Rgb8)?;
        let expected = self.size.area() * 3;
        if self.data.len() != expected {
            return Err(ImageError::Format(format!(
                "RGB8 image {} needs {} bytes, has {}",
                self.size,
                expected,
                self.data.len()
            )));
        }
        Ok(())
    }
}

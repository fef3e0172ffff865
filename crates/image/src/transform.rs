use {crate::*, base::Vec2};

/// Which vertical half of a frame to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Left,
    Right,
}

/// Column where a frame of `width` is split into halves (floor division).
pub fn split_index(width: usize) -> usize {
    width / 2
}

/// Mirror an RGB8 image left-to-right.
pub fn flip_horizontal(image: &Image) -> Result<Image, ImageError> {
    image.ensure_rgb()?;
    let row_len = image.size.x * 3;
    if row_len == 0 {
        return Ok(image.clone());
    }
    let mut data = Vec::with_capacity(image.data.len());
    for row in image.data.chunks_exact(row_len) {
        for pixel in row.chunks_exact(3).rev() {
            data.extend_from_slice(pixel);
        }
    }
    Ok(Image::new(image.size, data, PixelFormat::Rgb8))
}

/// Keep the columns left or right of `split_index(width)`.
///
/// The right half starts at the split column, so for odd widths it is one
/// column wider than the left half.
pub fn crop_half(image: &Image, half: Half) -> Result<Image, ImageError> {
    image.ensure_rgb()?;
    let width = image.size.x;
    let midpoint = split_index(width);
    let (start, end) = match half {
        Half::Left => (0, midpoint),
        Half::Right => (midpoint, width),
    };
    let row_len = width * 3;
    if row_len == 0 {
        return Ok(image.clone());
    }
    let mut data = Vec::with_capacity((end - start) * image.size.y * 3);
    for row in image.data.chunks_exact(row_len) {
        data.extend_from_slice(&row[start * 3..end * 3]);
    }
    Ok(Image::new(
        Vec2::new(end - start, image.size.y),
        data,
        PixelFormat::Rgb8,
    ))
}

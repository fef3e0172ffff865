use {
    crate::*,
    base::Vec2,
    font8x8::{BASIC_FONTS, UnicodeFonts},
};

// glyph cell size of the built-in font, before scaling
pub const GLYPH_SIZE: usize = 8;

/// Pixel width of `text` rendered at `scale`.
pub fn text_width(text: &str, scale: usize) -> usize {
    text.chars().count() * GLYPH_SIZE * scale
}

/// Draw `text` onto an RGB8 image.
///
/// `origin` is the bottom-left corner of the first glyph (the text baseline),
/// so the glyphs occupy rows `origin.y - 8 * scale .. origin.y`. Pixels that
/// fall outside the image are clipped. Characters without a glyph advance the
/// cursor without drawing.
pub fn draw_text(
    image: &mut Image,
    text: &str,
    origin: Vec2<i64>,
    color: [u8; 3],
    scale: usize,
) -> Result<(), ImageError> {
    image.ensure_rgb()?;
    let scale = scale.max(1) as i64;
    let cell = GLYPH_SIZE as i64 * scale;
    let top = origin.y - cell;
    let (width, height) = (image.size.x as i64, image.size.y as i64);

    for (n, c) in text.chars().enumerate() {
        let left = origin.x + n as i64 * cell;
        if left >= width {
            break;
        }
        let Some(glyph) = BASIC_FONTS.get(c) else {
            continue;
        };
        for (gy, bits) in glyph.iter().enumerate() {
            for gx in 0..GLYPH_SIZE {
                if bits & (1 << gx) == 0 {
                    continue;
                }
                let px = left + gx as i64 * scale;
                let py = top + gy as i64 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let (x, y) = (px + dx, py + dy);
                        if x < 0 || y < 0 || x >= width || y >= height {
                            continue;
                        }
                        let i = ((y * width + x) * 3) as usize;
                        image.data[i..i + 3].copy_from_slice(&color);
                    }
                }
            }
        }
    }

    Ok(())
}

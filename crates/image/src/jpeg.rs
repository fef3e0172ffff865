use {
    crate::*,
    crates_image::ImageEncoder,
    std::{fs, path::Path},
};

pub const DEFAULT_JPEG_QUALITY: u8 = 95;

pub fn rgb_to_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    image.ensure_rgb()?;
    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            &image.data,
            image.size.x as u32,
            image.size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encode `image` as JPEG and write it to `path`, replacing any existing file.
pub fn save_jpeg(image: &Image, path: &Path, quality: u8) -> Result<(), ImageError> {
    let jpeg = rgb_to_jpeg(image, quality)?;
    fs::write(path, jpeg)?;
    Ok(())
}

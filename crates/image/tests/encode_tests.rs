use base::Vec2;
use image::{DEFAULT_JPEG_QUALITY, Image, ImageError, PixelFormat};

#[test]
fn test_rgb_to_jpeg_has_soi_marker() {
    let image = Image::new(Vec2::new(4, 4), (0..48).collect(), PixelFormat::Rgb8);
    let jpeg = image::rgb_to_jpeg(&image, 90).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_rgb_to_jpeg_rejects_non_rgb() {
    let image = Image::new(Vec2::new(2, 1), vec![128; 4], PixelFormat::Yuyv);
    assert!(matches!(
        image::rgb_to_jpeg(&image, 90),
        Err(ImageError::Format(_))
    ));
}

#[test]
fn test_rgb_to_jpeg_rejects_wrong_length() {
    let image = Image::new(Vec2::new(4, 4), vec![0; 10], PixelFormat::Rgb8);
    assert!(image::rgb_to_jpeg(&image, 90).is_err());
}

#[test]
fn test_save_jpeg_writes_and_overwrites() {
    let dir = std::env::temp_dir().join(format!("image-test-{}-save", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("frame.jpg");

    let first = Image::filled(Vec2::new(16, 8), [0, 0, 0]);
    image::save_jpeg(&first, &path, DEFAULT_JPEG_QUALITY).unwrap();

    let second = Image::filled(Vec2::new(10, 12), [250, 250, 250]);
    image::save_jpeg(&second, &path, DEFAULT_JPEG_QUALITY).unwrap();

    let decoded = crates_image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (10, 12));
    assert!(decoded.get_pixel(5, 5).0[0] > 240);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_jpeg_unwritable_path() {
    let image = Image::filled(Vec2::new(2, 2), [0, 0, 0]);
    let result = image::save_jpeg(
        &image,
        std::path::Path::new("/proc/nonexistent/dir/frame.jpg"),
        DEFAULT_JPEG_QUALITY,
    );
    assert!(matches!(result, Err(ImageError::Io(_))));
}

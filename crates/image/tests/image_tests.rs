use base::Vec2;
use image::{Image, ImageError, PixelFormat};

#[test]
fn test_image_new_rgb8() {
    let size = Vec2::new(2, 3);
    let data: Vec<u8> = (0..18).collect();
    let image = Image::new(size, data.clone(), PixelFormat::Rgb8);

    assert_eq!(image.size, size);
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 3);
    assert_eq!(image.data, data);
    assert!(matches!(image.format, PixelFormat::Rgb8));
}

#[test]
fn test_image_filled() {
    let image = Image::filled(Vec2::new(3, 2), [10, 20, 30]);
    assert_eq!(image.data.len(), 18);
    assert_eq!(image.rgb_at(2, 1), Some([10, 20, 30]));
}

#[test]
fn test_rgb_at_row_major() {
    // 2x2: row 0 = [0,1,2] [3,4,5], row 1 = [6,7,8] [9,10,11]
    let image = Image::new(Vec2::new(2, 2), (0..12).collect(), PixelFormat::Rgb8);
    assert_eq!(image.rgb_at(1, 0), Some([3, 4, 5]));
    assert_eq!(image.rgb_at(0, 1), Some([6, 7, 8]));
    assert_eq!(image.rgb_at(2, 0), None);
    assert_eq!(image.rgb_at(0, 2), None);
}

#[test]
fn test_rgb_at_rejects_other_formats() {
    let image = Image::new(Vec2::new(2, 1), vec![128; 4], PixelFormat::Yuyv);
    assert_eq!(image.rgb_at(0, 0), None);
}

#[test]
fn test_pixel_format_fourcc() {
    assert_eq!(
        PixelFormat::from_fourcc(u32::from_le_bytes(*b"YUYV")),
        Some(PixelFormat::Yuyv)
    );
    assert_eq!(
        PixelFormat::from_fourcc(u32::from_le_bytes(*b"MJPG")),
        Some(PixelFormat::Jpeg)
    );
    assert_eq!(PixelFormat::from_fourcc(u32::from_le_bytes(*b"NV12")), None);
    assert_eq!(image::fourcc_to_string(PixelFormat::Jpeg.as_fourcc()), "MJPG");
}

#[test]
fn test_ensure_format_mismatch() {
    let err = PixelFormat::Yuyv.ensure_format(PixelFormat::Rgb8).unwrap_err();
    assert!(matches!(err, ImageError::Format(_)));
    assert!(err.to_string().contains("Rgb8"));
}

#[test]
fn test_image_error_display() {
    let err = ImageError::Decode("test error".to_string());
    assert_eq!(format!("{}", err), "decode error: test error");

    let err: ImageError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
    assert!(err.to_string().starts_with("io error"));
}

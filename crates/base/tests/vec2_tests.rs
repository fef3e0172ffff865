use base::Vec2;

#[test]
fn test_new_and_fields() {
    let v = Vec2::new(640usize, 480usize);
    assert_eq!(v.x, 640);
    assert_eq!(v.y, 480);
}

#[test]
fn test_default_is_zero() {
    assert_eq!(Vec2::<usize>::default(), Vec2::new(0, 0));
}

#[test]
fn test_area() {
    assert_eq!(Vec2::new(320usize, 480usize).area(), 153_600);
}

#[test]
fn test_display_as_resolution() {
    assert_eq!(Vec2::new(640usize, 480usize).to_string(), "640x480");
}

use super::*;

#[test]
fn position_rounds_to_nearest_frame() {
    assert_eq!(FrameIndex::from_position(0.4, 10), FrameIndex(0));
    assert_eq!(FrameIndex::from_position(0.5, 10), FrameIndex(1));
    assert_eq!(FrameIndex::from_position(3.49, 10), FrameIndex(3));
    assert_eq!(FrameIndex::from_position(8.6, 10), FrameIndex(9));
}

#[test]
fn position_clamps_out_of_range() {
    assert_eq!(FrameIndex::from_position(-5.0, 4), FrameIndex(0));
    assert_eq!(FrameIndex::from_position(9.0, 4), FrameIndex(3));
    assert_eq!(FrameIndex::from_position(3.0, 4), FrameIndex(3));
}

#[test]
fn position_clamps_non_finite() {
    assert_eq!(FrameIndex::from_position(f64::NAN, 4), FrameIndex(0));
    assert_eq!(FrameIndex::from_position(f64::INFINITY, 4), FrameIndex(3));
    assert_eq!(FrameIndex::from_position(f64::NEG_INFINITY, 4), FrameIndex(0));
}

#[test]
fn empty_sequence_resolves_to_first_slot() {
    assert_eq!(FrameIndex::from_position(7.0, 0), FrameIndex(0));
}

#[test]
fn ordinal_is_one_based() {
    assert_eq!(FrameIndex(0).ordinal(), 1);
    assert_eq!(FrameIndex(6).ordinal(), 7);
}

#[test]
fn viewport_emptiness() {
    assert!(Viewport::new(0, 10).is_empty());
    assert!(Viewport::new(10, 0).is_empty());
    assert!(!Viewport::new(1, 1).is_empty());
    assert_eq!(Viewport::new(1920, 1080).size(), Size::new(1920.0, 1080.0));
}

#[test]
fn hex_colors_parse() {
    assert_eq!(Rgba8::from_hex("#00ff9d").unwrap(), Rgba8([0, 255, 157, 255]));
    assert_eq!(Rgba8::from_hex("ff4d4d80").unwrap(), Rgba8([255, 77, 77, 128]));
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gggggg").is_err());
}

#[test]
fn colors_deserialize_from_channels_or_hex() {
    let c: Rgba8 = serde_json::from_str("[1, 2, 3, 4]").unwrap();
    assert_eq!(c, Rgba8([1, 2, 3, 4]));
    let c: Rgba8 = serde_json::from_str(r##""#0a0b0c""##).unwrap();
    assert_eq!(c, Rgba8([10, 11, 12, 255]));
    assert_eq!(serde_json::to_string(&c).unwrap(), "[10,11,12,255]");
    assert!(serde_json::from_str::<Rgba8>(r#""teal""#).is_err());
    assert!(serde_json::from_str::<Rgba8>("[1, 2, 3]").is_err());
}

// src/pixel/tests.rs

use super::*;

#[test_log::test]
fn argb8_accessors_read_their_bytes() {
    let px = Argb8::new(0x11, 0x22, 0x33, 0x44);
    assert_eq!(px.0, 0x44112233);
    assert_eq!((px.r(), px.g(), px.b(), px.a()), (0x11, 0x22, 0x33, 0x44));
}

#[test_log::test]
fn rgba8_accessors_read_their_bytes() {
    let px = Rgba8::new(0x11, 0x22, 0x33, 0x44);
    assert_eq!(px.0, 0x11223344);
    assert_eq!((px.r(), px.g(), px.b(), px.a()), (0x11, 0x22, 0x33, 0x44));
}

#[test_log::test]
fn converting_between_layouts_keeps_channels() {
    let argb = Argb8::new(0xDE, 0xAD, 0xBE, 0xEF);
    let rgba = Rgba8::from(argb);
    assert_eq!(rgba, Rgba8::new(0xDE, 0xAD, 0xBE, 0xEF));
    assert_eq!(Argb8::from(rgba), argb);
}

#[test_log::test]
fn color_conversions_match_the_codec() {
    let color = Color::new(1.0, 0.5, 0.0, 0.25);
    let argb = Argb8::from(color);
    let rgba = Rgba8::from(color);
    assert_eq!(argb.0, color.to_argb());
    assert_eq!(rgba.0, color.to_rgba());
    assert_eq!(Rgba8::from(argb), rgba);
    assert_eq!(Color::from(argb), Color::from(rgba));
}

#[test_log::test]
fn pixel_format_packs_and_unpacks() {
    let color = Color::from_bytes(0x80, 0x40, 0x20, 0x10);
    assert_eq!(PixelFormat::Argb.pack(color), 0x10804020);
    assert_eq!(PixelFormat::Rgba.pack(color), 0x80402010);
    for format in [PixelFormat::Argb, PixelFormat::Rgba] {
        assert_eq!(format.unpack(format.pack(color)), color, "{:?}", format);
    }
}

#[test_log::test]
fn pixel_format_defaults_to_argb() {
    assert_eq!(PixelFormat::default(), PixelFormat::Argb);
}

#[test_log::test]
fn pixel_format_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&PixelFormat::Rgba).unwrap(), "\"rgba\"");
    let format: PixelFormat = serde_json::from_str("\"argb\"").unwrap();
    assert_eq!(format, PixelFormat::Argb);
    assert!(serde_json::from_str::<PixelFormat>("\"bgra\"").is_err());
}

// tests/property/style_test.rs

//! Property-based tests for colour parsing and line derivation

use proptest::prelude::*;
use wecui::core::style::{Colour, RenderType, derive_styles};

fn render_type() -> impl Strategy<Value = RenderType> {
    prop_oneof![
        Just(RenderType::Any),
        Just(RenderType::Hidden),
        Just(RenderType::Visible),
    ]
}

proptest! {
    #[test]
    fn test_six_digit_colours_get_default_alpha(r: u8, g: u8, b: u8) {
        let text = format!("#{r:02x}{g:02X}{b:02x}");
        let colour = Colour::new(&text).unwrap();
        prop_assert_eq!(colour.hex(), format!("{text}CC"));
        prop_assert_eq!(colour.alpha(), 0xCC);
        prop_assert_eq!(colour.argb(), u32::from_be_bytes([0xCC, r, g, b]));
    }

    #[test]
    fn test_hex_and_argb_agree(argb: u32) {
        let colour = Colour::from_argb(argb);
        let reparsed = Colour::new(colour.hex()).unwrap();
        prop_assert_eq!(reparsed.argb(), argb);
        prop_assert_eq!(reparsed, colour);
    }

    #[test]
    fn test_hidden_line_scaling(argb: u32) {
        let colour = Colour::from_argb(argb);
        let lines = derive_styles(&colour);

        prop_assert_eq!(lines.visible.red, f32::from(colour.red()));
        prop_assert_eq!(lines.visible.alpha, f32::from(colour.alpha()));
        prop_assert_eq!(lines.hidden.red, f32::from(colour.red()) * 0.75);
        prop_assert_eq!(lines.hidden.green, f32::from(colour.green()) * 0.75);
        prop_assert_eq!(lines.hidden.blue, f32::from(colour.blue()) * 0.75);
        prop_assert_eq!(lines.hidden.alpha, f32::from(colour.alpha()) / 4.0);
        prop_assert_eq!(lines.hidden.thickness, lines.visible.thickness);
    }

    #[test]
    fn test_render_type_matching_is_symmetric(a in render_type(), b in render_type()) {
        prop_assert_eq!(a.matches(b), b.matches(a));
        prop_assert!(a.matches(RenderType::Any));
        prop_assert!(a.matches(a));
    }

    #[test]
    fn test_malformed_colours_are_rejected(text in "[^#].{0,10}|#[0-9a-f]{0,5}|#[g-z]{6}") {
        prop_assert!(Colour::new(&text).is_err());
        prop_assert!(!Colour::is_valid(&text));
    }
}

//! Property-based invariant tests for the quantizer and tag streams.
//!
//! 1. Quantizing a palette member is the identity
//! 2. `n_closest` is sorted by distance and its head matches `nearest`
//! 3. Quantized colors are always palette members
//! 4. Streams built from styled runs are balanced and plain-encode to their text

use mono_style::{
    Directive, Palette, PlainEncoder, Rgb, TagStream, XTERM_256, check_balanced, n_closest,
    nearest,
};
use proptest::prelude::*;

fn rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

fn quantizing_palette() -> impl Strategy<Value = Palette> {
    prop_oneof![
        Just(Palette::Monochrome),
        Just(Palette::Ansi16),
        Just(Palette::Xterm256),
    ]
}

proptest! {
    #[test]
    fn palette_members_quantize_to_themselves(index in 0usize..256) {
        let color = XTERM_256[index];
        prop_assert_eq!(Palette::Xterm256.quantize(color), color);
    }

    #[test]
    fn quantized_color_is_a_palette_member(color in rgb(), palette in quantizing_palette()) {
        let colors = palette.colors().unwrap();
        prop_assert!(colors.contains(&palette.quantize(color)));
    }

    #[test]
    fn n_closest_is_sorted(color in rgb(), n in 1usize..20) {
        let colors = Palette::Xterm256.colors().unwrap();
        let closest = n_closest(color, n, colors);
        prop_assert_eq!(closest.len(), n);
        prop_assert_eq!(closest[0], nearest(color, colors));
        for pair in closest.windows(2) {
            prop_assert!(color.distance_sq(pair[0]) <= color.distance_sq(pair[1]));
        }
    }

    #[test]
    fn styled_runs_are_balanced(
        runs in prop::collection::vec((rgb(), rgb(), any::<bool>(), "[a-z ]{0,4}"), 0..16),
    ) {
        let mut stream = TagStream::new();
        let mut plain = String::new();
        for (fg, bg, bold, text) in &runs {
            let mut opens = vec![Directive::foreground(*fg), Directive::background(*bg)];
            if *bold {
                opens.push(Directive::bold());
            }
            stream.push_styled(&opens, text.clone());
            plain.push_str(text);
        }
        prop_assert_eq!(check_balanced(stream.tokens()), Ok(()));
        prop_assert_eq!(stream.encode(&PlainEncoder), plain);
    }
}

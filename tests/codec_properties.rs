use hexsync::color::{Rgb, best_foreground_for, expand_short_hex, hex_to_rgb, rgb_to_hex};

const HEX: &[u8] = b"0123456789abcdefABCDEF";

/// Every red value, with green and blue on a stride.
fn sample_triples() -> Vec<(i64, i64, i64)> {
    let strided: Vec<i64> = (0..=255).step_by(5).chain([254]).collect();
    let mut triples = Vec::new();
    for r in 0..=255 {
        for &g in &strided {
            for &b in &strided {
                triples.push((r, g, b));
            }
        }
    }
    triples
}

#[test]
fn full_form_round_trips() {
    for (r, g, b) in sample_triples() {
        let hex = rgb_to_hex(r, g, b).unwrap();
        assert_eq!(hex.len(), 6);
        assert_eq!(hex, hex.to_ascii_uppercase());
        let rgb = hex_to_rgb(&hex).unwrap();
        assert_eq!(
            (i64::from(rgb.r), i64::from(rgb.g), i64::from(rgb.b)),
            (r, g, b),
            "round trip of {hex}"
        );
    }
}

#[test]
fn short_form_matches_its_expansion() {
    for &a in HEX {
        for &b in HEX {
            for &c in HEX {
                let short: String = [a, b, c].iter().map(|&d| d as char).collect();
                let long = expand_short_hex(&short);
                assert_eq!(hex_to_rgb(&short), hex_to_rgb(&long), "{short}");
                assert!(hex_to_rgb(&short).is_ok());
            }
        }
    }
}

#[test]
fn decoding_ignores_case() {
    assert_eq!(hex_to_rgb("abcdef"), hex_to_rgb("ABCDEF"));
    assert_eq!(hex_to_rgb("aBcDeF"), Ok(Rgb::new(0xAB, 0xCD, 0xEF)));
}

#[test]
fn documented_examples() {
    assert_eq!(rgb_to_hex(63, 81, 181).unwrap(), "3F51B5");
    assert_eq!(hex_to_rgb("3F51B5"), Ok(Rgb::new(63, 81, 181)));
    assert!(hex_to_rgb("ZZZ").is_err());
    assert!(hex_to_rgb("12345").is_err());
    assert!(rgb_to_hex(256, 0, 0).is_err());
    assert!(rgb_to_hex(-1, 0, 0).is_err());
    assert_eq!(best_foreground_for(Rgb::new(63, 81, 181)), Rgb::WHITE);
}

#[test]
fn foreground_is_always_black_or_white() {
    for (r, g, b) in sample_triples().into_iter().step_by(97) {
        let fg = best_foreground_for(Rgb::try_from((r, g, b)).unwrap());
        assert!(fg == Rgb::BLACK || fg == Rgb::WHITE);
    }
}

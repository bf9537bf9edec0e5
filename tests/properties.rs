//! Property-based tests for the numeric renderer and alignment writer.

use proptest::prelude::*;
use smol_fmt::num::render_int;
use smol_fmt::{Fmt, Radix, SCRATCH_LEN, StackBuf};

fn radix_strategy() -> impl Strategy<Value = Radix> {
    prop_oneof![
        Just(Radix::Binary),
        Just(Radix::Octal),
        Just(Radix::Decimal),
        Just(Radix::Hex),
    ]
}

fn align_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('<'), Just('>'), Just('^')]
}

fn render<T: smol_fmt::Integer>(value: T, radix: Radix, upper: bool) -> String {
    let mut buf = [0u8; SCRATCH_LEN];
    let len = render_int(&mut buf, value, radix, upper);
    String::from_utf8(buf[..len].to_vec()).unwrap()
}

fn print(template: &str, value: impl smol_fmt::Render) -> String {
    let mut f = Fmt::new(StackBuf::<512>::new());
    f.print(template, (value,));
    f.sink().as_str().to_owned()
}

proptest! {
    /// Decimal text parses back to the same value.
    #[test]
    fn decimal_round_trip(n in any::<i64>()) {
        let text = render(n, Radix::Decimal, false);
        prop_assert_eq!(text.parse::<i64>().unwrap(), n);
        prop_assert_eq!(text, n.to_string());
    }

    /// Sign-and-magnitude text parses back in every radix.
    #[test]
    fn radix_round_trip(n in any::<i128>(), radix in radix_strategy(), upper in any::<bool>()) {
        let text = render(n, radix, upper);
        prop_assert_eq!(i128::from_str_radix(&text, radix.base() as u32).unwrap(), n);
    }

    #[test]
    fn unsigned_matches_core_fmt(n in any::<u32>()) {
        prop_assert_eq!(render(n, Radix::Hex, false), format!("{:x}", n));
        prop_assert_eq!(render(n, Radix::Hex, true), format!("{:X}", n));
        prop_assert_eq!(render(n, Radix::Octal, false), format!("{:o}", n));
        prop_assert_eq!(render(n, Radix::Binary, false), format!("{:b}", n));
    }

    /// Negative values are '-' followed by the magnitude's digits.
    #[test]
    fn negative_is_sign_then_magnitude(n in i32::MIN..0, radix in radix_strategy()) {
        let text = render(n, radix, false);
        prop_assert!(text.starts_with('-'));
        prop_assert_eq!(&text[1..], render(n.unsigned_abs(), radix, false));
    }

    #[test]
    fn no_leading_zeros(n in 1u64..=u64::MAX, radix in radix_strategy()) {
        prop_assert!(!render(n, radix, false).starts_with('0'));
    }

    /// Padded output is max(width, len) long, with the fill on the side(s)
    /// the alignment asks for.
    #[test]
    fn padding_laws(text in "[a-z]{0,12}", width in 0u32..40, align in align_strategy()) {
        let out = print(&format!("{{:*{}{}}}", align, width), text.as_str());
        let pad = (width as usize).saturating_sub(text.len());
        prop_assert_eq!(out.len(), text.len().max(width as usize));

        if !text.is_empty() {
            let before = out.find(text.as_str()).unwrap();
            let expected = match align {
                '>' => pad,
                '<' => 0,
                _ => pad / 2,
            };
            prop_assert_eq!(before, expected);
        }
        prop_assert!(out.bytes().filter(|&b| b == b'*').count() == pad);
    }

    /// Placeholders come out literally once arguments run out.
    #[test]
    fn literals_survive(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}", n in any::<u16>()) {
        let out = print(&format!("{prefix}{{}}{suffix}{{}}"), n);
        prop_assert_eq!(out, format!("{prefix}{n}{suffix}{{}}"));
    }
}

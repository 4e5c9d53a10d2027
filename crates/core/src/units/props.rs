//! Property-based tests for the unit conversion core.
//!
//! - Normalization is idempotent and never fails
//! - Thousands separators only group digits in threes
//! - Conversion equals the truncated exact product

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::amount::{Amount, SCALE, format_units};
use super::rate::{UnitRate, convert, convert_to_base_units};

/// Strategy to generate decimal text with up to 8 fractional digits
/// (0 to 1,000,000 whole units).
fn decimal_text() -> impl Strategy<Value = String> {
    (0u64..=1_000_000, prop::option::of("[0-9]{1,8}")).prop_map(|(whole, frac)| match frac {
        Some(frac) => format!("{whole}.{frac}"),
        None => whole.to_string(),
    })
}

/// Strategy to generate amounts up to 1,000,000 units at scale 8.
fn amount_base_units() -> impl Strategy<Value = u128> {
    0u128..=100_000_000_000_000
}

/// Strategy to generate positive rates (0.00000001 to 10000.00000000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 8))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Normalizing an already-normalized string changes nothing.
    #[test]
    fn prop_format_units_idempotent(raw in decimal_text()) {
        let once = format_units(&raw, SCALE);
        let twice = format_units(&once, SCALE);
        prop_assert_eq!(once, twice);
    }

    /// Normalized output always carries exactly `SCALE` fractional digits.
    #[test]
    fn prop_format_units_fixed_scale(raw in decimal_text()) {
        let formatted = format_units(&raw, SCALE);
        let (_, frac) = formatted.split_once('.').unwrap();
        prop_assert_eq!(frac.len(), SCALE as usize);
    }

    /// Arbitrary text never panics and either parses or yields zero.
    #[test]
    fn prop_format_units_never_panics(raw in "\\PC{0,24}") {
        let formatted = format_units(&raw, SCALE);
        if Amount::parse(&raw, SCALE).is_err() {
            prop_assert_eq!(formatted, "0.00000000");
        }
    }

    /// Thousands-grouped text parses to the same amount as the plain digits.
    #[test]
    fn prop_grouped_matches_plain(whole in 0u64..=100_000_000_000) {
        let plain = whole.to_string();
        let mut grouped = String::new();
        for (i, digit) in plain.chars().enumerate() {
            if i > 0 && (plain.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        prop_assert_eq!(format_units(&grouped, SCALE), format_units(&plain, SCALE));
    }

    /// A comma followed by fewer or more than three digits is never a
    /// thousands separator.
    #[test]
    fn prop_misgrouped_is_malformed(head in 1u32..=999, tail in "[0-9]{1,2}|[0-9]{4,6}") {
        let raw = format!("{head},{tail}");
        prop_assert!(Amount::parse(&raw, SCALE).is_err());
        prop_assert_eq!(format_units(&raw, SCALE), "0.00000000");
    }

    /// Text without digits is always zero.
    #[test]
    fn prop_non_numeric_is_zero(raw in "[a-zA-Z ]{0,16}") {
        prop_assert_eq!(format_units(&raw, SCALE), "0.00000000");
    }

    /// Conversion equals the exact rational product truncated at scale 8.
    #[test]
    fn prop_convert_matches_exact_product(
        base_units in amount_base_units(),
        rate in positive_rate(),
    ) {
        let amount = Amount::from_base_units(base_units, SCALE).unwrap();
        let unit_rate = UnitRate::new(rate).unwrap();
        let converted = convert(&amount, &unit_rate).unwrap();

        let exact = amount.to_decimal() * rate;
        let expected = exact.round_dp_with_strategy(SCALE, RoundingStrategy::ToZero);
        prop_assert_eq!(converted.to_decimal(), expected);
    }

    /// Conversion never exceeds the exact product.
    #[test]
    fn prop_convert_never_overstates(
        base_units in amount_base_units(),
        rate in positive_rate(),
    ) {
        let amount = Amount::from_base_units(base_units, SCALE).unwrap();
        let unit_rate = UnitRate::new(rate).unwrap();
        let converted = convert(&amount, &unit_rate).unwrap();

        prop_assert!(converted.to_decimal() <= amount.to_decimal() * rate);
    }

    /// Zero converts to zero for any positive rate.
    #[test]
    fn prop_zero_converts_to_zero(rate in positive_rate()) {
        let unit_rate = UnitRate::new(rate).unwrap();
        prop_assert_eq!(convert_to_base_units("0", &unit_rate), "0.00000000");
        prop_assert_eq!(convert_to_base_units("", &unit_rate), "0.00000000");
    }
}

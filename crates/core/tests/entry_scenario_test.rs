//! End-to-end scenario: a USD -> EUR quote form.

use rust_decimal_macros::dec;
use swapquote_core::entry::{BoundViolation, EntryController, Offering, PayinLimits};
use swapquote_core::units::{UnitRate, format_fee};
use swapquote_shared::config::{LimitsConfig, OfferingConfig};

fn offering(fee_subunits: Option<i64>) -> Offering {
    let config = OfferingConfig {
        payin_currency: "USD".to_string(),
        payout_currency: "EUR".to_string(),
        payout_units_per_payin_unit: dec!(0.91),
        fee_subunits,
    };
    Offering::try_from(&config).expect("valid offering")
}

#[test]
fn test_usd_to_eur_scenario() {
    let limits = PayinLimits::from(&LimitsConfig::default());
    let mut entry = EntryController::new(offering(Some(250)), limits);

    let view = entry.handle_input("100");

    assert_eq!(view.payin_currency, "USD");
    assert_eq!(view.payout_currency, "EUR");
    assert_eq!(view.payin_amount, "100.00000000");
    assert_eq!(view.payout_amount, "91.00000000");
    assert_eq!(view.exchange_rate, "1 USD = 0.91 EUR");
    assert_eq!(view.fee, "2.50 USD");
    assert!(view.is_valid);
}

#[test]
fn test_usd_to_eur_without_fee() {
    let mut entry = EntryController::new(offering(None), PayinLimits::UNBOUNDED);
    assert_eq!(entry.handle_input("100").fee, "0.00 USD");
    assert_eq!(format_fee(None, "USD").unwrap(), "0.00 USD");
}

#[test]
fn test_bounded_form() {
    let limits = PayinLimits::from(&LimitsConfig {
        min_payin_amount: dec!(1),
        max_payin_amount: dec!(100),
    });
    let mut entry = EntryController::new(offering(Some(250)), limits);

    let view = entry.handle_input("0.5");
    assert_eq!(view.violation, Some(BoundViolation::BelowMinimum { min: dec!(1) }));

    let view = entry.handle_input("150");
    assert_eq!(view.violation, Some(BoundViolation::AboveMaximum { max: dec!(100) }));

    let view = entry.handle_input("50");
    assert!(view.is_valid);
    assert_eq!(view.payout_amount, "45.50000000");
}

#[test]
fn test_float_rate_from_presentation_layer() {
    let rate = UnitRate::try_from(0.91_f64).expect("positive rate");
    let offering = Offering::new("USD".parse().unwrap(), "EUR".parse().unwrap(), rate, None)
        .expect("valid offering");
    let mut entry = EntryController::new(offering, PayinLimits::UNBOUNDED);

    assert_eq!(entry.handle_input("1000000").payout_amount, "910000.00000000");
}

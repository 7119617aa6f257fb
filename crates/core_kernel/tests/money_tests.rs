//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, line totals,
//! currency handling, and edge cases.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00), Currency::USD);
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-100.00));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(75.25), Currency::EUR);
        let b = Money::new(dec!(24.75), Currency::EUR);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(100.00));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(10), Currency::USD);
        let b = Money::new(dec!(25), Currency::USD);
        let result = a.checked_sub(&b).unwrap();
        assert!(result.is_negative());
    }

    #[test]
    fn test_mixed_currency_add_is_rejected() {
        let usd = Money::new(dec!(1), Currency::USD);
        let jpy = Money::new(dec!(1), Currency::JPY);
        assert!(matches!(
            usd.checked_add(&jpy),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }
}

mod line_totals {
    use super::*;

    #[test]
    fn test_line_total_rounds_to_currency() {
        let unit = Money::new(dec!(0.3333), Currency::USD);
        assert_eq!(unit.line_total(3).amount(), dec!(1.00));
    }

    #[test]
    fn test_line_total_jpy_has_no_decimals() {
        let unit = Money::new(dec!(150.4), Currency::JPY);
        assert_eq!(unit.line_total(2).amount(), dec!(301));
    }

    #[test]
    fn test_line_total_of_one_unit() {
        let unit = Money::new(dec!(50.00), Currency::USD);
        assert_eq!(unit.line_total(1), unit.round_to_currency());
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_includes_currency_code() {
        let m = Money::new(dec!(1234.5), Currency::USD);
        assert_eq!(m.to_string(), "USD 1234.50");
    }

    #[test]
    fn test_display_jpy_whole_units() {
        let m = Money::new(dec!(10000), Currency::JPY);
        assert_eq!(m.to_string(), "JPY 10000");
    }
}

//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, currency handling,
//! and the lenient coercion used on server-supplied amounts.

use core_kernel::{lenient, Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

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
        let m = Money::zero(Currency::IDR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::IDR);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00), Currency::USD);
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-100.00));
    }

    #[test]
    fn test_default_currency_is_idr() {
        assert_eq!(Currency::default(), Currency::IDR);
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_same_currency() {
        let a = Money::new(dec!(100000), Currency::IDR);
        let b = Money::new(dec!(50000), Currency::IDR);
        assert_eq!((a + b).amount(), dec!(150000));
    }

    #[test]
    fn test_sub_same_currency() {
        let a = Money::new(dec!(100000), Currency::IDR);
        let b = Money::new(dec!(30000), Currency::IDR);
        assert_eq!((a - b).amount(), dec!(70000));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let idr = Money::new(dec!(100), Currency::IDR);
        let usd = Money::new(dec!(100), Currency::USD);
        assert!(matches!(
            idr.checked_add(&usd),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_checked_sub_currency_mismatch() {
        let idr = Money::new(dec!(100), Currency::IDR);
        let eur = Money::new(dec!(100), Currency::EUR);
        assert!(matches!(
            idr.checked_sub(&eur),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_multiply_by_quantity() {
        let unit_price = Money::new(dec!(10000), Currency::IDR);
        let line = unit_price.multiply(dec!(2));
        assert_eq!(line.amount(), dec!(20000));
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(50), Currency::USD);
        assert_eq!((-m).amount(), dec!(-50));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_decimal_places() {
        assert_eq!(Currency::IDR.decimal_places(), 0);
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::USD.decimal_places(), 2);
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(Currency::from_code("idr"), Some(Currency::IDR));
        assert_eq!(Currency::from_code("Usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("???"), None);
    }

    #[test]
    fn test_display_uses_symbol_and_places() {
        assert_eq!(
            Money::new(dec!(150000), Currency::IDR).to_string(),
            "Rp 150000"
        );
        assert_eq!(
            Money::new(dec!(99.5), Currency::USD)
                .round_to_currency()
                .to_string(),
            "$ 99.50"
        );
    }

    #[test]
    fn test_serde_uppercase_codes() {
        let json = serde_json::to_string(&Currency::IDR).unwrap();
        assert_eq!(json, "\"IDR\"");
        let back: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(back, Currency::EUR);
    }
}

mod coercion {
    use super::*;

    #[test]
    fn test_numeric_string_parses() {
        assert_eq!(lenient::coerce(&json!("250000.75")), dec!(250000.75));
    }

    #[test]
    fn test_plain_number_parses() {
        assert_eq!(lenient::coerce(&json!(42)), dec!(42));
    }

    #[test]
    fn test_null_and_garbage_default_to_zero() {
        assert_eq!(lenient::coerce(&json!(null)), Decimal::ZERO);
        assert_eq!(lenient::coerce(&json!("abc")), Decimal::ZERO);
        assert_eq!(lenient::coerce(&json!(true)), Decimal::ZERO);
    }

    #[test]
    fn test_embedded_whitespace_trimmed() {
        assert_eq!(lenient::coerce(&json!("  30000 ")), dec!(30000));
    }
}

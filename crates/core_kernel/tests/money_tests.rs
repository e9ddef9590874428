//! Unit tests for the Money module

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod parsing {
    use super::*;

    #[test]
    fn test_parse_claimed_amount() {
        let m: Money = "3000000".parse().unwrap();
        assert_eq!(m.amount(), dec!(3000000));
    }

    #[test]
    fn test_parse_zero() {
        let m = Money::parse_krw("0").unwrap();
        assert_eq!(m.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_rejects_decimal_point() {
        assert!(matches!(
            Money::parse_krw("10.5"),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_overflow() {
        let huge = "9".repeat(40);
        assert_eq!(Money::parse_krw(&huge), Err(MoneyError::Overflow));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        let m = Money::parse_krw("1,500,000원").unwrap();
        assert_eq!(m.to_string(), "1,500,000원");
        assert_eq!(m.currency(), Currency::KRW);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_serializes_with_currency_code() {
        let json = serde_json::to_value(Money::krw(dec!(50000))).unwrap();
        assert_eq!(json["currency"], "KRW");
    }
}

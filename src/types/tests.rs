use super::{Money, MoneyError};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_money_from_text_and_decimal_compare_equal() -> Result<()> {
    let from_text = Money::parse("USD", "12.50000")?;
    let from_decimal = Money::new("USD", Decimal::new(125, 1))?;

    assert_eq!(from_text, from_decimal);
    assert_eq!(from_text.currency_code(), "USD");

    Ok(())
}

#[test]
fn test_money_text_form_keeps_scale_and_reparses_exactly() -> Result<()> {
    let money = Money::parse("BTC", "12.50000")?;
    let text = money.amount().to_string();

    assert_eq!(text, "12.50000");
    assert_eq!(Decimal::from_str(&text)?, money.amount());
    assert_eq!(money.normalized().amount().to_string(), "12.5");

    Ok(())
}

#[test]
fn test_money_preserves_precision_beyond_binary_floats() -> Result<()> {
    let money = Money::parse("BTC", "0.1000000000000000000000000001")?;

    assert_eq!(money.amount().to_string(), "0.1000000000000000000000000001");

    Ok(())
}

#[test]
fn test_money_never_formats_in_scientific_notation() -> Result<()> {
    let money = Money::new("BTC", Decimal::new(1, 8))?;

    assert_eq!(money.amount().to_string(), "0.00000001");
    assert_eq!(money.to_string(), "0.00000001 BTC");

    Ok(())
}

#[test]
fn test_money_rejects_invalid_amount_text() {
    for value in ["abc", "1.2.3", "", "1e5", ".5", "1.", "-", "+1.0"] {
        assert!(matches!(Money::parse("USD", value), Err(MoneyError::MalformedAmount { .. })), "{value}");
    }
}

#[test]
fn test_money_rejects_digit_separators() {
    assert!(matches!(Money::parse("USD", "1_000"), Err(MoneyError::MalformedAmount { ref value }) if value == "1_000"));
}

#[test]
fn test_money_rejects_surrounding_whitespace() {
    assert!(matches!(Money::parse("USD", " 1.0"), Err(MoneyError::MalformedAmount { .. })));
    assert!(matches!(Money::parse("USD", "1.0\n"), Err(MoneyError::MalformedAmount { .. })));
}

#[test]
fn test_money_rejects_text_that_would_be_rounded() {
    assert!(matches!(
        Money::parse("BTC", "0.12345678901234567890123456789"),
        Err(MoneyError::InvalidAmount { .. })
    ));
    assert!(matches!(
        Money::parse("BTC", "99999999999999999999999999999999"),
        Err(MoneyError::InvalidAmount { .. })
    ));
}

#[test]
fn test_money_rejects_empty_currency() {
    assert!(matches!(Money::parse("", "1.0"), Err(MoneyError::EmptyCurrency)));
    assert!(matches!(Money::new("  ", Decimal::ONE), Err(MoneyError::EmptyCurrency)));
}

#[test]
fn test_money_decodes_wire_object() -> Result<()> {
    let money: Money = serde_json::from_str(r#"{"amount": "-1.23400000", "currency": "BTC"}"#)?;

    assert_eq!(money, Money::parse("BTC", "-1.234")?);
    assert_eq!(money.amount().to_string(), "-1.23400000");

    Ok(())
}

#[test]
fn test_money_wire_object_requires_currency() {
    assert!(serde_json::from_str::<Money>(r#"{"amount": "1.0"}"#).is_err());
    assert!(serde_json::from_str::<Money>(r#"{"amount": "1.0", "currency": ""}"#).is_err());
}

#[test]
fn test_money_wire_object_rejects_numeric_amount() {
    assert!(serde_json::from_str::<Money>(r#"{"amount": 1234567.1234567890123, "currency": "BTC"}"#).is_err());
    assert!(serde_json::from_str::<Money>(r#"{"amount": 5, "currency": "BTC"}"#).is_err());
}

#[test]
fn test_money_wire_object_rejects_amount_that_would_be_rounded() {
    let result = serde_json::from_str::<Money>(r#"{"amount": "1.00000000000000000000000000001", "currency": "BTC"}"#);

    assert!(result.is_err());
}

#[test]
fn test_money_encodes_amount_as_text() -> Result<()> {
    let money = Money::parse("USD", "10.00")?;
    let json = serde_json::to_value(&money)?;

    assert_eq!(json, serde_json::json!({"amount": "10.00", "currency": "USD"}));

    Ok(())
}

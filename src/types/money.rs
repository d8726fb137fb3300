use crate::types::errors::MoneyError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An exact amount of a single currency.
///
/// The amount is held as a [`Decimal`] and keeps the scale it was created with, so
/// `"12.50000"` prints back as `12.50000`. Equality is numeric: `12.50000` and `12.5` of the
/// same currency compare equal. Use [`Money::normalized`] when a canonical text form is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyWire")]
pub struct Money {
    amount: Decimal,
    #[serde(rename = "currency")]
    currency_code: String
}

/// Wire amounts are decimal text; JSON numbers are rejected.
#[derive(Deserialize)]
struct MoneyWire {
    amount: String,
    currency: String
}

impl TryFrom<MoneyWire> for Money {
    type Error = MoneyError;

    fn try_from(wire: MoneyWire) -> Result<Self, Self::Error> {
        Money::parse(wire.currency, &wire.amount)
    }
}

/// Optional `-`, one or more digits, then optionally `.` and one or more digits.
fn is_canonical_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None)
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit());

    all_digits(integer) && fraction.is_none_or(all_digits)
}

impl Money {
    /// Creates a value from an exact decimal amount.
    pub fn new(currency_code: impl Into<String>, amount: Decimal) -> Result<Self, MoneyError> {
        let currency_code = currency_code.into();

        if currency_code.trim().is_empty() {
            return Err(MoneyError::EmptyCurrency);
        }

        Ok(Self { amount, currency_code })
    }

    /// Creates a value from the canonical decimal text of the amount, e.g. `"0.5"`.
    ///
    /// Only plain decimal text is accepted: no whitespace, `+`, `_` separators or exponent.
    /// Text that cannot be held without rounding (more than 28 fractional digits, or out of
    /// range) is rejected.
    pub fn parse(currency_code: impl Into<String>, amount: &str) -> Result<Self, MoneyError> {
        if !is_canonical_decimal(amount) {
            return Err(MoneyError::MalformedAmount { value: amount.to_string() });
        }

        let exact = Decimal::from_str_exact(amount).map_err(|source| MoneyError::InvalidAmount {
            value: amount.to_string(),
            source
        })?;

        Money::new(currency_code, exact)
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Same value with trailing fractional zeros removed.
    pub fn normalized(&self) -> Self {
        Self {
            amount: self.amount.normalize(),
            currency_code: self.currency_code.clone()
        }
    }
}

impl Display for Money {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.amount, self.currency_code)
    }
}

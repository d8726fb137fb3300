use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::errors::TransactionError;
use crate::models::transaction::sealed;
use crate::models::{TransactionInfo, TransactionStatus, User};
use crate::types::Money;

/// Fields shared by both outbound request kinds.
///
/// `amount_string` is sent exactly as it was supplied; `amount` is the same value parsed once at
/// construction so that malformed or non-canonical text fails immediately.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
struct OutboundAmount {
    amount_string: String,
    #[serde(rename = "amount_currency_iso")]
    currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(skip)]
    amount: Money
}

impl OutboundAmount {
    fn from_money(amount: Money) -> Self {
        Self {
            amount_string: amount.amount().to_string(),
            currency_code: amount.currency_code().to_string(),
            notes: None,
            amount
        }
    }

    fn from_text(currency_code: &str, amount_string: &str) -> Result<Self, TransactionError> {
        let amount = Money::parse(currency_code, amount_string)?;

        Ok(Self {
            amount_string: amount_string.to_string(),
            currency_code: amount.currency_code().to_string(),
            notes: None,
            amount
        })
    }
}

/// Asks `from` to pay the given amount.
///
/// Built through [`RequestMoneyRequest::from_money`], [`RequestMoneyRequest::from_decimal`] or
/// [`RequestMoneyRequest::from_text`], then refined with [`RequestMoneyRequest::with_notes`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RequestMoneyRequest {
    #[serde(flatten)]
    base: OutboundAmount,
    from: String
}

impl RequestMoneyRequest {
    pub fn from_money(from: impl Into<String>, amount: Money) -> Self {
        Self {
            base: OutboundAmount::from_money(amount),
            from: from.into()
        }
    }

    pub fn from_decimal(from: impl Into<String>, currency_code: &str, amount: Decimal) -> Result<Self, TransactionError> {
        Ok(Self::from_money(from, Money::new(currency_code, amount)?))
    }

    pub fn from_text(from: impl Into<String>, currency_code: &str, amount: &str) -> Result<Self, TransactionError> {
        Ok(Self {
            base: OutboundAmount::from_text(currency_code, amount)?,
            from: from.into()
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.base.notes = Some(notes.into());
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    /// Amount exactly as it will be sent in `amount_string`.
    pub fn amount_string(&self) -> &str {
        &self.base.amount_string
    }
}

impl sealed::Sealed for RequestMoneyRequest {}

impl TransactionInfo for RequestMoneyRequest {
    fn id(&self) -> Option<&str> {
        None
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn amount(&self) -> Option<&Money> {
        Some(&self.base.amount)
    }

    fn is_request(&self) -> bool {
        true
    }

    fn status(&self) -> Option<TransactionStatus> {
        None
    }

    fn sender(&self) -> Option<&User> {
        None
    }

    fn recipient(&self) -> Option<&User> {
        None
    }

    fn recipient_address(&self) -> Option<&str> {
        None
    }

    fn notes(&self) -> Option<&str> {
        self.base.notes.as_deref()
    }

    fn transaction_hash(&self) -> Option<&str> {
        None
    }

    fn idempotency_key(&self) -> Option<&str> {
        None
    }
}

/// Sends the given amount to `to`.
///
/// Each `with_*` call takes the request by value and hands it back, so a chain ends with a
/// single owned value ready for serialization.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SendMoneyRequest {
    #[serde(flatten)]
    base: OutboundAmount,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    referrer_id: Option<String>,
    #[serde(rename = "idem", skip_serializing_if = "Option::is_none")]
    idempotency_key: Option<String>,
    instant_buy: bool
}

impl SendMoneyRequest {
    pub fn from_money(to: impl Into<String>, amount: Money) -> Self {
        Self::with_base(to.into(), OutboundAmount::from_money(amount))
    }

    pub fn from_decimal(to: impl Into<String>, currency_code: &str, amount: Decimal) -> Result<Self, TransactionError> {
        Ok(Self::from_money(to, Money::new(currency_code, amount)?))
    }

    pub fn from_text(to: impl Into<String>, currency_code: &str, amount: &str) -> Result<Self, TransactionError> {
        Ok(Self::with_base(to.into(), OutboundAmount::from_text(currency_code, amount)?))
    }

    fn with_base(to: String, base: OutboundAmount) -> Self {
        Self {
            base,
            to,
            user_fee: None,
            referrer_id: None,
            idempotency_key: None,
            instant_buy: false
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.base.notes = Some(notes.into());
        self
    }

    pub fn with_user_fee(mut self, user_fee: impl Into<String>) -> Self {
        self.user_fee = Some(user_fee.into());
        self
    }

    pub fn with_referrer_id(mut self, referrer_id: impl Into<String>) -> Self {
        self.referrer_id = Some(referrer_id.into());
        self
    }

    pub fn with_idempotency_key(mut self, idempotency_key: impl Into<String>) -> Self {
        self.idempotency_key = Some(idempotency_key.into());
        self
    }

    pub fn with_instant_buy(mut self, instant_buy: bool) -> Self {
        self.instant_buy = instant_buy;
        self
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn amount_string(&self) -> &str {
        &self.base.amount_string
    }

    pub fn user_fee(&self) -> Option<&str> {
        self.user_fee.as_deref()
    }

    pub fn referrer_id(&self) -> Option<&str> {
        self.referrer_id.as_deref()
    }

    pub fn is_instant_buy(&self) -> bool {
        self.instant_buy
    }
}

impl sealed::Sealed for SendMoneyRequest {}

impl TransactionInfo for SendMoneyRequest {
    fn id(&self) -> Option<&str> {
        None
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn amount(&self) -> Option<&Money> {
        Some(&self.base.amount)
    }

    fn is_request(&self) -> bool {
        true
    }

    fn status(&self) -> Option<TransactionStatus> {
        None
    }

    fn sender(&self) -> Option<&User> {
        None
    }

    fn recipient(&self) -> Option<&User> {
        None
    }

    fn recipient_address(&self) -> Option<&str> {
        None
    }

    fn notes(&self) -> Option<&str> {
        self.base.notes.as_deref()
    }

    fn transaction_hash(&self) -> Option<&str> {
        None
    }

    fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }
}

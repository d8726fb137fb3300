use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::errors::TransactionError;
use crate::models::transaction::sealed;
use crate::models::{ConfirmedTransaction, Transaction, TransactionInfo, TransactionStatus, User};
use crate::types::Money;

/// A transaction paired with the service's `success` flag and `errors` list.
///
/// A failure reported by the service is data: the envelope keeps `success=false` and the errors,
/// and may carry no transaction at all. Every [`TransactionInfo`] read forwards to the wrapped
/// transaction and reads as unset when there is none. Callers should check
/// [`TransactionEnvelope::is_success`] or go through [`TransactionEnvelope::into_transaction`]
/// before trusting those reads.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TransactionEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction: Option<Transaction>,
    success: bool,
    errors: Vec<String>
}

#[derive(Deserialize)]
struct EnvelopeWire {
    transaction: Option<ConfirmedTransaction>,
    success: bool,
    errors: Option<Vec<String>>
}

impl TransactionEnvelope {
    pub fn new(transaction: impl Into<Transaction>, success: bool, errors: Vec<String>) -> Self {
        Self {
            transaction: Some(transaction.into()),
            success,
            errors
        }
    }

    /// A failed call that produced no transaction.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            transaction: None,
            success: false,
            errors
        }
    }

    /// Wraps a locally built transaction ahead of submission.
    pub fn wrap_outbound(transaction: impl Into<Transaction>) -> Self {
        Self::new(transaction, true, Vec::new())
    }

    /// Decodes a service response.
    ///
    /// A response with `success=false` decodes to an envelope whether or not it carries a
    /// transaction.
    ///
    /// # Errors
    /// Returns `TransactionError` if:
    /// - The payload is not valid JSON or a field fails to decode, including an unknown `status`.
    /// - The payload reports success and carries no transaction.
    pub fn from_wire(payload: &[u8]) -> Result<Self, TransactionError> {
        let wire: EnvelopeWire = serde_json::from_slice(payload)?;
        let errors = wire.errors.unwrap_or_default();

        match wire.transaction {
            Some(transaction) if wire.success => {
                debug!("Decoded transaction [{}]", transaction.id().unwrap_or("-"));
                Ok(Self::new(transaction, true, errors))
            }
            Some(transaction) => {
                warn!("Transaction [{}] response reported failure: {errors:?}", transaction.id().unwrap_or("-"));
                Ok(Self::new(transaction, false, errors))
            }
            None if wire.success => Err(TransactionError::MissingTransaction),
            None => {
                warn!("Transaction response reported failure: {errors:?}");
                Ok(Self::failure(errors))
            }
        }
    }

    /// Encodes the envelope for submission.
    pub fn to_wire(&self) -> Result<String, TransactionError> {
        let json = serde_json::to_string(self).map_err(TransactionError::Encode)?;
        debug!("Encoded outbound transaction ({} bytes)", json.len());

        Ok(json)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        self.transaction.as_ref()
    }

    /// Unwraps the transaction, refusing to do so when the service reported failure.
    pub fn into_transaction(self) -> Result<Transaction, TransactionError> {
        if !self.success {
            return Err(TransactionError::rejected(&self.errors));
        }

        self.transaction.ok_or(TransactionError::MissingTransaction)
    }
}

impl sealed::Sealed for TransactionEnvelope {}

impl TransactionInfo for TransactionEnvelope {
    fn id(&self) -> Option<&str> {
        self.transaction.as_ref().and_then(|transaction| transaction.id())
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.transaction.as_ref().and_then(|transaction| transaction.created_at())
    }

    fn amount(&self) -> Option<&Money> {
        self.transaction.as_ref().and_then(|transaction| transaction.amount())
    }

    fn is_request(&self) -> bool {
        self.transaction.as_ref().is_some_and(|transaction| transaction.is_request())
    }

    fn status(&self) -> Option<TransactionStatus> {
        self.transaction.as_ref().and_then(|transaction| transaction.status())
    }

    fn sender(&self) -> Option<&User> {
        self.transaction.as_ref().and_then(|transaction| transaction.sender())
    }

    fn recipient(&self) -> Option<&User> {
        self.transaction.as_ref().and_then(|transaction| transaction.recipient())
    }

    fn recipient_address(&self) -> Option<&str> {
        self.transaction.as_ref().and_then(|transaction| transaction.recipient_address())
    }

    fn notes(&self) -> Option<&str> {
        self.transaction.as_ref().and_then(|transaction| transaction.notes())
    }

    fn transaction_hash(&self) -> Option<&str> {
        self.transaction.as_ref().and_then(|transaction| transaction.transaction_hash())
    }

    fn idempotency_key(&self) -> Option<&str> {
        self.transaction.as_ref().and_then(|transaction| transaction.idempotency_key())
    }
}

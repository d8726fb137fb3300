use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RequestMoneyRequest, SendMoneyRequest, TransactionStatus, User};
use crate::types::Money;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Read access shared by every transaction shape.
///
/// Each implementor answers every field, returning `None` for whatever its shape never carries,
/// so callers can treat confirmed transactions, outbound requests and envelopes alike. An
/// envelope for a failed call may carry no transaction, in which case every read is unset. The
/// trait is sealed: the set of shapes is closed and is enumerated by [`Transaction`].
pub trait TransactionInfo: sealed::Sealed {
    fn id(&self) -> Option<&str>;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    /// Always present on a transaction; `None` only for an envelope that carries none.
    fn amount(&self) -> Option<&Money>;
    fn is_request(&self) -> bool;
    fn status(&self) -> Option<TransactionStatus>;
    fn sender(&self) -> Option<&User>;
    fn recipient(&self) -> Option<&User>;
    fn recipient_address(&self) -> Option<&str>;
    fn notes(&self) -> Option<&str>;
    fn transaction_hash(&self) -> Option<&str>;
    fn idempotency_key(&self) -> Option<&str>;
}

/// A transaction as recorded by the wallet service.
///
/// Instances only come into existence by decoding a server payload and are never mutated
/// afterwards. A malformed `created_at` or an unknown `status` fails the decode.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedTransaction {
    id: Option<String>,
    created_at: Option<DateTime<Utc>>,
    amount: Money,
    /// Missing flag reads as `false`.
    #[serde(rename = "request", default)]
    is_request: bool,
    status: Option<TransactionStatus>,
    sender: Option<User>,
    recipient: Option<User>,
    recipient_address: Option<String>,
    notes: Option<String>,
    #[serde(rename = "hsh")]
    transaction_hash: Option<String>,
    #[serde(rename = "idem")]
    idempotency_key: Option<String>
}

impl sealed::Sealed for ConfirmedTransaction {}

impl TransactionInfo for ConfirmedTransaction {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn amount(&self) -> Option<&Money> {
        Some(&self.amount)
    }

    fn is_request(&self) -> bool {
        self.is_request
    }

    fn status(&self) -> Option<TransactionStatus> {
        self.status
    }

    fn sender(&self) -> Option<&User> {
        self.sender.as_ref()
    }

    fn recipient(&self) -> Option<&User> {
        self.recipient.as_ref()
    }

    fn recipient_address(&self) -> Option<&str> {
        self.recipient_address.as_deref()
    }

    fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    fn transaction_hash(&self) -> Option<&str> {
        self.transaction_hash.as_deref()
    }

    fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }
}

/// Every shape a transaction can take.
///
/// Serializes as the inner shape's own field set.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Transaction {
    Confirmed(ConfirmedTransaction),
    RequestMoney(RequestMoneyRequest),
    SendMoney(SendMoneyRequest)
}

impl Transaction {
    pub fn as_confirmed(&self) -> Option<&ConfirmedTransaction> {
        match self {
            Transaction::Confirmed(transaction) => Some(transaction),
            _ => None
        }
    }

    pub fn as_request_money(&self) -> Option<&RequestMoneyRequest> {
        match self {
            Transaction::RequestMoney(request) => Some(request),
            _ => None
        }
    }

    pub fn as_send_money(&self) -> Option<&SendMoneyRequest> {
        match self {
            Transaction::SendMoney(request) => Some(request),
            _ => None
        }
    }

    fn info(&self) -> &dyn TransactionInfo {
        match self {
            Transaction::Confirmed(transaction) => transaction,
            Transaction::RequestMoney(request) => request,
            Transaction::SendMoney(request) => request
        }
    }
}

impl From<ConfirmedTransaction> for Transaction {
    fn from(transaction: ConfirmedTransaction) -> Self {
        Transaction::Confirmed(transaction)
    }
}

impl From<RequestMoneyRequest> for Transaction {
    fn from(request: RequestMoneyRequest) -> Self {
        Transaction::RequestMoney(request)
    }
}

impl From<SendMoneyRequest> for Transaction {
    fn from(request: SendMoneyRequest) -> Self {
        Transaction::SendMoney(request)
    }
}

impl sealed::Sealed for Transaction {}

impl TransactionInfo for Transaction {
    fn id(&self) -> Option<&str> {
        self.info().id()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.info().created_at()
    }

    fn amount(&self) -> Option<&Money> {
        self.info().amount()
    }

    fn is_request(&self) -> bool {
        self.info().is_request()
    }

    fn status(&self) -> Option<TransactionStatus> {
        self.info().status()
    }

    fn sender(&self) -> Option<&User> {
        self.info().sender()
    }

    fn recipient(&self) -> Option<&User> {
        self.info().recipient()
    }

    fn recipient_address(&self) -> Option<&str> {
        self.info().recipient_address()
    }

    fn notes(&self) -> Option<&str> {
        self.info().notes()
    }

    fn transaction_hash(&self) -> Option<&str> {
        self.info().transaction_hash()
    }

    fn idempotency_key(&self) -> Option<&str> {
        self.info().idempotency_key()
    }
}

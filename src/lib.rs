//! Typed model of a wallet service transaction and its JSON wire format.
//!
//! Inbound payloads decode through [`TransactionEnvelope::from_wire`] into a
//! [`ConfirmedTransaction`]; outbound transfers are built with [`SendMoneyRequest`] or
//! [`RequestMoneyRequest`] and wrapped with [`TransactionEnvelope::wrap_outbound`] for
//! submission. All shapes share the [`TransactionInfo`] read interface.

pub mod models;
pub mod types;

pub use models::{
    ConfirmedTransaction, RequestMoneyRequest, SendMoneyRequest, Transaction, TransactionEnvelope, TransactionError,
    TransactionInfo, TransactionStatus, User
};
pub use types::{Money, MoneyError};

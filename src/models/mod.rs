mod envelope;
mod errors;
mod request;
mod status;
mod transaction;
mod user;

pub use envelope::TransactionEnvelope;
pub use errors::TransactionError;
pub use request::{RequestMoneyRequest, SendMoneyRequest};
pub use status::TransactionStatus;
pub use transaction::{ConfirmedTransaction, Transaction, TransactionInfo};
pub use user::User;

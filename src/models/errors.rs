use crate::types::MoneyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Transaction decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Transaction encode error: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Unrecognized enum value [{value}]")]
    UnrecognizedEnumValue {
        value: String
    },
    #[error(transparent)]
    Money(#[from] MoneyError),
    #[error("Transaction rejected by remote service: {errors:?}")]
    Rejected {
        errors: Vec<String>
    },
    #[error("Successful response carries no transaction")]
    MissingTransaction
}

impl TransactionError {
    pub fn unrecognized_enum_value(value: &str) -> Self {
        Self::UnrecognizedEnumValue { value: value.to_string() }
    }

    pub fn rejected(errors: &[String]) -> Self {
        Self::Rejected { errors: errors.to_vec() }
    }
}

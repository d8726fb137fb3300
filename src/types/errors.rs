use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("Money error: Currency code is an empty string")]
    EmptyCurrency,
    #[error("Money error: Amount [{value}] is not plain decimal text")]
    MalformedAmount {
        value: String
    },
    #[error("Money error: Invalid amount [{value}]: {source}")]
    InvalidAmount {
        value: String,
        source: rust_decimal::Error
    }
}

use crate::models::errors::TransactionError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

static STATUS_BY_NAME: LazyLock<HashMap<&'static str, TransactionStatus>> = LazyLock::new(|| {
    TransactionStatus::ALL.iter().map(|status| (status.as_str(), *status)).collect()
});

/// Settlement state reported by the wallet service.
///
/// Unknown wire values are rejected rather than mapped to a default, since the status describes
/// whether money has actually moved.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionStatus {
    Pending,
    Complete
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 2] = [TransactionStatus::Pending, TransactionStatus::Complete];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Complete => "complete"
        }
    }
}

impl Display for TransactionStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = TransactionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        STATUS_BY_NAME.get(value.to_lowercase().as_str()).copied()
            .ok_or_else(|| TransactionError::unrecognized_enum_value(value))
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        TransactionStatus::from_str(&value).map_err(de::Error::custom)
    }
}

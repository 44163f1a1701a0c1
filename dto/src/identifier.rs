use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identifier coming from the school backend.
/// Depending on the endpoint, the backend sends either integers or strings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Number(number) => write!(f, "{number}"),
            Identifier::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_owned())
    }
}

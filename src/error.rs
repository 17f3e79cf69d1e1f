// Error types for js8path-data
//
// Only `Error::Validation` is a recoverable outcome. Everything else is
// propagated unchanged by the validator and the batch filter.

use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

/// One schema violation reported by the validation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Violated keyword, e.g. `type`, `required`, `pattern`
    pub keyword: String,
    /// JSON pointer into the data being validated
    pub instance_path: String,
    /// JSON pointer into the schema that was violated
    pub schema_path: String,
    pub message: String,
}

/// Data failed schema validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            message: message.into(),
            violations,
        }
    }

    /// Keyword of the first violation, if any
    pub fn first_keyword(&self) -> Option<&str> {
        self.violations.first().map(|v| v.keyword.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to compile schema {id}: {message}")]
    SchemaCompile { id: String, message: String },

    #[error("invalid timestamp {input:?}: {source}")]
    Timestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unix timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for the recoverable validation kind
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

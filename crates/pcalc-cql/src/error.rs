/// Errors produced while tokenizing, parsing or patching a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CqlError {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("expected {expected:?}, got {actual:?}")]
    UnexpectedToken { expected: String, actual: String },
    #[error("invalid column {column:?} in primary key")]
    UnknownColumnReference { column: String },
    #[error("multiple primary keys defined")]
    DuplicatePrimaryKey,
    #[error("column {column:?} cannot be both static and part of the primary key")]
    StaticKeyColumn { column: String },
    #[error("no column named {column:?}")]
    UnknownColumn { column: String },
    #[error("can't set a size estimate on fixed size column {column:?} of type {data_type}")]
    InvalidSizeEstimateTarget { column: String, data_type: String },
    #[error("size estimate for column {column:?} must be >= 0, got {size}")]
    NegativeSizeEstimate { column: String, size: i64 },
}

impl CqlError {
    pub(crate) fn unexpected(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub type CqlResult<T> = Result<T, CqlError>;

use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};
use pcalc_cql::CqlError;

/// Which stage of a calculation failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error, From)]
pub enum CalcReason {
    #[error("schema parse error: {0}")]
    #[from(skip)]
    Parse(CqlError),
    #[error("size estimate error: {0}")]
    #[from(skip)]
    SizeEstimate(CqlError),
    #[error("invalid row count")]
    InvalidRowCount,
    #[error("estimate exceeds the 64-bit range")]
    EstimateOverflow,
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for CalcReason {
    fn error_code(&self) -> i32 {
        match self {
            Self::Parse(_) => 1001,
            Self::SizeEstimate(_) => 1002,
            Self::InvalidRowCount => 1003,
            Self::EstimateOverflow => 1004,
            Self::Uvs(u) => u.error_code(),
        }
    }
}

pub type CalcError = StructError<CalcReason>;
pub type CalcResult<T> = Result<T, CalcError>;

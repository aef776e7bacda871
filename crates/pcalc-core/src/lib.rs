pub mod calc;
pub mod error;
pub mod estimate;

pub use calc::{Calculation, apply_size_estimates, calculate};
pub use error::{CalcError, CalcReason, CalcResult};
pub use estimate::{Estimation, estimate};

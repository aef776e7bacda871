mod config;
mod logging;
pub mod types;

pub use config::{CalcConfig, EstimateConfig, OutputConfig, OutputFormat};
pub use logging::{LogFormat, LoggingConfig};
pub use types::{ByteSize, RowCount, SizeOverride};

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::logging::LoggingConfig;
use crate::types::{ByteSize, RowCount};

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// `[estimate]`: default inputs for the calculator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Rows per partition.
    pub rows: RowCount,
    /// Size estimates for variable-size columns, keyed by column name.
    pub sizes: BTreeMap<String, ByteSize>,
}

/// `[output]`: how results are printed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

// ---------------------------------------------------------------------------
// CalcConfig
// ---------------------------------------------------------------------------

/// Contents of a `pcalc.toml` file. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub estimate: EstimateConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl CalcConfig {
    /// Read and parse a `pcalc.toml` file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.as_ref().display()))?;
        content.parse()
    }

    /// Size estimates as `(column, bytes)` pairs, sorted by column.
    pub fn size_estimates(&self) -> impl Iterator<Item = (&str, i64)> {
        self.estimate
            .sizes
            .iter()
            .map(|(column, size)| (column.as_str(), size.as_bytes()))
    }
}

impl FromStr for CalcConfig {
    type Err = anyhow::Error;

    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let config: CalcConfig = toml::from_str(toml_str)?;
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &CalcConfig) -> anyhow::Result<()> {
    for column in config.estimate.sizes.keys() {
        if column.trim().is_empty() {
            anyhow::bail!("estimate.sizes: empty column name");
        }
    }
    if config.logging.level.trim().is_empty() {
        anyhow::bail!("logging.level must not be empty");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;
    use crate::logging::LogFormat;

    const FULL_TOML: &str = r#"
[estimate]
rows = "5M"

[estimate.sizes]
event_data = "100B"
payload = 2048

[output]
format = "json"

[logging]
level = "debug"
modules = { pcalc_core = "trace", pcalc_cql = "warn" }
file = "logs/pcalc.log"
format = "json"
"#;

    #[test]
    fn load_full_toml() {
        let cfg: CalcConfig = FULL_TOML.parse().unwrap();

        assert_eq!(cfg.estimate.rows.get(), 5_000_000);
        let sizes: Vec<(&str, i64)> = cfg.size_estimates().collect();
        assert_eq!(sizes, vec![("event_data", 100), ("payload", 2048)]);

        assert_eq!(cfg.output.format, OutputFormat::Json);

        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.file, Some(PathBuf::from("logs/pcalc.log")));
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(
            cfg.logging.filter_directives(),
            "debug,pcalc_core=trace,pcalc_cql=warn"
        );
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: CalcConfig = "".parse().unwrap();
        assert_eq!(cfg.estimate.rows.get(), 1);
        assert!(cfg.estimate.sizes.is_empty());
        assert_eq!(cfg.output.format, OutputFormat::Plain);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, LogFormat::Plain);
        assert!(cfg.logging.file.is_none());
        assert_eq!(cfg.logging.filter_directives(), "info");
    }

    #[test]
    fn integer_rows() {
        let cfg: CalcConfig = "[estimate]\nrows = 250\n".parse().unwrap();
        assert_eq!(cfg.estimate.rows.get(), 250);
    }

    #[test]
    fn reject_bad_row_count() {
        assert!("[estimate]\nrows = \"lots\"\n".parse::<CalcConfig>().is_err());
        assert!("[estimate]\nrows = -3\n".parse::<CalcConfig>().is_err());
    }

    #[test]
    fn reject_bad_size() {
        let toml = "[estimate.sizes]\nbody = \"3TB\"\n";
        assert!(toml.parse::<CalcConfig>().is_err());
    }

    #[test]
    fn reject_empty_column_name() {
        let toml = "[estimate.sizes]\n\"\" = 10\n";
        assert!(toml.parse::<CalcConfig>().is_err());
    }

    #[test]
    fn reject_unknown_output_format() {
        assert!("[output]\nformat = \"xml\"\n".parse::<CalcConfig>().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_TOML.as_bytes()).unwrap();
        let cfg = CalcConfig::load(file.path()).unwrap();
        assert_eq!(cfg.estimate.rows.get(), 5_000_000);
    }

    #[test]
    fn load_missing_file() {
        let err = CalcConfig::load("/definitely/not/here/pcalc.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}

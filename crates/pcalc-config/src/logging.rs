use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

fn default_level() -> String {
    "info".to_string()
}

/// The `[logging]` section of `pcalc.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Crate-level overrides such as `pcalc_core = "debug"`.
    #[serde(default)]
    pub modules: HashMap<String, String>,
    /// Mirror events into this file, relative to the config file.
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            modules: HashMap::new(),
            file: None,
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// `level` followed by `module=level` directives, in the syntax
    /// `tracing_subscriber::EnvFilter` accepts.
    pub fn filter_directives(&self) -> String {
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();
        let mut directives = self.level.clone();
        for (module, level) in modules {
            directives.push(',');
            directives.push_str(module);
            directives.push('=');
            directives.push_str(level);
        }
        directives
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_list_modules_in_name_order() {
        let cfg = LoggingConfig {
            level: "warn".to_string(),
            modules: HashMap::from([
                ("pcalc_cql".to_string(), "trace".to_string()),
                ("pcalc_core".to_string(), "debug".to_string()),
            ]),
            ..LoggingConfig::default()
        };
        assert_eq!(
            cfg.filter_directives(),
            "warn,pcalc_core=debug,pcalc_cql=trace"
        );
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let cfg: LoggingConfig = toml::from_str(r#"format = "json""#).unwrap();
        assert_eq!(cfg.level, "info");
        assert_eq!(cfg.format, LogFormat::Json);
        assert!(cfg.file.is_none());
        assert_eq!(cfg.filter_directives(), "info");
    }
}

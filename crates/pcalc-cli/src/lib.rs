#[macro_use]
mod log_macros;

pub mod cmd_evaluate;
pub mod cmd_parse;
pub mod format;
pub mod tracing_init;

use std::path::Path;

/// Read a schema file into memory.
pub(crate) fn read_schema(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("unable to read {}: {e}", path.display()))
}

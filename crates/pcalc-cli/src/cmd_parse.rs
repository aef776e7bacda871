use std::path::Path;

use anyhow::Result;
use pcalc_config::OutputFormat;
use pcalc_cql::parse_schema;

use crate::format::render_schema;
use crate::read_schema;

/// Parse a schema file and render the result.
pub fn run(file: &Path, format: OutputFormat) -> Result<String> {
    let input = read_schema(file)?;
    let schema = parse_schema(&input)
        .map_err(|e| anyhow::anyhow!("unable to parse schema {}: {e}", file.display()))?;
    pc_info!(
        parse,
        table = %schema.table_name,
        columns = schema.columns.len(),
        "schema parsed"
    );

    match format {
        OutputFormat::Plain => Ok(render_schema(&schema)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&schema)?),
    }
}

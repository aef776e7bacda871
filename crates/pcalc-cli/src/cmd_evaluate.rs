use std::path::PathBuf;

use anyhow::Result;
use pcalc_config::{CalcConfig, OutputFormat, RowCount, SizeOverride};
use pcalc_core::{Calculation, calculate};

use crate::format::render_calculation;
use crate::read_schema;

/// Inputs of `pcalc evaluate` that may override the config file.
#[derive(Debug, Clone)]
pub struct EvaluateArgs {
    pub file: PathBuf,
    pub rows: Option<RowCount>,
    pub sizes: Vec<SizeOverride>,
    pub format: OutputFormat,
}

/// Config sizes first, then command-line sizes, so the command line wins.
fn merged_sizes<'a>(args: &'a EvaluateArgs, config: &'a CalcConfig) -> Vec<(&'a str, i64)> {
    pc_debug!(
        conf,
        config_sizes = config.estimate.sizes.len(),
        cli_sizes = args.sizes.len(),
        "merging size estimates"
    );
    config
        .size_estimates()
        .chain(
            args.sizes
                .iter()
                .map(|o| (o.column.as_str(), o.size.as_bytes())),
        )
        .collect()
}

fn warn_unestimated(calc: &Calculation) {
    for column in &calc.schema.columns {
        if !column.data_type.is_fixed_size() && column.size_estimate().is_none() {
            pc_warn!(
                est,
                column = %column.name,
                data_type = %column.data_type,
                "no size estimate for variable-size column, counted as 0 bytes"
            );
        }
    }
}

/// Parse, estimate and render.
pub fn run(args: &EvaluateArgs, config: &CalcConfig) -> Result<String> {
    let input = read_schema(&args.file)?;
    let rows = args.rows.unwrap_or(config.estimate.rows).get();
    let sizes = merged_sizes(args, config);
    pc_debug!(est, rows, sizes = sizes.len(), "evaluating schema");

    let calc = calculate(&input, rows, sizes).map_err(|e| {
        anyhow::anyhow!("unable to evaluate {}: {e}", args.file.display())
    })?;
    warn_unestimated(&calc);
    pc_info!(
        est,
        table = %calc.schema.table_name,
        values = calc.estimation.values,
        bytes = calc.estimation.bytes,
        "estimate complete"
    );

    match args.format {
        OutputFormat::Plain => Ok(render_calculation(rows, &calc)),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&calc)?;
            if let Some(object) = value.as_object_mut() {
                object.insert("rows".to_string(), rows.into());
            }
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

use orion_error::StructError;
use pcalc_cql::{Schema, parse_schema};
use serde::Serialize;

use crate::error::{CalcReason, CalcResult};
use crate::estimate::{Estimation, estimate};

/// A parsed schema together with its size estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub schema: Schema,
    pub estimation: Estimation,
}

/// Attach per-column size estimates to `schema`, in iteration order.
pub fn apply_size_estimates<'s>(
    schema: Schema,
    sizes: impl IntoIterator<Item = (&'s str, i64)>,
) -> CalcResult<Schema> {
    let mut schema = schema;
    for (column, size) in sizes {
        schema = schema.with_column_size_estimate(column, size).map_err(|e| {
            StructError::from(CalcReason::SizeEstimate(e))
                .with_detail(format!("column {column:?}"))
        })?;
        log::debug!("size estimate applied: {column}={size}");
    }
    Ok(schema)
}

/// Parse `input`, apply `sizes` and estimate a partition of `rows` rows.
pub fn calculate<'s>(
    input: &str,
    rows: i64,
    sizes: impl IntoIterator<Item = (&'s str, i64)>,
) -> CalcResult<Calculation> {
    if rows < 0 {
        return Err(StructError::from(CalcReason::InvalidRowCount)
            .with_detail(format!("row count must be >= 0, got {rows}")));
    }

    let schema = parse_schema(input).map_err(|e| StructError::from(CalcReason::Parse(e)))?;
    log::debug!(
        "parsed table {}: {} columns, {} key columns",
        schema.table_name,
        schema.columns.len(),
        schema.primary_key.len()
    );

    let schema = apply_size_estimates(schema, sizes)?;
    let estimation = estimate(&schema, rows).ok_or_else(|| {
        StructError::from(CalcReason::EstimateOverflow)
            .with_detail(format!("table {} with {rows} rows", schema.table_name))
    })?;
    Ok(Calculation { schema, estimation })
}

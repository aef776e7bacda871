use pcalc_cql::{ColumnDefinition, Schema};
use serde::Serialize;

/// Bytes of per-cell and per-row metadata.
const METADATA_BYTES: i64 = 8;

/// Estimated size of one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimation {
    /// Number of stored cells.
    pub values: i64,
    /// Total size in bytes.
    pub bytes: i64,
}

fn sum_sizes<'a>(columns: impl IntoIterator<Item = &'a ColumnDefinition>) -> Option<i64> {
    columns
        .into_iter()
        .try_fold(0i64, |acc, column| acc.checked_add(column.size()))
}

/// Estimate the size of a partition holding `rows` rows of `schema`.
///
/// ```text
/// Nv    = Nr * (Nc - Npk - Ns) + Ns
/// bytes = Pk + Ck + (Ck + non_key) * Nr + Nv * 8 + Nr * 8
/// ```
///
/// `rows` must be non-negative; negative counts are rejected upstream.
/// Returns `None` when a total does not fit in `i64`.
pub fn estimate(schema: &Schema, rows: i64) -> Option<Estimation> {
    let columns = schema.columns.len() as i64;
    let key_columns = schema.primary_key.len() as i64;
    let static_columns = schema.static_columns().count() as i64;

    let values = rows
        .checked_mul(columns - key_columns - static_columns)?
        .checked_add(static_columns)?;

    let partition_key_bytes = sum_sizes(&schema.primary_key.partition_key.columns)?;
    let clustering_key_bytes = sum_sizes(&schema.primary_key.clustering_key.columns)?;
    let non_key_bytes = sum_sizes(schema.non_key_columns())?;

    let row_bytes = clustering_key_bytes
        .checked_add(non_key_bytes)?
        .checked_mul(rows)?;
    let metadata_bytes = values
        .checked_mul(METADATA_BYTES)?
        .checked_add(rows.checked_mul(METADATA_BYTES)?)?;
    let bytes = partition_key_bytes
        .checked_add(clustering_key_bytes)?
        .checked_add(metadata_bytes)?
        .checked_add(row_bytes)?;

    log::debug!(
        "estimated table {}: rows={rows} values={values} bytes={bytes}",
        schema.table_name
    );

    Some(Estimation { values, bytes })
}

use std::fmt::Write as _;

use pcalc_core::{Calculation, Estimation};
use pcalc_cql::{ColumnDefinition, Schema};

const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// `660000036` -> `"660,000,036"`.
pub fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Binary-unit rendering with one decimal, e.g. `629.4 MiB`.
pub fn human_bytes(n: i64) -> String {
    if n < 1024 {
        return format!("{n} B");
    }
    let mut value = n as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

fn key_role(schema: &Schema, column: &ColumnDefinition) -> &'static str {
    let in_list = |list: &[ColumnDefinition]| list.iter().any(|c| c.name == column.name);
    if in_list(&schema.primary_key.partition_key.columns) {
        "partition key"
    } else if in_list(&schema.primary_key.clustering_key.columns) {
        "clustering key"
    } else {
        ""
    }
}

fn size_label(column: &ColumnDefinition) -> String {
    match (column.data_type.fixed_width(), column.size_estimate()) {
        (Some(width), _) => format!("{width} B"),
        (None, Some(estimate)) => format!("~{estimate} B"),
        (None, None) => "variable".to_string(),
    }
}

fn key_list(columns: &[ColumnDefinition]) -> String {
    columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable description of a parsed schema.
pub fn render_schema(schema: &Schema) -> String {
    let name_width = schema.columns.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let type_width = schema
        .columns
        .iter()
        .map(|c| c.data_type.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    writeln!(out, "table {}", schema.table_name).ok();
    writeln!(out, "columns:").ok();
    for column in &schema.columns {
        let mut notes = vec![size_label(column)];
        if column.is_static {
            notes.push("static".to_string());
        }
        let role = key_role(schema, column);
        if !role.is_empty() {
            notes.push(role.to_string());
        }
        writeln!(
            out,
            "  {:<name_width$}  {:<type_width$}  {}",
            column.name,
            column.data_type.name(),
            notes.join(", "),
        )
        .ok();
    }
    writeln!(
        out,
        "partition key: ({})",
        key_list(&schema.primary_key.partition_key.columns)
    )
    .ok();
    writeln!(
        out,
        "clustering key: ({})",
        key_list(&schema.primary_key.clustering_key.columns)
    )
    .ok();
    out
}

pub fn render_estimation(rows: i64, estimation: &Estimation) -> String {
    format!(
        "rows: {}\nvalues: {}\nbytes: {} bytes ({})\n",
        group_digits(rows),
        group_digits(estimation.values),
        group_digits(estimation.bytes),
        human_bytes(estimation.bytes),
    )
}

pub fn render_calculation(rows: i64, calc: &Calculation) -> String {
    format!(
        "{}\n{}",
        render_schema(&calc.schema),
        render_estimation(rows, &calc.estimation)
    )
}

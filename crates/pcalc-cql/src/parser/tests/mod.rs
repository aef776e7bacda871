mod errors;

use crate::schema::{ColumnDefinition, DataType, Schema};

fn col(name: &str, ty: &str) -> ColumnDefinition {
    ColumnDefinition::new(name, DataType::new(ty))
}

fn key_names(columns: &[ColumnDefinition]) -> Vec<&str> {
    columns.iter().map(|c| c.name.as_str()).collect()
}

fn column_names(schema: &Schema) -> Vec<&str> {
    key_names(&schema.columns)
}

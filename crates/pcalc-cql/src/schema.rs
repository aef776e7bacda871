use std::fmt;

use serde::Serialize;

use crate::error::{CqlError, CqlResult};


/// On-disk width of every fixed-size type, keyed by lowercase type name.
/// Collection types never appear here.
const FIXED_WIDTHS: &[(&str, i64)] = &[
    ("uuid", 16),
    ("timeuuid", 16),
    ("timestamp", 8),
    ("bigint", 8),
    ("double", 8),
    ("float", 4),
    ("int", 4),
    ("boolean", 1),
];

// ---------------------------------------------------------------------------
// DataType
// ---------------------------------------------------------------------------

/// A column type as written in the schema, e.g. `uuid` or `map<int,text>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataType {
    name: String,
}

impl DataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in bytes for fixed-size types, `None` for variable-size ones.
    pub fn fixed_width(&self) -> Option<i64> {
        let lower = self.name.to_ascii_lowercase();
        FIXED_WIDTHS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, width)| *width)
    }

    pub fn is_fixed_size(&self) -> bool {
        self.fixed_width().is_some()
    }

    pub fn is_collection(&self) -> bool {
        self.name.contains('<')
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ---------------------------------------------------------------------------
// ColumnDefinition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub is_static: bool,
    /// Caller-supplied size for variable-size columns.
    size_estimate: Option<i64>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_static: false,
            size_estimate: None,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn size_estimate(&self) -> Option<i64> {
        self.size_estimate
    }

    /// Effective size in bytes: the fixed width, else the estimate, else 0.
    pub fn size(&self) -> i64 {
        self.data_type
            .fixed_width()
            .unwrap_or_else(|| self.size_estimate.unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Columns that decide which partition a row lives in, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionKey {
    pub columns: Vec<ColumnDefinition>,
}

/// Columns that order rows inside a partition, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusteringKey {
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrimaryKey {
    pub partition_key: PartitionKey,
    pub clustering_key: ClusteringKey,
}

impl PrimaryKey {
    /// Partition columns followed by clustering columns.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.partition_key
            .columns
            .iter()
            .chain(self.clustering_key.columns.iter())
    }

    pub fn len(&self) -> usize {
        self.partition_key.columns.len() + self.clustering_key.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns().any(|c| c.name == name)
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// A parsed `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub table_name: String,
    /// All columns in declaration order.
    pub columns: Vec<ColumnDefinition>,
    pub primary_key: PrimaryKey,
}

impl Schema {
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn static_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.iter().filter(|c| c.is_static)
    }

    /// Declared columns that are not part of the primary key.
    pub fn non_key_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns
            .iter()
            .filter(|c| !self.primary_key.contains(&c.name))
    }

    /// Return a copy of the schema where column `name` carries `size` as its
    /// estimate, in the column list and in whichever key lists hold it.
    pub fn with_column_size_estimate(&self, name: &str, size: i64) -> CqlResult<Schema> {
        let column = self.column(name).ok_or_else(|| CqlError::UnknownColumn {
            column: name.to_string(),
        })?;
        if column.data_type.is_fixed_size() {
            return Err(CqlError::InvalidSizeEstimateTarget {
                column: name.to_string(),
                data_type: column.data_type.to_string(),
            });
        }
        if size < 0 {
            return Err(CqlError::NegativeSizeEstimate {
                column: name.to_string(),
                size,
            });
        }

        let mut schema = self.clone();
        let lists = [
            &mut schema.columns,
            &mut schema.primary_key.partition_key.columns,
            &mut schema.primary_key.clustering_key.columns,
        ];
        for list in lists {
            for column in list.iter_mut().filter(|c| c.name == name) {
                column.size_estimate = Some(size);
            }
        }
        Ok(schema)
    }
}

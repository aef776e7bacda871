mod error;
mod parser;
mod schema;
pub mod tokenizer;

pub use error::{CqlError, CqlResult};
pub use parser::parse_schema;
pub use schema::{ClusteringKey, ColumnDefinition, DataType, PartitionKey, PrimaryKey, Schema};

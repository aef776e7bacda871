use crate::error::{CqlError, CqlResult};
use crate::schema::{ColumnDefinition, PrimaryKey};

use super::Parser;

impl Parser<'_> {
    // -----------------------------------------------------------------------
    // primary_key_clause := PRIMARY KEY ( partition ("," column)* )
    // partition          := "(" column ("," column)* ")" | column
    // -----------------------------------------------------------------------

    /// Parse the parenthesised part of a `PRIMARY KEY` clause; the keywords
    /// have already been consumed. Names resolve against `declared`.
    pub(super) fn primary_key_clause(
        &mut self,
        declared: &[ColumnDefinition],
    ) -> CqlResult<PrimaryKey> {
        self.expect(&["("])?;

        let mut key = PrimaryKey::default();
        if self.optional(&["("]) {
            key.partition_key.columns.push(self.key_column(declared)?);
            while self.optional(&[","]) {
                key.partition_key.columns.push(self.key_column(declared)?);
            }
            self.expect(&[")"])?;
        } else {
            key.partition_key.columns.push(self.key_column(declared)?);
        }

        while self.optional(&[","]) {
            key.clustering_key.columns.push(self.key_column(declared)?);
        }
        self.expect(&[")"])?;

        Ok(key)
    }

    fn key_column(&mut self, declared: &[ColumnDefinition]) -> CqlResult<ColumnDefinition> {
        let name = self.name("column name")?;
        let column = declared
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CqlError::UnknownColumnReference {
                column: name.clone(),
            })?;
        if column.is_static {
            return Err(CqlError::StaticKeyColumn { column: name });
        }
        Ok(column.clone())
    }
}

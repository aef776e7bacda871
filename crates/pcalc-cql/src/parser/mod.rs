mod columns;
mod primary_key;
mod primitives;

use crate::error::{CqlError, CqlResult};
use crate::schema::{ColumnDefinition, PartitionKey, PrimaryKey, Schema};
use crate::tokenizer::Tokenizer;

#[cfg(test)]
mod tests;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse a single `CREATE TABLE` statement into a [`Schema`].
///
/// Every primary key column must be declared before the clause that names it,
/// and at most one primary key may be declared.
pub fn parse_schema(input: &str) -> CqlResult<Schema> {
    Parser::new(input).statement()
}

pub(crate) struct Parser<'a> {
    tokens: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(input),
        }
    }

    // -----------------------------------------------------------------------
    // statement := CREATE TABLE [IF NOT EXISTS] name ( column_list ) ;
    // -----------------------------------------------------------------------

    fn statement(mut self) -> CqlResult<Schema> {
        self.expect(&["CREATE", "TABLE"])?;
        self.optional(&["IF", "NOT", "EXISTS"]);
        let table_name = self.name("table name")?;

        self.expect(&["("])?;
        let (columns, primary_key) = self.column_list()?;
        self.expect(&[")", ";"])?;

        Ok(Schema {
            table_name,
            columns,
            primary_key: primary_key.unwrap_or_default(),
        })
    }

    // -----------------------------------------------------------------------
    // column_list := entry ("," entry)*
    // -----------------------------------------------------------------------

    fn column_list(&mut self) -> CqlResult<(Vec<ColumnDefinition>, Option<PrimaryKey>)> {
        let mut columns = Vec::new();
        let mut primary_key = None;

        loop {
            if self.optional(&["PRIMARY", "KEY"]) {
                let key = self.primary_key_clause(&columns)?;
                set_primary_key(&mut primary_key, key)?;
            } else {
                let (column, inline_key) = self.column_definition()?;
                if inline_key {
                    if column.is_static {
                        return Err(CqlError::StaticKeyColumn {
                            column: column.name,
                        });
                    }
                    let key = PrimaryKey {
                        partition_key: PartitionKey {
                            columns: vec![column.clone()],
                        },
                        ..PrimaryKey::default()
                    };
                    set_primary_key(&mut primary_key, key)?;
                }
                columns.push(column);
            }

            // No separator means the list is over.
            if !self.optional(&[","]) {
                break;
            }
        }

        Ok((columns, primary_key))
    }
}

fn set_primary_key(slot: &mut Option<PrimaryKey>, key: PrimaryKey) -> CqlResult<()> {
    if slot.is_some() {
        return Err(CqlError::DuplicatePrimaryKey);
    }
    *slot = Some(key);
    Ok(())
}

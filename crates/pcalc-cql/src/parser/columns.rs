use crate::error::CqlResult;
use crate::schema::{ColumnDefinition, DataType};

use super::Parser;

impl Parser<'_> {
    // -----------------------------------------------------------------------
    // column_def := name type_def [PRIMARY KEY] [STATIC]
    // -----------------------------------------------------------------------

    /// Parse one column declaration. The flag reports an inline
    /// `PRIMARY KEY` suffix.
    pub(super) fn column_definition(&mut self) -> CqlResult<(ColumnDefinition, bool)> {
        let name = self.name("column name")?;
        let data_type = self.type_definition()?;
        let inline_key = self.optional(&["PRIMARY", "KEY"]);
        let is_static = self.optional(&["STATIC"]);

        let column = ColumnDefinition::new(name, data_type).with_static(is_static);
        Ok((column, inline_key))
    }

    // -----------------------------------------------------------------------
    // type_def := name | name "<" fragment+ ">"
    // -----------------------------------------------------------------------

    /// Collection types are rebuilt verbatim from their tokens, so
    /// `map<int, text>` becomes `map<int,text>`.
    fn type_definition(&mut self) -> CqlResult<DataType> {
        let mut name = self.name("type name")?;
        if !self.optional(&["<"]) {
            return Ok(DataType::new(name));
        }

        name.push('<');
        let mut depth = 1usize;
        while depth > 0 {
            let token = self.tokens.next_token()?;
            match token.as_str() {
                "<" => depth += 1,
                ">" => depth -= 1,
                _ => {}
            }
            name.push_str(token.as_str());
        }
        Ok(DataType::new(name))
    }
}

use crate::error::{CqlError, CqlResult};

use super::Parser;

fn is_punctuation(token: &str) -> bool {
    matches!(token, "(" | ")" | "<" | ">" | "," | ";")
}

impl Parser<'_> {
    /// Consume `keywords` in order, failing on the first token that differs.
    pub(super) fn expect(&mut self, keywords: &[&str]) -> CqlResult<()> {
        for keyword in keywords {
            let token = self.tokens.next_token()?;
            if !token.is(keyword) {
                return Err(CqlError::unexpected(*keyword, token.as_str()));
            }
        }
        Ok(())
    }

    /// Try to consume `keywords` in order. On a mismatch (or end of input)
    /// one step is undone, leaving the cursor just before the mismatched
    /// token. Keywords matched before it stay consumed.
    pub(super) fn optional(&mut self, keywords: &[&str]) -> bool {
        self.tokens.reset_history();
        for keyword in keywords {
            match self.tokens.next_token() {
                Ok(token) if token.is(keyword) => {}
                _ => {
                    self.tokens.undo();
                    return false;
                }
            }
        }
        true
    }

    /// Consume one identifier-like token. `what` names it in the error.
    pub(super) fn name(&mut self, what: &str) -> CqlResult<String> {
        let token = self.tokens.next_token()?;
        if is_punctuation(token.as_str()) {
            return Err(CqlError::unexpected(what, token.as_str()));
        }
        Ok(token.as_str().to_string())
    }
}

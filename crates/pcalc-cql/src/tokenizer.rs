use std::fmt;

use crate::error::{CqlError, CqlResult};


// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A lexical unit borrowed from the tokenizer input.
///
/// Either a single punctuation character, a single whitespace character, or a
/// maximal run of everything else (identifiers, keywords, numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a>(&'a str);

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Case-insensitive comparison, used for keywords.
    pub fn is(&self, keyword: &str) -> bool {
        self.0.eq_ignore_ascii_case(keyword)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn is_punctuation(ch: char) -> bool {
    matches!(ch, '(' | ')' | '<' | '>' | ',' | ';')
}

/// Characters that end an identifier run. `;` is deliberately absent.
fn is_terminator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, ',' | '(' | ')' | '<' | '>')
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Splits schema text into [`Token`]s and remembers where every token started
/// so the parser can step back over speculative matches.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    history: Vec<usize>,
    skip_whitespace: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            history: Vec::new(),
            skip_whitespace: true,
        }
    }

    /// Return whitespace characters as their own tokens instead of skipping
    /// them.
    #[cfg(test)]
    pub(crate) fn keep_whitespace(&mut self, keep: bool) {
        self.skip_whitespace = !keep;
    }

    /// Byte offset of the cursor into the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Produce the next token, recording the pre-token position.
    pub fn next_token(&mut self) -> CqlResult<Token<'a>> {
        if self.pos >= self.input.len() {
            return Err(CqlError::EndOfInput);
        }
        if self.skip_whitespace {
            self.eat_whitespace()?;
        }

        self.history.push(self.pos);

        let rest = &self.input[self.pos..];
        let Some(ch) = rest.chars().next() else {
            return Err(CqlError::EndOfInput);
        };
        let len = if is_punctuation(ch) || ch.is_whitespace() {
            ch.len_utf8()
        } else {
            rest.find(is_terminator).unwrap_or(rest.len())
        };

        self.pos += len;
        Ok(Token(&rest[..len]))
    }

    /// Step back over the most recently produced token.
    pub fn undo(&mut self) {
        if let Some(pos) = self.history.pop() {
            self.pos = pos;
        }
    }

    /// Step back to the oldest recorded position and forget the history.
    pub fn undo_all(&mut self) {
        if let Some(&pos) = self.history.first() {
            self.pos = pos;
            self.history.clear();
        }
    }

    /// Forget the history without moving the cursor.
    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    fn eat_whitespace(&mut self) -> CqlResult<()> {
        let rest = &self.input[self.pos..];
        match rest.find(|c: char| !c.is_whitespace()) {
            Some(offset) => {
                self.pos += offset;
                Ok(())
            }
            None => {
                self.pos = self.input.len();
                Err(CqlError::EndOfInput)
            }
        }
    }
}

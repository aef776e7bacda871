use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use winnow::combinator::{alt, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};

// ---------------------------------------------------------------------------
// Number grammar
// ---------------------------------------------------------------------------

/// Digits with optional `_` separators, e.g. `5_000_000`.
fn digits(input: &mut &str) -> ModalResult<u64> {
    if !input.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    let raw = take_while(1.., |c: char| c.is_ascii_digit() || c == '_').parse_next(input)?;
    raw.replace('_', "")
        .parse::<u64>()
        .map_err(|_| ErrMode::Cut(ContextError::new()))
}

/// `digits` with an optional decimal `K`/`M`/`B` multiplier.
fn row_count(input: &mut &str) -> ModalResult<u64> {
    let n = digits.parse_next(input)?;
    let multiplier = opt(alt((
        one_of(['k', 'K']).value(1_000u64),
        one_of(['m', 'M']).value(1_000_000u64),
        one_of(['b', 'B']).value(1_000_000_000u64),
    )))
    .parse_next(input)?
    .unwrap_or(1);
    n.checked_mul(multiplier)
        .ok_or_else(|| ErrMode::Cut(ContextError::new()))
}

/// `digits` with an optional binary `B`/`KB`/`MB`/`GB` unit. Expects
/// uppercase input.
fn byte_size(input: &mut &str) -> ModalResult<u64> {
    let n = digits.parse_next(input)?;
    let multiplier = opt(alt((
        literal("KB").value(1024u64),
        literal("MB").value(1024u64 * 1024),
        literal("GB").value(1024u64 * 1024 * 1024),
        literal("B").value(1u64),
    )))
    .parse_next(input)?
    .unwrap_or(1);
    n.checked_mul(multiplier)
        .ok_or_else(|| ErrMode::Cut(ContextError::new()))
}

/// TOML values for counts and sizes may be written as integers or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

// ---------------------------------------------------------------------------
// RowCount
// ---------------------------------------------------------------------------

/// A row count parsed from `"5000000"`, `"5_000_000"` or `"5M"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount(i64);

impl RowCount {
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Default for RowCount {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u64> for RowCount {
    type Error = anyhow::Error;

    fn try_from(n: u64) -> anyhow::Result<Self> {
        i64::try_from(n)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("row count {n} is too large"))
    }
}

impl FromStr for RowCount {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("empty row count");
        }
        let n = row_count
            .parse(s)
            .map_err(|e| anyhow::anyhow!("invalid row count {s:?}: {e}"))?;
        Self::try_from(n)
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RowCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Self::try_from(n).map_err(de::Error::custom),
            NumberOrString::String(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

// ---------------------------------------------------------------------------
// ByteSize
// ---------------------------------------------------------------------------

/// A byte size parsed from `"100"`, `"100B"`, `"64KB"`, `"2GB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSize(i64);

impl ByteSize {
    pub fn as_bytes(&self) -> i64 {
        self.0
    }
}

impl TryFrom<u64> for ByteSize {
    type Error = anyhow::Error;

    fn try_from(n: u64) -> anyhow::Result<Self> {
        i64::try_from(n)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("byte size {n} is too large"))
    }
}

impl FromStr for ByteSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("empty byte-size string");
        }
        let upper = s.to_ascii_uppercase();
        let n = byte_size.parse(upper.as_str()).map_err(|e| {
            anyhow::anyhow!("invalid byte size {s:?} (expected B/KB/MB/GB): {e}")
        })?;
        Self::try_from(n)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        if b == 0 {
            return write!(f, "0B");
        }
        if b % (1024 * 1024 * 1024) == 0 {
            write!(f, "{}GB", b / (1024 * 1024 * 1024))
        } else if b % (1024 * 1024) == 0 {
            write!(f, "{}MB", b / (1024 * 1024))
        } else if b % 1024 == 0 {
            write!(f, "{}KB", b / 1024)
        } else {
            write!(f, "{b}B")
        }
    }
}

impl Serialize for ByteSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Self::try_from(n).map_err(de::Error::custom),
            NumberOrString::String(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

// ---------------------------------------------------------------------------
// SizeOverride
// ---------------------------------------------------------------------------

/// A `column=size` pair as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOverride {
    pub column: String,
    pub size: ByteSize,
}

impl FromStr for SizeOverride {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (column, size) = s
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected COLUMN=SIZE, got {s:?}"))?;
        let column = column.trim();
        if column.is_empty() {
            anyhow::bail!("missing column name in {s:?}");
        }
        Ok(Self {
            column: column.to_string(),
            size: size.parse()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

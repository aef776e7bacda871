use crate::{CqlError, parse_schema};

fn unexpected(expected: &str, actual: &str) -> CqlError {
    CqlError::UnexpectedToken {
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

// -----------------------------------------------------------------------
// Mandatory tokens
// -----------------------------------------------------------------------

#[test]
fn reject_other_statements() {
    let err = parse_schema("ALTER TABLE t ADD a int;").unwrap_err();
    assert_eq!(err, unexpected("CREATE", "ALTER"));
}

#[test]
fn reject_create_index() {
    let err = parse_schema("CREATE INDEX ON t (a);").unwrap_err();
    assert_eq!(err, unexpected("TABLE", "INDEX"));
}

#[test]
fn reject_missing_open_paren() {
    let err = parse_schema("CREATE TABLE t a int;").unwrap_err();
    assert_eq!(err, unexpected("(", "a"));
}

#[test]
fn reject_missing_separator() {
    let err = parse_schema("CREATE TABLE t(a int b text);").unwrap_err();
    assert_eq!(err, unexpected(")", "b"));
}

#[test]
fn reject_missing_semicolon() {
    let err = parse_schema("CREATE TABLE t(a int PRIMARY KEY)").unwrap_err();
    assert_eq!(err, CqlError::EndOfInput);
}

#[test]
fn reject_trailing_comma() {
    let err = parse_schema("CREATE TABLE t(a int PRIMARY KEY,);").unwrap_err();
    assert_eq!(err, unexpected("column name", ")"));
}

#[test]
fn reject_missing_table_name() {
    let err = parse_schema("CREATE TABLE (a int);").unwrap_err();
    assert_eq!(err, unexpected("table name", "("));
}

#[test]
fn reject_column_named_primary() {
    // `primary` is consumed as the start of a key clause.
    let err = parse_schema("CREATE TABLE t(primary int, b text);").unwrap_err();
    assert_eq!(err, unexpected("type name", ","));
}

#[test]
fn reject_missing_column_type() {
    let err = parse_schema("CREATE TABLE t(a, b int);").unwrap_err();
    assert_eq!(err, unexpected("type name", ","));
}

// -----------------------------------------------------------------------
// Truncated input
// -----------------------------------------------------------------------

#[test]
fn reject_empty_input() {
    assert_eq!(parse_schema("").unwrap_err(), CqlError::EndOfInput);
    assert_eq!(parse_schema("  \n\t ").unwrap_err(), CqlError::EndOfInput);
}

#[test]
fn reject_truncated_statement() {
    assert_eq!(parse_schema("CREATE TABLE t(a int").unwrap_err(), CqlError::EndOfInput);
    assert_eq!(parse_schema("CREATE TABLE").unwrap_err(), CqlError::EndOfInput);
}

#[test]
fn reject_unclosed_collection() {
    let err = parse_schema("CREATE TABLE t(a map<int, text").unwrap_err();
    assert_eq!(err, CqlError::EndOfInput);
}

#[test]
fn error_messages_name_both_tokens() {
    let err = parse_schema("CREATE VIEW v;").unwrap_err();
    assert_eq!(err.to_string(), r#"expected "TABLE", got "VIEW""#);
}

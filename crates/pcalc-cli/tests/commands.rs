use std::io::Write;

use pcalc_cli::cmd_evaluate::{self, EvaluateArgs};
use pcalc_cli::cmd_parse;
use pcalc_config::{CalcConfig, OutputFormat};

const EVENTS: &str = r#"CREATE TABLE events(
    user_id uuid,
    partition int,
    event_category tinyint,
    event_id timeuuid,
    event_data blob,
    PRIMARY KEY ((user_id, partition), event_category, event_id)
);"#;

fn schema_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn args(file: &tempfile::NamedTempFile, format: OutputFormat) -> EvaluateArgs {
    EvaluateArgs {
        file: file.path().to_path_buf(),
        rows: None,
        sizes: Vec::new(),
        format,
    }
}

// -----------------------------------------------------------------------
// parse
// -----------------------------------------------------------------------

#[test]
fn parse_plain() {
    let file = schema_file(EVENTS);
    let out = cmd_parse::run(file.path(), OutputFormat::Plain).unwrap();
    assert!(out.starts_with("table events\n"));
    assert!(out.contains("partition key: (user_id, partition)"));
}

#[test]
fn parse_json() {
    let file = schema_file(EVENTS);
    let out = cmd_parse::run(file.path(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["table_name"], "events");
    assert_eq!(value["columns"].as_array().unwrap().len(), 5);
    assert_eq!(value["columns"][4]["data_type"]["name"], "blob");
    assert_eq!(
        value["primary_key"]["clustering_key"]["columns"][1]["name"],
        "event_id"
    );
}

#[test]
fn parse_reports_syntax_errors() {
    let file = schema_file("CREATE VIEW v;");
    let err = cmd_parse::run(file.path(), OutputFormat::Plain).unwrap_err();
    assert!(err.to_string().contains(r#"expected "TABLE", got "VIEW""#), "{err}");
}

#[test]
fn parse_missing_file() {
    let err = cmd_parse::run("/no/such/schema.cql".as_ref(), OutputFormat::Plain).unwrap_err();
    assert!(err.to_string().contains("unable to read"));
}

// -----------------------------------------------------------------------
// evaluate
// -----------------------------------------------------------------------

#[test]
fn evaluate_with_command_line_inputs() {
    let file = schema_file(EVENTS);
    let mut args = args(&file, OutputFormat::Plain);
    args.rows = Some("5M".parse().unwrap());
    args.sizes = vec!["event_data=100".parse().unwrap()];

    let out = cmd_evaluate::run(&args, &CalcConfig::default()).unwrap();
    assert!(out.contains("values: 5,000,000\n"), "{out}");
    assert!(out.contains("bytes: 660,000,036 bytes (629.4 MiB)\n"), "{out}");
}

#[test]
fn evaluate_with_config_inputs() {
    let file = schema_file(EVENTS);
    let config: CalcConfig = "[estimate]\nrows = \"5_000_000\"\n[estimate.sizes]\nevent_data = 100\n"
        .parse()
        .unwrap();

    let out = cmd_evaluate::run(&args(&file, OutputFormat::Json), &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["rows"], 5_000_000);
    assert_eq!(value["estimation"]["values"], 5_000_000);
    assert_eq!(value["estimation"]["bytes"], 660_000_036);
}

#[test]
fn command_line_sizes_override_config() {
    let file = schema_file(EVENTS);
    let config: CalcConfig = "[estimate]\nrows = 1\n[estimate.sizes]\nevent_data = 10\n"
        .parse()
        .unwrap();
    let mut args = args(&file, OutputFormat::Json);
    args.sizes = vec!["event_data=100".parse().unwrap()];

    let out = cmd_evaluate::run(&args, &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    // Pk 20 + Ck 16 + 1 value * 8 + 1 row * 8 + (Ck 16 + 100) * 1
    assert_eq!(value["estimation"]["bytes"], 20 + 16 + 8 + 8 + 116);
}

#[test]
fn evaluate_rejects_fixed_size_estimate() {
    let file = schema_file(EVENTS);
    let mut args = args(&file, OutputFormat::Plain);
    args.sizes = vec!["user_id=4".parse().unwrap()];
    assert!(cmd_evaluate::run(&args, &CalcConfig::default()).is_err());
}

#[test]
fn evaluate_rejects_bad_schema() {
    let file = schema_file("CREATE TABLE t(a int, PRIMARY KEY (b));");
    let args = args(&file, OutputFormat::Plain);
    assert!(cmd_evaluate::run(&args, &CalcConfig::default()).is_err());
}

#[test]
fn evaluate_reports_overflow_instead_of_panicking() {
    let file = schema_file("CREATE TABLE t(id uuid PRIMARY KEY, body blob);");
    let mut args = args(&file, OutputFormat::Plain);
    args.rows = Some("5B".parse().unwrap());
    args.sizes = vec!["body=2GB".parse().unwrap()];
    let err = cmd_evaluate::run(&args, &CalcConfig::default()).unwrap_err();
    assert!(err.to_string().starts_with("unable to evaluate"));
}

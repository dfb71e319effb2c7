use std::{fs, process::Command};

use sql2dbml::{Converter, ErrorKind};

const SCHEMA: &str = "\
CREATE TABLE users (
  id INT64 NOT NULL,
  email STRING(256) NOT NULL,
  nickname STRING(MAX),
PRIMARY KEY(id)
);

CREATE TABLE orders (
  id INT64 NOT NULL,
  user_id INT64,
  note STRING(MAX),
  CONSTRAINT FK_UserOrder FOREIGN KEY (user_id) REFERENCES users (id),
) PRIMARY KEY (id);

CREATE INDEX orders_by_user ON orders (user_id);
";

fn convert(source: &str) -> String {
    Converter::new().convert(source).unwrap()
}

#[test]
fn test_full_schema() {
    assert_eq!(
        convert(SCHEMA),
        "\
table users {
  id INT64 [not null, pk]
  email STRING(256) [not null]
  nickname STRING(MAX)
}

table orders {
  id INT64 [not null, pk]
  user_id INT64 [ref: > users.id]
  note STRING(MAX)
}
"
    );
}

#[test]
fn test_not_null_and_primary_key() {
    let output = convert("CREATE TABLE users (\nid INT64 NOT NULL,\nPRIMARY KEY(id)\n)\n");
    assert!(output.contains("table users {\n"));
    assert!(output.contains("  id INT64 [not null, pk]\n"));
}

#[test]
fn test_reference() {
    let output = convert(SCHEMA);
    assert!(output.contains("  user_id INT64 [ref: > users.id]\n"));
}

#[test]
fn test_bare_column() {
    let output = convert(SCHEMA);
    assert!(output.contains("  note STRING(MAX)\n"));
    assert!(!output.contains("note STRING(MAX) ["));
}

#[test]
fn test_one_block_per_table_in_order() {
    let output = convert(SCHEMA);
    let opened = output
        .lines()
        .filter(|line| line.starts_with("table "))
        .collect::<Vec<_>>();
    assert_eq!(opened, vec!["table users {", "table orders {"]);
    assert_eq!(output.lines().filter(|line| *line == "}").count(), 2);
}

#[test]
fn test_deterministic() {
    assert_eq!(convert(SCHEMA), convert(SCHEMA));
}

#[test]
fn test_orphan_column_is_dropped() {
    let output = convert("stray INT64\nCREATE TABLE t (\n  id INT64\n)\n");
    assert_eq!(output, "table t {\n  id INT64\n}\n");
}

#[test]
fn test_malformed_line_is_fatal() {
    let err = Converter::new()
        .convert("CREATE TABLE t (\n  id INT64,\n  FOREIGN KEY (id) REFERENCES\n)")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ParseError);
    assert!(err.message.starts_with("line 3:"));
}

#[test]
fn test_cli_writes_default_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("schema.sql"), SCHEMA).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_sql2dbml"))
        .arg("schema.sql")
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("converted.dbml")).unwrap(),
        convert(SCHEMA)
    );
}

#[test]
fn test_cli_rejects_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("schema.txt"), SCHEMA).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_sql2dbml"))
        .arg("schema.txt")
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!dir.path().join("converted.dbml").exists());
}

#[test]
fn test_cli_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("schema.sql"), SCHEMA).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_sql2dbml"))
        .args(["schema.sql", "--output", "-"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), convert(SCHEMA));
    assert!(!dir.path().join("converted.dbml").exists());
}

#[test]
fn test_cli_empty_input_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("schema.sql"), "-- nothing here\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_sql2dbml"))
        .arg("schema.sql")
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("converted.dbml")).unwrap(),
        ""
    );
}

#[test]
fn test_reference_on_its_own_line() {
    let output = convert("CREATE TABLE orders (\n  user_id INT64\n  REFERENCES users (id),\n)\n");
    assert_eq!(output, "table orders {\n  user_id INT64 [ref: > users.id]\n}\n");
}

#[test]
fn test_inline_primary_key_with_sized_type() {
    let output = convert(
        "CREATE TABLE users (\n  id STRING(36) NOT NULL PRIMARY KEY,\n  name STRING(MAX),\n)\n",
    );
    assert_eq!(
        output,
        "table users {\n  id STRING(36) [not null, pk]\n  name STRING(MAX)\n}\n"
    );
}

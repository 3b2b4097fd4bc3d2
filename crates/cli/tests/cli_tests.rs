use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const UTILKIT_VARS: &[&str] = &[
    "UTILKIT_CONFIG",
    "UTILKIT_LOCALE",
    "UTILKIT_CURRENCY",
    "UTILKIT_BYTE_BASE",
    "UTILKIT_BYTE_DECIMALS",
    "UTILKIT_LOG",
    "RUST_LOG",
];

fn utilkit() -> Command {
    let mut cmd = Command::cargo_bin("utilkit").unwrap();
    for var in UTILKIT_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = utilkit().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "utilkit {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_bytes_commands() {
    assert_eq!(stdout_of(&["bytes", "convert", "1", "GB", "MB"]), "1024\n");
    assert_eq!(
        stdout_of(&["bytes", "convert", "1", "GB", "MB", "--base", "1000"]),
        "1000\n"
    );
    assert_eq!(stdout_of(&["bytes", "format", "1234567890"]), "1.15 GB\n");
    assert_eq!(
        stdout_of(&["bytes", "format", "1000000", "--base", "1000", "-d", "0"]),
        "1 MB\n"
    );
}

#[test]
fn test_unknown_byte_unit_fails() {
    utilkit()
        .args(["bytes", "convert", "1", "parsec", "MB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown byte unit"));
}

#[test]
fn test_currency_defaults_and_overrides() {
    assert_eq!(stdout_of(&["currency", "1234.56"]), "$1,234.56\n");
    assert_eq!(stdout_of(&["currency", "-1234.56"]), "-$1,234.56\n");
    assert_eq!(
        stdout_of(&["currency", "1234.56", "--locale", "de-DE", "--currency", "EUR"]),
        "1.234,56 €\n"
    );
}

#[test]
fn test_currency_uses_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"currency": {"locale": "zh-CN", "currency": "CNY"}}"#)
        .unwrap();

    utilkit()
        .arg("--config")
        .arg(file.path())
        .args(["currency", "1234.56"])
        .assert()
        .success()
        .stdout("¥1,234.56\n");
}

#[test]
fn test_currency_uses_environment() {
    utilkit()
        .env("UTILKIT_CURRENCY", "eur")
        .env("UTILKIT_LOCALE", "de-DE")
        .args(["currency", "5"])
        .assert()
        .success()
        .stdout("5,00 €\n");
}

#[test]
fn test_invalid_config_exits_with_error() {
    utilkit()
        .env("UTILKIT_BYTE_BASE", "lots")
        .args(["bytes", "format", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("UTILKIT_BYTE_BASE"));
}

#[test]
fn test_base64_commands() {
    assert_eq!(stdout_of(&["base64", "encode", "Hello"]), "SGVsbG8=\n");
    assert_eq!(stdout_of(&["base64", "decode", "SGVsbG8"]), "Hello\n");
    assert_eq!(stdout_of(&["base64", "check", "uuLMhh=="]), "true\n");
    assert_eq!(stdout_of(&["base64", "check", "uuLMhh"]), "false\n");
    assert_eq!(stdout_of(&["base64", "check", "uuLMhh", "--no-padding"]), "true\n");
    assert_eq!(stdout_of(&["base64", "to-url-safe", "a/b+cw=="]), "a_b-cw\n");
    assert_eq!(stdout_of(&["base64", "from-url-safe", "a_b-cw"]), "a/b+cw==\n");
}

#[test]
fn test_base64_decode_rejects_garbage() {
    utilkit()
        .args(["base64", "decode", "afQ$%rfew"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid base64 input"));
}

#[test]
fn test_uuid_versions() {
    for version in 1..=6 {
        let v = version.to_string();
        let out = stdout_of(&["uuid", "--version", &v, "--name", "example.com"]);
        let id = out.trim();
        assert_eq!(id.len(), 36, "{id}");
        assert_eq!(id.chars().nth(14), v.chars().next(), "{id}");
    }
    assert_eq!(
        stdout_of(&["uuid", "--version", "5", "--name", "example.com"]),
        "cfbff0d1-9375-5685-968c-48ce8b15ae17\n"
    );
    assert_eq!(stdout_of(&["uuid", "-n", "3"]).lines().count(), 3);
}

#[test]
fn test_uuid_name_required() {
    utilkit()
        .args(["uuid", "--version", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --name"));
    utilkit().args(["uuid", "--version", "7"]).assert().failure();
}

#[test]
fn test_random_commands() {
    let number = stdout_of(&["random", "number", "6"]);
    assert_eq!(number.trim().len(), 6);
    let s = stdout_of(&["random", "string", "12"]);
    assert!(s.trim().chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(s.trim().len(), 12);
    let between = stdout_of(&["random", "between", "1", "3", "--integer"]);
    assert!(["1", "2", "3"].contains(&between.trim()));
    utilkit().args(["random", "number", "16"]).assert().failure();
}

#[test]
fn test_extreme_numeric_arguments() {
    let wide = stdout_of(&["random", "between", "--", "-1e308", "1e308"]);
    let value: f64 = wide.trim().parse().unwrap();
    assert!(value.is_finite());

    let places = stdout_of(&["random", "between", "1", "2", "--decimal-places", "1000"]);
    let value: f64 = places.trim().parse().unwrap();
    assert!((1.0..=2.0).contains(&value));

    let widest = stdout_of(&["bytes", "format", "2048", "--decimals", "2147483647"]);
    assert_eq!(widest, format!("2.{} KB\n", "0".repeat(100)));
}

#[test]
fn test_url_commands() {
    let params = stdout_of(&["url", "params", "https://x.test/?a=1&b=two"]);
    let parsed: serde_json::Value = serde_json::from_str(&params).unwrap();
    assert_eq!(parsed, serde_json::json!({"a": "1", "b": "two"}));
    assert_eq!(
        stdout_of(&["url", "domain", "https://sub.example.com/page"]),
        "example.com\n"
    );
    assert_eq!(
        stdout_of(&["url", "resolve", "https://www.example.com/path/", "../page"]),
        "https://www.example.com/page\n"
    );
}

#[test]
fn test_date_commands() {
    assert_eq!(
        stdout_of(&["date", "format", "YYYY/MM/DD HH:mm:ss", "--at", "2023-01-01T14:30:00"]),
        "2023/01/01 14:30:00\n"
    );
    assert_eq!(
        stdout_of(&["date", "format", "DD.MM.YYYY", "--at", "2024-02-29"]),
        "29.02.2024\n"
    );
    assert_eq!(
        stdout_of(&["date", "diff", "2023-01-01", "2023-01-05T12:30:45"]),
        "{\"days\":4,\"hours\":12,\"minutes\":30,\"seconds\":45}\n"
    );
    utilkit()
        .args(["date", "format", "YYYY", "--at", "yesterday"])
        .assert()
        .failure();
}

#[test]
fn test_date_diff_names_bad_argument() {
    utilkit()
        .args(["date", "diff", "2023-01-01", "yesterday"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse 'yesterday': TO: expected"));
}

#[test]
fn test_help_lists_commands() {
    utilkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("currency").and(predicate::str::contains("base64")));
}

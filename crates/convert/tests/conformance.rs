//! Converter conformance test suite.
//!
//! Each test case is a fixture pair under `conformance/convert/`:
//! - `<name>.input.json`    -- a 6.4 export document
//! - `<name>.expected.json` -- the same document after conversion to 7.0
//!
//! The runner converts the input with the built-in tokenizer and compares
//! the whole document against the expected one.

use std::path::{Path, PathBuf};

use zbx_convert::{Converter64To70, ImportConverter};
use zbx_expression::HistFunctionScanner;

fn read_json(path: &Path, what: &str, name: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {} for {}: {}", what, name, e));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("Invalid {} JSON for {}: {}", what, name, e))
}

/// Run a converter conformance fixture.
///
/// 1. Load .input.json
/// 2. Convert 6.4 -> 7.0
/// 3. Compare against .expected.json
fn run_convert_fixture(fixture_dir: &Path, name: &str) {
    let input = read_json(
        &fixture_dir.join(format!("{}.input.json", name)),
        "input",
        name,
    );
    let expected = read_json(
        &fixture_dir.join(format!("{}.expected.json", name)),
        "expected output",
        name,
    );

    let actual = Converter64To70::new(HistFunctionScanner)
        .convert(input)
        .unwrap_or_else(|e| panic!("Conversion failed for {}: {}", name, e));

    assert_eq!(
        actual,
        expected,
        "Conversion mismatch for {}\n\nActual:\n{}\n\nExpected:\n{}",
        name,
        serde_json::to_string_pretty(&actual).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

/// Expressions the tokenizer rejects, or that hold nothing to escape,
/// survive a second conversion unchanged.
fn run_idempotent_expressions(fixture_dir: &Path, name: &str) {
    let expected = read_json(
        &fixture_dir.join(format!("{}.expected.json", name)),
        "expected output",
        name,
    );
    let twice = Converter64To70::new(HistFunctionScanner)
        .convert(expected.clone())
        .unwrap_or_else(|e| panic!("Second conversion failed for {}: {}", name, e));

    let triggers = |doc: &serde_json::Value| doc["zabbix_export"]["triggers"].clone();
    assert_eq!(
        triggers(&twice),
        triggers(&expected),
        "Top-level triggers changed on reconversion of {}",
        name
    );
}

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("conformance")
        .join("convert")
}

#[test]
fn template_full() {
    run_convert_fixture(&fixture_dir(), "template_full");
}

#[test]
fn hosts_and_maps() {
    run_convert_fixture(&fixture_dir(), "hosts_and_maps");
}

#[test]
fn legacy_expressions() {
    run_convert_fixture(&fixture_dir(), "legacy_expressions");
}

#[test]
fn legacy_expressions_reconverted() {
    run_idempotent_expressions(&fixture_dir(), "legacy_expressions");
}

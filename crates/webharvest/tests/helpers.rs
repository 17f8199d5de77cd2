//! End-to-end helper workflows that cross module boundaries.

use serde_json::json;
use webharvest::{
    compute_checksum, extract_tables, load_csv, load_json, save_csv, save_json, CsvOptions,
};

const REPORT_HTML: &str = r#"
<html><body>
  <h1>Quarterly report</h1>
  <table>
    <thead><tr><th>region</th><th>revenue</th></tr></thead>
    <tbody>
      <tr><td>north</td><td>1200</td></tr>
      <tr><td>south</td><td>950</td></tr>
    </tbody>
  </table>
  <table><tr><td>appendix</td></tr></table>
</body></html>
"#;

#[test]
fn extracted_tables_survive_a_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let tables = extract_tables(REPORT_HTML);
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].headers, vec!["region", "revenue"]);

    let path = dir.path().join("report.csv");
    save_csv(&tables[0], &path, &CsvOptions::default()).unwrap();
    let loaded = load_csv(&path, &CsvOptions::default()).unwrap();
    assert_eq!(loaded, tables[0]);
}

#[test]
fn json_round_trip_is_structural_identity() {
    let dir = tempfile::tempdir().unwrap();
    let value = json!({
        "flags": [true, false, null],
        "nested": { "count": 42, "ratio": 0.5 },
        // Literal-looking strings must not be rewritten on the way through.
        "tricky": "this string contains true, false and null"
    });
    let path = dir.path().join("state.json");
    save_json(&value, &path).unwrap();
    assert_eq!(load_json(&path).unwrap(), value);
}

#[test]
fn checksum_is_stable_across_rewrites_of_identical_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.json");
    let value = json!({"a": 1, "b": [2, 3]});

    save_json(&value, &path).unwrap();
    let first = compute_checksum(&path).unwrap();
    save_json(&value, &path).unwrap();
    let second = compute_checksum(&path).unwrap();
    assert_eq!(first, second);

    save_json(&json!({"a": 2}), &path).unwrap();
    assert_ne!(first, compute_checksum(&path).unwrap());
}

//! JSON/CSV persistence and path helpers.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::error;

use crate::error::{HarvestError, Result};
use crate::tables::Table;

/// Create the directory tree if it is absent. Idempotent.
pub fn ensure_path_exists(path: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Write `value` as pretty JSON at `path`, creating parent directories and
/// appending a `.json` extension when none is given. Object keys serialize
/// sorted at every nesting depth.
pub fn save_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = with_default_extension(path.as_ref(), "json");
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_path_exists(parent)?;
        }
    }
    let value = sort_keys(serde_json::to_value(value)?);
    let mut file = fs::File::create(&path)?;
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut file, formatter);
    value.serialize(&mut ser)?;
    file.write_all(b"\n")?;
    Ok(())
}

/// serde_json's `Map` is insertion-ordered whenever any crate in the build
/// enables its `preserve_order` feature, so key order must be imposed here.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = serde_json::Map::new();
            for (key, inner) in entries {
                sorted.insert(key, sort_keys(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Read a JSON file back, appending a `.json` extension when none is
/// given. Read and parse failures are logged and surfaced as errors.
pub fn load_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = with_default_extension(path.as_ref(), "json");
    read_json(&path).inspect_err(|e| {
        error!(path = %path.display(), error = %e, "could not load JSON file");
    })
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Pass-through writer/reader options for CSV files.
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    pub delimiter: u8,
    /// Whether the file carries (or should carry) a header row.
    pub headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            headers: true,
        }
    }
}

/// Write a [`Table`] as CSV at `path`, creating parent directories first.
/// Ragged input (rows of differing width) is refused before anything is
/// written.
pub fn save_csv(table: &Table, path: impl AsRef<Path>, options: &CsvOptions) -> Result<()> {
    let path = path.as_ref();
    let width = table.width();
    if let Some(bad) = table.rows.iter().position(|row| row.len() != width) {
        let err = HarvestError::NotTabular(format!(
            "row {bad} has {} cells, expected {width}",
            table.rows[bad].len()
        ));
        error!(path = %path.display(), error = %err, "refusing to write CSV");
        return Err(err);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_path_exists(parent)?;
        }
    }
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_path(path)?;
    if options.headers && !table.headers.is_empty() {
        writer.write_record(&table.headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a CSV file back into a [`Table`]. Read and parse failures are
/// logged and surfaced as errors.
pub fn load_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Table> {
    let path = path.as_ref();
    read_csv(path, options).inspect_err(|e| {
        error!(path = %path.display(), error = %e, "could not load CSV file");
    })
}

fn read_csv(path: &Path, options: &CsvOptions) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.headers)
        .from_path(path)?;
    let headers = if options.headers {
        reader.headers()?.iter().map(str::to_string).collect()
    } else {
        Vec::new()
    };
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(Table { headers, rows })
}

fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ext)
    }
}

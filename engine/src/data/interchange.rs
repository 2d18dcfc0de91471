// Conversion between untyped JSON payloads and entries, plus the export formats.
// Both the persisted slots and user import files go through `normalize_entries`,
// so whatever shape arrives, what leaves here is well typed.
use serde_json::Value;
use shared::models::Entry;
use shared::utils::decimal::parse_number;

use crate::error::{EngineError, EngineResult};

pub const EXPORT_FILE_NAME: &str = "fitness-tracker-export.json";
pub const CSV_EXPORT_FILE_NAME: &str = "fitness-tracker-export.csv";

/// Coerces one entry-like object. Objects without a string `date` are rejected;
/// malformed numbers become absent and missing text becomes empty.
pub fn entry_from_value(value: &Value) -> Option<Entry> {
    let object = value.as_object()?;
    let date = object.get("date")?.as_str()?;
    Some(Entry {
        date: date.to_string(),
        calories: number_field(object.get("calories")),
        weight: number_field(object.get("weight")),
        steps: number_field(object.get("steps")),
        cardio: number_field(object.get("cardio")),
        workout: text_field(object.get("workout")),
        comments: text_field(object.get("comments")),
    })
}

fn number_field(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

// Falsy values (null, false, 0, "") read as empty text.
fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Coerces every item, drops the ones without a date, and sorts by date. When a
/// date appears more than once the later item wins, as if each had been upserted
/// in turn.
pub fn normalize_entries(items: &[Value]) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::with_capacity(items.len());
    let mut dropped = 0usize;
    for item in items {
        match entry_from_value(item) {
            Some(entry) => entries.push(entry),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::warn!(dropped, "Dropped entries without a string date");
    }

    // Stable sort keeps input order among equal dates, so the last one is the newest.
    entries.sort_by(|a, b| a.date.cmp(&b.date));
    let mut deduped: Vec<Entry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match deduped.last_mut() {
            Some(last) if last.date == entry.date => *last = entry,
            _ => deduped.push(entry),
        }
    }
    deduped
}

/// Parses an import file. Anything that is not a JSON array is rejected.
pub fn parse_import(text: &str) -> EngineResult<Vec<Entry>> {
    let payload: Value = serde_json::from_str(text)
        .map_err(|e| EngineError::InvalidImport(format!("not valid JSON: {}", e)))?;
    match payload {
        Value::Array(items) => Ok(normalize_entries(&items)),
        other => Err(EngineError::InvalidImport(format!(
            "expected an array of entries, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Pretty printed JSON array; absent values are written as `null`.
pub fn export_json(entries: &[Entry]) -> EngineResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// One row per entry with a header line; absent values are empty cells.
pub fn export_csv(entries: &[Entry]) -> EngineResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if entries.is_empty() {
        writer.write_record(["date", "calories", "weight", "steps", "cardio", "workout", "comments"])?;
    }
    for entry in entries {
        writer.serialize(entry)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| EngineError::AnyhowError(anyhow::anyhow!("flushing CSV export: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| EngineError::AnyhowError(anyhow::anyhow!("CSV export is not UTF-8: {}", e)))
}

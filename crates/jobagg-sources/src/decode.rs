//! Tolerant decoding of provider payloads into [`RawRecord`]s.
//!
//! JSON payloads are accepted in these shapes, tried in order:
//!
//! 1. a JSON array of row objects,
//! 2. a JSON object with a `jobs` array (a full result document),
//! 3. a single JSON row object,
//! 4. JSON Lines, one row object per line.
//!
//! An object carrying `error`, or `success: false`, is the bridge reporting
//! its own failure and never becomes a row. Dataframe exporters happily write
//! bare `NaN` / `Infinity` tokens, which are not JSON; they are rewritten to
//! `null` before parsing.
//!
//! CSV dumps (header row, then one row per posting) go through
//! [`decode_csv`]; [`PayloadFormat::from_path`] picks the decoder for a file.

use std::borrow::Cow;
use std::path::Path;

use jobagg_core::{RawRecord, RawValue};
use serde_json::{Map, Value};

use crate::SourceError;

const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// On-disk encoding of a provider dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Csv,
}

impl PayloadFormat {
    /// `.csv` files are CSV; everything else is read as JSON / JSON Lines.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => PayloadFormat::Csv,
            _ => PayloadFormat::Json,
        }
    }

    pub fn decode(self, text: &str) -> Result<Vec<RawRecord>, SourceError> {
        match self {
            PayloadFormat::Json => decode_payload(text),
            PayloadFormat::Csv => decode_csv(text),
        }
    }
}

/// Decode a JSON provider payload. Blank input decodes to no rows.
pub fn decode_payload(text: &str) -> Result<Vec<RawRecord>, SourceError> {
    let text = sanitize_non_finite(text);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let rows = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(rows)) => rows,
        Ok(Value::Object(doc)) => document_rows(doc)?,
        Ok(other) => return Err(SourceError::Shape(json_kind(&other))),
        Err(whole_err) => {
            let mut rows = Vec::new();
            for line in trimmed.lines().map(str::trim).filter(|l| !l.is_empty()) {
                match serde_json::from_str::<Value>(line) {
                    Ok(row) => rows.push(row),
                    // Not JSON Lines either; report the document-level error.
                    Err(_) if rows.is_empty() => return Err(whole_err.into()),
                    Err(line_err) => return Err(line_err.into()),
                }
            }
            rows
        }
    };

    Ok(into_records(rows))
}

/// Rows carried by a top-level JSON object.
fn document_rows(mut doc: Map<String, Value>) -> Result<Vec<Value>, SourceError> {
    if let Some(reason) = reported_failure(&doc) {
        return Err(SourceError::Reported(reason));
    }
    match doc.remove("jobs") {
        Some(Value::Array(rows)) => Ok(rows),
        // A result document that simply found nothing.
        Some(Value::Null) | None if doc.contains_key("success") => Ok(Vec::new()),
        Some(other) => Err(SourceError::Shape(json_kind(&other))),
        None => Ok(vec![Value::Object(doc)]),
    }
}

fn reported_failure(doc: &Map<String, Value>) -> Option<String> {
    let error = match doc.get("error") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(other) => Some(other.to_string()),
    };
    match (error, doc.get("success")) {
        (Some(error), _) => Some(error),
        (None, Some(Value::Bool(false))) => Some("success: false".to_string()),
        _ => None,
    }
}

/// Decode a CSV dump with a header row. Every cell is kept as text; empty
/// cells become null. Short rows simply lack the trailing columns.
pub fn decode_csv(text: &str) -> Result<Vec<RawRecord>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| {
                let value = if cell.is_empty() {
                    RawValue::Null
                } else {
                    RawValue::from(cell)
                };
                (header, value)
            })
            .collect();
        records.push(record);
    }
    Ok(records)
}

fn into_records(rows: Vec<Value>) -> Vec<RawRecord> {
    let total = rows.len();
    let records: Vec<RawRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(idx, row)| match row {
            Value::Object(map) => Some(RawRecord::from(map)),
            other => {
                tracing::warn!(row = idx, kind = json_kind(&other), "skipping non-object provider row");
                None
            }
        })
        .collect();
    if records.len() < total {
        tracing::warn!(kept = records.len(), total, "some provider rows were not objects");
    }
    records
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Replace `NaN`, `Infinity` and `-Infinity` outside string literals with
/// `null`.
pub fn sanitize_non_finite(text: &str) -> Cow<'_, str> {
    if !text.contains("NaN") && !text.contains("Infinity") {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE_TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

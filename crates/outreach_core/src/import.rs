//! Workbook and JSON row readers.
//!
//! Both readers produce the loosely-typed `RowMap` sequence the normalizer
//! consumes. A failure here is the single user-visible error path in the
//! system: callers keep their current directory when an `Err` comes back.

use crate::normalize::RowMap;
use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use serde_json::Value;
use std::path::Path;

/// Read the first sheet of an `.xlsx`/`.xls` workbook into row maps. The
/// first row is treated as the header row; fully empty data rows are
/// skipped, and empty cells leave their column absent from the row map.
pub fn read_workbook(path: &Path) -> Result<Vec<RowMap>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("Workbook {} has no sheets", path.display()))?
        .with_context(|| format!("Failed to read first sheet of {}", path.display()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| anyhow!("Workbook {} has an empty first sheet", path.display()))?
        .iter()
        .map(header_text)
        .collect();

    let mut out = Vec::new();
    for cells in rows {
        let mut row = RowMap::new();
        for (header, cell) in headers.iter().zip(cells) {
            if header.is_empty() {
                continue;
            }
            if let Some(value) = cell_value(cell) {
                row.insert(header.clone(), value);
            }
        }
        if !row.is_empty() {
            out.push(row);
        }
    }
    log::info!("Read {} rows from {}", out.len(), path.display());
    Ok(out)
}

/// Parse a JSON array of row objects (the piping/test alternative to a
/// workbook upload).
pub fn rows_from_json(text: &str) -> Result<Vec<RowMap>> {
    let value: Value = serde_json::from_str(text).context("Rows are not valid JSON")?;
    let Value::Array(items) = value else {
        return Err(anyhow!("Expected a JSON array of row objects"));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(anyhow!("Expected a row object, got {other}")),
        })
        .collect()
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty => None,
        Data::String(text) => Some(Value::String(text.clone())),
        Data::Int(int) => Some(Value::Number((*int).into())),
        Data::Float(float) => serde_json::Number::from_f64(*float).map(Value::Number),
        Data::Bool(flag) => Some(Value::Bool(*flag)),
        Data::DateTime(_) => Some(Value::String(cell.to_string())),
        Data::DateTimeIso(text) | Data::DurationIso(text) => {
            Some(Value::String(text.clone()))
        }
        Data::Error(error) => {
            log::warn!("Skipping cell error: {error:?}");
            None
        }
    }
}

//! Spreadsheet reading via calamine.

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::error::{IngestError, Result};

/// Reads the first worksheet of a workbook into raw string rows.
///
/// Cells are stringified so spreadsheet and delimited-text input share one
/// cleaning and type-inference path downstream.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let cursor = std::io::Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor).map_err(|e| IngestError::Spreadsheet {
        message: e.to_string(),
    })?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::Spreadsheet {
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Spreadsheet {
            message: e.to_string(),
        })?;
    tracing::debug!(sheet = %sheet_name, rows = range.height(), "read worksheet");
    Ok(range
        .rows()
        .map(|row| row.iter().map(render_cell).collect())
        .collect())
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) if value.time() == chrono::NaiveTime::MIN => {
                value.format("%Y-%m-%d").to_string()
            }
            Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}

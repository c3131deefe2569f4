//! Loading and cleaning of uploaded tabular files.
//!
//! The loader is the only entry point that turns raw upload bytes into a
//! [`Dataset`]: sniff the format from the filename extension, decode and
//! parse, trim headers, drop fully-empty rows, infer per-column types, then
//! coerce any recognized date column and derive the "Month" column.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;

use insight_model::{CellValue, Column, ColumnType, Dataset};

use crate::encoding::decode_text;
use crate::error::{IngestError, Result};
use crate::excel::read_workbook;

/// Headers recognized as date-bearing, lowercase.
///
/// Month derivation triggers on any of these, not only the literal "Date";
/// multilingual uploads name the date column in their own language.
const DATE_HEADERS: [&str; 4] = ["date", "fecha", "datum", "data"];

/// Name of the derived calendar-month column.
pub const MONTH_COLUMN: &str = "Month";

/// How an upload's bytes should be parsed, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Delimited text with the given delimiter byte.
    Delimited { delimiter: u8 },
    /// Excel workbook (binary or XML).
    Spreadsheet,
}

/// Decides the parse strategy from the original filename.
pub fn sniff_format(filename: &str) -> Result<FileFormat> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "csv" | "txt" => Ok(FileFormat::Delimited { delimiter: b',' }),
        "tsv" => Ok(FileFormat::Delimited { delimiter: b'\t' }),
        "xls" | "xlsx" | "xlsm" => Ok(FileFormat::Spreadsheet),
        _ => Err(IngestError::UnsupportedFormat { extension }),
    }
}

/// Loads and cleans an upload supplied as an in-memory byte buffer.
///
/// The filename is used only to recover the extension. The source bytes are
/// never mutated.
pub fn load_dataset(bytes: &[u8], filename: &str) -> Result<Dataset> {
    let raw_rows = match sniff_format(filename)? {
        FileFormat::Delimited { delimiter } => {
            let text = decode_text(bytes)?;
            read_delimited(&text, delimiter)?
        }
        FileFormat::Spreadsheet => read_workbook(bytes)?,
    };
    let dataset = build_dataset(raw_rows)?;
    tracing::info!(
        file = filename,
        columns = dataset.column_count(),
        rows = dataset.row_count(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Convenience wrapper reading the upload from disk.
pub fn load_dataset_from_path(path: &Path) -> Result<Dataset> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    load_dataset(&bytes, filename)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn read_delimited(text: &str, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    Ok(rows)
}

/// Turns raw string rows into a typed, cleaned dataset.
///
/// The first row is the header; rows whose cells are all empty are dropped.
fn build_dataset(raw_rows: Vec<Vec<String>>) -> Result<Dataset> {
    let Some(header_row) = raw_rows.first() else {
        return Err(IngestError::EmptyDataset);
    };
    let headers: Vec<String> = header_row.iter().map(|raw| normalize_header(raw)).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in raw_rows.iter().skip(1) {
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row: Vec<String> = (0..headers.len())
            .map(|idx| record.get(idx).map(|cell| normalize_cell(cell)).unwrap_or_default())
            .collect();
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyDataset);
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let cells: Vec<&str> = rows.iter().map(|row| row[idx].as_str()).collect();
        columns.push(build_column(header, &cells));
    }
    let columns = derive_month(columns);
    Ok(Dataset::from_columns(columns)?)
}

/// Infers the column type and builds its typed cells.
///
/// Temporal wins over Numeric so a column of ISO dates is never mistaken
/// for text; empty cells are always Missing.
fn build_column(name: &str, raw: &[&str]) -> Column {
    let non_empty: Vec<&str> = raw.iter().copied().filter(|v| !v.is_empty()).collect();
    let all_dates = !non_empty.is_empty() && non_empty.iter().all(|v| parse_date(v).is_some());
    let all_numeric =
        !non_empty.is_empty() && non_empty.iter().all(|v| v.parse::<f64>().is_ok());

    if all_dates {
        let values = raw
            .iter()
            .map(|v| parse_date(v).map_or(CellValue::Missing, CellValue::Date))
            .collect();
        return Column::new(name, ColumnType::Temporal, values);
    }
    if all_numeric {
        let values = raw
            .iter()
            .map(|v| {
                v.parse::<f64>()
                    .map_or(CellValue::Missing, CellValue::Number)
            })
            .collect();
        return Column::new(name, ColumnType::Numeric, values);
    }
    let values = raw
        .iter()
        .map(|v| {
            if v.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text((*v).to_string())
            }
        })
        .collect();
    Column::new(name, ColumnType::Text, values)
}

/// Parses a calendar date, month-first for slash-delimited forms.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y"];
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

fn is_date_header(name: &str) -> bool {
    DATE_HEADERS.contains(&name.trim().to_ascii_lowercase().as_str())
}

/// Coerces the first recognized date column and derives the Month column.
///
/// Coercion is per-cell: values that fail to parse become Missing, never an
/// error. The derived column replaces any existing "Month" column.
fn derive_month(mut columns: Vec<Column>) -> Vec<Column> {
    let Some(idx) = columns.iter().position(|c| is_date_header(&c.name)) else {
        return columns;
    };
    let dates: Vec<Option<NaiveDate>> = columns[idx]
        .values
        .iter()
        .map(|cell| match cell {
            CellValue::Date(date) => Some(*date),
            CellValue::Text(text) => parse_date(text),
            CellValue::Number(_) | CellValue::Missing => None,
        })
        .collect();
    if dates.iter().all(Option::is_none) {
        tracing::debug!(column = %columns[idx].name, "date column has no parsable values");
        return columns;
    }

    let name = columns[idx].name.clone();
    columns[idx] = Column::new(
        name,
        ColumnType::Temporal,
        dates
            .iter()
            .map(|d| d.map_or(CellValue::Missing, CellValue::Date))
            .collect(),
    );

    let month_cells = dates
        .iter()
        .map(|d| {
            d.map_or(CellValue::Missing, |date| {
                CellValue::Text(date.format("%Y-%m").to_string())
            })
        })
        .collect();
    let month = Column::new(MONTH_COLUMN, ColumnType::Text, month_cells);
    if let Some(existing) = columns.iter().position(|c| c.name.trim() == MONTH_COLUMN) {
        columns[existing] = month;
    } else {
        columns.push(month);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_formats_by_extension() {
        assert_eq!(
            sniff_format("sales.csv").unwrap(),
            FileFormat::Delimited { delimiter: b',' }
        );
        assert_eq!(
            sniff_format("sales.TSV").unwrap(),
            FileFormat::Delimited { delimiter: b'\t' }
        );
        assert_eq!(sniff_format("sales.xlsx").unwrap(), FileFormat::Spreadsheet);
        assert!(matches!(
            sniff_format("sales.pdf"),
            Err(IngestError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            sniff_format("no_extension"),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn parse_date_prefers_month_first() {
        assert_eq!(
            parse_date("03/04/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );
        assert_eq!(
            parse_date("25/12/2023"),
            NaiveDate::from_ymd_opt(2023, 12, 25)
        );
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn headers_are_trimmed_and_collapsed() {
        assert_eq!(normalize_header("  Total   Revenue  "), "Total Revenue");
        assert_eq!(normalize_header("\u{feff}Date"), "Date");
    }
}

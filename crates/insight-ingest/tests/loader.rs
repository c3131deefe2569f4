use std::io::Write;

use insight_ingest::{IngestError, load_dataset, load_dataset_from_path};
use insight_model::{CellValue, ColumnType};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn loads_utf8_csv_and_recovers_headers() {
    let dataset = load_dataset(
        "Región,Ingresos\nNorte,1200\nSur,800\n".as_bytes(),
        "ventas.csv",
    )
    .unwrap();
    assert_eq!(dataset.headers(), vec!["Región", "Ingresos"]);
    assert_eq!(dataset.row_count(), 2);
    assert!(dataset.column("Ingresos").unwrap().is_numeric());
}

#[test]
fn loads_windows_1252_csv_with_accented_headers() {
    // "Región,Ingresos" with ó as the single windows-1252 byte 0xF3.
    let mut bytes = b"Regi\xF3n,Ingresos\n".to_vec();
    bytes.extend_from_slice(b"Norte,1200\n");
    let dataset = load_dataset(&bytes, "ventas.csv").unwrap();
    assert_eq!(dataset.headers(), vec!["Región", "Ingresos"]);
}

#[test]
fn loads_utf16le_with_bom() {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(
        "Mes,Ventas\nEnero,100\n"
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes()),
    );
    let dataset = load_dataset(&bytes, "ventas.csv").unwrap();
    assert_eq!(dataset.headers(), vec!["Mes", "Ventas"]);
    assert_eq!(dataset.row_count(), 1);
}

#[test]
fn bomless_utf16_is_a_decode_error() {
    let bytes: Vec<u8> = "A,B\n1,2\n"
        .encode_utf16()
        .flat_map(|unit| unit.to_le_bytes())
        .collect();
    let err = load_dataset(&bytes, "export.csv").unwrap_err();
    assert!(matches!(err, IngestError::Decode { .. }));
}

#[test]
fn header_only_file_is_empty_dataset() {
    let err = load_dataset(b"Product,Revenue\n", "sales.csv").unwrap_err();
    assert!(matches!(err, IngestError::EmptyDataset));
}

#[test]
fn unrecognized_extension_is_unsupported_format() {
    let err = load_dataset(b"Product,Revenue\nWidget,10\n", "sales.pdf").unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn fully_empty_rows_are_dropped() {
    let dataset = load_dataset(
        b"Product,Revenue\nWidget,10\n,,\n , \nGadget,20\n",
        "sales.csv",
    )
    .unwrap();
    assert_eq!(dataset.row_count(), 2);
}

#[test]
fn headers_are_trimmed() {
    let dataset = load_dataset(b" Product , Revenue \nWidget,10\n", "sales.csv").unwrap();
    assert_eq!(dataset.headers(), vec!["Product", "Revenue"]);
}

#[test]
fn month_is_derived_from_date_column() {
    let dataset = load_dataset(
        b"Date,Revenue\n2024-03-05,100\n2024-04-01,200\nbogus,300\n",
        "sales.csv",
    )
    .unwrap();
    let month = dataset.column("Month").expect("derived Month column");
    assert_eq!(
        month.values,
        vec![
            CellValue::Text("2024-03".to_string()),
            CellValue::Text("2024-04".to_string()),
            CellValue::Missing,
        ]
    );
    // The date column itself is coerced per cell; bogus cells become Missing.
    let date = dataset.column("Date").unwrap();
    assert_eq!(date.ty, ColumnType::Temporal);
    assert!(date.values[2].is_missing());
}

#[test]
fn month_derivation_triggers_on_spanish_date_header() {
    let dataset = load_dataset(
        b"Fecha,Ingresos\n2024-01-15,100\n2024-02-20,150\n",
        "ventas.csv",
    )
    .unwrap();
    let month = dataset.column("Month").expect("derived Month column");
    assert_eq!(month.values[0], CellValue::Text("2024-01".to_string()));
    assert_eq!(month.values[1], CellValue::Text("2024-02".to_string()));
}

#[test]
fn derived_month_replaces_existing_month_column() {
    let dataset = load_dataset(
        b"Date,Month,Revenue\n2024-03-05,stale,100\n",
        "sales.csv",
    )
    .unwrap();
    assert_eq!(dataset.column_count(), 3);
    assert_eq!(
        dataset.column("Month").unwrap().values[0],
        CellValue::Text("2024-03".to_string())
    );
}

#[test]
fn tsv_uses_tab_delimiter() {
    let dataset = load_dataset(b"Product\tRevenue\nWidget\t10\n", "sales.tsv").unwrap();
    assert_eq!(dataset.headers(), vec!["Product", "Revenue"]);
    assert_eq!(dataset.row_count(), 1);
}

#[test]
fn mixed_value_column_stays_text() {
    let dataset = load_dataset(b"Revenue\n10\nn/a\n", "sales.csv").unwrap();
    let column = dataset.column("Revenue").unwrap();
    assert_eq!(column.ty, ColumnType::Text);
    assert!(!column.is_numeric());
}

#[test]
fn garbage_spreadsheet_bytes_fail_as_spreadsheet_error() {
    let err = load_dataset(b"not really a workbook", "report.xlsx").unwrap_err();
    assert!(matches!(err, IngestError::Spreadsheet { .. }));
}

#[test]
fn loads_from_path() {
    let file = create_temp_csv("Product,Revenue\nWidget,10\n");
    let dataset = load_dataset_from_path(file.path()).unwrap();
    assert_eq!(dataset.row_count(), 1);
}

#[test]
fn missing_file_is_a_read_error() {
    let err =
        load_dataset_from_path(std::path::Path::new("/nonexistent/sales.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
}

//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

use insight_model::ModelError;

/// Errors that can occur while loading an uploaded file.
///
/// All variants are fatal to the load and surfaced to the caller; recovery
/// policies (encoding fallback, per-cell date coercion) live inside the
/// loader and only fail after every fallback is exhausted.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension is neither a spreadsheet nor a delimited-text format.
    #[error("unsupported file format: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// No encoding in the fallback chain produced clean text.
    #[error("could not decode text data (tried {tried})")]
    Decode { tried: String },

    /// Parsed successfully, but zero data rows remain after cleaning.
    #[error("no data rows remain after cleaning")]
    EmptyDataset,

    /// Failed to read the source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited-text parsing failed.
    #[error("failed to parse delimited text: {message}")]
    CsvParse { message: String },

    /// Spreadsheet parsing failed.
    #[error("failed to read spreadsheet: {message}")]
    Spreadsheet { message: String },

    /// Parsed table violates a dataset invariant.
    #[error("invalid table: {source}")]
    InvalidTable {
        #[from]
        source: ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_extension() {
        let err = IngestError::UnsupportedFormat {
            extension: "pdf".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported file format: 'pdf'");
    }
}

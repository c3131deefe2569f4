use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column header after trimming: '{header}'")]
    DuplicateHeader { header: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

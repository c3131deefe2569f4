use thiserror::Error;

/// Errors from chart data preparation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Spec references a column the dataset does not have.
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },

    /// Spec uses a non-numeric column as the value axis.
    #[error("column '{column}' is not numeric")]
    NonNumericColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;

//! Tabular dataset types.
//!
//! A [`Dataset`] is an ordered sequence of named columns, each holding an
//! ordered sequence of [`CellValue`]s with one inferred [`ColumnType`].
//! Datasets are built once per uploaded file and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Inferred value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Every non-missing cell parses as a number.
    Numeric,
    /// Free-form text.
    Text,
    /// Every non-missing cell is a calendar date.
    Temporal,
}

/// A single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Date(NaiveDate),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric view of the cell, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Human-readable rendering; missing cells render empty.
    pub fn display(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Date(value) => value.format("%Y-%m-%d").to_string(),
            Self::Missing => String::new(),
        }
    }
}

/// A named column with its inferred type and cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            ty,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        self.ty == ColumnType::Numeric
    }

    /// Count of cells that are not [`CellValue::Missing`].
    pub fn non_missing(&self) -> usize {
        self.values.iter().filter(|cell| !cell.is_missing()).count()
    }
}

/// An immutable table of named columns.
///
/// Invariants, enforced at construction: all columns have equal length and
/// header names are unique after trimming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Builds a dataset, validating the column invariants.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        let mut seen = std::collections::BTreeSet::new();
        for column in &columns {
            if column.len() != row_count {
                return Err(ModelError::LengthMismatch {
                    column: column.name.clone(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
            if !seen.insert(column.name.trim().to_string()) {
                return Err(ModelError::DuplicateHeader {
                    header: column.name.trim().to_string(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Column headers in declaration order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Looks up a column by exact header name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The first `limit` rows rendered as display strings, row-major.
    ///
    /// Used for row samples handed to the inference collaborator.
    pub fn sample_rows(&self, limit: usize) -> Vec<Vec<String>> {
        let take = self.row_count.min(limit);
        (0..take)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.values[row].display())
                    .collect()
            })
            .collect()
    }
}

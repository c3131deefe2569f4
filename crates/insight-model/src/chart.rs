//! Structured chart instructions.
//!
//! Chart content is described as data (kind plus field names) and consumed
//! by a fixed, closed set of renderers chosen by kind. Model-generated
//! payloads are decoded into these types, never executed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chart to render: kind, axis fields, optional grouping, title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Column supplying category labels.
    pub x: String,
    /// Column supplying values; must be numeric in the target dataset.
    pub y: String,
    /// Optional column splitting the data into one series per group value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    pub title: String,
}

impl ChartSpec {
    pub fn new(
        kind: ChartKind,
        x: impl Into<String>,
        y: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            x: x.into(),
            y: y.into(),
            group_by: None,
            title: title.into(),
        }
    }

    pub fn with_group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by = Some(column.into());
        self
    }
}

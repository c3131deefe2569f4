//! Report document assembly.
//!
//! A report is a narrative summary plus an ordered list of figures with
//! captions, rendered to markdown. Byte-level document formats are a
//! renderer concern and stay outside this crate.

use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// Shown when no narrative file is available.
pub const MISSING_SUMMARY_PLACEHOLDER: &str =
    "*No summary available. Provide a narrative file to include one.*";

/// One rendered figure with its caption.
#[derive(Debug, Clone)]
pub struct Figure {
    pub path: PathBuf,
    pub caption: String,
}

/// An assembled report: title, summary, ordered figures.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub summary: String,
    pub figures: Vec<Figure>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            figures: Vec::new(),
        }
    }

    pub fn push_figure(&mut self, path: impl Into<PathBuf>, caption: impl Into<String>) {
        self.figures.push(Figure {
            path: path.into(),
            caption: caption.into(),
        });
    }

    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n\n{}\n", self.title, self.summary.trim());
        for figure in &self.figures {
            out.push_str(&format!(
                "\n## {}\n\n![{}]({})\n",
                figure.caption,
                figure.caption,
                figure.path.display()
            ));
        }
        out
    }

    /// Writes the report as `report.md` under `dir`, creating the folder if
    /// needed.
    pub fn write_markdown(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join("report.md");
        std::fs::write(&path, self.to_markdown()).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), figures = self.figures.len(), "report written");
        Ok(path)
    }
}

/// Loads a pre-generated narrative from disk.
///
/// A missing file yields the placeholder text; other IO failures surface.
pub fn load_summary(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(MISSING_SUMMARY_PLACEHOLDER.to_string())
        }
        Err(source) => Err(ReportError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub mod artifacts;
pub mod document;
pub mod error;

pub use artifacts::ArtifactStore;
pub use document::{Figure, MISSING_SUMMARY_PLACEHOLDER, ReportDocument, load_summary};
pub use error::{ReportError, Result};

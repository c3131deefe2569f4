//! Scoped temporary storage for rendered artifacts.
//!
//! Chart images and other intermediates live in one temporary directory per
//! request. The directory is removed when the store drops, on every exit
//! path; nothing accumulates across requests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{ReportError, Result};

/// A request-scoped artifact directory.
pub struct ArtifactStore {
    dir: TempDir,
}

impl ArtifactStore {
    pub fn new() -> Result<Self> {
        let dir = TempDir::with_prefix("insight-artifacts-").map_err(|source| ReportError::Io {
            path: std::env::temp_dir(),
            source,
        })?;
        tracing::debug!(path = %dir.path().display(), "artifact store created");
        Ok(Self { dir })
    }

    /// Directory holding this request's artifacts.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes one artifact and returns its path.
    ///
    /// Names must be flat; the path stays valid until the store drops.
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ReportError::InvalidArtifactName {
                name: name.to_string(),
            });
        }
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifacts_live_with_the_store_and_die_with_it() {
        let store = ArtifactStore::new().unwrap();
        let path = store.write("chart_1.png", b"png bytes").unwrap();
        assert!(path.exists());
        let dir = store.path().to_path_buf();
        drop(store);
        assert!(!path.exists());
        assert!(!dir.exists());
    }

    #[test]
    fn rejects_nested_artifact_names() {
        let store = ArtifactStore::new().unwrap();
        let err = store.write("../escape.png", b"x").unwrap_err();
        assert!(matches!(err, ReportError::InvalidArtifactName { .. }));
    }
}

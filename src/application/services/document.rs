//! Document persistence service
//!
//! Renders a document and writes it to disk in one atomic step.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::render::render_docx;
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::Document;
use crate::infrastructure::traits::FileSystem;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: PathBuf,
    pub blocks: usize,
    pub bytes: usize,
}

/// Service for serializing documents to `.docx` files.
pub struct DocumentService {
    fs: Arc<dyn FileSystem>,
}

impl DocumentService {
    /// Create a new document service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Serialize all blocks in order and write them to `path`.
    ///
    /// An existing file is replaced. The parent directory must exist; on
    /// failure nothing is left behind at `path`.
    #[instrument(skip(self, document), fields(blocks = document.len()))]
    pub fn save(&self, document: &Document, path: &Path) -> ApplicationResult<SaveReport> {
        let bytes = render_docx(document)?;
        debug!("save: rendered {} bytes", bytes.len());

        self.fs
            .write_atomic(path, &bytes)
            .with_path_context("write document", path)?;

        info!("Saved {} blocks to {}", document.len(), path.display());
        Ok(SaveReport {
            path: path.to_path_buf(),
            blocks: document.len(),
            bytes: bytes.len(),
        })
    }
}

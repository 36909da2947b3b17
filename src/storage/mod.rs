// src/storage/mod.rs
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::pdf::PageText;
use crate::utils::error::StorageError;

/// Written before every page segment in the sidecar file.
pub const PAGE_SEPARATOR: &str = "============ page ==============";

/// Writes matched page text to `<stem>.txt` inside a target directory.
pub struct TextWriter {
    base_dir: PathBuf,
}

impl TextWriter {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the sidecar file for a given stem.
    pub fn output_path(&self, stem: &str) -> Result<PathBuf, StorageError> {
        if stem.is_empty() {
            return Err(StorageError::InvalidName(stem.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.txt", stem)))
    }

    /// Writes each page with text, preceded by the separator line, and returns the
    /// path and the number of pages written. Pages whose text is exactly empty are
    /// skipped; whitespace-only pages are kept.
    ///
    /// Content goes to a temp file in the same directory that replaces `<stem>.txt`
    /// only once complete, so a failed write never leaves a truncated sidecar.
    pub fn write_pages<I>(&self, stem: &str, pages: I) -> Result<(PathBuf, usize), StorageError>
    where
        I: IntoIterator<Item = PageText>,
    {
        let file_path = self.output_path(stem)?;
        let tmp = tempfile::Builder::new()
            .prefix(".ovd-")
            .suffix(".tmp")
            .tempfile_in(&self.base_dir)?;
        let mut out = BufWriter::new(tmp);

        let mut written = 0;
        for page in pages {
            if page.is_empty() {
                tracing::debug!("Página {} vacía, se omite", page.index);
                continue;
            }
            writeln!(out, "{}", PAGE_SEPARATOR)?;
            out.write_all(page.text.as_bytes())?;
            written += 1;
        }

        let tmp = out.into_inner().map_err(|e| e.into_error())?;
        tmp.persist(&file_path).map_err(|e| e.error)?;

        tracing::debug!("{} páginas guardadas en {}", written, file_path.display());
        Ok((file_path, written))
    }
}

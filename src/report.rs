// src/report.rs
use std::path::Path;

use crate::extractors::{NoRange, SelectedRange};
use crate::utils::AppError;

/// Receives per-document progress from the processing pipeline.
pub trait Reporter {
    /// A document is about to be processed (batch mode only).
    fn processing(&mut self, path: &Path);

    /// No OVD section was detected; no output was written.
    fn no_section(&mut self, path: &Path, reason: &NoRange);

    fn written(&mut self, path: &Path, output: &Path, range: SelectedRange, pages: usize);

    fn failed(&mut self, path: &Path, error: &AppError);
}

/// Default reporter: everything goes through `tracing`, in Spanish.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn processing(&mut self, path: &Path) {
        tracing::info!("procesando {}", path.display());
    }

    fn no_section(&mut self, path: &Path, reason: &NoRange) {
        tracing::info!("No se encontró ninguna página de la OVD en {}", path.display());
        match reason {
            NoRange::TooFewCandidates { found, required } => {
                tracing::debug!("{} páginas candidatas, se requieren {}", found, required)
            }
            NoRange::AllIsolated { found } => {
                tracing::debug!("{} páginas candidatas, todas aisladas", found)
            }
        }
    }

    // Success stays quiet unless RUST_LOG asks for debug output.
    fn written(&mut self, path: &Path, output: &Path, range: SelectedRange, pages: usize) {
        tracing::debug!(
            "{}: páginas {}-{} ({} de {} escritas) -> {}",
            path.display(),
            range.first + 1,
            range.last + 1,
            pages,
            range.page_count(),
            output.display()
        );
    }

    fn failed(&mut self, path: &Path, error: &AppError) {
        tracing::error!("Error procesando {}: {}", path.display(), error);
    }
}

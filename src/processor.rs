// src/processor.rs
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::config::ExtractorConfig;
use crate::extractors::{AnchorMatcher, NoRange, PageRangeSelector, SelectedRange};
use crate::pdf::{PageText, PdfSource};
use crate::report::Reporter;
use crate::storage::TextWriter;
use crate::utils::error::{AppError, PdfError};

/// A PDF to process, with the stem its sidecar file is named after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub stem: String,
}

impl Document {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Usage(format!("Nombre de archivo inválido: {}", path.display())))?;
        Ok(Self { path, stem })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoSection(NoRange),
    Written {
        output: PathBuf,
        range: SelectedRange,
        pages_written: usize,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub no_section: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.written + self.no_section + self.failed
    }
}

/// Runs detection and extraction for documents, one at a time.
pub struct Processor {
    matcher: AnchorMatcher,
    selector: PageRangeSelector,
    writer: TextWriter,
}

impl Processor {
    pub fn new<P: AsRef<Path>>(config: &ExtractorConfig, out_dir: P) -> Self {
        Self {
            matcher: config.matcher(),
            selector: config.selector(),
            writer: TextWriter::new(out_dir),
        }
    }

    /// Indices of the pages where both anchors near-match, in page order.
    pub fn scan(&self, source: &PdfSource) -> Vec<usize> {
        let mut candidates = Vec::new();
        for page in source.pages().filter_map(|p| skip_unreadable(source, p)) {
            let result = self.matcher.match_page(&page.text);
            tracing::debug!(
                "página {}: distancias {:?} / {:?} (máximo {})",
                page.index,
                result.first,
                result.second,
                self.matcher.max_distance()
            );
            if result.is_candidate() {
                candidates.push(page.index);
            }
        }
        candidates
    }

    /// Detects the OVD section of one document and writes it to `<stem>.txt`.
    pub fn process_document(
        &self,
        document: &Document,
        reporter: &mut dyn Reporter,
    ) -> Result<Outcome, AppError> {
        let source = PdfSource::open(&document.path)?;
        let candidates = self.scan(&source);
        tracing::debug!("{}: páginas candidatas {:?}", document.path.display(), candidates);

        let range = match self.selector.select(&candidates) {
            Ok(range) => range,
            Err(reason) => {
                reporter.no_section(&document.path, &reason);
                return Ok(Outcome::NoSection(reason));
            }
        };

        let pages = source
            .pages_in(range)
            .filter_map(|p| skip_unreadable(&source, p));
        let (output, pages_written) = self.writer.write_pages(&document.stem, pages)?;

        reporter.written(&document.path, &output, range, pages_written);
        Ok(Outcome::Written {
            output,
            range,
            pages_written,
        })
    }

    /// Processes every document in order. A failing document is reported and
    /// skipped; the rest of the batch still runs.
    pub fn run_batch(&self, paths: &[PathBuf], reporter: &mut dyn Reporter) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for path in paths {
            reporter.processing(path);
            let result = Document::new(path).and_then(|doc| self.process_document(&doc, reporter));
            match result {
                Ok(Outcome::Written { .. }) => summary.written += 1,
                Ok(Outcome::NoSection(_)) => summary.no_section += 1,
                Err(e) => {
                    reporter.failed(path, &e);
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            "Procesamiento finalizado. Escritos: {}, sin OVD: {}, fallidos: {}",
            summary.written,
            summary.no_section,
            summary.failed
        );
        summary
    }
}

/// A page that cannot be decoded counts as an empty, non-matching page.
fn skip_unreadable(source: &PdfSource, page: Result<PageText, PdfError>) -> Option<PageText> {
    match page {
        Ok(page) => Some(page),
        Err(e) => {
            tracing::warn!("{}: {}", source.path().display(), e);
            None
        }
    }
}

/// Lists the `*.pdf` files (any extension casing) directly inside `dir`, sorted by name.
pub fn find_pdfs(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let pattern = format!("{}/*.pdf", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)
        .map_err(|e| AppError::Usage(format!("Patrón de búsqueda inválido: {}", e)))?
    {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!("No se pudo leer {}: {}", e.path().display(), e.error()),
        }
    }
    files.sort();
    Ok(files)
}

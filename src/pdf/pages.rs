// src/pdf/pages.rs
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::extractors::SelectedRange;
use crate::utils::error::PdfError;

/// Plain text of one page, indexed from zero in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub index: usize,
    pub text: String,
}

impl PageText {
    /// Only text that is exactly empty counts; whitespace-only pages are still written.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A loaded PDF whose pages can be decoded to text one at a time.
pub struct PdfSource {
    path: PathBuf,
    document: Document,
    // lopdf page numbers (1-based), in page order
    page_numbers: Vec<u32>,
}

impl PdfSource {
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        let document = Document::load(path).map_err(|source| PdfError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        // get_pages is a BTreeMap keyed by page number, so keys come out sorted
        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();

        tracing::debug!("Abierto {} ({} páginas)", path.display(), page_numbers.len());
        Ok(Self {
            path: path.to_path_buf(),
            document,
            page_numbers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    /// Lazily decodes every page in order.
    pub fn pages(&self) -> PageTexts<'_> {
        PageTexts {
            source: self,
            next: 0,
            end: self.page_count(),
        }
    }

    /// Lazily decodes only the pages inside `range`; pages outside it are never touched.
    pub fn pages_in(&self, range: SelectedRange) -> PageTexts<'_> {
        let end = range.last.saturating_add(1).min(self.page_count());
        PageTexts {
            source: self,
            next: range.first.min(end),
            end,
        }
    }

    fn extract_page(&self, index: usize) -> Result<String, PdfError> {
        let page_number = self.page_numbers[index];
        // lopdf can panic on malformed content streams; keep that contained to the page.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.document.extract_text(&[page_number])
        }));

        match result {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(source)) => Err(PdfError::Extraction { page: index, source }),
            Err(payload) => Err(PdfError::Panic {
                page: index,
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Iterator over decoded pages. Each page's text is produced on demand and owned
/// by the caller, so nothing accumulates across iterations.
pub struct PageTexts<'a> {
    source: &'a PdfSource,
    next: usize,
    end: usize,
}

impl Iterator for PageTexts<'_> {
    type Item = Result<PageText, PdfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(
            self.source
                .extract_page(index)
                .map(|text| PageText { index, text }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

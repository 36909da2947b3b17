// src/pdf/mod.rs
//! Per-page plain-text access to PDF documents, backed by `lopdf`.
//!
//! Documents without a text layer yield empty pages; there is no OCR fallback.

pub mod pages;

pub use pages::{PageText, PageTexts, PdfSource};

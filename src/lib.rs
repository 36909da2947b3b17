// src/lib.rs
//! Extracts the "Oficina de Violencia Doméstica" (OVD) report pages embedded in
//! court-filing PDFs and writes their text to a `<stem>.txt` sidecar file.

pub mod config;
pub mod extractors;
pub mod pdf;
pub mod processor;
pub mod report;
pub mod storage;
pub mod utils;

pub use config::ExtractorConfig;
pub use processor::{find_pdfs, BatchSummary, Document, Outcome, Processor};
pub use report::{Reporter, TracingReporter};
pub use utils::AppError;

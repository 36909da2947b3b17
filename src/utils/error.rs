// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("No se pudo abrir el PDF {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("No se pudo extraer el texto de la página {page}: {source}")]
    Extraction {
        page: usize,
        #[source]
        source: lopdf::Error,
    },

    #[error("El extractor de PDF falló en la página {page}: {message}")]
    Panic { page: usize, message: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Error de E/S: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Nombre de archivo inválido: {0}")]
    InvalidName(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("Configuración inválida: {0}")]
    Config(String),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extracción de PDF fallida: {0}")]
    Pdf(#[from] PdfError),

    #[error("Error de escritura: {0}")]
    Storage(#[from] StorageError),

    #[error("Procesamiento fallido: {0}")]
    Processing(String),
}

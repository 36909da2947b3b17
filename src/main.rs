// src/main.rs
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use ovd_extractor::extractors::EdgeMode;
use ovd_extractor::utils::{self, AppError};
use ovd_extractor::{find_pdfs, Document, ExtractorConfig, Processor, TracingReporter};

/// Extraer información de la OVD
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to be processed
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Process all files in the root folder
    #[arg(short, long = "all")]
    all_files: bool,

    /// Folder scanned by --all (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// JSON file with anchors and detection thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum edit distance allowed when matching an anchor phrase
    #[arg(long)]
    max_distance: Option<usize>,

    /// Pages closer than this are bridged into the same section
    #[arg(long)]
    gap: Option<usize>,

    /// Also test the last candidate page against its predecessor
    #[arg(long)]
    symmetric_edges: bool,
}

enum Mode {
    Single(PathBuf),
    Batch(PathBuf),
}

impl Args {
    /// Resolves what to process, rejecting conflicting or invalid arguments.
    fn mode(&self) -> Result<Mode, AppError> {
        if self.dir.is_some() && !self.all_files {
            return Err(AppError::Usage("El argumento --dir solo puede usarse junto con --all".to_string()));
        }
        match (&self.file, self.all_files) {
            (Some(_), true) => Err(AppError::Usage("Los argumentos suministrados son excluyentes".to_string())),
            (None, false) => Err(AppError::Usage("Se debe suministrar al menos un argumento".to_string())),
            (Some(file), false) => {
                if !file.exists() {
                    return Err(AppError::Usage("El archivo no existe".to_string()));
                }
                if !file.is_file() {
                    return Err(AppError::Usage("El argumento suministrado no es un archivo válido".to_string()));
                }
                let is_pdf = file
                    .extension()
                    .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
                    .unwrap_or(false);
                if !is_pdf {
                    return Err(AppError::Usage("El archivo especificado no es un pdf".to_string()));
                }
                Ok(Mode::Single(file.clone()))
            }
            (None, true) => match &self.dir {
                Some(dir) if !dir.is_dir() => Err(AppError::Usage(format!(
                    "La carpeta {} no existe",
                    dir.display()
                ))),
                Some(dir) => Ok(Mode::Batch(dir.clone())),
                None => Ok(Mode::Batch(std::env::current_dir()?)),
            },
        }
    }

    fn load_config(&self) -> Result<ExtractorConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        };
        if let Some(max_distance) = self.max_distance {
            config.max_distance = max_distance;
        }
        if let Some(gap) = self.gap {
            config.gap = gap;
        }
        if self.symmetric_edges {
            config.edge_mode = EdgeMode::Symmetric;
        }
        config.validate()?;
        tracing::debug!("Configuración: {:?}", config);
        Ok(config)
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let mode = args.mode()?;
    let config = args.load_config()?;

    // Sidecar files always land in the working directory.
    let out_dir = std::env::current_dir()?;
    let processor = Processor::new(&config, &out_dir);
    let mut reporter = TracingReporter;

    match mode {
        Mode::Single(path) => {
            let document = Document::new(&path)?;
            processor.process_document(&document, &mut reporter)?;
        }
        Mode::Batch(dir) => {
            let files = find_pdfs(&dir)?;
            if files.is_empty() {
                tracing::info!("No se encontraron archivos pdf en {}", dir.display());
                return Ok(());
            }

            let summary = processor.run_batch(&files, &mut reporter);
            if summary.failed == summary.total() {
                return Err(AppError::Processing(format!(
                    "no se pudo procesar ninguno de los {} archivos",
                    summary.failed
                )));
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments; every usage error exits with status 1
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    tracing::debug!("Argumentos: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

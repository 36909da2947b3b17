// src/config.rs
use std::path::Path;

use serde::Deserialize;

use crate::extractors::anchors::{DEFAULT_MAX_DISTANCE, OVD_ANCHOR, SUPREME_COURT_ANCHOR};
use crate::extractors::range::{DEFAULT_GAP, DEFAULT_MIN_CANDIDATES};
use crate::extractors::{AnchorMatcher, EdgeMode, PageRangeSelector};
use crate::utils::AppError;

/// Tunables for page detection. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    pub anchors: [String; 2],
    pub max_distance: usize,
    pub gap: usize,
    pub min_candidates: usize,
    pub edge_mode: EdgeMode,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            anchors: [SUPREME_COURT_ANCHOR.to_string(), OVD_ANCHOR.to_string()],
            max_distance: DEFAULT_MAX_DISTANCE,
            gap: DEFAULT_GAP,
            min_candidates: DEFAULT_MIN_CANDIDATES,
            edge_mode: EdgeMode::default(),
        }
    }
}

impl ExtractorConfig {
    /// Loads a JSON config file; absent fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("no se pudo leer {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| AppError::Config(format!("JSON inválido: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.anchors.iter().any(|a| a.trim().is_empty()) {
            return Err(AppError::Config("las frases ancla no pueden estar vacías".to_string()));
        }
        if self.gap == 0 {
            return Err(AppError::Config("la distancia entre páginas debe ser al menos 1".to_string()));
        }
        if self.min_candidates == 0 {
            return Err(AppError::Config("se requiere al menos una página candidata".to_string()));
        }
        Ok(())
    }

    pub fn matcher(&self) -> AnchorMatcher {
        AnchorMatcher::new(&self.anchors[0], &self.anchors[1], self.max_distance)
    }

    pub fn selector(&self) -> PageRangeSelector {
        PageRangeSelector::new(self.gap, self.min_candidates, self.edge_mode)
    }
}

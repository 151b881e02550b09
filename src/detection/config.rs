//! Detection configuration

use crate::detection::names::ModelSize;
use crate::domain::{Result, SigiloError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the detection pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// NER model size (small, medium, large), advisory only
    #[serde(default)]
    pub model_size: ModelSize,

    /// Directory holding gazetteer model files. Absent means heuristic-only.
    #[serde(default)]
    pub model_dir: Option<PathBuf>,

    /// When true, an isolated person name with no corroborating signal is
    /// still classified as PII. The default suppresses such single-signal
    /// cases: names alone in formal text are usually citations.
    #[serde(default)]
    pub strict_names: bool,

    /// Path to a custom TOML pattern library, replacing the built-in one
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Extra denylist entries appended to the default institutional set
    #[serde(default)]
    pub denylist: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            model_size: ModelSize::Small,
            model_dir: None,
            strict_names: false,
            pattern_library: None,
            denylist: Vec::new(),
        }
    }
}

impl DetectionConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(SigiloError::Configuration(format!(
                    "Pattern library file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(SigiloError::Configuration(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Apply `SIGILO_DETECTION_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SIGILO_DETECTION_MODEL_SIZE") {
            self.model_size = match val.to_lowercase().as_str() {
                "small" => ModelSize::Small,
                "medium" => ModelSize::Medium,
                "large" => ModelSize::Large,
                _ => {
                    return Err(SigiloError::Configuration(format!(
                        "Invalid SIGILO_DETECTION_MODEL_SIZE: {val}"
                    )))
                }
            };
        }

        if let Ok(val) = std::env::var("SIGILO_DETECTION_MODEL_DIR") {
            self.model_dir = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("SIGILO_DETECTION_STRICT_NAMES") {
            self.strict_names = val.parse().map_err(|_| {
                SigiloError::Configuration(format!("Invalid SIGILO_DETECTION_STRICT_NAMES: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("SIGILO_DETECTION_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        Ok(())
    }
}

//! Named-entity capability for person names
//!
//! The external capability is a gazetteer model: JSON name lists shipped in
//! three sizes and loaded from a model directory at detector construction.
//! Acquisition is attempted once; any failure downgrades silently to the
//! heuristic. The capability flag is decided at construction and cached for
//! the detector's lifetime, never re-probed per call.

use crate::domain::{Result, SigiloError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Model-size selector for the gazetteer. Larger models carry more names
/// and recall more people at the cost of load time and memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl ModelSize {
    /// Model file name inside the model directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Small => "ner-small.json",
            Self::Medium => "ner-medium.json",
            Self::Large => "ner-large.json",
        }
    }
}

impl std::fmt::Display for ModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        f.write_str(label)
    }
}

/// On-disk gazetteer model shape.
#[derive(Debug, Deserialize)]
struct GazetteerModel {
    #[serde(default)]
    given_names: Vec<String>,
    #[serde(default)]
    surnames: Vec<String>,
}

/// Person-name extractor backed by a loaded gazetteer model.
///
/// Extraction scans capitalized token runs and keeps those where at least
/// one token is a known name, tagging the run as a person entity. Runs
/// shorter than two tokens never qualify.
pub struct NerExtractor {
    known_names: HashSet<String>,
    run_pattern: Regex,
}

impl NerExtractor {
    /// Load a model of the given size from the model directory.
    pub fn load(model_dir: &Path, size: ModelSize) -> Result<Self> {
        let path = model_dir.join(size.file_name());
        let content = std::fs::read_to_string(&path)
            .map_err(|e| SigiloError::Model(format!("Failed to read {}: {e}", path.display())))?;
        let model: GazetteerModel = serde_json::from_str(&content)
            .map_err(|e| SigiloError::Model(format!("Failed to parse {}: {e}", path.display())))?;

        let known_names: HashSet<String> = model
            .given_names
            .iter()
            .chain(model.surnames.iter())
            .map(|n| n.to_lowercase())
            .collect();
        if known_names.is_empty() {
            return Err(SigiloError::Model(format!(
                "Model {} contains no names",
                path.display()
            )));
        }

        let run_pattern =
            Regex::new(r"[A-ZÀ-ÖØ-Þ][a-zà-öø-ÿ]+(?:\s[A-ZÀ-ÖØ-Þ][a-zà-öø-ÿ]+)+")
                .map_err(|e| SigiloError::Model(format!("Invalid token pattern: {e}")))?;

        Ok(Self {
            known_names,
            run_pattern,
        })
    }

    /// Number of distinct names in the loaded gazetteer.
    pub fn lexicon_size(&self) -> usize {
        self.known_names.len()
    }

    /// Extract person entities with at least two tokens.
    pub fn person_names(&self, text: &str) -> Vec<String> {
        self.run_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|run| {
                run.split_whitespace()
                    .any(|token| self.known_names.contains(&token.to_lowercase()))
            })
            .map(|run| run.to_string())
            .collect()
    }
}

/// Outcome of the one-shot capability probe.
pub enum NameCapability {
    /// External extractor loaded and usable
    Available(NerExtractor),
    /// Acquisition failed; name finding routes to the heuristic
    Unavailable,
}

impl NameCapability {
    /// Probe the capability once. `None` for the model directory means the
    /// caller opted out of NER entirely. Failure is logged, never returned.
    pub fn acquire(model_dir: Option<&Path>, size: ModelSize) -> Self {
        let Some(dir) = model_dir else {
            tracing::debug!("NER model directory not configured, using name heuristic");
            return Self::Unavailable;
        };

        match NerExtractor::load(dir, size) {
            Ok(extractor) => {
                tracing::info!(
                    model_size = %size,
                    lexicon = extractor.lexicon_size(),
                    "NER gazetteer model loaded"
                );
                Self::Available(extractor)
            }
            Err(e) => {
                tracing::warn!(
                    model_size = %size,
                    error = %e,
                    "NER model unavailable, falling back to name heuristic"
                );
                Self::Unavailable
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

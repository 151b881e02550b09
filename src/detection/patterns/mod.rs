//! Pattern catalog for structured PII kinds
//!
//! Each kind has one compiled regular expression, loaded from a TOML pattern
//! library. The crate ships an embedded default library; a custom file can
//! be supplied through configuration. Numeric identifier kinds may name a
//! checksum validator that gates their raw matches.

use crate::detection::checksum;
use crate::domain::{PiiKind, Result, SigiloError};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Checksum validator referenced by a pattern definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumKind {
    Cpf,
    Cnpj,
}

impl ChecksumKind {
    /// Run the validator against a raw candidate substring.
    pub fn validate(&self, candidate: &str) -> bool {
        match self {
            Self::Cpf => checksum::validate_cpf(candidate),
            Self::Cnpj => checksum::validate_cnpj(candidate),
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cpf" => Some(Self::Cpf),
            "cnpj" => Some(Self::Cnpj),
            _ => None,
        }
    }
}

/// Pattern definition as written in the TOML library.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// PII kind label
    pub kind: String,
    /// Regular expression for this kind
    pub pattern: String,
    /// Optional checksum validator gating raw matches
    #[serde(default)]
    pub validator: Option<String>,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: BTreeMap<String, PatternDefinition>,
}

/// Compiled pattern with its evidence kind and optional checksum gate.
#[derive(Debug)]
pub struct CompiledPattern {
    pub kind: PiiKind,
    pub regex: Regex,
    pub validator: Option<ChecksumKind>,
}

impl CompiledPattern {
    /// All raw substring matches in order of appearance. Empty or
    /// ultra-short text yields an empty sequence, never an error.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Compiled pattern catalog, one pattern per kind.
///
/// Constructed once at detector initialization and immutable thereafter,
/// so it is safe to share across concurrent analyses.
#[derive(Debug)]
pub struct PatternCatalog {
    patterns: BTreeMap<PiiKind, CompiledPattern>,
}

impl PatternCatalog {
    /// Load a catalog from a TOML pattern library file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SigiloError::Pattern(format!(
                "Failed to read pattern library {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Compile a catalog from TOML content.
    ///
    /// Malformed definitions fail loudly: they indicate a programming
    /// defect, not a runtime condition.
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| SigiloError::Pattern(format!("Failed to parse pattern library: {e}")))?;

        let mut patterns = BTreeMap::new();
        for (name, def) in library.patterns {
            let kind = PiiKind::parse_label(&def.kind).ok_or_else(|| {
                SigiloError::Pattern(format!("Unknown kind in pattern '{name}': {}", def.kind))
            })?;

            let regex = Regex::new(&def.pattern).map_err(|e| {
                SigiloError::Pattern(format!("Invalid regex in pattern '{name}': {e}"))
            })?;

            let validator = match def.validator.as_deref() {
                Some(v) => Some(ChecksumKind::parse(v).ok_or_else(|| {
                    SigiloError::Pattern(format!("Unknown validator in pattern '{name}': {v}"))
                })?),
                None => None,
            };

            if patterns
                .insert(kind, CompiledPattern { kind, regex, validator })
                .is_some()
            {
                return Err(SigiloError::Pattern(format!(
                    "Duplicate pattern for kind {kind}"
                )));
            }
        }

        Ok(Self { patterns })
    }

    /// Catalog with the built-in default library.
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Raw matches for one kind, in order of appearance.
    pub fn matches<'t>(&self, kind: PiiKind, text: &'t str) -> Vec<&'t str> {
        self.patterns
            .get(&kind)
            .map(|p| p.find_matches(text))
            .unwrap_or_default()
    }

    /// The compiled pattern for a kind, if the library defines one.
    pub fn pattern_for(&self, kind: PiiKind) -> Option<&CompiledPattern> {
        self.patterns.get(&kind)
    }

    /// All compiled patterns in evidence-map order.
    pub fn all_patterns(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.values()
    }
}

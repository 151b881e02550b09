//! Person-name finding
//!
//! Two interchangeable sources behind one seam: the capitalization
//! heuristic, and an optional gazetteer NER capability acquired once at
//! construction. Whichever source runs, candidates pass through the same
//! institutional-phrase denylist before they become evidence.

pub mod heuristic;
pub mod ner;

pub use heuristic::NameHeuristic;
pub use ner::{ModelSize, NameCapability, NerExtractor};

use crate::domain::Result;
use std::path::Path;

/// Institutional phrases and boilerplate that look like names but are not.
///
/// A candidate is dropped when it equals a denylist entry or contains one as
/// a substring. Ships with a default set; configuration can extend it.
pub struct Denylist {
    entries: Vec<String>,
}

impl Denylist {
    /// Phrases common in Brazilian public-administration text that the
    /// capitalization heuristic would otherwise flag as person names.
    pub const DEFAULT_ENTRIES: [&'static str; 16] = [
        "Distrito Federal",
        "Governo Federal",
        "Receita Federal",
        "Poder Executivo",
        "Poder Judiciário",
        "Ministério Público",
        "Tribunal Regional",
        "Câmara Legislativa",
        "Assembleia Legislativa",
        "Polícia Civil",
        "Polícia Militar",
        "Diário Oficial",
        "Pessoa Física",
        "Pessoa Jurídica",
        "Prezado Senhor",
        "Prezada Senhora",
    ];

    /// Denylist with the default entries plus any extras from configuration.
    pub fn with_extra_entries<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = Self::DEFAULT_ENTRIES
            .iter()
            .map(|s| s.to_string())
            .collect();
        entries.extend(extra.into_iter().map(Into::into));
        Self { entries }
    }

    /// Whether a candidate survives the filter.
    pub fn allows(&self, candidate: &str) -> bool {
        !self
            .entries
            .iter()
            .any(|entry| candidate == entry || candidate.contains(entry.as_str()))
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::with_extra_entries(Vec::<String>::new())
    }
}

/// Name finder combining the capability probe, the heuristic fallback and
/// the denylist.
pub struct NameFinder {
    capability: NameCapability,
    heuristic: NameHeuristic,
    denylist: Denylist,
}

impl NameFinder {
    /// Build a finder, probing the NER capability once.
    pub fn new(
        model_dir: Option<&Path>,
        model_size: ModelSize,
        denylist: Denylist,
    ) -> Result<Self> {
        Ok(Self {
            capability: NameCapability::acquire(model_dir, model_size),
            heuristic: NameHeuristic::new()?,
            denylist,
        })
    }

    /// Whether the external capability was acquired.
    pub fn ner_available(&self) -> bool {
        self.capability.is_available()
    }

    /// Candidate person names after denylist filtering, in order of
    /// appearance. Duplicates are left for the evidence map to collapse.
    pub fn find_names(&self, text: &str) -> Vec<String> {
        let candidates = match &self.capability {
            NameCapability::Available(extractor) => extractor.person_names(text),
            NameCapability::Unavailable => self.heuristic.candidates(text),
        };

        candidates
            .into_iter()
            .filter(|c| self.denylist.allows(c))
            .collect()
    }
}

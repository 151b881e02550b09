//! Analysis result data models

use crate::domain::kind::PiiKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coarse severity tier derived from which PII kinds were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// At least one of CPF, CNPJ or Email present
    Alto,
    /// Anything else, including "no PII at all"
    Baixo,
}

impl RiskLevel {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alto => "Alto",
            Self::Baixo => "Baixo",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Row-level classification label consumed by reporting collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// The record contains personal data
    #[serde(rename = "PRIVADO")]
    Privado,
    /// The record is safe to publish as-is
    #[serde(rename = "PUBLICO")]
    Publico,
}

impl Classification {
    /// Label as written into reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Privado => "PRIVADO",
            Self::Publico => "PUBLICO",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-kind record of matched PII substrings.
///
/// Invariants: a kind is present only if at least one occurrence survived
/// all filters for that kind; value lists are never empty and never contain
/// duplicates; within a kind, first-occurrence order is preserved. Iteration
/// follows [`PiiKind`] declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceMap {
    entries: BTreeMap<PiiKind, Vec<String>>,
}

impl EvidenceMap {
    /// Create an empty evidence map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched substring under a kind, collapsing duplicates.
    pub fn insert(&mut self, kind: PiiKind, value: impl Into<String>) {
        let value = value.into();
        let values = self.entries.entry(kind).or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Record a sequence of matches under a kind. Empty input inserts nothing,
    /// preserving the "no empty value lists" invariant.
    pub fn insert_all<I, S>(&mut self, kind: PiiKind, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.insert(kind, value);
        }
    }

    /// Number of distinct kinds present (the evidence score).
    pub fn score(&self) -> usize {
        self.entries.len()
    }

    /// True when no kind survived filtering.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the given kind has surviving evidence.
    pub fn contains(&self, kind: PiiKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Matches recorded for a kind, if any.
    pub fn get(&self, kind: PiiKind) -> Option<&[String]> {
        self.entries.get(&kind).map(|v| v.as_slice())
    }

    /// Iterate kinds and their matches in evidence-map order.
    pub fn iter(&self) -> impl Iterator<Item = (PiiKind, &[String])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Whether any present kind alone raises the risk tier.
    pub fn has_high_risk_kind(&self) -> bool {
        self.entries.keys().any(|k| k.high_risk())
    }

    /// Human-readable evidence string: `"{kind}: {comma-separated matches}"`
    /// per kind, joined with `" | "`, in map iteration order.
    pub fn display_string(&self) -> String {
        self.entries
            .iter()
            .map(|(kind, values)| format!("{}: {}", kind.label(), values.join(", ")))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Outcome of analyzing a single text record.
///
/// Created fresh per input, immutable once returned. The detector holds the
/// only shared state (compiled patterns), which is read-only after
/// construction, so results may be produced concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Whether the record contains personal data
    pub contains_pii: bool,
    /// Severity tier derived from the evidence kinds
    pub risk_level: RiskLevel,
    /// Surviving evidence per kind
    pub evidence: EvidenceMap,
}

impl AnalysisResult {
    /// The terminal "nothing found" result, used for blank input.
    pub fn empty() -> Self {
        Self {
            contains_pii: false,
            risk_level: RiskLevel::Baixo,
            evidence: EvidenceMap::new(),
        }
    }

    /// Classification label derived from `contains_pii`.
    pub fn classification(&self) -> Classification {
        if self.contains_pii {
            Classification::Privado
        } else {
            Classification::Publico
        }
    }

    /// Evidence string for reports; empty when nothing was found.
    pub fn evidence_display(&self) -> String {
        self.evidence.display_string()
    }
}

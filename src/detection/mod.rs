//! PII detection pipeline
//!
//! The [`Detector`] runs the layered pipeline over a single text record:
//! structured patterns, checksum gating for numeric identifiers, name
//! finding (NER capability or heuristic), and the evidence-weighting
//! decision that produces an [`AnalysisResult`].
//!
//! # Thread Safety
//!
//! A detector is immutable after construction (compiled patterns, loaded
//! gazetteer, denylist), so one instance behind an `Arc` can serve
//! concurrent analyses. Each call owns its evidence map; no state is shared
//! between calls.
//!
//! # Examples
//!
//! ```
//! use sigilo::detection::{Detector, DetectionConfig};
//!
//! # fn example() -> sigilo::domain::Result<()> {
//! let detector = Detector::new(&DetectionConfig::default())?;
//! let result = detector.analyze("Entre em contato pelo e-mail suporte@empresa.com.br");
//! assert!(result.contains_pii);
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod config;
pub mod names;
pub mod patterns;

pub use config::DetectionConfig;

use crate::domain::{AnalysisResult, EvidenceMap, PiiKind, Result, RiskLevel};
use names::{Denylist, NameFinder};
use patterns::PatternCatalog;

/// Layered PII detector.
pub struct Detector {
    catalog: PatternCatalog,
    names: NameFinder,
    strict_names: bool,
}

impl Detector {
    /// Construct a detector from configuration.
    ///
    /// Compiles the pattern catalog (built-in or custom library) and probes
    /// the NER capability once. A malformed pattern library is a fatal
    /// construction error; an unavailable NER model is not.
    pub fn new(config: &DetectionConfig) -> Result<Self> {
        config.validate()?;

        let catalog = match config.pattern_library {
            Some(ref path) => PatternCatalog::from_file(path)?,
            None => PatternCatalog::default_patterns()?,
        };

        let denylist = Denylist::with_extra_entries(config.denylist.iter().cloned());
        let names = NameFinder::new(config.model_dir.as_deref(), config.model_size, denylist)?;

        Ok(Self {
            catalog,
            names,
            strict_names: config.strict_names,
        })
    }

    /// Whether the external NER capability was acquired at construction.
    pub fn ner_available(&self) -> bool {
        self.names.ner_available()
    }

    /// Analyze one text record.
    ///
    /// Pure function of the input: no retries, no per-call state, never
    /// fails on degenerate input. Blank text is a terminal legitimate case.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::empty();
        }

        let mut evidence = EvidenceMap::new();

        for pattern in self.catalog.all_patterns() {
            let mut matches = pattern.find_matches(text);
            if let Some(validator) = pattern.validator {
                matches.retain(|m| validator.validate(m));
            }
            evidence.insert_all(pattern.kind, matches);
        }

        evidence.insert_all(PiiKind::Nomes, self.names.find_names(text));

        let score = evidence.score();
        let isolated_name = score == 1 && evidence.contains(PiiKind::Nomes);
        let contains_pii = score >= 1 && !(isolated_name && !self.strict_names);

        let risk_level = if contains_pii && evidence.has_high_risk_kind() {
            RiskLevel::Alto
        } else {
            RiskLevel::Baixo
        };

        AnalysisResult {
            contains_pii,
            risk_level,
            evidence,
        }
    }
}

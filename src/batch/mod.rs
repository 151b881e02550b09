//! Batch classification
//!
//! Runs the detector over many records and collects per-record labels plus
//! a run summary. Rows are independent: no ordering dependency, no shared
//! mutable accumulator during analysis, so the loop is fail-safe — a record
//! that cannot be audited is logged and skipped, never aborts the run.

use crate::audit::AuditLogger;
use crate::detection::Detector;
use crate::domain::{AnalysisResult, Classification, RiskLevel};
use crate::text;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One classified record, carrying the report columns collaborators append.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRecord {
    /// Stable record identifier (input line number for text input)
    pub record_id: String,
    /// PRIVADO / PUBLICO label
    pub classification: Classification,
    /// Risk tier
    pub risk_level: RiskLevel,
    /// Human-readable evidence string, empty when nothing was found
    pub evidence: String,
    /// Full analysis result for machine consumers
    pub result: AnalysisResult,
}

/// Summary of a classification run.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationSummary {
    /// Records processed
    pub total: usize,
    /// Records classified PRIVADO
    pub privados: usize,
    /// Records classified PUBLICO
    pub publicos: usize,
    /// Records at risk tier Alto
    pub alto_risco: usize,
    /// Wall-clock duration of the run
    #[serde(skip)]
    pub duration: Duration,
}

impl ClassificationSummary {
    fn new() -> Self {
        Self {
            total: 0,
            privados: 0,
            publicos: 0,
            alto_risco: 0,
            duration: Duration::from_secs(0),
        }
    }

    fn record(&mut self, result: &AnalysisResult) {
        self.total += 1;
        match result.classification() {
            Classification::Privado => self.privados += 1,
            Classification::Publico => self.publicos += 1,
        }
        if result.risk_level == RiskLevel::Alto {
            self.alto_risco += 1;
        }
    }
}

/// Batch runner over a shared detector.
pub struct BatchClassifier {
    detector: Arc<Detector>,
    audit: Option<AuditLogger>,
}

impl BatchClassifier {
    pub fn new(detector: Arc<Detector>, audit: Option<AuditLogger>) -> Self {
        Self { detector, audit }
    }

    /// Classify every record, in input order.
    ///
    /// Each text is whitespace-normalized before analysis. Record ids are
    /// 1-based input positions.
    pub fn classify_all<I, S>(&self, records: I) -> (Vec<ClassifiedRecord>, ClassificationSummary)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut classified = Vec::new();
        let mut summary = ClassificationSummary::new();

        for (index, record) in records.into_iter().enumerate() {
            let record_id = (index + 1).to_string();
            let cleaned = text::normalize(record.as_ref());
            let result = self.detector.analyze(&cleaned);

            if let Some(ref audit) = self.audit {
                if let Err(e) = audit.log_classification(&record_id, &result) {
                    tracing::error!(record_id = %record_id, error = %e, "Audit write failed");
                }
            }

            summary.record(&result);
            classified.push(ClassifiedRecord {
                record_id,
                classification: result.classification(),
                risk_level: result.risk_level,
                evidence: result.evidence_display(),
                result,
            });
        }

        summary.duration = start.elapsed();
        tracing::info!(
            total = summary.total,
            privados = summary.privados,
            publicos = summary.publicos,
            alto_risco = summary.alto_risco,
            "Classification run finished"
        );

        (classified, summary)
    }
}

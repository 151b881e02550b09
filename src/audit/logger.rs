//! Audit logger for classification decisions

use crate::domain::{AnalysisResult, Result, SigiloError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Audit logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines format; plain text otherwise
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/classification.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

/// Audit log entry for one classified record.
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    run_id: String,
    record_id: String,
    classification: String,
    risk_level: String,
    evidence_kinds: usize,
    evidence: Vec<AuditEvidence>,
}

/// Hashed evidence entry.
#[derive(Debug, Serialize)]
struct AuditEvidence {
    kind: String,
    /// SHA-256 hashes of matched values (never plaintext PII)
    value_hashes: Vec<String>,
}

/// Append-only audit logger, scoped to one run.
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
    run_id: Uuid,
}

impl AuditLogger {
    /// Create a logger from configuration, assigning a fresh run id.
    pub fn new(config: &AuditConfig) -> Result<Self> {
        if config.enabled {
            if let Some(parent) = config.log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SigiloError::Audit(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path: config.log_path.clone(),
            json_format: config.json_format,
            enabled: config.enabled,
            run_id: Uuid::new_v4(),
        })
    }

    /// Identifier shared by all entries of this run.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Log one classification decision. A disabled logger is a no-op.
    pub fn log_classification(&self, record_id: &str, result: &AnalysisResult) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            run_id: self.run_id.to_string(),
            record_id: record_id.to_string(),
            classification: result.classification().label().to_string(),
            risk_level: result.risk_level.label().to_string(),
            evidence_kinds: result.evidence.score(),
            evidence: result
                .evidence
                .iter()
                .map(|(kind, values)| AuditEvidence {
                    kind: kind.label().to_string(),
                    value_hashes: values.iter().map(|v| hash_value(v)).collect(),
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                SigiloError::Audit(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)
                .map_err(|e| SigiloError::Audit(format!("Failed to serialize audit entry: {e}")))?;
            writeln!(file, "{json_line}")
                .map_err(|e| SigiloError::Audit(format!("Failed to write audit entry: {e}")))?;
        } else {
            writeln!(
                file,
                "[{}] run={} record={} classification={} risk={} kinds={}",
                entry.timestamp,
                entry.run_id,
                entry.record_id,
                entry.classification,
                entry.risk_level,
                entry.evidence_kinds
            )
            .map_err(|e| SigiloError::Audit(format!("Failed to write audit entry: {e}")))?;
        }

        Ok(())
    }
}

/// SHA-256 hash, hex-encoded.
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{DetectionConfig, Detector};
    use tempfile::tempdir;

    fn enabled_config(log_path: PathBuf) -> AuditConfig {
        AuditConfig {
            enabled: true,
            log_path,
            json_format: true,
        }
    }

    #[test]
    fn test_hash_value_is_stable() {
        assert_eq!(hash_value("a@b.com"), hash_value("a@b.com"));
        assert_ne!(hash_value("a@b.com"), hash_value("c@d.com"));
        assert_eq!(hash_value("x").len(), 64);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(&AuditConfig {
            enabled: false,
            log_path: log_path.clone(),
            json_format: true,
        })
        .unwrap();

        let result = crate::domain::AnalysisResult::empty();
        logger.log_classification("rec-1", &result).unwrap();
        assert!(!log_path.exists());
    }

    #[test]
    fn test_log_entry_contains_no_plaintext_pii() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(&enabled_config(log_path.clone())).unwrap();

        let detector = Detector::new(&DetectionConfig::default()).unwrap();
        let result = detector.analyze("Contato: suporte@empresa.com.br");
        logger.log_classification("rec-7", &result).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("rec-7"));
        assert!(content.contains("PRIVADO"));
        assert!(content.contains("Email"));
        assert!(!content.contains("suporte@empresa.com.br"));
    }

    #[test]
    fn test_entries_share_run_id() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(&enabled_config(log_path.clone())).unwrap();

        let result = crate::domain::AnalysisResult::empty();
        logger.log_classification("a", &result).unwrap();
        logger.log_classification("b", &result).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let run_id = logger.run_id().to_string();
        assert_eq!(content.matches(&run_id).count(), 2);
    }
}

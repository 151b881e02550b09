//! Analyze command implementation
//!
//! Classifies text supplied as an argument, read from a UTF-8 file, or
//! piped through stdin. With `--lines` every input line is one record and
//! the output is tabular (or JSON lines with `--json`); otherwise the whole
//! input is a single record.

use crate::audit::AuditLogger;
use crate::batch::{BatchClassifier, ClassifiedRecord, ClassificationSummary};
use crate::config::{load_config, SigiloConfig};
use crate::detection::Detector;
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze; reads stdin when omitted
    pub text: Option<String>,

    /// Read input from a UTF-8 text file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Treat each input line as one record
    #[arg(long)]
    pub lines: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config_or_default(config_path);

        let detector = Arc::new(Detector::new(&config.detection)?);
        tracing::info!(
            ner_available = detector.ner_available(),
            strict_names = config.detection.strict_names,
            "Detector ready"
        );

        let audit = if config.audit.enabled {
            Some(AuditLogger::new(&config.audit)?)
        } else {
            None
        };

        let input = self.read_input()?;
        let records: Vec<String> = if self.lines {
            input
                .lines()
                .map(str::to_string)
                .filter(|l| !l.trim().is_empty())
                .collect()
        } else {
            vec![input]
        };

        let classifier = BatchClassifier::new(detector, audit);
        let (classified, summary) = classifier.classify_all(&records);

        if self.json {
            self.print_json(&classified, &summary)?;
        } else {
            self.print_human(&classified, &summary);
        }

        Ok(0)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }
        if let Some(ref path) = self.file {
            return Ok(std::fs::read_to_string(path)?);
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }

    fn print_json(
        &self,
        classified: &[ClassifiedRecord],
        summary: &ClassificationSummary,
    ) -> anyhow::Result<()> {
        if self.lines {
            for record in classified {
                println!("{}", serde_json::to_string(record)?);
            }
            println!("{}", serde_json::to_string(summary)?);
        } else if let Some(record) = classified.first() {
            println!("{}", serde_json::to_string_pretty(&record.result)?);
        }
        Ok(())
    }

    fn print_human(&self, classified: &[ClassifiedRecord], summary: &ClassificationSummary) {
        if self.lines {
            for record in classified {
                println!(
                    "{}\t{}\t{}\t{}",
                    record.record_id,
                    record.classification,
                    record.risk_level,
                    record.evidence
                );
            }
            println!();
            println!("Resumo da análise:");
            println!("  Total de registros: {}", summary.total);
            println!("  PRIVADO: {}", summary.privados);
            println!("  PUBLICO: {}", summary.publicos);
            println!("  Risco Alto: {}", summary.alto_risco);
        } else if let Some(record) = classified.first() {
            println!("Classificação: {}", record.classification);
            println!("Nível de risco: {}", record.risk_level);
            if record.evidence.is_empty() {
                println!("Evidências: (nenhuma)");
            } else {
                println!("Evidências: {}", record.evidence);
            }
        }
    }
}

/// Load the configuration file when it exists, defaults otherwise, so the
/// tool works out of the box without an init step.
fn load_config_or_default(config_path: &str) -> SigiloConfig {
    if Path::new(config_path).exists() {
        match load_config(config_path) {
            Ok(config) => return config,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load configuration, using defaults");
            }
        }
    } else {
        tracing::debug!(config_path, "No configuration file, using defaults");
    }
    SigiloConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_inline_text() {
        let args = AnalyzeArgs {
            text: Some("Meu CPF é 123.456.789-09".to_string()),
            file: None,
            lines: false,
            json: false,
        };
        let exit = args.execute("nonexistent-sigilo.toml").await.unwrap();
        assert_eq!(exit, 0);
    }

    #[tokio::test]
    async fn test_analyze_file_lines() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Contato via teste@exemplo.com.br").unwrap();
        writeln!(file, "Como acessar o portal?").unwrap();
        file.flush().unwrap();

        let args = AnalyzeArgs {
            text: None,
            file: Some(file.path().to_path_buf()),
            lines: true,
            json: true,
        };
        let exit = args.execute("nonexistent-sigilo.toml").await.unwrap();
        assert_eq!(exit, 0);
    }
}

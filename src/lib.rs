// Sigilo - PII detection for public-information requests
// Copyright (c) 2025 Sigilo Contributors
// Licensed under the MIT License

//! # Sigilo - PII detection for public-information requests
//!
//! Sigilo classifies free-text records as containing Personally
//! Identifiable Information or not, producing machine- and human-readable
//! evidence for every decision.
//!
//! ## Overview
//!
//! Detection is layered:
//! - **Structured patterns** find candidates for numeric identifiers,
//!   e-mail, phone, address and financial context
//! - **Checksum validators** reject look-alike numbers for the two
//!   checksummed identifier kinds (CPF, CNPJ)
//! - **Name finding** uses an optional gazetteer NER capability with a
//!   guaranteed capitalization-heuristic fallback, both filtered by an
//!   institutional-phrase denylist
//! - **Evidence weighting** aggregates the per-kind findings into a binary
//!   decision and a risk tier, suppressing low-confidence single-signal
//!   cases
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - The detection pipeline (patterns, checksums, names)
//! - [`batch`] - Batch classification over many records
//! - [`audit`] - Hashed audit trail of classification decisions
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`text`] - Input cleanup
//!
//! ## Quick Start
//!
//! ```rust
//! use sigilo::detection::{DetectionConfig, Detector};
//!
//! # fn main() -> sigilo::domain::Result<()> {
//! let detector = Detector::new(&DetectionConfig::default())?;
//!
//! let result = detector.analyze("O CPF do cliente é 123.456.789-09.");
//! assert!(result.contains_pii);
//! println!("{}: {}", result.classification(), result.evidence_display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! A [`detection::Detector`] is immutable after construction. Share one
//! instance behind an `Arc` and call `analyze` from as many threads as
//! needed; every call owns its result.
//!
//! ## Error Handling
//!
//! Construction-time defects (malformed pattern libraries, invalid
//! configuration) fail loudly with [`domain::SigiloError`]. Analysis never
//! fails: blank or degenerate input yields the "no PII" result, and an
//! unavailable NER model silently downgrades name finding to the heuristic.

pub mod audit;
pub mod batch;
pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod logging;
pub mod text;

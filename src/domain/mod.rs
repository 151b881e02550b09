//! Domain models and types for Sigilo.
//!
//! This module contains the core domain types shared by the detection
//! pipeline and its callers:
//!
//! - **PII kinds** ([`PiiKind`]) — the label set evidence is keyed by
//! - **Analysis results** ([`AnalysisResult`], [`EvidenceMap`], [`RiskLevel`],
//!   [`Classification`])
//! - **Error types** ([`SigiloError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SigiloError>`]:
//!
//! ```rust
//! use sigilo::domain::{Result, SigiloError};
//!
//! fn example() -> Result<()> {
//!     Err(SigiloError::Configuration("missing section".to_string()))
//! }
//! ```

pub mod analysis;
pub mod errors;
pub mod kind;
pub mod result;

// Re-export commonly used types for convenience
pub use analysis::{AnalysisResult, Classification, EvidenceMap, RiskLevel};
pub use errors::SigiloError;
pub use kind::PiiKind;
pub use result::Result;

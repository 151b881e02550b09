//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Runtime analysis never fails on well-formed or degenerate string input;
//! the variants here cover construction-time defects (bad patterns, bad
//! configuration) and the I/O surface around the core.

use thiserror::Error;

/// Main Sigilo error type
#[derive(Debug, Error)]
pub enum SigiloError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library compilation errors (construction-time, fatal)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// NER model loading errors. Never propagated out of detector
    /// construction; recorded so the capability probe can log the cause.
    #[error("Model error: {0}")]
    Model(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SigiloError {
    fn from(err: std::io::Error) -> Self {
        SigiloError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SigiloError {
    fn from(err: serde_json::Error) -> Self {
        SigiloError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SigiloError {
    fn from(err: toml::de::Error) -> Self {
        SigiloError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SigiloError::Configuration("missing section".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing section");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SigiloError = io_err.into();
        assert!(matches!(err, SigiloError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: SigiloError = json_err.into();
        assert!(matches!(err, SigiloError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("a = b = c").unwrap_err();
        let err: SigiloError = toml_err.into();
        assert!(matches!(err, SigiloError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_implements_std_error() {
        let err = SigiloError::Pattern("bad regex".to_string());
        let _: &dyn std::error::Error = &err;
    }
}

//! Result type alias for Sigilo

use super::errors::SigiloError;

/// Result type alias for Sigilo operations
///
/// Convenience alias using [`SigiloError`] as the error type. Use this
/// throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, SigiloError>;

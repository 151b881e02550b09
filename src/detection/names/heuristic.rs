//! Capitalization-pattern name heuristic
//!
//! Matches runs of two or more capitalized tokens. The negative lookbehind
//! rejects phrases sitting right after sentence-ending punctuation, so the
//! leading capitalized word of a sentence is not mistaken for a name. This
//! needs `fancy-regex`; the plain `regex` engine has no lookbehind.

use crate::domain::{Result, SigiloError};
use fancy_regex::Regex;

const NAME_PATTERN: &str =
    r"(?<![.!?]\s)\b[A-ZÀ-ÖØ-Þ][a-zà-öø-ÿ]+(?:\s[A-ZÀ-ÖØ-Þ][a-zà-öø-ÿ]+)+\b";

/// Heuristic finder for multi-token proper names.
pub struct NameHeuristic {
    pattern: Regex,
}

impl NameHeuristic {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(NAME_PATTERN)
            .map_err(|e| SigiloError::Pattern(format!("Invalid name heuristic pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// Candidate name phrases in order of appearance, before denylist
    /// filtering. Degenerate input yields an empty sequence.
    pub fn candidates(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| m.ok())
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

//! Text cleanup ahead of detection
//!
//! Detection expects whitespace-normalized input; records arriving from
//! files or user input carry line breaks and padding that would split
//! matches across the keyword-gated patterns.

/// Collapse line breaks and runs of whitespace into single spaces and trim.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_line_breaks_and_runs() {
        assert_eq!(
            normalize("Rua das\nFlores,   123\r\n apto 4"),
            "Rua das Flores, 123 apto 4"
        );
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize("  texto  "), "texto");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }
}

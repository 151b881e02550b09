//! PII kind labels
//!
//! The kind set is fixed: structured identifiers validated by regex (and
//! checksum where applicable), plus the two unstructured kinds produced by
//! name finding and sensitive-context matching.

use serde::{Deserialize, Serialize};

/// Kind of personally identifiable information backing a piece of evidence.
///
/// Variant order is significant: it is the iteration order of
/// [`EvidenceMap`](crate::domain::EvidenceMap) and therefore the order kinds
/// appear in the human-readable evidence string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PiiKind {
    /// Brazilian individual taxpayer number (11 digits, two check digits)
    #[serde(rename = "CPF")]
    Cpf,
    /// Brazilian legal-entity registry number (14 digits, two check digits)
    #[serde(rename = "CNPJ")]
    Cnpj,
    /// E-mail address
    Email,
    /// Fixed or mobile phone number
    Telefone,
    /// State identity card number, label-gated ("RG"/"Identidade")
    #[serde(rename = "RG")]
    Rg,
    /// Street address (street-type keyword followed by a number)
    Endereco,
    /// Banking context followed by a numeric token
    Financeiro,
    /// Person names (heuristic or NER)
    Nomes,
    /// Health-related sensitive context keywords
    Sensivel,
}

impl PiiKind {
    /// All kinds, in evidence-map order.
    pub const ALL: [PiiKind; 9] = [
        PiiKind::Cpf,
        PiiKind::Cnpj,
        PiiKind::Email,
        PiiKind::Telefone,
        PiiKind::Rg,
        PiiKind::Endereco,
        PiiKind::Financeiro,
        PiiKind::Nomes,
        PiiKind::Sensivel,
    ];

    /// Human-readable label used in evidence strings and serialized output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Email => "Email",
            Self::Telefone => "Telefone",
            Self::Rg => "RG",
            Self::Endereco => "Endereco",
            Self::Financeiro => "Financeiro",
            Self::Nomes => "Nomes",
            Self::Sensivel => "Sensivel",
        }
    }

    /// Whether matches of this kind must pass a checksum before counting
    /// as evidence.
    pub fn checksum_gated(&self) -> bool {
        matches!(self, Self::Cpf | Self::Cnpj)
    }

    /// Whether presence of this kind alone raises the risk tier to Alto.
    pub fn high_risk(&self) -> bool {
        matches!(self, Self::Cpf | Self::Cnpj | Self::Email)
    }

    /// Parse a kind from its label, as used in pattern library files.
    pub fn parse_label(s: &str) -> Option<PiiKind> {
        match s.to_uppercase().as_str() {
            "CPF" => Some(Self::Cpf),
            "CNPJ" => Some(Self::Cnpj),
            "EMAIL" => Some(Self::Email),
            "TELEFONE" => Some(Self::Telefone),
            "RG" => Some(Self::Rg),
            "ENDERECO" => Some(Self::Endereco),
            "FINANCEIRO" => Some(Self::Financeiro),
            "NOMES" => Some(Self::Nomes),
            "SENSIVEL" => Some(Self::Sensivel),
            _ => None,
        }
    }
}

impl std::fmt::Display for PiiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for kind in PiiKind::ALL {
            assert_eq!(PiiKind::parse_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn test_parse_label_case_insensitive() {
        assert_eq!(PiiKind::parse_label("cpf"), Some(PiiKind::Cpf));
        assert_eq!(PiiKind::parse_label("Sensivel"), Some(PiiKind::Sensivel));
        assert_eq!(PiiKind::parse_label("unknown"), None);
    }

    #[test]
    fn test_ordering_matches_all() {
        let mut sorted = PiiKind::ALL;
        sorted.sort();
        assert_eq!(sorted, PiiKind::ALL);
    }

    #[test]
    fn test_high_risk_kinds() {
        assert!(PiiKind::Cpf.high_risk());
        assert!(PiiKind::Cnpj.high_risk());
        assert!(PiiKind::Email.high_risk());
        assert!(!PiiKind::Nomes.high_risk());
        assert!(!PiiKind::Telefone.high_risk());
    }
}

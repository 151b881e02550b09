//! Edge case tests for the detection pipeline

use sigilo::detection::{DetectionConfig, Detector};
use sigilo::domain::{PiiKind, RiskLevel};
use std::io::Write;
use std::sync::Arc;

fn detector() -> Detector {
    Detector::new(&DetectionConfig::default()).expect("Failed to create detector")
}

#[test]
fn test_blank_variants() {
    let detector = detector();
    for text in ["", " ", "\t", "\n\n", "   \r\n "] {
        let result = detector.analyze(text);
        assert!(!result.contains_pii);
        assert!(result.evidence.is_empty());
        assert_eq!(result.risk_level, RiskLevel::Baixo);
    }
}

#[test]
fn test_very_long_text() {
    let padding = "consulta pública sobre transparência ".repeat(2_000);
    let text = format!("{padding}contato: alguem@orgao.gov.br {padding}");

    let result = detector().analyze(&text);
    assert!(result.contains_pii);
    assert_eq!(
        result.evidence.get(PiiKind::Email),
        Some(&["alguem@orgao.gov.br".to_string()][..])
    );
}

#[test]
fn test_multiple_values_same_kind_keep_first_occurrence_order() {
    let result = detector()
        .analyze("Contatos: primeiro@orgao.gov.br, segundo@orgao.gov.br, primeiro@orgao.gov.br");

    assert_eq!(
        result.evidence.get(PiiKind::Email),
        Some(
            &[
                "primeiro@orgao.gov.br".to_string(),
                "segundo@orgao.gov.br".to_string()
            ][..]
        )
    );
}

#[test]
fn test_cpf_without_separators_still_validates() {
    let result = detector().analyze("CPF 12345678909 sem pontos");
    assert_eq!(
        result.evidence.get(PiiKind::Cpf),
        Some(&["12345678909".to_string()][..])
    );
    assert_eq!(result.risk_level, RiskLevel::Alto);
}

#[test]
fn test_unseparated_cnpj_is_not_matched() {
    // The CNPJ pattern requires the canonical separators
    let result = detector().analyze("cadastro 11222333000181 informado");
    assert!(!result.evidence.contains(PiiKind::Cnpj));
}

#[test]
fn test_rg_requires_label() {
    let detector = detector();

    let labeled = detector.analyze("Identidade 1234567");
    assert!(labeled.evidence.contains(PiiKind::Rg));

    let unlabeled = detector.analyze("documento 1234567");
    assert!(!unlabeled.evidence.contains(PiiKind::Rg));
}

#[test]
fn test_denylisted_phrases_are_not_names() {
    let detector = detector();

    let result = detector.analyze("Encaminhado ao Ministério Público conforme a lei.");
    assert!(!result.evidence.contains(PiiKind::Nomes));
    assert!(!result.contains_pii);
}

#[test]
fn test_custom_denylist_entry() {
    let config = DetectionConfig {
        denylist: vec!["Ouvidoria Geral".to_string()],
        ..Default::default()
    };
    let detector = Detector::new(&config).unwrap();

    let result = detector.analyze("Resposta emitida pela Ouvidoria Geral ontem.");
    assert!(!result.evidence.contains(PiiKind::Nomes));
}

#[test]
fn test_custom_pattern_library() {
    let dir = tempfile::tempdir().unwrap();
    let library_path = dir.path().join("patterns.toml");
    let mut file = std::fs::File::create(&library_path).unwrap();
    write!(
        file,
        r#"
[patterns.email]
kind = "Email"
pattern = '\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{{2,}}\b'
"#
    )
    .unwrap();

    let config = DetectionConfig {
        pattern_library: Some(library_path),
        ..Default::default()
    };
    let detector = Detector::new(&config).unwrap();

    // Only the email pattern exists in the custom library
    let email = detector.analyze("contato a@b.com");
    assert!(email.evidence.contains(PiiKind::Email));

    let cpf = detector.analyze("CPF 123.456.789-09");
    assert!(!cpf.evidence.contains(PiiKind::Cpf));
}

#[test]
fn test_broken_pattern_library_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let library_path = dir.path().join("patterns.toml");
    std::fs::write(
        &library_path,
        "[patterns.bad]\nkind = \"Email\"\npattern = '('\n",
    )
    .unwrap();

    let config = DetectionConfig {
        pattern_library: Some(library_path),
        ..Default::default()
    };
    assert!(Detector::new(&config).is_err());
}

#[test]
fn test_missing_ner_model_downgrades_silently() {
    let dir = tempfile::tempdir().unwrap();
    let config = DetectionConfig {
        model_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    // Construction succeeds; the capability flag records the downgrade
    let detector = Detector::new(&config).unwrap();
    assert!(!detector.ner_available());

    // Heuristic fallback still finds names
    let result = detector.analyze("Pedido aberto por Maria Oliveira e João Silva, ambos citados.");
    let names = result.evidence.get(PiiKind::Nomes).unwrap();
    assert!(names.contains(&"Maria Oliveira".to_string()));
    assert!(names.contains(&"João Silva".to_string()));
}

#[test]
fn test_ner_model_is_used_when_present() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ner-small.json"),
        r#"{"given_names": ["maria"], "surnames": ["oliveira"]}"#,
    )
    .unwrap();

    let config = DetectionConfig {
        model_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let detector = Detector::new(&config).unwrap();
    assert!(detector.ner_available());

    // "Edifício Anexo" is a capitalized run the heuristic would flag, but
    // no token of it is in the gazetteer
    let result = detector.analyze("Maria Oliveira esteve no Edifício Anexo.");
    assert_eq!(
        result.evidence.get(PiiKind::Nomes),
        Some(&["Maria Oliveira".to_string()][..])
    );
}

#[test]
fn test_concurrent_analyses_agree() {
    let detector = Arc::new(detector());
    let text = "O usuário João Silva, portador do CPF 123.456.789-09, solicitou acesso.";
    let expected = detector.analyze(text);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let detector = Arc::clone(&detector);
            let text = text.to_string();
            std::thread::spawn(move || detector.analyze(&text))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

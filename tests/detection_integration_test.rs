//! End-to-end detection scenarios

use sigilo::detection::{DetectionConfig, Detector};
use sigilo::domain::{Classification, PiiKind, RiskLevel};

fn detector() -> Detector {
    Detector::new(&DetectionConfig::default()).expect("Failed to create detector")
}

#[test]
fn test_cpf_with_name_is_private_and_high_risk() {
    let result =
        detector().analyze("O usuário João Silva, portador do CPF 123.456.789-09, solicitou acesso.");

    assert!(result.contains_pii);
    assert_eq!(result.risk_level, RiskLevel::Alto);
    assert_eq!(
        result.evidence.get(PiiKind::Cpf),
        Some(&["123.456.789-09".to_string()][..])
    );
}

#[test]
fn test_isolated_name_is_a_citation() {
    let result = detector().analyze("Relatório técnico assinado por João Silva.");

    assert!(!result.contains_pii);
    assert_eq!(result.risk_level, RiskLevel::Baixo);
    assert_eq!(result.classification(), Classification::Publico);
    // The name is still reported as evidence; only the decision is suppressed
    assert!(result.evidence.contains(PiiKind::Nomes));
}

#[test]
fn test_email_contact_is_private() {
    let result = detector().analyze("Entre em contato pelo e-mail suporte@empresa.com.br");

    assert!(result.contains_pii);
    assert!(result.evidence.contains(PiiKind::Email));
    assert_eq!(result.risk_level, RiskLevel::Alto);
}

#[test]
fn test_empty_string_is_terminal_publico() {
    let result = detector().analyze("");

    assert!(!result.contains_pii);
    assert_eq!(result.risk_level, RiskLevel::Baixo);
    assert!(result.evidence.is_empty());
}

#[test]
fn test_real_positives_by_kind() {
    let detector = detector();
    let cases = [
        ("O CPF do cliente é 123.456.789-09.", PiiKind::Cpf),
        ("Entre em contato pelo e-mail suporte@empresa.com.br", PiiKind::Email),
        ("A empresa detentora é o CNPJ 11.222.333/0001-81.", PiiKind::Cnpj),
        ("Ligar para (61) 98888-7777 para confirmar os dados.", PiiKind::Telefone),
        ("Portador do RG 1.234.567-X conforme anexo.", PiiKind::Rg),
        ("Moro na Rua das Flores, 123", PiiKind::Endereco),
        ("Pagamento via PIX chave 98765432100", PiiKind::Financeiro),
        ("Solicito meu laudo médico de ontem", PiiKind::Sensivel),
    ];

    for (text, kind) in cases {
        let result = detector.analyze(text);
        assert!(result.contains_pii, "should detect PII in: {text}");
        assert!(
            result.evidence.contains(kind),
            "should identify {kind} in: {text}"
        );
    }
}

#[test]
fn test_technical_false_positives_stay_publico() {
    let detector = detector();
    let safe_texts = [
        "O processo SEI nº 00001-00005678/2023-11 foi atualizado.",
        "A temperatura da caldeira atingiu 120.345.678 graus.",
        "Relatório técnico assinado por João Silva.",
        "Acesse o banco de dados da Prefeitura de Brasília.",
        "Gostaria de solicitar informações sobre o orçamento da transparência.",
        "Como faço para acessar o portal da transparência?",
    ];

    for text in safe_texts {
        let result = detector.analyze(text);
        assert!(!result.contains_pii, "false positive on: {text}");
    }
}

#[test]
fn test_risk_law() {
    let detector = detector();

    // contains_pii with a high-risk kind -> Alto
    let high = detector.analyze("CNPJ 11.222.333/0001-81 da empresa.");
    assert!(high.contains_pii);
    assert_eq!(high.risk_level, RiskLevel::Alto);

    // contains_pii without high-risk kinds -> Baixo
    let low = detector.analyze("Moro na Rua das Flores, 123");
    assert!(low.contains_pii);
    assert_eq!(low.risk_level, RiskLevel::Baixo);

    // no PII -> Baixo
    let none = detector.analyze("Qual o horário de atendimento?");
    assert!(!none.contains_pii);
    assert_eq!(none.risk_level, RiskLevel::Baixo);
}

#[test]
fn test_suppression_requires_isolation() {
    let detector = detector();

    // Name plus a corroborating signal is not suppressed
    let result = detector.analyze("João Silva mora na Avenida Central nº 500.");
    assert!(result.contains_pii);
    assert!(result.evidence.contains(PiiKind::Nomes));
    assert!(result.evidence.contains(PiiKind::Endereco));
}

#[test]
fn test_analyze_is_idempotent() {
    let detector = detector();
    let text = "O usuário João Silva, portador do CPF 123.456.789-09, solicitou acesso.";

    let first = detector.analyze(text);
    let second = detector.analyze(text);
    assert_eq!(first, second);
}

#[test]
fn test_checksum_gate_filters_numeric_look_alikes() {
    let detector = detector();

    // Structurally CPF-shaped, mathematically invalid
    let result = detector.analyze("Registro 111.111.111-11 arquivado.");
    assert!(!result.evidence.contains(PiiKind::Cpf));

    // Structurally CNPJ-shaped, mathematically invalid
    let result = detector.analyze("Cadastro 00.000.000/0000-00 pendente.");
    assert!(!result.evidence.contains(PiiKind::Cnpj));
}

#[test]
fn test_evidence_display_joins_kinds_in_order() {
    let result = detector()
        .analyze("João Silva, CPF 123.456.789-09, e-mail joao@exemplo.com, pede acesso.");

    let display = result.evidence_display();
    let cpf_pos = display.find("CPF:").expect("CPF missing");
    let email_pos = display.find("Email:").expect("Email missing");
    let nomes_pos = display.find("Nomes:").expect("Nomes missing");
    assert!(cpf_pos < email_pos && email_pos < nomes_pos);
    assert!(display.contains(" | "));
}

mod common;

use common::pdf_with_pages;
use mailsift::{ExtractionOutcome, extract_pdf};

#[test]
fn test_extract_single_page() {
    let bytes = pdf_with_pages(&["Relatorio mensal de vendas"]);

    let outcome = extract_pdf(&bytes);

    assert!(outcome.is_success(), "{outcome:?}");
    assert!(outcome.as_str().contains("Relatorio mensal de vendas"));
}

#[test]
fn test_pages_are_newline_joined() {
    let bytes = pdf_with_pages(&["Primeira pagina aqui", "Segunda pagina aqui"]);

    let text = extract_pdf(&bytes).into_string();

    let first = text.find("Primeira pagina aqui").unwrap();
    let second = text.find("Segunda pagina aqui").unwrap();
    assert!(first < second);
    assert!(text[first..second].contains('\n'));
    assert_eq!(text, text.trim());
}

#[test]
fn test_too_little_text() {
    let bytes = pdf_with_pages(&["Oi ok"]);

    let outcome = extract_pdf(&bytes);

    assert!(!outcome.is_success());
    assert!(outcome.as_str().contains("pouco texto encontrado"));
    assert!(outcome.as_str().contains("Oi ok"));
}

#[test]
fn test_no_pages() {
    let bytes = pdf_with_pages(&[]);

    let outcome = extract_pdf(&bytes);

    assert_eq!(
        outcome,
        ExtractionOutcome::Diagnostic("PDF processado mas pouco texto encontrado: '...'".into())
    );
}

#[test]
fn test_not_a_pdf() {
    let outcome = extract_pdf(b"definitely not a pdf document");

    assert!(outcome.is_error());
    assert!(outcome.as_str().starts_with("Erro ao extrair texto do PDF"));
}

#[test]
fn test_truncated_pdf_never_panics() {
    let bytes = pdf_with_pages(&["Conteudo que sera cortado ao meio"]);

    for cut in [8, bytes.len() / 3, bytes.len() / 2, bytes.len() - 10] {
        let outcome = extract_pdf(&bytes[..cut]);
        assert!(!outcome.as_str().is_empty());
    }
}

#[test]
fn test_empty_input() {
    let outcome = extract_pdf(&[]);
    assert!(outcome.is_error());
}

use mailsift::{AssembledContent, ContentSource, ExtractionOutcome, PipelineConfig, assemble};
use pretty_assertions::assert_eq;

fn defaults() -> PipelineConfig {
    PipelineConfig::default()
}

#[test]
fn test_length_boundary() {
    let nine = assemble(Some("123456789"), None, None, &defaults());
    let ten = assemble(Some("1234567890"), None, None, &defaults());

    assert!(!nine.valid);
    assert!(ten.valid);
    assert_eq!(ten.content, "1234567890");
}

#[test]
fn test_body_is_trimmed() {
    let content = assemble(Some("   corpo do email   \n"), None, None, &defaults());

    assert_eq!(content.content, "corpo do email");
    assert_eq!(content.source, ContentSource::Body);
}

#[test]
fn test_whitespace_padding_does_not_count() {
    let content = assemble(Some("     curto     "), None, None, &defaults());

    assert!(!content.valid);
    assert_eq!(content.source, ContentSource::Empty);
}

#[test]
fn test_file_wins_over_body() {
    let file = ExtractionOutcome::Text("Texto vindo do arquivo anexado".into());

    let content = assemble(Some("Texto digitado pelo usuario"), None, Some(&file), &defaults());

    assert_eq!(content.content, "Texto vindo do arquivo anexado");
    assert_eq!(content.source, ContentSource::File);
}

#[test]
fn test_short_file_text_falls_back_to_body() {
    let file = ExtractionOutcome::Text("curto".into());

    let content = assemble(Some("Texto digitado pelo usuario"), None, Some(&file), &defaults());

    assert_eq!(content.content, "Texto digitado pelo usuario");
    assert_eq!(content.source, ContentSource::Body);
}

#[test]
fn test_diagnostic_is_never_content() {
    let file = ExtractionOutcome::Diagnostic("Erro ao extrair texto do PDF: corrompido".into());

    let content = assemble(None, None, Some(&file), &defaults());

    assert_eq!(
        content,
        AssembledContent {
            content: String::new(),
            source: ContentSource::Empty,
            valid: false,
        }
    );
}

#[test]
fn test_subject_prefix() {
    let content = assemble(Some("Segue o relatorio em anexo"), Some("  Relatorio  "), None, &defaults());

    assert_eq!(content.content, "Assunto: Relatorio\n\nSegue o relatorio em anexo");
    assert!(content.valid);
}

#[test]
fn test_subject_alone() {
    let content = assemble(None, Some("Reuniao"), None, &defaults());

    assert_eq!(content.content, "Assunto: Reuniao");
    assert_eq!(content.source, ContentSource::Empty);
    assert!(content.valid);
}

#[test]
fn test_blank_subject_ignored() {
    let content = assemble(Some("oi"), Some("   "), None, &defaults());

    assert_eq!(content.content, "");
    assert!(!content.valid);
}

#[test]
fn test_custom_minimum() {
    let config = PipelineConfig {
        min_content_length: 30,
        ..PipelineConfig::default()
    };

    let content = assemble(Some("Texto com vinte e poucos"), None, None, &config);

    assert_eq!(content.content, "Texto com vinte e poucos");
    assert_eq!(content.source, ContentSource::Body);
    assert!(!content.valid);
}

#[test]
fn test_custom_minimum_counts_subject() {
    let config = PipelineConfig {
        min_content_length: 30,
        ..PipelineConfig::default()
    };

    let content = assemble(Some("Texto com vinte e poucos"), Some("Oi"), None, &config);

    assert_eq!(content.content, "Assunto: Oi\n\nTexto com vinte e poucos");
    assert!(content.valid);
}

#[test]
fn test_source_choice_ignores_custom_minimum() {
    let config = PipelineConfig {
        min_content_length: 5,
        ..PipelineConfig::default()
    };

    let content = assemble(Some("oi tudo"), None, None, &config);

    assert_eq!(content.content, "");
    assert_eq!(content.source, ContentSource::Empty);
    assert!(!content.valid);
}

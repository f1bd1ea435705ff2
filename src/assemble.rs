//! Merging subject, typed body and file text into one content string

use crate::config::PipelineConfig;
use crate::types::{AssembledContent, ContentSource, ExtractionOutcome};
use tracing::debug;

/// File text or body shorter than this is ignored as a content source
const MIN_SOURCE_CHARS: usize = 10;

/// Combine the pieces of a submission.
///
/// Successfully extracted file text wins over the typed body; either is used
/// only when it has at least 10 trimmed characters. A non-blank subject is
/// prefixed as an `"Assunto: "` line. The result is valid when the trimmed
/// content meets `min_content_length`.
#[must_use]
pub fn assemble(
    body: Option<&str>,
    subject: Option<&str>,
    file: Option<&ExtractionOutcome>,
    config: &PipelineConfig,
) -> AssembledContent {
    let is_usable = |text: &&str| text.chars().count() >= MIN_SOURCE_CHARS;

    let file_text = file
        .and_then(ExtractionOutcome::text)
        .map(str::trim)
        .filter(is_usable);
    let body_text = body.map(str::trim).filter(is_usable);

    let (text, source) = match (file_text, body_text) {
        (Some(text), _) => (text, ContentSource::File),
        (None, Some(text)) => (text, ContentSource::Body),
        (None, None) => ("", ContentSource::Empty),
    };

    let content = match subject.map(str::trim).filter(|s| !s.is_empty()) {
        Some(subject) if text.is_empty() => format!("Assunto: {subject}"),
        Some(subject) => format!("Assunto: {subject}\n\n{text}"),
        None => text.to_string(),
    };

    let valid = content.trim().chars().count() >= config.min_content_length;
    debug!("Assembled {} characters from {source:?}, valid: {valid}", content.len());

    AssembledContent {
        content,
        source,
        valid,
    }
}

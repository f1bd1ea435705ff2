//! End-to-end processing of one submission

use crate::assemble::assemble;
use crate::config::PipelineConfig;
use crate::decode::decode_text;
use crate::eml::extract_eml;
use crate::normalize::TextNormalizer;
use crate::pdf::extract_pdf;
use crate::sniff::sniff_format;
use crate::types::{
    AssembledContent, ExtractionOutcome, FilePayload, Format, NormalizedText, RawSubmission,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Message shown when a submission carries too little text
pub const INSUFFICIENT_CONTENT_MESSAGE: &str =
    "Nenhum conteúdo fornecido. Envie um texto ou arquivo com conteúdo válido.";

/// Short error tag paired with [`INSUFFICIENT_CONTENT_MESSAGE`]
pub const INSUFFICIENT_CONTENT_ERROR: &str = "Conteúdo insuficiente";

/// Result of processing one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// Content is ready for classification
    Ready {
        content: AssembledContent,
        normalized: NormalizedText,
        /// Outcome of the file extraction, when a file was sent
        extraction: Option<ExtractionOutcome>,
    },

    /// Not enough text to classify
    Insufficient {
        message: String,
        error: String,
        content: AssembledContent,
        extraction: Option<ExtractionOutcome>,
    },
}

impl PipelineOutcome {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    #[must_use]
    pub const fn content(&self) -> &AssembledContent {
        match self {
            Self::Ready { content, .. } | Self::Insufficient { content, .. } => content,
        }
    }

    #[must_use]
    pub const fn normalized(&self) -> Option<&NormalizedText> {
        match self {
            Self::Ready { normalized, .. } => Some(normalized),
            Self::Insufficient { .. } => None,
        }
    }

    #[must_use]
    pub const fn extraction(&self) -> Option<&ExtractionOutcome> {
        match self {
            Self::Ready { extraction, .. } | Self::Insufficient { extraction, .. } => {
                extraction.as_ref()
            }
        }
    }
}

/// Extract text from an uploaded file, dispatching on its sniffed format.
///
/// Unrecognized formats are decoded as plain text.
#[must_use]
pub fn extract_file(file: &FilePayload) -> ExtractionOutcome {
    let format = sniff_format(file.filename.as_deref(), &file.bytes);
    debug!(
        "Extracting {} bytes from {:?} as {format}",
        file.bytes.len(),
        file.filename
    );

    match format {
        Format::Pdf => extract_pdf(&file.bytes),
        Format::Eml => extract_eml(&file.bytes),
        Format::PlainText | Format::Unsupported => decoded_outcome(&file.bytes),
    }
}

fn decoded_outcome(bytes: &[u8]) -> ExtractionOutcome {
    let text = decode_text(bytes);
    if text.trim().is_empty() {
        ExtractionOutcome::Diagnostic("Erro: arquivo sem conteúdo de texto".into())
    } else {
        ExtractionOutcome::Text(text)
    }
}

/// Stateless processor; one instance can serve any number of submissions
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    normalizer: TextNormalizer,
}

impl Pipeline {
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        let normalizer = TextNormalizer::new(&config);
        Self { config, normalizer }
    }

    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Extract, assemble and normalize one submission
    #[must_use]
    pub fn process(&self, submission: &RawSubmission) -> PipelineOutcome {
        let extraction = submission.file.as_ref().map(extract_file);

        let mut content = assemble(
            submission.body.as_deref(),
            submission.subject.as_deref(),
            extraction.as_ref(),
            &self.config,
        );

        if !content.valid {
            debug!("Submission rejected: {INSUFFICIENT_CONTENT_ERROR}");
            return PipelineOutcome::Insufficient {
                message: INSUFFICIENT_CONTENT_MESSAGE.into(),
                error: INSUFFICIENT_CONTENT_ERROR.into(),
                content,
                extraction,
            };
        }

        truncate_chars(&mut content.content, self.config.max_content_length);
        let normalized = self.normalizer.normalize(&content.content);

        debug!("Token reduction: {}", normalized.token_reduction());

        PipelineOutcome::Ready {
            content,
            normalized,
            extraction,
        }
    }
}

fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((index, _)) = text.char_indices().nth(max_chars) {
        warn!(
            "Content truncated from {} to {max_chars} characters",
            text.chars().count()
        );
        text.truncate(index);
    }
}

//! Core types shared by the extraction pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parser identity chosen for an uploaded file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Pdf,
    Eml,
    PlainText,
    /// No known format; handled as a generic text decode
    Unsupported,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "pdf",
            Self::Eml => "eml",
            Self::PlainText => "text",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{name}")
    }
}

/// An uploaded file as handed over by the upload layer
#[derive(Debug, Clone, Default)]
pub struct FilePayload {
    /// Filename as sent by the client (untrusted)
    pub filename: Option<String>,

    /// Declared content type (advisory only)
    pub content_type: Option<String>,

    /// Raw file bytes
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: Some(filename.into()),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Describe this payload for format matching
    #[must_use]
    pub fn descriptor(&self) -> FileDescriptor {
        FileDescriptor::new(
            self.filename.as_deref().unwrap_or_default(),
            self.content_type.clone(),
            self.bytes.len(),
        )
    }
}

/// Input envelope for one pipeline invocation
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    /// Free-text body typed by the user
    pub body: Option<String>,

    /// Subject line typed by the user
    pub subject: Option<String>,

    /// Optional uploaded file
    pub file: Option<FilePayload>,
}

impl RawSubmission {
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn from_file(file: FilePayload) -> Self {
        Self {
            file: Some(file),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Filename-derived facts about an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Lower-cased filename
    pub filename: String,

    /// Declared content type, never trusted for dispatch
    pub content_type: Option<String>,

    /// Payload length in bytes
    pub size: usize,
}

impl FileDescriptor {
    pub fn new(filename: &str, content_type: Option<String>, size: usize) -> Self {
        Self {
            filename: filename.to_lowercase(),
            content_type,
            size,
        }
    }

    /// Text after the last `.`, or empty when the name has no dot
    #[must_use]
    pub fn extension(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map_or("", |(_, extension)| extension)
    }

    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.extension() == "pdf"
    }

    #[must_use]
    pub fn is_eml(&self) -> bool {
        self.extension() == "eml"
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.extension(), "txt" | "text")
    }
}

/// Result of one format-specific extractor
///
/// Both variants always hold a non-empty, human-readable string. Failures are
/// data: a `Diagnostic` is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Text(String),
    Diagnostic(String),
}

impl ExtractionOutcome {
    /// Marker that opens every hard-failure diagnostic
    pub const ERROR_MARKER: &'static str = "Erro";

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Whether the string carries the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.as_str().starts_with(Self::ERROR_MARKER)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Diagnostic(text) => text,
        }
    }

    /// Extracted text, if extraction succeeded
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Diagnostic(_) => None,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) | Self::Diagnostic(text) => text,
        }
    }
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the assembled body came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    File,
    Body,
    /// Neither the file nor the body had enough text
    Empty,
}

/// Subject and body merged into the string handed to classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledContent {
    pub content: String,
    pub source: ContentSource,
    pub valid: bool,
}

/// Original text alongside its reduced token stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    /// Input text, untouched
    pub original: String,

    /// Stemmed tokens joined by single spaces
    pub processed: String,
}

impl NormalizedText {
    #[must_use]
    pub fn original_word_count(&self) -> usize {
        self.original.split_whitespace().count()
    }

    #[must_use]
    pub fn processed_word_count(&self) -> usize {
        self.processed.split_whitespace().count()
    }

    /// Word counts before and after, e.g. `"12 -> 5 palavras"`
    #[must_use]
    pub fn token_reduction(&self) -> String {
        format!(
            "{} -> {} palavras",
            self.original_word_count(),
            self.processed_word_count()
        )
    }

    /// Fraction of words removed, in `0.0..=1.0`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reduction_ratio(&self) -> f64 {
        let original = self.original_word_count();
        if original == 0 {
            return 0.0;
        }
        let kept = self.processed_word_count().min(original);
        1.0 - kept as f64 / original as f64
    }
}

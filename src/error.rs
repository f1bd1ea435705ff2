//! Error types for content extraction

use thiserror::Error;

/// Errors raised inside the extractors and the configuration loader.
///
/// Extractors never hand these to callers directly: each one converts its
/// failures into an [`ExtractionOutcome::Diagnostic`](crate::ExtractionOutcome)
/// at its boundary.
#[derive(Error, Debug)]
pub enum MailsiftError {
    /// The PDF could not be loaded or its page tree is unreadable
    #[error("{0}")]
    Pdf(String),

    /// The PDF library aborted while reading the document
    #[error("o leitor de PDF abortou durante a leitura")]
    PdfAborted,

    /// The message could not be parsed as an email
    #[error("Falha na estrutura do email: {0}")]
    Structure(String),

    /// Nothing usable was left after the simplified EML pass
    #[error("nenhum conteúdo restante após remover cabeçalhos")]
    EmptyRemainder,

    /// Invalid configuration value
    #[error("Invalid value for {key}: {details}")]
    Config { key: String, details: String },

    /// Malformed configuration document
    #[error("Invalid configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, MailsiftError>;

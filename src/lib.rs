// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Content Extraction and Normalization
//!
//! Turns an email-like submission (typed text, or an uploaded `.pdf`, `.eml`
//! or `.txt` file) into a canonical content string and a reduced token stream
//! ready for classification.
//!
//! # Features
//!
//! - Format detection by extension with a `%PDF` signature fallback
//! - PDF page text extraction
//! - Tolerant `.eml` parsing with quoted-printable decoding and HTML stripping
//! - Diagnostics as data: extraction never fails, it reports
//! - Portuguese stop word removal and suffix stemming
//!
//! # Example
//!
//! ```rust
//! use mailsift::{Pipeline, PipelineConfig, RawSubmission};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let submission = RawSubmission::from_body("Preciso do relatório financeiro processando os dados")
//!     .with_subject("Relatório");
//!
//! let outcome = pipeline.process(&submission);
//! let normalized = outcome.normalized().unwrap();
//!
//! assert!(normalized.original.starts_with("Assunto: Relatório"));
//! assert!(normalized.processed.contains("processar"));
//! ```

mod assemble;
mod config;
mod decode;
mod eml;
mod error;
mod normalize;
mod pdf;
mod pipeline;
mod sniff;
mod stemmer;
mod stopwords;
mod types;

pub use assemble::assemble;
pub use config::{NormalizerMode, PipelineConfig};
pub use decode::decode_text;
pub use eml::extract_eml;
pub use error::{MailsiftError, Result};
pub use normalize::{TextNormalizer, fold_diacritics, normalize_text};
pub use pdf::extract_pdf;
pub use pipeline::{
    INSUFFICIENT_CONTENT_ERROR, INSUFFICIENT_CONTENT_MESSAGE, Pipeline, PipelineOutcome,
    extract_file,
};
pub use sniff::sniff_format;
pub use stemmer::stem;
pub use stopwords::is_stopword;
pub use types::*;

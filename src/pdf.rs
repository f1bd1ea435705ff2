//! PDF text extraction

use crate::error::{MailsiftError, Result};
use crate::types::ExtractionOutcome;
use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Below this many characters the PDF is reported as nearly empty
const MIN_PDF_TEXT_CHARS: usize = 10;

/// How much of a nearly-empty extraction is echoed back
const PREVIEW_CHARS: usize = 50;

/// Extract the text of every page, newline-joined and trimmed.
///
/// Corrupt documents yield a diagnostic starting with `"Erro"`; documents with
/// no pages or less than ten characters of text yield a diagnostic quoting
/// what little was found. Panics inside the PDF library are contained.
#[must_use]
pub fn extract_pdf(bytes: &[u8]) -> ExtractionOutcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| read_pages(bytes)))
        .unwrap_or(Err(MailsiftError::PdfAborted));

    match result {
        Ok(text) if text.chars().count() >= MIN_PDF_TEXT_CHARS => {
            debug!("Extracted {} characters from PDF", text.len());
            ExtractionOutcome::Text(text)
        }
        Ok(text) => {
            let preview: String = text.chars().take(PREVIEW_CHARS).collect();
            debug!("PDF has too little text: {preview:?}");
            ExtractionOutcome::Diagnostic(format!(
                "PDF processado mas pouco texto encontrado: '{preview}...'"
            ))
        }
        Err(e) => {
            warn!("PDF extraction failed: {e}");
            ExtractionOutcome::Diagnostic(format!("Erro ao extrair texto do PDF: {e}"))
        }
    }
}

fn read_pages(bytes: &[u8]) -> Result<String> {
    let document = Document::load_mem(bytes).map_err(|e| MailsiftError::Pdf(e.to_string()))?;
    let pages = document.get_pages();

    let mut parts = Vec::with_capacity(pages.len());
    for &page_number in pages.keys() {
        match document.extract_text(&[page_number]) {
            Ok(text) if !text.trim().is_empty() => parts.push(text),
            Ok(_) => debug!("Page {page_number} has no text"),
            Err(e) => warn!("Skipping unreadable page {page_number}: {e}"),
        }
    }

    Ok(parts.join("\n").trim().to_string())
}

//! File format detection

use crate::types::{FileDescriptor, Format};

const PDF_SIGNATURE: &[u8] = b"%PDF";

/// Pick a parser for a file from its name, falling back to its leading bytes.
///
/// A recognized extension always wins. Otherwise a `%PDF` signature selects
/// [`Format::Pdf`]; anything else is [`Format::Unsupported`].
#[must_use]
pub fn sniff_format(filename: Option<&str>, bytes: &[u8]) -> Format {
    if let Some(format) = filename.and_then(format_from_name) {
        return format;
    }

    if bytes.starts_with(PDF_SIGNATURE) {
        Format::Pdf
    } else {
        Format::Unsupported
    }
}

fn format_from_name(filename: &str) -> Option<Format> {
    let descriptor = FileDescriptor::new(filename, None, 0);

    if descriptor.is_pdf() {
        Some(Format::Pdf)
    } else if descriptor.is_eml() {
        Some(Format::Eml)
    } else if descriptor.is_text() {
        Some(Format::PlainText)
    } else {
        None
    }
}

//! Best-effort text extraction from raw `.eml` messages
//!
//! The message is treated as loosely structured text rather than parsed as a
//! full MIME tree. Body extraction runs through a chain of tiers, each tried
//! only when the previous one found nothing:
//!
//! 1. the first `text/plain` section
//! 2. the first `text/html` section, with tags and entities removed
//! 3. everything after the first blank line, cut at the first boundary
//! 4. a line-by-line scrape that skips `Content-*` headers
//!
//! If the message cannot be handled at all, a simplified pass strips the
//! technical headers from the raw text instead.

use crate::decode::decode_lossy;
use crate::error::{MailsiftError, Result};
use crate::types::ExtractionOutcome;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, warn};

const NO_SUBJECT: &str = "Sem assunto";
const UNKNOWN_SENDER: &str = "Remetente desconhecido";
const NO_BODY: &str = "Não foi possível extrair o corpo do email";
const SIMPLIFIED_PREFIX: &str = "Email extraído (método simplificado):";

/// Bodies shorter than this trigger the line-scrape recovery
const MIN_BODY_CHARS: usize = 10;

static SUBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Subject:\s*([^\r\n]+)").unwrap());

static FROM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)From:\s*([^\r\n]+)").unwrap());

static PLAIN_SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Content-Type:\s*text/plain.*?\r?\n\r?\n").unwrap());

static HTML_SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Content-Type:\s*text/html.*?\r?\n\r?\n").unwrap());

static BLANK_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n\r?\n").unwrap());

static BOUNDARY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--\w").unwrap());

static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static HTML_ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[a-zA-Z0-9]+;").unwrap());

static QP_SOFT_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"=\r?\n").unwrap());

static QP_HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"=([0-9A-F]{2})").unwrap());

static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Technical headers and boundaries dropped by the simplified pass, from the
/// marker to the end of its line
static TECHNICAL_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:MIME-Version:|Content-Type:|Content-Transfer-Encoding:|--\w).*\n").unwrap()
});

/// Extract subject, sender and body from raw message bytes.
///
/// Output is formatted as `"Assunto: <subject>\nDe: <from>\n\n<body>"`.
/// Never fails: unreadable input degrades to a simplified header strip, and
/// from there to a diagnostic starting with `"Erro"`.
#[must_use]
pub fn extract_eml(raw: &[u8]) -> ExtractionOutcome {
    let content = decode_lossy(raw);

    match parse_message(&content) {
        Ok(text) => ExtractionOutcome::Text(text),
        Err(original) => {
            warn!("Structured EML extraction failed, using simplified pass: {original}");
            match simplified_extraction(&content) {
                Ok(text) => ExtractionOutcome::Text(text),
                Err(e) => {
                    debug!("Simplified EML pass failed: {e}");
                    ExtractionOutcome::Diagnostic(format!(
                        "Erro na extração do arquivo EML: {original}"
                    ))
                }
            }
        }
    }
}

fn parse_message(content: &str) -> Result<String> {
    let has_headers = SUBJECT_REGEX.is_match(content) || FROM_REGEX.is_match(content);
    if !has_headers && looks_binary(content) {
        return Err(MailsiftError::Structure("conteúdo binário".into()));
    }

    let content = content.replace('\0', "");
    let content = content.as_str();

    let subject = header_value(&SUBJECT_REGEX, content).unwrap_or_else(|| NO_SUBJECT.into());
    let from = header_value(&FROM_REGEX, content).unwrap_or_else(|| UNKNOWN_SENDER.into());
    let body = extract_body(content);

    debug!("Parsed EML: {subject} from {from}");

    Ok(format!("Assunto: {subject}\nDe: {from}\n\n{body}"))
}

/// More than half of the visible characters are control or replacement characters
fn looks_binary(content: &str) -> bool {
    let visible = content.chars().filter(|c| !c.is_whitespace()).count();
    let junk = content
        .chars()
        .filter(|&c| c == char::REPLACEMENT_CHARACTER || (c.is_control() && !c.is_whitespace()))
        .count();

    visible > 0 && junk * 2 > visible
}

fn header_value(regex: &Regex, content: &str) -> Option<String> {
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|value| decode_encoded_words(value.as_str().trim()))
        .filter(|value| !value.is_empty())
}

/// Decode RFC 2047 encoded words such as `=?UTF-8?Q?Ol=C3=A1?=`
fn decode_encoded_words(value: &str) -> String {
    if !value.contains("=?") {
        return value.to_string();
    }

    let line = format!("X-Decode: {value}");
    match mailparse::parse_header(line.as_bytes()) {
        Ok((header, _)) => header.get_value().trim().to_string(),
        Err(e) => {
            debug!("Keeping undecodable header value: {e}");
            value.to_string()
        }
    }
}

fn extract_body(content: &str) -> String {
    let body = plain_text_section(content)
        .or_else(|| html_section(content))
        .or_else(|| body_after_headers(content))
        .map(|body| clean_body(&body))
        .unwrap_or_default();

    if body.chars().count() >= MIN_BODY_CHARS {
        return body;
    }

    debug!("EML body too short ({} chars), scraping lines", body.chars().count());
    let recovered = recover_body_lines(content);

    if !recovered.is_empty() {
        recovered
    } else if !body.is_empty() {
        body
    } else {
        NO_BODY.to_string()
    }
}

/// Text between the blank line after `section` and the next boundary marker
fn section_body(section: &Regex, content: &str) -> Option<String> {
    let start = section.find(content)?.end();
    let rest = &content[start..];
    let end = BOUNDARY_REGEX.find(rest).map_or(rest.len(), |m| m.start());

    Some(rest[..end].trim().to_string()).filter(|body| !body.is_empty())
}

fn plain_text_section(content: &str) -> Option<String> {
    section_body(&PLAIN_SECTION_REGEX, content)
}

fn html_section(content: &str) -> Option<String> {
    let html = section_body(&HTML_SECTION_REGEX, content)?;
    debug!("Using text/html section");

    let text = HTML_TAG_REGEX.replace_all(&html, "");
    let text = text.replace("&nbsp;", " ");
    let text = HTML_ENTITY_REGEX.replace_all(&text, "");

    Some(text.into_owned()).filter(|text| !text.trim().is_empty())
}

fn body_after_headers(content: &str) -> Option<String> {
    let start = BLANK_LINE_REGEX.find(content)?.end();
    debug!("No content type marker, using text after headers");

    let rest = content[start..].trim();
    let end = BOUNDARY_REGEX.find(rest).map_or(rest.len(), |m| m.start());

    Some(rest[..end].to_string())
}

/// Undo quoted-printable encoding and squeeze blank lines
fn clean_body(body: &str) -> String {
    let body = QP_SOFT_BREAK_REGEX.replace_all(body, "");
    let body = QP_HEX_REGEX.replace_all(&body, |caps: &Captures| {
        u8::from_str_radix(&caps[1], 16)
            .map_or_else(|_| caps[0].to_string(), |byte| char::from(byte).to_string())
    });
    let body = BLANK_RUN_REGEX.replace_all(&body, "\n\n");

    body.trim().to_string()
}

/// Last-resort scrape: every non-header line after the first blank line
fn recover_body_lines(content: &str) -> String {
    let has_boundary = content.contains("boundary=");
    let mut started = false;
    let mut lines = Vec::new();

    for line in content.split('\n') {
        let line = line.trim_end_matches('\r');

        if !started {
            started = line.trim().is_empty();
            continue;
        }
        if has_boundary && line.starts_with("--") {
            break;
        }
        if !line.starts_with("Content-") {
            lines.push(line);
        }
    }

    lines.join("\n").trim().to_string()
}

fn simplified_extraction(content: &str) -> Result<String> {
    let stripped = TECHNICAL_LINE_REGEX.replace_all(content, "");
    let stripped: String = stripped
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER && (!c.is_control() || c.is_whitespace()))
        .collect();
    let stripped = stripped.trim();

    if stripped.is_empty() {
        return Err(MailsiftError::EmptyRemainder);
    }

    Ok(format!("{SIMPLIFIED_PREFIX}\n{stripped}"))
}

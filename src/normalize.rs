//! Reduction of Portuguese text to a stemmed token stream
//!
//! The standard pipeline runs, in order: diacritic folding, lower-casing,
//! removal of anything that is not alphanumeric or whitespace, removal of
//! digits, whitespace tokenization, stop word and short token filtering,
//! and single-pass suffix stemming.
//!
//! The extended pipeline first scrubs e-mail addresses, URLs and phone
//! numbers, splits on punctuation instead of deleting it, and rejects
//! spam-like and code-like tokens.

use crate::config::{NormalizerMode, PipelineConfig};
use crate::stemmer::stem;
use crate::stopwords::is_stopword;
use crate::types::NormalizedText;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>\[\]{}|\\^]+").unwrap());

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2,3}[-.\s]?\d{4,5}[-.\s]?\d{4}\b").unwrap());

static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r\t]+").unwrap());

static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static CODE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{1,2}[0-9]+$").unwrap());

/// Longest token the extended pipeline keeps
const MAX_TOKEN_CHARS: usize = 30;

/// Reduces text to stemmed tokens; cheap to build and safe to share
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    mode: NormalizerMode,
    min_word_length: usize,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}

impl TextNormalizer {
    #[must_use]
    pub const fn new(config: &PipelineConfig) -> Self {
        Self {
            mode: config.normalizer,
            min_word_length: config.min_word_length,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> NormalizerMode {
        self.mode
    }

    /// Normalize `text`, keeping the original alongside the token stream
    #[must_use]
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let tokens = match self.mode {
            NormalizerMode::Standard => self.standard_tokens(text),
            NormalizerMode::Extended => self.extended_tokens(text),
        };

        NormalizedText {
            original: text.to_string(),
            processed: tokens.join(" "),
        }
    }

    fn standard_tokens(&self, text: &str) -> Vec<String> {
        let lowered = fold_diacritics(text).to_lowercase();
        let stripped: String = lowered
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();
        let stripped = DIGITS_REGEX.replace_all(&stripped, "");

        stripped
            .split_whitespace()
            .filter(|token| self.is_content_word(token))
            .map(stem)
            .collect()
    }

    fn extended_tokens(&self, text: &str) -> Vec<String> {
        let scrubbed = scrub_contacts(text);
        let lowered = fold_diacritics(&scrubbed).to_lowercase();
        let spaced: String = lowered
            .chars()
            .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
            .collect();

        spaced
            .split_whitespace()
            .filter(|token| !CODE_TOKEN_REGEX.is_match(token))
            .flat_map(|token| {
                DIGITS_REGEX
                    .replace_all(token, " ")
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|token| !looks_like_spam(token))
            .filter(|token| self.is_content_word(token) && !is_single_char_repeat(token))
            .map(|token| stem(&token))
            .collect()
    }

    fn is_content_word(&self, token: &str) -> bool {
        token.chars().count() >= self.min_word_length && !is_stopword(token)
    }
}

/// Normalize with the default configuration
#[must_use]
pub fn normalize_text(text: &str) -> NormalizedText {
    TextNormalizer::default().normalize(text)
}

/// Strip diacritics: `"ação"` becomes `"acao"`.
///
/// Letters without a canonical decomposition (`ß`, `æ`, `ø`, ...) are
/// transliterated from a small table.
#[must_use]
pub fn fold_diacritics(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match transliterate(c) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }

    folded
}

const fn transliterate(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'Æ' => Some("AE"),
        'œ' => Some("oe"),
        'Œ' => Some("OE"),
        'ø' => Some("o"),
        'Ø' => Some("O"),
        'đ' | 'ð' => Some("d"),
        'Đ' | 'Ð' => Some("D"),
        'ł' => Some("l"),
        'Ł' => Some("L"),
        'þ' => Some("th"),
        'Þ' => Some("TH"),
        'ı' => Some("i"),
        _ => None,
    }
}

fn scrub_contacts(text: &str) -> String {
    let text = EMAIL_REGEX.replace_all(text, " ");
    let text = URL_REGEX.replace_all(&text, " ");
    let text = PHONE_REGEX.replace_all(&text, " ");
    LINE_BREAK_REGEX.replace_all(&text, " ").into_owned()
}

/// Too long, too short, or built from at most two distinct characters
fn looks_like_spam(token: &str) -> bool {
    let length = token.chars().count();
    if !(2..=MAX_TOKEN_CHARS).contains(&length) {
        return true;
    }
    let distinct: HashSet<char> = token.chars().collect();
    distinct.len() <= 2 && length > 4
}

fn is_single_char_repeat(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|first| chars.all(|c| c == first))
}

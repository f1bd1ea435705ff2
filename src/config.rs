//! Pipeline configuration

use crate::error::{MailsiftError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Which normalization pipeline to run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerMode {
    /// Fold, lower-case, strip, filter stop words, stem
    #[default]
    Standard,
    /// Standard plus contact scrubbing and spam/code token rejection
    Extended,
}

impl FromStr for NormalizerMode {
    type Err = MailsiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(MailsiftError::Config {
                key: "NORMALIZER_MODE".into(),
                details: format!("expected `standard` or `extended`, got `{other}`"),
            }),
        }
    }
}

/// Tunables for assembly and normalization
///
/// ```rust
/// use mailsift::PipelineConfig;
///
/// let config = PipelineConfig::from_json(r#"{"min_content_length": 20}"#).unwrap();
/// assert_eq!(config.min_content_length, 20);
/// assert_eq!(config.min_word_length, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum trimmed length, in characters, for content to be usable
    pub min_content_length: usize,

    /// Tokens with fewer characters are dropped
    pub min_word_length: usize,

    /// Assembled content is cut to this many characters before normalization
    pub max_content_length: usize,

    pub normalizer: NormalizerMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_content_length: 10,
            min_word_length: 3,
            max_content_length: 1_000_000,
            normalizer: NormalizerMode::Standard,
        }
    }
}

impl PipelineConfig {
    /// Load from `MIN_CONTENT_LENGTH`, `MIN_WORD_LENGTH`, `MAX_CONTENT_LENGTH`
    /// and `NORMALIZER_MODE`. Unset variables keep their defaults.
    ///
    /// `MIN_WORD_LENGTH` is the length a word must *exceed*, so the default
    /// `2` keeps words of three characters or more.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup("MIN_CONTENT_LENGTH") {
            config.min_content_length = parse_usize("MIN_CONTENT_LENGTH", &value)?;
        }
        if let Some(value) = lookup("MIN_WORD_LENGTH") {
            config.min_word_length = parse_usize("MIN_WORD_LENGTH", &value)?
                .checked_add(1)
                .ok_or_else(|| MailsiftError::Config {
                    key: "MIN_WORD_LENGTH".into(),
                    details: format!("`{value}` is too large"),
                })?;
        }
        if let Some(value) = lookup("MAX_CONTENT_LENGTH") {
            config.max_content_length = parse_usize("MAX_CONTENT_LENGTH", &value)?;
        }
        if let Some(value) = lookup("NORMALIZER_MODE") {
            config.normalizer = value.parse()?;
        }

        Ok(config)
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| MailsiftError::Config {
            key: key.into(),
            details: format!("`{value}`: {e}"),
        })
}

//! Configuration for token estimation

use crate::error::{validate_chars_per_token, ConfigError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Average characters per token when no language rule applies
pub const DEFAULT_CHARS_PER_TOKEN: f64 = 6.0;

static DEFAULT_LANGUAGE_CONFIGS: OnceLock<Vec<LanguageConfig>> = OnceLock::new();

/// Built-in language density rules, in priority order
///
/// - German umlauts and sharp s: ~3 chars/token
/// - Romance-language accents: ~3 chars/token
/// - Central/Eastern-European diacritics: ~3.5 chars/token
pub fn default_language_configs() -> &'static [LanguageConfig] {
    DEFAULT_LANGUAGE_CONFIGS.get_or_init(|| {
        vec![
            LanguageConfig::builtin(r"(?i)[äöüßẞ]", 3.0),
            LanguageConfig::builtin(r"(?i)[éèêëàâîïôûùüÿçœæáíóúñ]", 3.0),
            LanguageConfig::builtin(r"(?i)[ąćęłńóśźżěščřžýůúďťň]", 3.5),
        ]
    })
}

/// A language detection pattern and its typical token density
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pattern: Regex,
    average_chars_per_token: f64,
}

impl LanguageConfig {
    pub fn new(pattern: &str, average_chars_per_token: f64) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Self::from_regex(regex, average_chars_per_token)
    }

    pub fn from_regex(pattern: Regex, average_chars_per_token: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern,
            average_chars_per_token: validate_chars_per_token(average_chars_per_token)?,
        })
    }

    fn builtin(pattern: &str, average_chars_per_token: f64) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            average_chars_per_token,
        }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn average_chars_per_token(&self) -> f64 {
        self.average_chars_per_token
    }

    /// True if the pattern occurs anywhere in the segment
    pub fn matches(&self, segment: &str) -> bool {
        self.pattern.is_match(segment)
    }
}

/// How to estimate segments that no specific rule recognises
/// (emoji, right-to-left scripts, symbols outside the punctuation set)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Same length / chars-per-token division as alphanumeric words
    #[default]
    CharsPerToken,
    /// One token per Unicode code point
    CodePoints,
}

impl FromStr for FallbackPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chars-per-token" | "chars_per_token" => Ok(Self::CharsPerToken),
            "code-points" | "code_points" | "codepoints" => Ok(Self::CodePoints),
            other => Err(ConfigError::UnknownFallbackPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CharsPerToken => f.write_str("chars-per-token"),
            Self::CodePoints => f.write_str("code-points"),
        }
    }
}

/// Options shared by every estimation operation
#[derive(Debug, Clone)]
pub struct EstimationOptions {
    default_chars_per_token: f64,
    language_configs: Vec<LanguageConfig>,
    fallback: FallbackPolicy,
}

impl EstimationOptions {
    pub fn new() -> Self {
        Self {
            default_chars_per_token: DEFAULT_CHARS_PER_TOKEN,
            language_configs: default_language_configs().to_vec(),
            fallback: FallbackPolicy::default(),
        }
    }

    pub fn with_default_chars_per_token(mut self, value: f64) -> Result<Self, ConfigError> {
        self.default_chars_per_token = validate_chars_per_token(value)?;
        Ok(self)
    }

    /// Replace the language rules; an empty list disables language detection
    pub fn with_language_configs(mut self, configs: Vec<LanguageConfig>) -> Self {
        self.language_configs = configs;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn default_chars_per_token(&self) -> f64 {
        self.default_chars_per_token
    }

    pub fn language_configs(&self) -> &[LanguageConfig] {
        &self.language_configs
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Density for a segment: first matching language rule, else the default
    pub fn chars_per_token_for(&self, segment: &str) -> f64 {
        self.language_configs
            .iter()
            .find(|config| config.matches(segment))
            .map(LanguageConfig::average_chars_per_token)
            .unwrap_or(self.default_chars_per_token)
    }
}

impl Default for EstimationOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for [`crate::split_by_tokens`]
#[derive(Debug, Clone, Default)]
pub struct ChunkOptions {
    pub estimation: EstimationOptions,

    /// Tokens of trailing context repeated at the start of the next chunk
    pub overlap: usize,
}

impl ChunkOptions {
    pub fn new(estimation: EstimationOptions) -> Self {
        Self {
            estimation,
            overlap: 0,
        }
    }

    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }
}

//! Errors raised while building estimation options

use thiserror::Error;

/// Invalid estimation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Characters-per-token ratios must be finite and strictly positive
    #[error("characters per token must be a positive finite number, got {value}")]
    InvalidCharsPerToken { value: f64 },

    #[error("invalid language pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown fallback policy `{0}` (expected `chars-per-token` or `code-points`)")]
    UnknownFallbackPolicy(String),
}

/// Reject ratios that would make `ceil(len / ratio)` meaningless
pub(crate) fn validate_chars_per_token(value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidCharsPerToken { value })
    }
}

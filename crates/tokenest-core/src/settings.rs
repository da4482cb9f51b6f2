//! Serializable estimation settings
//!
//! Settings are the plain-data form of [`EstimationOptions`] and
//! [`ChunkOptions`], suitable for config files. Every field is optional and
//! falls back to the built-in default when absent.

use crate::config::{ChunkOptions, EstimationOptions, FallbackPolicy, LanguageConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_chars_per_token: Option<f64>,

    /// Replaces the built-in language rules when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_configs: Option<Vec<LanguageSetting>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackPolicy>,

    /// Only used when chunking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageSetting {
    pub pattern: String,
    pub average_chars_per_token: f64,
}

impl EstimationSettings {
    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(mut self, other: EstimationSettings) -> Self {
        if other.default_chars_per_token.is_some() {
            self.default_chars_per_token = other.default_chars_per_token;
        }
        if other.language_configs.is_some() {
            self.language_configs = other.language_configs;
        }
        if other.fallback.is_some() {
            self.fallback = other.fallback;
        }
        if other.overlap.is_some() {
            self.overlap = other.overlap;
        }
        self
    }

    pub fn to_options(&self) -> Result<EstimationOptions, ConfigError> {
        let mut options = EstimationOptions::new();

        if let Some(value) = self.default_chars_per_token {
            options = options.with_default_chars_per_token(value)?;
        }
        if let Some(languages) = &self.language_configs {
            let configs = languages
                .iter()
                .map(|language| {
                    LanguageConfig::new(&language.pattern, language.average_chars_per_token)
                })
                .collect::<Result<Vec<_>, _>>()?;
            options = options.with_language_configs(configs);
        }
        if let Some(fallback) = self.fallback {
            options = options.with_fallback(fallback);
        }

        Ok(options)
    }

    pub fn to_chunk_options(&self) -> Result<ChunkOptions, ConfigError> {
        Ok(ChunkOptions::new(self.to_options()?).with_overlap(self.overlap.unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate_token_count;

    #[test]
    fn test_empty_settings_match_defaults() {
        let options = EstimationSettings::default().to_options().unwrap();
        let defaults = EstimationOptions::default();
        assert_eq!(
            options.default_chars_per_token(),
            defaults.default_chars_per_token()
        );
        assert_eq!(
            options.language_configs().len(),
            defaults.language_configs().len()
        );
        assert_eq!(options.fallback(), defaults.fallback());
    }

    #[test]
    fn test_settings_from_json() {
        let json = r#"{
            "default_chars_per_token": 4,
            "language_configs": [{"pattern": "(?i)[äöü]", "average_chars_per_token": 2.5}],
            "fallback": "code-points",
            "overlap": 3
        }"#;
        let settings: EstimationSettings = serde_json::from_str(json).unwrap();
        let chunk = settings.to_chunk_options().unwrap();

        assert_eq!(chunk.overlap, 3);
        assert_eq!(chunk.estimation.default_chars_per_token(), 4.0);
        assert_eq!(chunk.estimation.language_configs().len(), 1);
        assert_eq!(chunk.estimation.fallback(), FallbackPolicy::CodePoints);
        assert_eq!(chunk.estimation.chars_per_token_for("Größe"), 2.5);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<EstimationSettings, _> =
            serde_json::from_str(r#"{"chars_per_token": 4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let settings = EstimationSettings {
            default_chars_per_token: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            settings.to_options(),
            Err(ConfigError::InvalidCharsPerToken { .. })
        ));

        let settings = EstimationSettings {
            language_configs: Some(vec![LanguageSetting {
                pattern: "(".to_string(),
                average_chars_per_token: 3.0,
            }]),
            ..Default::default()
        };
        assert!(matches!(
            settings.to_options(),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_merge_prefers_other() {
        let file = EstimationSettings {
            default_chars_per_token: Some(4.0),
            overlap: Some(2),
            ..Default::default()
        };
        let flags = EstimationSettings {
            default_chars_per_token: Some(5.0),
            fallback: Some(FallbackPolicy::CodePoints),
            ..Default::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.default_chars_per_token, Some(5.0));
        assert_eq!(merged.fallback, Some(FallbackPolicy::CodePoints));
        assert_eq!(merged.overlap, Some(2));
    }

    #[test]
    fn test_empty_language_list_disables_detection() {
        let settings = EstimationSettings {
            language_configs: Some(Vec::new()),
            ..Default::default()
        };
        let options = settings.to_options().unwrap();
        let german = "Die pünktlich gewünschte Trüffelfüllung im übergestülpten Würzkümmel-Würfel ist kümmerlich und dürfte fürderhin zu Rüffeln in Hülle und Fülle führen";
        assert_eq!(estimate_token_count(german, &options), 31);
    }
}

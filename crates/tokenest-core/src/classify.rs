//! Segment classification and per-segment token estimation
//!
//! Rules are tried in a fixed priority order and the first match decides.
//! The order approximates how BPE tokenizers behave in practice:
//! whitespace merges into neighbouring tokens, CJK text is close to one
//! token per character, numbers and very short runs rarely split,
//! punctuation runs pair up, and words compress at a language-dependent
//! rate.

use crate::config::{EstimationOptions, FallbackPolicy};
use crate::segment::PUNCTUATION_CLASS;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Segments up to this many code points always count as one token
const SHORT_TOKEN_THRESHOLD: usize = 3;

/// CJK, Kana and Hangul blocks (inclusive)
const CJK_RANGES: &[(char, char)] = &[
    ('\u{4E00}', '\u{9FFF}'), // CJK unified ideographs
    ('\u{3400}', '\u{4DBF}'), // CJK extension A
    ('\u{3000}', '\u{303F}'), // CJK symbols and punctuation
    ('\u{FF00}', '\u{FFEF}'), // halfwidth and fullwidth forms
    ('\u{30A0}', '\u{30FF}'), // katakana
    ('\u{2E80}', '\u{2EFF}'), // CJK radicals supplement
    ('\u{31C0}', '\u{31EF}'), // CJK strokes
    ('\u{3200}', '\u{32FF}'), // enclosed CJK letters and months
    ('\u{3300}', '\u{33FF}'), // CJK compatibility
    ('\u{AC00}', '\u{D7AF}'), // hangul syllables
    ('\u{1100}', '\u{11FF}'), // hangul jamo
    ('\u{3130}', '\u{318F}'), // hangul compatibility jamo
    ('\u{A960}', '\u{A97F}'), // hangul jamo extended-A
    ('\u{D7B0}', '\u{D7FF}'), // hangul jamo extended-B
];

static NUMERIC_RE: OnceLock<Regex> = OnceLock::new();
static PUNCTUATION_RE: OnceLock<Regex> = OnceLock::new();
static ALPHANUMERIC_RE: OnceLock<Regex> = OnceLock::new();

/// The rule that decided a segment's estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentClass {
    Whitespace,
    Cjk,
    Numeric,
    Short,
    Punctuation,
    Alphanumeric,
    Other,
}

/// Classification rules in priority order; `Other` is the fallback
const RULES: &[(SegmentClass, fn(&str) -> bool)] = &[
    (SegmentClass::Whitespace, is_whitespace),
    (SegmentClass::Cjk, contains_cjk),
    (SegmentClass::Numeric, is_numeric),
    (SegmentClass::Short, is_short),
    (SegmentClass::Punctuation, is_punctuation),
    (SegmentClass::Alphanumeric, is_alphanumeric),
];

/// Find the first rule matching a segment
pub fn classify(segment: &str) -> SegmentClass {
    RULES
        .iter()
        .find(|(_, matches)| matches(segment))
        .map(|&(class, _)| class)
        .unwrap_or(SegmentClass::Other)
}

/// Estimated token count of a single segment
pub fn estimate_segment_tokens(segment: &str, options: &EstimationOptions) -> usize {
    classify(segment).estimate(segment, options)
}

impl SegmentClass {
    /// Token estimate for a segment already known to be of this class
    pub fn estimate(self, segment: &str, options: &EstimationOptions) -> usize {
        match self {
            Self::Whitespace => 0,
            Self::Cjk => char_count(segment),
            Self::Numeric | Self::Short => 1,
            Self::Punctuation => match char_count(segment) {
                0 | 1 => 1,
                len => len.div_ceil(2),
            },
            Self::Alphanumeric => divide_by_density(segment, options),
            Self::Other => match options.fallback() {
                FallbackPolicy::CharsPerToken => divide_by_density(segment, options),
                FallbackPolicy::CodePoints => char_count(segment),
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Cjk => "cjk",
            Self::Numeric => "numeric",
            Self::Short => "short",
            Self::Punctuation => "punctuation",
            Self::Alphanumeric => "alphanumeric",
            Self::Other => "other",
        }
    }
}

fn divide_by_density(segment: &str, options: &EstimationOptions) -> usize {
    let chars_per_token = options.chars_per_token_for(segment);
    (char_count(segment) as f64 / chars_per_token).ceil() as usize
}

/// Length in Unicode code points, so astral characters count once
pub(crate) fn char_count(segment: &str) -> usize {
    segment.chars().count()
}

fn is_whitespace(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(char::is_whitespace)
}

fn contains_cjk(segment: &str) -> bool {
    segment.chars().any(|c| {
        CJK_RANGES
            .iter()
            .any(|&(low, high)| (low..=high).contains(&c))
    })
}

fn is_numeric(segment: &str) -> bool {
    NUMERIC_RE
        .get_or_init(|| Regex::new(r"^[0-9]+(?:[.,][0-9]+)*$").unwrap())
        .is_match(segment)
}

fn is_short(segment: &str) -> bool {
    char_count(segment) <= SHORT_TOKEN_THRESHOLD
}

fn is_punctuation(segment: &str) -> bool {
    PUNCTUATION_RE
        .get_or_init(|| Regex::new(&format!(r"^[{PUNCTUATION_CLASS}]+$")).unwrap())
        .is_match(segment)
}

fn is_alphanumeric(segment: &str) -> bool {
    ALPHANUMERIC_RE
        .get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{FF}]+$").unwrap()
        })
        .is_match(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LanguageConfig;

    fn estimate(segment: &str) -> usize {
        estimate_segment_tokens(segment, &EstimationOptions::default())
    }

    #[test]
    fn test_whitespace_is_free() {
        assert_eq!(classify(" "), SegmentClass::Whitespace);
        assert_eq!(estimate("   \t\n"), 0);
        assert_eq!(estimate("\u{3000}"), 0);
    }

    #[test]
    fn test_cjk_counts_code_points() {
        assert_eq!(classify("道德經"), SegmentClass::Cjk);
        assert_eq!(estimate("道德經是一部哲學著作。"), 11);
        assert_eq!(estimate("안녕하세요"), 5);
        assert_eq!(estimate("カタカナ"), 4);
        // one CJK character pulls the whole segment into the CJK rule
        assert_eq!(estimate("abc中"), 4);
    }

    #[test]
    fn test_numbers_are_one_token() {
        assert_eq!(classify("1,234,567.89"), SegmentClass::Numeric);
        assert_eq!(estimate("1,234,567.89"), 1);
        assert_eq!(estimate("20240101"), 1);
        // dangling separators are not a number
        assert_ne!(classify("12."), SegmentClass::Numeric);
    }

    #[test]
    fn test_short_segments_are_one_token() {
        assert_eq!(classify("the"), SegmentClass::Short);
        assert_eq!(classify("..."), SegmentClass::Short);
        assert_eq!(estimate("€$%"), 1);
        assert_eq!(estimate("🦀🦀🦀"), 1);
    }

    #[test]
    fn test_punctuation_pairs_up() {
        assert_eq!(classify("----"), SegmentClass::Punctuation);
        assert_eq!(estimate("----"), 2);
        assert_eq!(estimate("!!!!!"), 3);
        assert_eq!(estimate("\"),"), 1);
    }

    #[test]
    fn test_alphanumeric_uses_language_density() {
        assert_eq!(classify("sentence"), SegmentClass::Alphanumeric);
        assert_eq!(estimate("sentence"), 2);
        assert_eq!(estimate("internationalization"), 4);
        assert_eq!(estimate("Trüffelfüllung"), 5);
        assert_eq!(estimate("connaît"), 3);
    }

    #[test]
    fn test_other_segments() {
        assert_eq!(classify("Zażółć"), SegmentClass::Other);
        assert_eq!(estimate("Zażółć"), 2);
        assert_eq!(classify("مرحبا"), SegmentClass::Other);
        assert_eq!(estimate("مرحبا"), 1);
        assert_eq!(estimate("🦀🦀🦀🦀🦀🦀🦀"), 2);
    }

    #[test]
    fn test_code_point_fallback() {
        let options = EstimationOptions::default().with_fallback(FallbackPolicy::CodePoints);
        assert_eq!(estimate_segment_tokens("مرحبا", &options), 5);
        assert_eq!(estimate_segment_tokens("🦀🦀🦀🦀🦀🦀🦀", &options), 7);
        // other rules are unaffected
        assert_eq!(estimate_segment_tokens("sentence", &options), 2);
        assert_eq!(estimate_segment_tokens("🦀🦀🦀", &options), 1);
    }

    #[test]
    fn test_custom_density() {
        let options = EstimationOptions::default()
            .with_default_chars_per_token(2.0)
            .unwrap()
            .with_language_configs(vec![LanguageConfig::new("z", 10.0).unwrap()]);
        assert_eq!(estimate_segment_tokens("sentence", &options), 4);
        assert_eq!(estimate_segment_tokens("zigzagging", &options), 1);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(SegmentClass::Cjk.as_str(), "cjk");
        assert_eq!(
            serde_json::to_string(&SegmentClass::Alphanumeric).unwrap(),
            "\"alphanumeric\""
        );
    }
}

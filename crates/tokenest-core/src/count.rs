//! Total token estimation

use crate::classify::estimate_segment_tokens;
use crate::config::EstimationOptions;
use crate::segment::segments;

/// Estimate the number of tokens in a text
pub fn estimate_token_count(text: &str, options: &EstimationOptions) -> usize {
    if text.is_empty() {
        return 0;
    }

    segments(text)
        .map(|segment| estimate_segment_tokens(segment, options))
        .sum()
}

/// Check whether a text fits in a token budget
pub fn is_within_token_limit(text: &str, token_limit: usize, options: &EstimationOptions) -> bool {
    estimate_token_count(text, options) <= token_limit
}

#[deprecated(note = "use `estimate_token_count` instead")]
pub fn approximate_token_size(text: &str, options: &EstimationOptions) -> usize {
    estimate_token_count(text, options)
}

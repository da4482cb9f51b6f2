//! Token-range extraction with slice-like semantics

use crate::classify::{char_count, estimate_segment_tokens};
use crate::config::EstimationOptions;
use crate::count::estimate_token_count;
use crate::segment::segments;

/// Half-open range of token positions; `end: None` is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TokenRange {
    start: usize,
    end: Option<usize>,
}

impl TokenRange {
    fn contains(&self, position: usize) -> bool {
        position >= self.start && self.end.map_or(true, |end| position < end)
    }

    fn ends_at_or_before(&self, position: usize) -> bool {
        self.end.is_some_and(|end| position >= end)
    }
}

/// Extract the text covering token positions `start..end`
///
/// Negative indices count back from the total estimate, and `end: None`
/// runs to the end of the text. Ranges that are empty after resolution
/// yield an empty string. Segments that straddle a range boundary are cut
/// proportionally to their character length.
pub fn slice_by_tokens(
    text: &str,
    start: i64,
    end: Option<i64>,
    options: &EstimationOptions,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Only pay for a full count when an index is relative to the end
    let total_tokens = if start < 0 || end.is_some_and(|end| end < 0) {
        estimate_token_count(text, options)
    } else {
        0
    };

    let range = TokenRange {
        start: resolve_index(start, total_tokens),
        end: end.map(|end| resolve_index(end, total_tokens)),
    };
    if range.end.is_some_and(|end| range.start >= end) {
        return String::new();
    }
    tracing::debug!(start = range.start, end = ?range.end, "slicing by tokens");

    let mut sliced = String::new();
    let mut position = 0usize;

    for segment in segments(text) {
        if range.ends_at_or_before(position) {
            break;
        }

        let tokens = estimate_segment_tokens(segment, options);
        if let Some(part) = extract_segment_part(segment, position, tokens, range) {
            sliced.push_str(part);
        }
        position += tokens;
    }

    sliced
}

fn resolve_index(index: i64, total_tokens: usize) -> usize {
    if index < 0 {
        let total = i64::try_from(total_tokens).unwrap_or(i64::MAX);
        usize::try_from(total.saturating_add(index)).unwrap_or(0)
    } else {
        usize::try_from(index).unwrap_or(usize::MAX)
    }
}

fn extract_segment_part(
    segment: &str,
    segment_start: usize,
    segment_tokens: usize,
    range: TokenRange,
) -> Option<&str> {
    // Zero-width segments belong to the position they start at
    if segment_tokens == 0 {
        return range.contains(segment_start).then_some(segment);
    }

    let segment_end = segment_start + segment_tokens;
    if range.ends_at_or_before(segment_start) || segment_end <= range.start {
        return None;
    }

    let overlap_start = range.start.saturating_sub(segment_start);
    let overlap_end = range
        .end
        .map_or(segment_tokens, |end| segment_tokens.min(end - segment_start));
    if overlap_start == 0 && overlap_end == segment_tokens {
        return Some(segment);
    }

    let len = char_count(segment) as f64;
    let tokens = segment_tokens as f64;
    let char_start = ((overlap_start as f64 / tokens) * len).floor() as usize;
    let char_end = ((overlap_end as f64 / tokens) * len).ceil() as usize;
    Some(char_slice(segment, char_start, char_end))
}

/// Slice by code point offsets; out-of-range offsets clamp to the end
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_offset = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    let from = byte_offset(start);
    let to = byte_offset(end).max(from);
    &s[from..to]
}

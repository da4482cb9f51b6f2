//! Fixed-budget chunking

use crate::classify::estimate_segment_tokens;
use crate::config::ChunkOptions;
use crate::segment::segments;

/// Split text into chunks of roughly `tokens_per_chunk` estimated tokens
///
/// Segments are never cut, so a chunk closes on the first segment that
/// brings it to or past the budget. With a non-zero overlap, each chunk
/// after the first starts with the trailing segments of the previous one.
pub fn split_by_tokens(text: &str, tokens_per_chunk: usize, options: &ChunkOptions) -> Vec<String> {
    if text.is_empty() || tokens_per_chunk == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current: Vec<(&str, usize)> = Vec::new();
    let mut current_tokens = 0usize;

    for segment in segments(text) {
        let tokens = estimate_segment_tokens(segment, &options.estimation);
        current.push((segment, tokens));
        current_tokens += tokens;

        if current_tokens >= tokens_per_chunk {
            chunks.push(join(&current));
            (current, current_tokens) = trailing_overlap(&current, options.overlap);
        }
    }

    if !current.is_empty() {
        chunks.push(join(&current));
    }

    tracing::debug!(
        chunks = chunks.len(),
        tokens_per_chunk,
        overlap = options.overlap,
        "split text by tokens"
    );
    chunks
}

/// Trailing segments of a closed chunk, taken until `overlap` is reached
fn trailing_overlap<'a>(
    closed: &[(&'a str, usize)],
    overlap: usize,
) -> (Vec<(&'a str, usize)>, usize) {
    let mut taken = 0usize;
    let mut tokens = 0usize;

    for &(_, segment_tokens) in closed.iter().rev() {
        if tokens >= overlap {
            break;
        }
        tokens += segment_tokens;
        taken += 1;
    }

    (closed[closed.len() - taken..].to_vec(), tokens)
}

fn join(segments: &[(&str, usize)]) -> String {
    segments.iter().map(|&(segment, _)| segment).collect()
}

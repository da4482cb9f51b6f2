//! Heuristic token estimation without a model vocabulary
//!
//! Text is split into whitespace, punctuation and other segments, and each
//! segment gets a token estimate from an ordered set of rules. Counting,
//! slicing and chunking all walk the same segments, so they agree with each
//! other on any given text.

mod classify;
mod config;
mod count;
mod error;
mod segment;
mod settings;
mod slice;
mod split;

pub use classify::{classify, estimate_segment_tokens, SegmentClass};
pub use config::{
    default_language_configs, ChunkOptions, EstimationOptions, FallbackPolicy, LanguageConfig,
    DEFAULT_CHARS_PER_TOKEN,
};
#[allow(deprecated)]
pub use count::approximate_token_size;
pub use count::{estimate_token_count, is_within_token_limit};
pub use error::ConfigError;
pub use segment::{segments, Segments};
pub use settings::{EstimationSettings, LanguageSetting};
pub use slice::slice_by_tokens;
pub use split::split_by_tokens;

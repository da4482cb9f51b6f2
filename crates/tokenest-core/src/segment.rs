//! Lossless text segmentation
//!
//! Text is split on whitespace runs and punctuation runs. Both kinds of run
//! become segments of their own, and the spans between them are kept as
//! "other" segments, so concatenating the output reproduces the input.

use regex::{Match, Matches, Regex};
use std::sync::OnceLock;

/// Characters treated as punctuation, as a regex character class body
pub(crate) const PUNCTUATION_CLASS: &str = r".,!?;(){}\[\]<>:/\\|@#$%\^\&*+=`\~_\-";

static SPLIT_RE: OnceLock<Regex> = OnceLock::new();

fn split_re() -> &'static Regex {
    SPLIT_RE.get_or_init(|| Regex::new(&format!(r"\s+|[{PUNCTUATION_CLASS}]+")).unwrap())
}

/// Split text into whitespace, punctuation and other segments
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        matches: split_re().find_iter(text),
        cursor: 0,
        pending: None,
    }
}

/// Iterator over the segments of a text, in order
#[derive(Debug)]
pub struct Segments<'a> {
    text: &'a str,
    matches: Matches<'static, 'a>,
    cursor: usize,
    // delimiter found while an "other" span before it was still unreported
    pending: Option<Match<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if let Some(delimiter) = self.pending.take() {
            self.cursor = delimiter.end();
            return Some(delimiter.as_str());
        }

        match self.matches.next() {
            Some(delimiter) if delimiter.start() > self.cursor => {
                let other = &self.text[self.cursor..delimiter.start()];
                self.cursor = delimiter.start();
                self.pending = Some(delimiter);
                Some(other)
            }
            Some(delimiter) => {
                self.cursor = delimiter.end();
                Some(delimiter.as_str())
            }
            None if self.cursor < self.text.len() => {
                let rest = &self.text[self.cursor..];
                self.cursor = self.text.len();
                Some(rest)
            }
            None => None,
        }
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

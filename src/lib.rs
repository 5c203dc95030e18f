//! Approximate substring search.
//!
//! Finds every span of a haystack whose Levenshtein distance to a needle is
//! the smallest over all substrings, in a single `O(needle * haystack)` pass.
//! The core works on any slice of `PartialEq` units ([`edit_distances`],
//! [`find_matches`]); [`FuzzySubstring`] wraps it for `&str` input.

#[macro_use]
extern crate log;

mod builder;
mod extract;
mod matrix;
mod segment;
mod structs;

pub use builder::FuzzySubstringBuilder;
pub use extract::{extract_matches, find_matches};
pub use matrix::edit_distances;
pub use structs::*;

use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Splits `text` into `(byte offset, unit)` pairs.
pub(crate) fn unit_indices(text: &str, unit: Unit) -> Vec<(usize, &str)> {
    match unit {
        Unit::Char => text
            .char_indices()
            .map(|(b, c)| (b, &text[b..b + c.len_utf8()]))
            .collect(),
        Unit::Grapheme => text.grapheme_indices(true).collect(),
    }
}

#[inline]
pub(crate) fn fold_case(unit: &str, case_insensitive: bool) -> Cow<'_, str> {
    if case_insensitive {
        Cow::Owned(unit.to_lowercase())
    } else {
        Cow::Borrowed(unit)
    }
}

impl FuzzySubstring {
    /// The needle as given to the builder.
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Needle length in comparison units.
    #[must_use]
    pub fn needle_len(&self) -> usize {
        self.needle_units.len()
    }

    /// Returns every best match of the needle in `haystack`, ordered by end
    /// position. Empty when the best distance exceeds the configured bound.
    pub fn search(&self, haystack: &str) -> Vec<TextMatch> {
        let unit_idx = unit_indices(haystack, self.unit);
        let folded: Vec<Cow<str>> = unit_idx
            .iter()
            .map(|&(_, u)| fold_case(u, self.case_insensitive))
            .collect();
        let haystack_units: Vec<&str> = folded.iter().map(AsRef::as_ref).collect();
        let needle_units: Vec<&str> = self.needle_units.iter().map(String::as_str).collect();

        let spans = find_matches(&needle_units, &haystack_units);
        if let (Some(max), Some(best)) = (self.max_distance, spans.first()) {
            if best.distance > max {
                debug!(
                    "search {:?}: best distance {} above bound {max}",
                    self.needle, best.distance
                );
                return Vec::new();
            }
        }

        let byte_at = |pos: usize| {
            unit_idx
                .get(pos)
                .map(|&(b, _)| b)
                .unwrap_or(haystack.len())
        };
        let total = self.needle_len() as f32;
        spans
            .into_iter()
            .map(|span| {
                let byte_start = byte_at(span.clamped_start());
                let byte_end = byte_at(span.end);
                let similarity = if total == 0.0 {
                    1.0
                } else {
                    ((total - span.distance as f32) / total).clamp(0.0, 1.0)
                };
                TextMatch {
                    span,
                    byte_start,
                    byte_end,
                    text: haystack[byte_start..byte_end].to_string(),
                    similarity,
                }
            })
            .collect()
    }
}

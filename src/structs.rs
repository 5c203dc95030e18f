use std::fmt;

/// One cell of the distance row: the best edit distance of the whole needle
/// against a substring ending here, and the net `insertions - deletions` along
/// the path that reached it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignmentCell {
    pub distance: usize,
    /// Only meaningful together with `distance`; used to recover the start.
    pub offset: isize,
}

impl AlignmentCell {
    #[inline]
    pub const fn new(distance: usize, offset: isize) -> Self {
        Self { distance, offset }
    }
}

/// Final row of the matrix, indexed by haystack end position `0..=n`.
pub type DistanceRow = Vec<AlignmentCell>;

/// A best-scoring span, in haystack units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstringMatch {
    pub distance: usize,
    /// Inclusive start. Not clamped: may be negative near the haystack start.
    pub start: isize,
    /// Exclusive end.
    pub end: usize,
}

impl SubstringMatch {
    /// `start` clamped to the haystack.
    #[inline]
    pub fn clamped_start(&self) -> usize {
        usize::try_from(self.start).unwrap_or(0).min(self.end)
    }

    /// Number of haystack units covered once `start` is clamped.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.clamped_start()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unit the text-level engine compares.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Unicode scalar values.
    #[default]
    Char,
    /// Extended grapheme clusters.
    Grapheme,
}

/// Result returned by [`FuzzySubstring::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    /// Span in units, exactly as computed.
    pub span: SubstringMatch,
    /// Inclusive start byte index (from the clamped unit start).
    pub byte_start: usize,
    /// Exclusive end byte index.
    pub byte_end: usize,
    /// Slice of the original haystack covered by the match.
    pub text: String,
    /// `(needle_len - distance) / needle_len`, within `[0, 1]`.
    pub similarity: f32,
}

impl TextMatch {
    #[inline]
    pub fn distance(&self) -> usize {
        self.span.distance
    }
}

/// Item of [`FuzzySubstring::segment_iter`]: either a match or the text
/// between two of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    Matched(TextMatch),
    Unmatched(&'a str),
}

/// Fuzzy substring search engine for a single needle.
pub struct FuzzySubstring {
    pub(crate) needle: String,
    /// Needle split into comparison units, already case-folded if needed.
    pub(crate) needle_units: Vec<String>,
    pub(crate) unit: Unit,
    pub(crate) max_distance: Option<usize>,
    pub(crate) case_insensitive: bool,
}

impl fmt::Debug for FuzzySubstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = &mut f.debug_struct("FuzzySubstring");
        s = s.field("needle", &self.needle).field("unit", &self.unit);
        if let Some(max_distance) = &self.max_distance {
            s = s.field("max_distance", max_distance);
        }
        if self.case_insensitive {
            s = s.field("case_insensitive", &self.case_insensitive);
        }
        s.finish()
    }
}

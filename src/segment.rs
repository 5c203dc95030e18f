use crate::{FuzzySubstring, Segment};

impl FuzzySubstring {
    /// Returns an **iterator** that yields interleaving [`Segment::Matched`]
    /// [`Segment::Unmatched`] items for the given text.
    ///
    /// Empty matches and matches overlapping an earlier one are left out.
    pub fn segment_iter<'b>(&self, haystack: &'b str) -> impl Iterator<Item = Segment<'b>> {
        let mut segments = Vec::new();
        let mut last = 0;
        for m in self.search(haystack) {
            if m.byte_start < last || m.byte_start == m.byte_end {
                trace!("segment_iter: skipping {m:?}");
                continue;
            }
            if m.byte_start > last {
                segments.push(Segment::Unmatched(&haystack[last..m.byte_start]));
            }
            last = m.byte_end;
            segments.push(Segment::Matched(m));
        }
        if last < haystack.len() {
            segments.push(Segment::Unmatched(&haystack[last..]));
        }
        segments.into_iter()
    }

    /// Convenience wrapper around [`segment_iter`](Self::segment_iter) that
    /// surrounds every matched span with `open` and `close`.
    ///
    /// ```rust
    /// use fuzzy_substring::FuzzySubstringBuilder;
    ///
    /// let engine = FuzzySubstringBuilder::new().build("colour");
    /// assert_eq!(
    ///     engine.segment_text("the color red", "[", "]"),
    ///     "the [color] red"
    /// );
    /// ```
    #[must_use]
    pub fn segment_text(&self, haystack: &str, open: &str, close: &str) -> String {
        let mut result = String::with_capacity(haystack.len());
        for segment in self.segment_iter(haystack) {
            match segment {
                Segment::Matched(m) => {
                    result.push_str(open);
                    result.push_str(&m.text);
                    result.push_str(close);
                }
                Segment::Unmatched(s) => result.push_str(s),
            }
        }
        result
    }
}

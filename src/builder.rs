use crate::{FuzzySubstring, Unit, fold_case, unit_indices};

/// Builder for [`FuzzySubstring`].
///
/// ```rust
/// use fuzzy_substring::{FuzzySubstringBuilder, Unit};
///
/// let engine = FuzzySubstringBuilder::new()
///     .case_insensitive(true)
///     .unit(Unit::Grapheme)
///     .build("kitten");
///
/// let result = engine.search("Sitting next to a KITTEN");
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "KITTEN");
/// assert_eq!(result[0].distance(), 0);
/// ```
#[derive(Debug, Default)]
pub struct FuzzySubstringBuilder {
    unit: Unit,
    max_distance: Option<usize>,
    case_insensitive: bool,
}

impl FuzzySubstringBuilder {
    /// Case-sensitive, per-`char`, unbounded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit the needle and haystack are compared in.
    #[must_use]
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Drop all results when the best distance is above `max`.
    #[must_use]
    pub fn max_distance(mut self, max: usize) -> Self {
        self.max_distance = Some(max);
        self
    }

    /// Enable Unicode‑aware *case‑insensitive* matching.
    #[must_use]
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Builds an immutable [`FuzzySubstring`] for `needle`.
    pub fn build(self, needle: impl Into<String>) -> FuzzySubstring {
        let needle = needle.into();
        let needle_units = unit_indices(&needle, self.unit)
            .into_iter()
            .map(|(_, u)| fold_case(u, self.case_insensitive).into_owned())
            .collect();

        FuzzySubstring {
            needle,
            needle_units,
            unit: self.unit,
            max_distance: self.max_distance,
            case_insensitive: self.case_insensitive,
        }
    }
}

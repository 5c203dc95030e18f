use crate::{AlignmentCell, SubstringMatch, edit_distances};

/// Collects every position of `row` tied for the smallest distance and turns
/// each into a [`SubstringMatch`], in ascending order of `end`.
///
/// `needle_len` must be the length the row was computed with. The start of
/// every match is `end - needle_len - offset` and is reported as is, so it can
/// be negative when the best path runs through the haystack boundary.
pub fn extract_matches(needle_len: usize, row: &[AlignmentCell]) -> Vec<SubstringMatch> {
    let Some(first) = row.first() else {
        return Vec::new();
    };

    let mut min = first.distance;
    let mut indices = vec![0];
    for (i, cell) in row.iter().enumerate().skip(1) {
        if cell.distance < min {
            min = cell.distance;
            indices.clear();
            indices.push(i);
        } else if cell.distance == min {
            indices.push(i);
        }
    }
    debug!(
        "extract_matches: min distance {min} reached at {} position(s)",
        indices.len()
    );

    indices
        .into_iter()
        .map(|end| {
            let AlignmentCell { distance, offset } = row[end];
            SubstringMatch {
                distance,
                start: end as isize - needle_len as isize - offset,
                end,
            }
        })
        .collect()
}

/// Finds all best approximate occurrences of `needle` in `haystack`.
///
/// ```rust
/// use fuzzy_substring::{SubstringMatch, find_matches};
///
/// let needle: Vec<char> = "cat".chars().collect();
/// let haystack: Vec<char> = "a cat sat".chars().collect();
/// assert_eq!(
///     find_matches(&needle, &haystack),
///     [SubstringMatch { distance: 0, start: 2, end: 5 }]
/// );
/// ```
pub fn find_matches<T: PartialEq>(needle: &[T], haystack: &[T]) -> Vec<SubstringMatch> {
    extract_matches(needle.len(), &edit_distances(needle, haystack))
}

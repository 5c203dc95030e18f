use crate::{AlignmentCell, DistanceRow};

/// Computes the last row of the substring edit-distance matrix.
///
/// Cell `i` holds the smallest Levenshtein distance between `needle` and any
/// substring of `haystack` ending at unit `i`, together with the net
/// insertion/deletion offset of the path that produced it. The row always
/// has `haystack.len() + 1` cells.
///
/// ```rust
/// use fuzzy_substring::{AlignmentCell, edit_distances};
///
/// let row = edit_distances(b"ab", b"b");
/// assert_eq!(row[0], AlignmentCell::new(2, 0));
/// assert_eq!(row[1], AlignmentCell::new(1, 0));
/// ```
pub fn edit_distances<T: PartialEq>(needle: &[T], haystack: &[T]) -> DistanceRow {
    // Zero needle units match every haystack prefix for free.
    let mut prev: DistanceRow = vec![AlignmentCell::default(); haystack.len() + 1];
    let mut curr: DistanceRow = Vec::with_capacity(haystack.len() + 1);

    for (i, n) in needle.iter().enumerate() {
        curr.clear();
        curr.push(AlignmentCell::new(i + 1, 0));

        for (j, h) in haystack.iter().enumerate() {
            let above = prev[j + 1];
            let left = curr[j];
            let diagonal = prev[j];

            let deletion = above.distance + 1;
            let insertion = left.distance + 1;
            let substitution = diagonal.distance + usize::from(n != h);
            let distance = deletion.min(insertion).min(substitution);

            // Deletion wins ties over insertion, insertion over substitution.
            let offset = if deletion == distance {
                above.offset - 1
            } else if insertion == distance {
                left.offset + 1
            } else {
                diagonal.offset
            };
            curr.push(AlignmentCell::new(distance, offset));
        }

        std::mem::swap(&mut prev, &mut curr);
        trace!("row {}/{} done, boundary {:?}", i + 1, needle.len(), prev[0]);
    }

    debug!(
        "edit_distances: needle={} haystack={} cells={}",
        needle.len(),
        haystack.len(),
        prev.len()
    );
    prev
}

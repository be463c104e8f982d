use super::segment::{Diff, Op};

/// Rebuild the source text of a script from its equalities and deletions.
#[must_use]
pub fn source_text(diffs: &[Diff]) -> String {
    diffs
        .iter()
        .filter(|diff| diff.op != Op::Insert)
        .flat_map(|diff| diff.text.iter())
        .collect()
}

/// Rebuild the destination text of a script from its equalities and
/// insertions.
#[must_use]
pub fn target_text(diffs: &[Diff]) -> String {
    diffs
        .iter()
        .filter(|diff| diff.op != Op::Delete)
        .flat_map(|diff| diff.text.iter())
        .collect()
}

/// Map a location in the source text to its equivalent in the destination
/// text. Locations inside a deleted span map to the position the deletion
/// collapsed onto.
#[must_use]
pub fn x_index(diffs: &[Diff], loc: usize) -> usize {
    let mut chars1 = 0;
    let mut chars2 = 0;
    let mut last_chars1 = 0;
    let mut last_chars2 = 0;
    let mut containing = None;
    for diff in diffs {
        if diff.op != Op::Insert {
            chars1 += diff.len();
        }
        if diff.op != Op::Delete {
            chars2 += diff.len();
        }
        if chars1 > loc {
            containing = Some(diff);
            break;
        }
        last_chars1 = chars1;
        last_chars2 = chars2;
    }
    match containing {
        // The location was deleted.
        Some(diff) if diff.op == Op::Delete => last_chars2,
        _ => last_chars2 + (loc - last_chars1),
    }
}

/// Number of changed characters in a script: an upper bound on the true
/// Levenshtein distance, counting a paired deletion and insertion as one
/// substitution.
#[must_use]
pub fn levenshtein(diffs: &[Diff]) -> usize {
    let mut distance = 0;
    let mut insertions = 0;
    let mut deletions = 0;
    for diff in diffs {
        match diff.op {
            Op::Insert => insertions += diff.len(),
            Op::Delete => deletions += diff.len(),
            Op::Equal => {
                distance += insertions.max(deletions);
                insertions = 0;
                deletions = 0;
            }
        }
    }
    distance + insertions.max(deletions)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn script(segments: &[(Op, &str)]) -> Vec<Diff> {
        segments
            .iter()
            .map(|&(op, text)| Diff::new(op, text))
            .collect()
    }

    #[test]
    fn test_source_and_target_text() {
        let diffs = script(&[
            (Op::Equal, "jump"),
            (Op::Delete, "s"),
            (Op::Insert, "ed"),
            (Op::Equal, " over "),
            (Op::Delete, "the"),
            (Op::Insert, "a"),
            (Op::Equal, " lazy"),
        ]);
        assert_eq!(source_text(&diffs), "jumps over the lazy");
        assert_eq!(target_text(&diffs), "jumped over a lazy");
    }

    #[test]
    fn test_x_index_after_translation() {
        let diffs = script(&[(Op::Delete, "a"), (Op::Insert, "1234"), (Op::Equal, "xyz")]);
        assert_eq!(x_index(&diffs, 2), 5);
    }

    #[test]
    fn test_x_index_inside_deletion() {
        let diffs = script(&[(Op::Equal, "a"), (Op::Delete, "1234"), (Op::Equal, "xyz")]);
        assert_eq!(x_index(&diffs, 3), 1);
    }

    #[test]
    fn test_x_index_past_insertion() {
        let diffs = script(&[(Op::Equal, "The "), (Op::Insert, "big "), (Op::Equal, "cat")]);
        assert_eq!(x_index(&diffs, 5), 9);
    }

    #[test]
    fn test_x_index_is_monotonic() {
        let diffs = script(&[
            (Op::Equal, "ab"),
            (Op::Delete, "cd"),
            (Op::Insert, "XY"),
            (Op::Equal, "ef"),
        ]);
        let mapped: Vec<usize> = (0..=6).map(|loc| x_index(&diffs, loc)).collect();
        assert!(mapped.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_levenshtein() {
        let with_trailing = script(&[(Op::Delete, "abc"), (Op::Insert, "1234"), (Op::Equal, "xyz")]);
        assert_eq!(levenshtein(&with_trailing), 4);

        let with_leading = script(&[(Op::Equal, "xyz"), (Op::Delete, "abc"), (Op::Insert, "1234")]);
        assert_eq!(levenshtein(&with_leading), 4);

        let with_middle = script(&[(Op::Delete, "abc"), (Op::Equal, "xyz"), (Op::Insert, "1234")]);
        assert_eq!(levenshtein(&with_middle), 7);
    }
}

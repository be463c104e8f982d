use crate::utils::find_subslice::find_subslice;

/// Returns the length of the longest suffix of `a` that is also a prefix
/// of `b`, e.g. 3 for `123456xxx` and `xxxabcd`.
#[must_use]
pub fn common_overlap_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    // Only the tail of `a` and the head of `b` can take part.
    let truncated = a.len().min(b.len());
    let a = &a[a.len() - truncated..];
    let b = &b[..truncated];
    if a == b {
        return truncated;
    }

    // Grow the candidate window with jumps to the next occurrence of its
    // current tail, instead of probing every length.
    let mut best = 0;
    let mut length = 1;
    loop {
        let Some(found) = find_subslice(b, &a[truncated - length..]) else {
            return best;
        };
        length += found;
        if found == 0 || a[truncated - length..] == b[..length] {
            best = length;
            length += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_null_case() {
        assert_eq!(common_overlap_len(&chars(""), &chars("abcd")), 0);
    }

    #[test]
    fn test_whole_case() {
        assert_eq!(common_overlap_len(&chars("abc"), &chars("abcd")), 3);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(common_overlap_len(&chars("123456"), &chars("abcd")), 0);
    }

    #[test]
    fn test_overlap() {
        assert_eq!(common_overlap_len(&chars("123456xxx"), &chars("xxxabcd")), 3);
    }

    #[test]
    fn test_unicode_ligature_is_not_its_letters() {
        // "fi" as two letters shares nothing with the single ligature char.
        assert_eq!(common_overlap_len(&chars("fi"), &chars("\u{fb01}i")), 0);
    }
}

/// Returns the number of leading tokens shared by `a` and `b`.
#[must_use]
pub fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .zip(b.iter())
        .take_while(|(left, right)| left == right)
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_common_prefix() {
        let a: Vec<char> = "abc".chars().collect();
        let b: Vec<char> = "xyz".chars().collect();
        assert_eq!(common_prefix_len(&a, &b), 0);
    }

    #[test]
    fn test_partial_common_prefix() {
        let a: Vec<char> = "1234abcdef".chars().collect();
        let b: Vec<char> = "1234xyz".chars().collect();
        assert_eq!(common_prefix_len(&a, &b), 4);
    }

    #[test]
    fn test_whole_common_prefix() {
        let a: Vec<char> = "1234".chars().collect();
        let b: Vec<char> = "1234xyz".chars().collect();
        assert_eq!(common_prefix_len(&a, &b), 4);
    }
}

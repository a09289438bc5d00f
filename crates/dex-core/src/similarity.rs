//! Length-normalized similarity score.

/// Derive a similarity in [0, 1] from an edit distance and the two lengths.
///
/// Defined as `1 - distance / max(len_a, len_b)`. Two empty strings are
/// treated as identical (1.0) rather than dividing by zero.
pub fn similarity(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let longest = len_a.max(len_b);
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use super::similarity;

    #[test]
    fn exact_match_is_one() {
        assert_eq!(similarity(0, 7, 7), 1.0);
    }

    #[test]
    fn both_empty_is_one() {
        assert_eq!(similarity(0, 0, 0), 1.0);
    }

    #[test]
    fn normalizes_by_longest_length() {
        assert_eq!(similarity(1, 6, 7), 1.0 - 1.0 / 7.0);
        assert_eq!(similarity(2, 7, 7), 1.0 - 2.0 / 7.0);
    }

    #[test]
    fn full_rewrite_is_zero() {
        assert_eq!(similarity(5, 5, 5), 0.0);
    }
}

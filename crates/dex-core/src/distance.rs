//! Levenshtein edit distance.
//!
//! Classic single-character insert/delete/substitute distance, no
//! transposition operation. Inputs are expected to be normalized (trimmed,
//! uppercased) by the caller; this function compares exactly what it is
//! given.

/// Compute the edit distance between `a` and `b` over `char`s.
///
/// Two-row dynamic programming, O(len_a * len_b) time and O(min_len) space.
/// Empty strings are valid: the distance is the other string's length.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];
    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

#[cfg(test)]
mod tests {
    use super::distance;

    #[test]
    fn identical_strings_are_zero() {
        assert_eq!(distance("COCAINE", "COCAINE"), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn empty_side_is_other_length() {
        assert_eq!(distance("", "HEROIN"), 6);
        assert_eq!(distance("HEROIN", ""), 6);
    }

    #[test]
    fn single_edits() {
        // deletion
        assert_eq!(distance("COCANE", "COCAINE"), 1);
        // substitution
        assert_eq!(distance("COCAIME", "COCAINE"), 1);
        // insertion
        assert_eq!(distance("COCAINES", "COCAINE"), 1);
    }

    #[test]
    fn transposition_costs_two() {
        // No Damerau operation: a swapped pair is two substitutions.
        assert_eq!(distance("COCIANE", "COCAINE"), 2);
    }

    #[test]
    fn multibyte_chars_count_once() {
        assert_eq!(distance("naïve", "naive"), 1);
    }
}

//! Free-form message selector parsing.
//!
//! Accepts the formats the mark-as-read prompt advertises: `3`, `1,3`,
//! `1-3`, combinations of those separated by commas or spaces, and the
//! literal `all`. Tokens are validated against the current queue length;
//! malformed or out-of-range tokens drop silently so a partially valid
//! input still selects something. An entirely unusable input yields an
//! empty set, which the caller reports as invalid.

/// Parse a selector into 0-based indices, in order of first appearance,
/// without duplicates. `len` is the current number of messages.
pub fn parse_selection(input: &str, len: usize) -> Vec<usize> {
    if input.eq_ignore_ascii_case("all") {
        return (0..len).collect();
    }

    let mut indices = Vec::new();
    let mut select = |index: usize, indices: &mut Vec<usize>| {
        if !indices.contains(&index) {
            indices.push(index);
        }
    };

    for token in input.split([',', ' ']).filter(|t| !t.is_empty()) {
        if let Some((a, b)) = token.split_once('-') {
            let (Ok(start), Ok(end)) = (a.parse::<usize>(), b.parse::<usize>()) else {
                continue;
            };
            if start >= 1 && start <= end && end <= len {
                for n in start..=end {
                    select(n - 1, &mut indices);
                }
            }
        } else if let Ok(n) = token.parse::<usize>()
            && n >= 1
            && n <= len
        {
            select(n - 1, &mut indices);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_number() {
        assert_eq!(parse_selection("2", 5), vec![1]);
    }

    #[test]
    fn test_list_and_range() {
        assert_eq!(parse_selection("1,3-4", 5), vec![0, 2, 3]);
    }

    #[test]
    fn test_space_separated() {
        assert_eq!(parse_selection("1 3 5", 5), vec![0, 2, 4]);
    }

    #[test]
    fn test_all_is_case_insensitive() {
        assert_eq!(parse_selection("all", 3), vec![0, 1, 2]);
        assert_eq!(parse_selection("ALL", 3), vec![0, 1, 2]);
        assert_eq!(parse_selection("All", 0), Vec::<usize>::new());
    }

    #[test]
    fn test_out_of_range_dropped() {
        assert_eq!(parse_selection("9", 3), Vec::<usize>::new());
        assert_eq!(parse_selection("2,9", 3), vec![1]);
    }

    #[test]
    fn test_malformed_tokens_dropped() {
        assert_eq!(parse_selection("abc", 3), Vec::<usize>::new());
        assert_eq!(parse_selection("abc,2", 3), vec![1]);
        assert_eq!(parse_selection("1-2-3", 5), Vec::<usize>::new());
    }

    #[test]
    fn test_range_bounds_validated() {
        // Reversed and overflowing ranges drop entirely.
        assert_eq!(parse_selection("3-1", 5), Vec::<usize>::new());
        assert_eq!(parse_selection("2-9", 5), Vec::<usize>::new());
        assert_eq!(parse_selection("0-2", 5), Vec::<usize>::new());
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(parse_selection("2,2,1-3", 5), vec![1, 0, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_selection("", 5), Vec::<usize>::new());
        assert_eq!(parse_selection(" , ", 5), Vec::<usize>::new());
    }
}

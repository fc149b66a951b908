//! Word boundary scanning over the ASCII edit buffer.
//!
//! Two separator policies coexist:
//! - word *jumps* (Ctrl / Ctrl+Shift / Alt arrows) treat only spaces as
//!   separators, so a newline does not stop a jump;
//! - word *bounds* (double-click selection) treat spaces and newlines as
//!   separators, so a selected word never spans lines.

/// Offset after skipping any spaces rightward and then crossing one word.
pub fn next_word_boundary(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    while pos < bytes.len() && bytes[pos] == b' ' {
        pos += 1;
    }
    while pos < bytes.len() && bytes[pos] != b' ' {
        pos += 1;
    }
    pos
}

/// Offset after skipping any spaces leftward and then crossing one word.
pub fn prev_word_boundary(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    while pos > 0 && bytes[pos - 1] == b' ' {
        pos -= 1;
    }
    while pos > 0 && bytes[pos - 1] != b' ' {
        pos -= 1;
    }
    pos
}

fn is_separator(byte: u8) -> bool {
    byte == b' ' || byte == b'\n'
}

/// Start of the word containing `pos`.
pub fn word_start(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    while pos > 0 && !is_separator(bytes[pos - 1]) {
        pos -= 1;
    }
    pos
}

/// End of the word containing `pos` (exclusive).
pub fn word_end(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    while pos < bytes.len() && !is_separator(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Bounds of the word containing `pos`.
pub fn word_bounds(text: &str, pos: usize) -> (usize, usize) {
    (word_start(text, pos), word_end(text, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_word_boundary_crosses_spaces_then_word() {
        let text = "foo bar";
        assert_eq!(next_word_boundary(text, 0), 3);
        assert_eq!(next_word_boundary(text, 3), 7);
        assert_eq!(next_word_boundary(text, 7), 7);
    }

    #[test]
    fn test_next_word_boundary_over_space_run() {
        let text = "a   bcd e";
        assert_eq!(next_word_boundary(text, 1), 7);
    }

    #[test]
    fn test_prev_word_boundary() {
        let text = "foo bar";
        assert_eq!(prev_word_boundary(text, 7), 4);
        assert_eq!(prev_word_boundary(text, 4), 0);
        assert_eq!(prev_word_boundary(text, 0), 0);
    }

    #[test]
    fn test_jumps_ignore_newlines() {
        // Only spaces separate words for jump motions.
        let text = "foo\nbar baz";
        assert_eq!(next_word_boundary(text, 0), 7);
        assert_eq!(prev_word_boundary(text, 7), 0);
    }

    #[test]
    fn test_word_bounds_at_middle() {
        let text = "one two three";
        assert_eq!(word_bounds(text, 5), (4, 7));
    }

    #[test]
    fn test_word_bounds_stop_at_newline() {
        let text = "one\ntwo";
        assert_eq!(word_bounds(text, 1), (0, 3));
        assert_eq!(word_bounds(text, 5), (4, 7));
    }

    #[test]
    fn test_word_bounds_on_separator() {
        // A click on the separator itself yields an empty word there.
        let text = "a b";
        assert_eq!(word_bounds(text, 1), (1, 1));
    }
}

//! Wrapped-line geometry.
//!
//! The compose area wraps text at a fixed column width in addition to
//! explicit newlines. Vertical cursor movement and mouse hit-testing both
//! resolve through these functions, so the two can never disagree about
//! where a line breaks.

/// Column width of the compose text area.
pub const WRAP_WIDTH: usize = 55;

/// Visual (line, column) of a buffer offset.
pub fn line_col_at(text: &str, width: usize, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    for (i, byte) in text.bytes().enumerate() {
        if i >= offset {
            break;
        }
        advance(&mut line, &mut col, byte, width);
    }
    (line, col)
}

/// Number of visual lines the text occupies (at least 1).
pub fn line_count(text: &str, width: usize) -> usize {
    let mut line = 0;
    let mut col = 0;
    for byte in text.bytes() {
        advance(&mut line, &mut col, byte, width);
    }
    line + 1
}

/// Buffer offset of a visual (line, column).
///
/// The column clamps to the target line's length; a line past the end of
/// the text resolves to the end of the buffer.
pub fn offset_at(text: &str, width: usize, target_line: usize, target_col: usize) -> usize {
    let bytes = text.as_bytes();
    let mut line = 0;
    let mut col = 0;
    let mut line_end = None;
    for i in 0..=bytes.len() {
        if line == target_line {
            if col == target_col {
                return i;
            }
            line_end = Some(i);
        } else if line > target_line {
            return line_end.unwrap_or(i);
        }
        if i < bytes.len() {
            advance(&mut line, &mut col, bytes[i], width);
        }
    }
    bytes.len()
}

fn advance(line: &mut usize, col: &mut usize, byte: u8, width: usize) {
    if byte == b'\n' {
        *line += 1;
        *col = 0;
    } else {
        *col += 1;
        if *col >= width {
            *line += 1;
            *col = 0;
        }
    }
}

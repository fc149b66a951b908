//! Batched screen painter.
//!
//! Accumulates a full frame of terminal commands in memory and flushes
//! them with a single write, so a redraw never flickers through dozens of
//! small writes. All drawing goes through semantic [`Style`]s; no screen
//! emits escape codes of its own.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthStr;

use crate::editor::{EditorState, Focus};

/// Left margin shared by every screen.
pub const LEFT_X: u16 = 9;

/// Row of the screen title line.
pub const TITLE_Y: u16 = 4;

/// First content row below the title.
pub const CONTENT_Y: u16 = 6;

/// Inner width of the left (action) button box.
const ACTION_BUTTON_WIDTH: usize = 16;

/// Inner width of the right (back) button box.
const BACK_BUTTON_WIDTH: usize = 20;

/// Column where the right button box starts.
pub const RIGHT_BUTTON_X: u16 = 29;

/// Semantic text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Green banner, black text.
    Header,
    /// Yellow section title.
    Title,
    /// Cyan key hints.
    Hint,
    /// Green confirmations and unread messages.
    Good,
    /// Red errors.
    Bad,
    /// Grey: read messages, unfocused fields.
    Dim,
    /// White background, black text: focused field or button.
    Focused,
    /// Inverted run inside a focused field.
    SelectedText,
}

pub struct Painter {
    buf: Vec<u8>,
}

impl Painter {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(16384),
        }
    }

    /// Clear the screen and home the cursor; call once per frame.
    pub fn begin_frame(&mut self) -> io::Result<()> {
        queue!(self.buf, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// Write the accumulated frame to stdout in one syscall.
    pub fn flush(&mut self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(&self.buf)?;
        out.flush()?;
        self.buf.clear();
        Ok(())
    }

    pub fn print(&mut self, x: u16, y: u16, style: Style, text: &str) -> io::Result<()> {
        queue!(self.buf, MoveTo(x, y))?;
        self.set_style(style)?;
        queue!(self.buf, Print(text), ResetColor)?;
        Ok(())
    }

    fn set_style(&mut self, style: Style) -> io::Result<()> {
        match style {
            Style::Plain => {}
            Style::Header => queue!(
                self.buf,
                SetBackgroundColor(Color::Green),
                SetForegroundColor(Color::Black)
            )?,
            Style::Title => queue!(self.buf, SetForegroundColor(Color::Yellow))?,
            Style::Hint => queue!(self.buf, SetForegroundColor(Color::Cyan))?,
            Style::Good => queue!(self.buf, SetForegroundColor(Color::Green))?,
            Style::Bad => queue!(self.buf, SetForegroundColor(Color::Red))?,
            Style::Dim => queue!(self.buf, SetForegroundColor(Color::Grey))?,
            Style::Focused => queue!(
                self.buf,
                SetBackgroundColor(Color::White),
                SetForegroundColor(Color::Black)
            )?,
            Style::SelectedText => queue!(
                self.buf,
                SetBackgroundColor(Color::Black),
                SetForegroundColor(Color::White)
            )?,
        }
        Ok(())
    }

    fn glyph(&mut self, style: Style, ch: char) -> io::Result<()> {
        // Full reset per glyph: half-set styles (fg without bg) must not
        // inherit colors from a neighboring selected run.
        queue!(self.buf, ResetColor)?;
        self.set_style(style)?;
        queue!(self.buf, Print(ch))?;
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        queue!(self.buf, ResetColor)?;
        Ok(())
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Shared fragments
// =============================================================================

/// Program banner across the top three rows.
pub fn header(p: &mut Painter) -> io::Result<()> {
    let inner = "Relay: Outbox Composer".to_string();
    let pad = 72usize.saturating_sub(inner.width());
    let left = pad / 2;
    p.print(0, 0, Style::Header, &format!("╔{}╗", "═".repeat(72)))?;
    p.print(
        0,
        1,
        Style::Header,
        &format!(
            "║{}{}{}║",
            " ".repeat(left),
            inner,
            " ".repeat(pad - left)
        ),
    )?;
    p.print(0, 2, Style::Header, &format!("╚{}╝", "═".repeat(72)))?;
    Ok(())
}

/// Yellow `═══ TITLE ═══` section line.
pub fn title(p: &mut Painter, text: &str) -> io::Result<()> {
    p.print(
        LEFT_X,
        TITLE_Y,
        Style::Title,
        &format!("═══════════════════ {text} ═══════════════════"),
    )
}

pub fn hint(p: &mut Painter, y: u16, text: &str) -> io::Result<()> {
    p.print(LEFT_X, y, Style::Hint, text)
}

fn boxed(
    p: &mut Painter,
    x: u16,
    y: u16,
    inner_width: usize,
    label: &str,
    highlighted: bool,
) -> io::Result<()> {
    let style = if highlighted { Style::Focused } else { Style::Plain };
    let pad = inner_width.saturating_sub(label.width() + 2);
    p.print(x, y, style, &format!("╔{}╗", "═".repeat(inner_width)))?;
    p.print(
        x,
        y + 1,
        style,
        &format!("║  {}{}║", label, " ".repeat(pad)),
    )?;
    p.print(x, y + 2, style, &format!("╚{}╝", "═".repeat(inner_width)))?;
    Ok(())
}

/// The action/back button pair under an editing area.
pub fn button_pair(
    p: &mut Painter,
    y: u16,
    action_label: &str,
    focused: Option<usize>,
) -> io::Result<()> {
    boxed(
        p,
        LEFT_X,
        y,
        ACTION_BUTTON_WIDTH,
        action_label,
        focused == Some(0),
    )?;
    boxed(
        p,
        RIGHT_BUTTON_X,
        y,
        BACK_BUTTON_WIDTH,
        "[← Back]",
        focused == Some(1),
    )?;
    Ok(())
}

/// Lone back button used by the acknowledge screens.
pub fn back_button(p: &mut Painter, y: u16) -> io::Result<()> {
    boxed(p, LEFT_X, y, BACK_BUTTON_WIDTH, "[← Back]", false)?;
    hint(p, y + 4, "Enter or double-click to go back")?;
    Ok(())
}

/// One message entry with its unread marker, indenting continuation
/// lines under the head line. Returns the next free row.
pub fn message_entry(
    p: &mut Painter,
    y: u16,
    label: &str,
    text: &str,
    read: bool,
) -> io::Result<u16> {
    let style = if read { Style::Dim } else { Style::Good };
    let marker = if read { "[x]" } else { "[-]" };
    let head = format!("{marker} {label} ");
    let indent = " ".repeat(head.width());
    let mut row = y;
    for (i, line) in text.split('\n').enumerate() {
        if i == 0 {
            p.print(LEFT_X, row, style, &format!("{head}{line}"))?;
        } else {
            p.print(LEFT_X, row, style, &format!("{indent}{line}"))?;
        }
        row += 1;
    }
    Ok(row)
}

// =============================================================================
// Text area
// =============================================================================

/// Render an editing area cell by cell: wrapped text, the caret bar when
/// no selection is active, and inverted selected runs. Mirrors the
/// wrapped-line geometry the engine navigates by.
pub fn text_area(
    p: &mut Painter,
    x: u16,
    y: u16,
    state: &EditorState,
    max_rows: usize,
) -> io::Result<()> {
    let width = state.options().wrap_width;
    let rows = state.line_count().min(max_rows);
    let text = state.buffer().as_bytes();
    let focused = state.focus() == Focus::TextArea;
    let base = if focused { Style::Focused } else { Style::Dim };
    let selection = state.selection();
    let show_cursor = focused && selection.is_none();

    let mut index = 0usize;
    for row in 0..rows {
        queue!(p.buf, MoveTo(x, y + row as u16))?;
        let mut rendered = 0usize;
        while rendered < width && index <= text.len() {
            if show_cursor && index == state.cursor() {
                p.glyph(base, '│')?;
                rendered += 1;
                if rendered >= width {
                    break;
                }
            }
            let selected = selection.is_some_and(|(lo, hi)| index >= lo && index < hi);
            let style = if selected { Style::SelectedText } else { base };
            if index < text.len() {
                let byte = text[index];
                index += 1;
                if byte == b'\n' {
                    while rendered < width {
                        p.glyph(style, ' ')?;
                        rendered += 1;
                    }
                    break;
                }
                p.glyph(style, byte as char)?;
                rendered += 1;
            } else {
                p.glyph(style, ' ')?;
                rendered += 1;
                index += 1;
            }
        }
        while rendered < width {
            p.glyph(base, ' ')?;
            rendered += 1;
        }
        p.reset()?;
    }
    Ok(())
}

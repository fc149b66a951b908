//! Text edit engine.
//!
//! `EditorState` owns the buffer, cursor, selection, and focus for one
//! editing screen. It consumes decoded key events and recognized mouse
//! gestures and mutates itself under two invariants:
//! - `0 <= cursor <= buffer.len()` at all times;
//! - selection endpoints always lie within `[0, buffer.len()]`, and a
//!   selection whose normalized endpoints coincide counts as no selection.
//!
//! The engine knows nothing about rendering or the queue; activation of a
//! button is reported to the caller as an [`EditorAction`].

use crate::input::gesture::Gesture;
use crate::input::parser::{KeyCode, KeyEvent, Modifier};

use super::word;
use super::wrap;

/// Which region receives directional and activation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TextArea,
    Buttons,
}

/// Number of buttons below an editing area.
pub const BUTTON_COUNT: usize = 2;

/// A selection as typed: `anchor` is where it started, `active` follows
/// the cursor. Consumers normalize to (min, max).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub active: usize,
}

impl Selection {
    pub fn normalized(&self) -> (usize, usize) {
        (
            self.anchor.min(self.active),
            self.anchor.max(self.active),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// Per-screen editor behavior, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct EditorOptions {
    /// Whether Enter inserts a newline and vertical arrows navigate lines.
    pub multiline: bool,
    /// Column width the area wraps (and hit-tests) at.
    pub wrap_width: usize,
}

impl EditorOptions {
    /// Multiline compose area.
    pub fn compose() -> Self {
        Self {
            multiline: true,
            wrap_width: wrap::WRAP_WIDTH,
        }
    }

    /// One-row input field.
    pub fn single_line(width: usize) -> Self {
        Self {
            multiline: false,
            wrap_width: width,
        }
    }
}

/// What a key event asked the surrounding screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    /// Enter pressed on the button row; carries the selected button index.
    Activate(usize),
}

/// Buffer, cursor, selection, and focus for one editing screen.
pub struct EditorState {
    buffer: String,
    cursor: usize,
    selection: Option<Selection>,
    focus: Focus,
    selected_button: usize,
    options: EditorOptions,
}

impl EditorState {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            selection: None,
            focus: Focus::TextArea,
            selected_button: 0,
            options,
        }
    }

    // =============================================================================
    // Snapshot accessors (all the renderer sees)
    // =============================================================================

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Normalized selection, `None` when absent or empty.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
            .filter(|sel| !sel.is_empty())
            .map(|sel| sel.normalized())
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_button(&self) -> usize {
        self.selected_button
    }

    pub fn options(&self) -> EditorOptions {
        self.options
    }

    /// Visual lines the buffer currently occupies.
    pub fn line_count(&self) -> usize {
        wrap::line_count(&self.buffer, self.options.wrap_width)
    }

    // =============================================================================
    // Key events
    // =============================================================================

    pub fn apply_key(&mut self, key: &KeyEvent) -> EditorAction {
        match key.code {
            KeyCode::Char(ch) => {
                if self.focus == Focus::TextArea
                    && !key.modifiers.intersects(Modifier::CTRL | Modifier::ALT)
                {
                    self.insert_char(ch);
                }
                EditorAction::None
            }
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => {
                if self.focus == Focus::TextArea {
                    self.backspace();
                }
                EditorAction::None
            }
            KeyCode::Delete => {
                if self.focus == Focus::TextArea {
                    self.delete_forward();
                }
                EditorAction::None
            }
            KeyCode::Left => self.handle_horizontal(false, key.modifiers),
            KeyCode::Right => self.handle_horizontal(true, key.modifiers),
            KeyCode::Up => self.handle_vertical(false, key.modifiers),
            KeyCode::Down => self.handle_vertical(true, key.modifiers),
        }
    }

    fn handle_enter(&mut self) -> EditorAction {
        match self.focus {
            Focus::Buttons => EditorAction::Activate(self.selected_button),
            Focus::TextArea => {
                if self.options.multiline {
                    self.insert_char('\n');
                }
                EditorAction::None
            }
        }
    }

    fn handle_horizontal(&mut self, right: bool, modifiers: Modifier) -> EditorAction {
        if self.focus == Focus::Buttons {
            if modifiers.is_empty() {
                self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
            }
            return EditorAction::None;
        }

        if modifiers.is_empty() {
            self.selection = None;
            self.cursor = if right {
                (self.cursor + 1).min(self.buffer.len())
            } else {
                self.cursor.saturating_sub(1)
            };
        } else if modifiers == Modifier::CTRL {
            self.selection = None;
            self.cursor = self.word_jump(right, self.cursor);
        } else if modifiers == Modifier::SHIFT {
            let target = if right {
                (self.cursor + 1).min(self.buffer.len())
            } else {
                self.cursor.saturating_sub(1)
            };
            self.extend_selection_to(target);
        } else if modifiers == Modifier::CTRL | Modifier::SHIFT {
            let target = self.word_jump(right, self.cursor);
            self.extend_selection_to(target);
        } else if modifiers == Modifier::ALT {
            self.alt_extend(right);
        }
        EditorAction::None
    }

    fn handle_vertical(&mut self, down: bool, modifiers: Modifier) -> EditorAction {
        if modifiers == Modifier::SHIFT {
            if self.focus == Focus::TextArea && self.options.multiline {
                let width = self.options.wrap_width;
                let target = if down {
                    (self.cursor + width).min(self.buffer.len())
                } else {
                    self.cursor.saturating_sub(width)
                };
                self.extend_selection_to(target);
            }
            return EditorAction::None;
        }
        if !modifiers.is_empty() {
            return EditorAction::None;
        }

        match (self.focus, down) {
            (Focus::Buttons, false) => {
                self.focus = Focus::TextArea;
            }
            (Focus::Buttons, true) => {}
            (Focus::TextArea, down) => {
                if self.options.multiline {
                    self.move_line(down);
                } else if down {
                    self.focus = Focus::Buttons;
                }
            }
        }
        EditorAction::None
    }

    /// Vertical cursor movement across wrapped lines. Down past the last
    /// line hands focus to the buttons; Up on the first line goes to the
    /// start of the buffer.
    fn move_line(&mut self, down: bool) {
        let width = self.options.wrap_width;
        let (line, col) = wrap::line_col_at(&self.buffer, width, self.cursor);
        if down {
            let last = wrap::line_count(&self.buffer, width) - 1;
            if line >= last {
                self.focus = Focus::Buttons;
                return;
            }
            self.cursor = wrap::offset_at(&self.buffer, width, line + 1, col);
        } else if line == 0 {
            self.cursor = 0;
        } else {
            self.cursor = wrap::offset_at(&self.buffer, width, line - 1, col);
        }
        self.selection = None;
    }

    fn word_jump(&self, right: bool, from: usize) -> usize {
        if right {
            word::next_word_boundary(&self.buffer, from)
        } else {
            word::prev_word_boundary(&self.buffer, from)
        }
    }

    /// Anchor a selection at the cursor if none exists, then move the
    /// active end to `target`.
    fn extend_selection_to(&mut self, target: usize) {
        let anchor = match self.selection {
            Some(sel) => sel.anchor,
            None => self.cursor,
        };
        self.cursor = target;
        self.selection = Some(Selection {
            anchor,
            active: target,
        });
    }

    /// Word-block extension: grow the normalized selection by one word at
    /// its far end, anchoring the opposite end.
    fn alt_extend(&mut self, right: bool) {
        let (lo, hi) = match self.selection.filter(|s| !s.is_empty()) {
            Some(sel) => sel.normalized(),
            None => (self.cursor, self.cursor),
        };
        if right {
            let end = word::next_word_boundary(&self.buffer, hi);
            self.selection = Some(Selection {
                anchor: lo,
                active: end,
            });
            self.cursor = end;
        } else {
            let start = word::prev_word_boundary(&self.buffer, lo);
            self.selection = Some(Selection {
                anchor: hi,
                active: start,
            });
            self.cursor = start;
        }
    }

    // =============================================================================
    // Buffer mutation
    // =============================================================================

    fn insert_char(&mut self, ch: char) {
        self.delete_selection();
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.cursor > 0 {
            self.buffer.remove(self.cursor - 1);
            self.cursor -= 1;
        }
    }

    fn delete_forward(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Remove the selected range, leaving the cursor at its start.
    /// Returns false when no non-empty selection was present.
    fn delete_selection(&mut self) -> bool {
        let Some(sel) = self.selection.take() else {
            return false;
        };
        let (lo, hi) = sel.normalized();
        if lo == hi {
            return false;
        }
        self.buffer.replace_range(lo..hi, "");
        self.cursor = lo;
        true
    }

    // =============================================================================
    // Gestures
    // =============================================================================

    pub fn apply_gesture(&mut self, gesture: &Gesture) {
        match *gesture {
            Gesture::MoveCaret(offset) => {
                self.cursor = offset.min(self.buffer.len());
                self.selection = None;
                self.focus = Focus::TextArea;
            }
            Gesture::SelectWord { start, end } => {
                self.selection = Some(Selection {
                    anchor: start,
                    active: end,
                });
                self.cursor = end;
                self.focus = Focus::TextArea;
            }
            Gesture::ExtendWord { start, end, cursor } => {
                self.selection = Some(Selection {
                    anchor: start,
                    active: end,
                });
                self.cursor = cursor.min(self.buffer.len());
            }
            Gesture::None => {}
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Mouse gesture recognition.
//!
//! Consumes press/release/drag events already resolved to buffer offsets,
//! plus a caller-supplied monotonic timestamp, and yields selection
//! gestures: single-click caret moves, double-click word selection, and
//! word-granular drag extension. Also home to the generic [`ClickTracker`]
//! that menu rows, action buttons, and the back button use for their
//! double-click activation.
//!
//! The recognizer never reads a clock; screens capture the time once per
//! event and pass it in as milliseconds.

use crate::editor::word;

/// Two clicks within this window count as a double click.
pub const DOUBLE_CLICK_MS: u64 = 500;

/// SGR button code of a left press/release.
pub const LEFT_BUTTON: u16 = 0;

/// SGR button code of a motion report with the left button held.
pub const LEFT_DRAG: u16 = 32;

/// A recognized selection gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Single click: place the caret.
    MoveCaret(usize),
    /// Double click: select the enclosing word.
    SelectWord { start: usize, end: usize },
    /// Drag in word-select mode: selection grown to word granularity,
    /// with the cursor at the dragged edge.
    ExtendWord {
        start: usize,
        end: usize,
        cursor: usize,
    },
    None,
}

/// Double-click and drag-selection state for one text area.
pub struct GestureRecognizer {
    last_click: Option<(usize, u64)>,
    pressed: bool,
    word_mode: bool,
    word_anchor: Option<(usize, usize)>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self {
            last_click: None,
            pressed: false,
            word_mode: false,
            word_anchor: None,
        }
    }

    /// Left button pressed at `offset`.
    pub fn on_press(&mut self, text: &str, offset: usize, button: u16, now_ms: u64) -> Gesture {
        if button != LEFT_BUTTON {
            return Gesture::None;
        }
        self.pressed = true;

        if let Some((pos, at)) = self.last_click
            && pos == offset
            && now_ms.saturating_sub(at) < DOUBLE_CLICK_MS
        {
            let (start, end) = word::word_bounds(text, offset);
            self.word_mode = true;
            self.word_anchor = Some((start, end));
            // Consume the stored click so a third press starts over.
            self.last_click = None;
            return Gesture::SelectWord { start, end };
        }

        self.word_mode = false;
        self.word_anchor = None;
        self.last_click = Some((offset, now_ms));
        Gesture::MoveCaret(offset)
    }

    /// Motion report while a button is held.
    pub fn on_drag(&mut self, text: &str, offset: usize, button: u16) -> Gesture {
        if button != LEFT_DRAG || !self.pressed || !self.word_mode {
            return Gesture::None;
        }
        let Some((anchor_start, anchor_end)) = self.word_anchor else {
            return Gesture::None;
        };

        if offset >= anchor_end {
            let end = word::word_end(text, offset);
            Gesture::ExtendWord {
                start: anchor_start,
                end,
                cursor: end,
            }
        } else if offset <= anchor_start {
            let start = word::word_start(text, offset);
            Gesture::ExtendWord {
                start,
                end: anchor_end,
                cursor: start,
            }
        } else {
            // Back inside the anchor word: collapse to it.
            Gesture::ExtendWord {
                start: anchor_start,
                end: anchor_end,
                cursor: anchor_end,
            }
        }
    }

    /// Left button released. The selection itself is retained; only the
    /// press and word-select states clear.
    pub fn on_release(&mut self, button: u16) {
        if button == LEFT_BUTTON {
            self.pressed = false;
            self.word_mode = false;
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ClickTracker
// =============================================================================

/// Double-click detection over arbitrary integer targets (menu rows,
/// button indices). `click` returns true on the second click on the same
/// target within the window, then resets.
pub struct ClickTracker {
    last: Option<(u32, u64)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn click(&mut self, target: u32, now_ms: u64) -> bool {
        if let Some((prev, at)) = self.last
            && prev == target
            && now_ms.saturating_sub(at) < DOUBLE_CLICK_MS
        {
            self.last = None;
            return true;
        }
        self.last = Some((target, now_ms));
        false
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "hello brave world";

    #[test]
    fn test_single_click_moves_caret() {
        let mut rec = GestureRecognizer::new();
        assert_eq!(rec.on_press(TEXT, 7, LEFT_BUTTON, 100), Gesture::MoveCaret(7));
    }

    #[test]
    fn test_double_click_selects_word() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 7, LEFT_BUTTON, 100);
        assert_eq!(
            rec.on_press(TEXT, 7, LEFT_BUTTON, 300),
            Gesture::SelectWord { start: 6, end: 11 }
        );
    }

    #[test]
    fn test_slow_second_click_is_a_single_click() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 7, LEFT_BUTTON, 100);
        assert_eq!(
            rec.on_press(TEXT, 7, LEFT_BUTTON, 100 + DOUBLE_CLICK_MS),
            Gesture::MoveCaret(7)
        );
    }

    #[test]
    fn test_click_elsewhere_does_not_select() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 2, LEFT_BUTTON, 100);
        assert_eq!(rec.on_press(TEXT, 7, LEFT_BUTTON, 200), Gesture::MoveCaret(7));
    }

    #[test]
    fn test_third_click_starts_over() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 7, LEFT_BUTTON, 100);
        rec.on_press(TEXT, 7, LEFT_BUTTON, 200);
        // The double click consumed the stored click.
        assert_eq!(rec.on_press(TEXT, 7, LEFT_BUTTON, 300), Gesture::MoveCaret(7));
    }

    #[test]
    fn test_non_left_press_is_ignored() {
        let mut rec = GestureRecognizer::new();
        assert_eq!(rec.on_press(TEXT, 7, 2, 100), Gesture::None);
        assert_eq!(rec.on_press(TEXT, 7, LEFT_BUTTON, 150), Gesture::MoveCaret(7));
    }

    #[test]
    fn test_drag_right_extends_to_word_end() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 7, LEFT_BUTTON, 100);
        rec.on_press(TEXT, 7, LEFT_BUTTON, 200);
        assert_eq!(
            rec.on_drag(TEXT, 13, LEFT_DRAG),
            Gesture::ExtendWord {
                start: 6,
                end: 17,
                cursor: 17,
            }
        );
    }

    #[test]
    fn test_drag_left_extends_to_word_start() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 7, LEFT_BUTTON, 100);
        rec.on_press(TEXT, 7, LEFT_BUTTON, 200);
        assert_eq!(
            rec.on_drag(TEXT, 2, LEFT_DRAG),
            Gesture::ExtendWord {
                start: 0,
                end: 11,
                cursor: 0,
            }
        );
    }

    #[test]
    fn test_drag_back_inside_anchor_word_collapses() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 8, LEFT_BUTTON, 100);
        rec.on_press(TEXT, 8, LEFT_BUTTON, 200);
        assert_eq!(
            rec.on_drag(TEXT, 7, LEFT_DRAG),
            Gesture::ExtendWord {
                start: 6,
                end: 11,
                cursor: 11,
            }
        );
    }

    #[test]
    fn test_drag_without_word_mode_is_ignored() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 7, LEFT_BUTTON, 100);
        assert_eq!(rec.on_drag(TEXT, 13, LEFT_DRAG), Gesture::None);
    }

    #[test]
    fn test_release_ends_word_mode() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 7, LEFT_BUTTON, 100);
        rec.on_press(TEXT, 7, LEFT_BUTTON, 200);
        rec.on_release(LEFT_BUTTON);
        assert_eq!(rec.on_drag(TEXT, 13, LEFT_DRAG), Gesture::None);
    }

    #[test]
    fn test_drag_with_wrong_code_is_ignored() {
        let mut rec = GestureRecognizer::new();
        rec.on_press(TEXT, 7, LEFT_BUTTON, 100);
        rec.on_press(TEXT, 7, LEFT_BUTTON, 200);
        assert_eq!(rec.on_drag(TEXT, 13, 35), Gesture::None);
    }

    #[test]
    fn test_click_tracker_double_fires_once() {
        let mut clicks = ClickTracker::new();
        assert!(!clicks.click(3, 100));
        assert!(clicks.click(3, 200));
        // Consumed: the next click arms again.
        assert!(!clicks.click(3, 250));
    }

    #[test]
    fn test_click_tracker_distinguishes_targets() {
        let mut clicks = ClickTracker::new();
        assert!(!clicks.click(1, 100));
        assert!(!clicks.click(2, 150));
        assert!(clicks.click(2, 200));
    }

    #[test]
    fn test_click_tracker_honors_window() {
        let mut clicks = ClickTracker::new();
        assert!(!clicks.click(1, 100));
        assert!(!clicks.click(1, 100 + DOUBLE_CLICK_MS));
    }
}

//! Escape sequence decoder for terminal input.
//!
//! Turns raw stdin bytes into logical events:
//! - printable ASCII and control bytes (Enter, Backspace)
//! - CSI arrows, plain and with a modifier parameter (`ESC [ 1 ; m X`)
//! - CSI Delete (`ESC [ 3 ~`)
//! - SGR mouse reports (`ESC [ < b ; x ; y M/m`)
//!
//! The decoder is fed one byte at a time and buffers the bytes of the
//! sequence currently being assembled. A byte that cannot extend any known
//! sequence abandons the whole pending buffer silently; terminals
//! occasionally deliver partial or exotic sequences and none of them may
//! stall or kill the session.

// =============================================================================
// Types
// =============================================================================

/// A decoded input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// A key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifier,
}

/// Key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
}

bitflags::bitflags! {
    /// Keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifier: u8 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const ALT   = 1 << 1;
        const CTRL  = 1 << 2;
    }
}

/// A mouse event, with 0-based cell coordinates.
///
/// `button` carries the raw SGR button code: 0 is a left press/release,
/// codes with bit 5 set (>= 32) are motion reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseKind,
    pub button: u16,
    pub x: u16,
    pub y: u16,
}

/// Mouse event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Press,
    Release,
    Drag,
}

// =============================================================================
// Decoder
// =============================================================================

/// Longest sequence the decoder will hold before giving up on it.
/// SGR mouse reports top out well below this (`ESC [ <` + three params).
const MAX_PENDING: usize = 24;

/// Byte-at-a-time input decoder.
pub struct Decoder {
    buf: Vec<u8>,
}

enum Step {
    Event(InputEvent),
    Incomplete,
    Abandon,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(MAX_PENDING),
        }
    }

    /// Feed one byte. Returns a completed event, or `None` when the byte
    /// was buffered into a pending sequence or discarded.
    pub fn push(&mut self, byte: u8) -> Option<InputEvent> {
        self.buf.push(byte);
        match self.step() {
            Step::Event(ev) => {
                self.buf.clear();
                Some(ev)
            }
            Step::Incomplete => {
                if self.buf.len() >= MAX_PENDING {
                    tracing::trace!(len = self.buf.len(), "abandoning oversized sequence");
                    self.buf.clear();
                }
                None
            }
            Step::Abandon => {
                tracing::trace!(bytes = ?self.buf, "discarding unrecognized input");
                self.buf.clear();
                None
            }
        }
    }

    /// Feed a burst of bytes, collecting every completed event.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<InputEvent> {
        bytes.iter().filter_map(|&b| self.push(b)).collect()
    }

    /// True while a partially assembled sequence is buffered.
    pub fn has_pending(&self) -> bool {
        !self.buf.is_empty()
    }

    fn step(&self) -> Step {
        match self.buf[0] {
            0x1B => self.step_escape(),
            0x0A | 0x0D => Step::Event(key(KeyCode::Enter, Modifier::NONE)),
            0x7F | 0x08 => Step::Event(key(KeyCode::Backspace, Modifier::NONE)),
            b @ 0x20..=0x7E => Step::Event(key(KeyCode::Char(b as char), Modifier::NONE)),
            // Remaining control bytes and anything >= 0x80.
            _ => Step::Abandon,
        }
    }

    fn step_escape(&self) -> Step {
        if self.buf.len() < 2 {
            return Step::Incomplete;
        }
        if self.buf[1] != b'[' {
            return Step::Abandon;
        }
        if self.buf.len() < 3 {
            return Step::Incomplete;
        }
        match self.buf[2] {
            b'A' => Step::Event(key(KeyCode::Up, Modifier::NONE)),
            b'B' => Step::Event(key(KeyCode::Down, Modifier::NONE)),
            b'C' => Step::Event(key(KeyCode::Right, Modifier::NONE)),
            b'D' => Step::Event(key(KeyCode::Left, Modifier::NONE)),
            b'1' => self.step_modified_arrow(),
            b'3' => self.step_delete(),
            b'<' => self.step_sgr_mouse(),
            _ => Step::Abandon,
        }
    }

    /// `ESC [ 1 ; m X` where `m` is a single modifier digit and `X` a
    /// direction letter. Fixed length: six bytes.
    fn step_modified_arrow(&self) -> Step {
        if self.buf.len() < 4 {
            return Step::Incomplete;
        }
        if self.buf[3] != b';' {
            return Step::Abandon;
        }
        if self.buf.len() < 6 {
            return Step::Incomplete;
        }
        // Validate only once all six bytes are in, so an unknown modifier
        // swallows its whole sequence instead of leaking the direction
        // letter into the text.
        let modifiers = match self.buf[4] {
            b'2' => Modifier::SHIFT,
            b'3' => Modifier::ALT,
            b'5' => Modifier::CTRL,
            b'6' => Modifier::CTRL | Modifier::SHIFT,
            _ => return Step::Abandon,
        };
        let code = match self.buf[5] {
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            _ => return Step::Abandon,
        };
        Step::Event(key(code, modifiers))
    }

    /// `ESC [ 3 ~`, the standard Delete sequence. Fixed length: four bytes.
    fn step_delete(&self) -> Step {
        if self.buf.len() < 4 {
            return Step::Incomplete;
        }
        if self.buf[3] != b'~' {
            return Step::Abandon;
        }
        Step::Event(key(KeyCode::Delete, Modifier::NONE))
    }

    /// `ESC [ < Pb ; Px ; Py M` (press/drag) or `... m` (release).
    fn step_sgr_mouse(&self) -> Step {
        for (i, &b) in self.buf.iter().enumerate().skip(3) {
            match b {
                b'0'..=b'9' | b';' => continue,
                b'M' | b'm' => return self.finish_sgr_mouse(i),
                _ => return Step::Abandon,
            }
        }
        Step::Incomplete
    }

    fn finish_sgr_mouse(&self, terminator: usize) -> Step {
        let params = &self.buf[3..terminator];
        let mut parts = params
            .split(|&b| b == b';')
            .map(|p| std::str::from_utf8(p).ok().and_then(|s| s.parse::<u16>().ok()));
        let (Some(Some(button)), Some(Some(x)), Some(Some(y))) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Step::Abandon;
        };

        let is_release = self.buf[terminator] == b'm';
        let kind = if is_release {
            MouseKind::Release
        } else if button & 32 != 0 {
            MouseKind::Drag
        } else {
            MouseKind::Press
        };

        Step::Event(InputEvent::Mouse(MouseEvent {
            kind,
            button,
            // Wire coordinates are 1-based.
            x: x.saturating_sub(1),
            y: y.saturating_sub(1),
        }))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

fn key(code: KeyCode, modifiers: Modifier) -> InputEvent {
    InputEvent::Key(KeyEvent { code, modifiers })
}

// =============================================================================
// Tests
// =============================================================================

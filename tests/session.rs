//! End-to-end tests driving scripted raw bytes through the decoder, the
//! edit engine, and the outbox — the same path the compose screen wires
//! together, minus the painting.

use std::io::Cursor;

use relay_tui::editor::{wrap, EditorAction, EditorOptions, EditorState, Focus};
use relay_tui::error::CommitError;
use relay_tui::input::gesture::GestureRecognizer;
use relay_tui::input::parser::{InputEvent, MouseKind};
use relay_tui::input::reader::EventPump;
use relay_tui::queue::Outbox;

/// Minimal compose flow: keys go to the editor, mouse events resolve
/// through the wrap geometry into the gesture recognizer. Mouse times
/// are scripted per event.
struct Harness {
    editor: EditorState,
    gestures: GestureRecognizer,
    outbox: Outbox,
    committed: Vec<Result<(), CommitError>>,
}

impl Harness {
    fn new() -> Self {
        Self {
            editor: EditorState::new(EditorOptions::compose()),
            gestures: GestureRecognizer::new(),
            outbox: Outbox::new(),
            committed: Vec::new(),
        }
    }

    fn drive(&mut self, bytes: &[u8], mut now_ms: impl FnMut() -> u64) {
        let mut pump = EventPump::new(Cursor::new(bytes.to_vec()));
        while let Some(event) = pump.next_event().unwrap() {
            match event {
                InputEvent::Key(key) => match self.editor.apply_key(&key) {
                    EditorAction::Activate(0) => {
                        if !self.editor.buffer().is_empty() {
                            self.committed.push(self.outbox.submit(self.editor.buffer()));
                        }
                    }
                    _ => {}
                },
                InputEvent::Mouse(mouse) => {
                    let width = self.editor.options().wrap_width;
                    let offset = wrap::offset_at(
                        self.editor.buffer(),
                        width,
                        mouse.y as usize,
                        mouse.x as usize,
                    );
                    let gesture = match mouse.kind {
                        MouseKind::Press => self.gestures.on_press(
                            self.editor.buffer(),
                            offset,
                            mouse.button,
                            now_ms(),
                        ),
                        MouseKind::Drag => {
                            self.gestures.on_drag(self.editor.buffer(), offset, mouse.button)
                        }
                        MouseKind::Release => {
                            self.gestures.on_release(mouse.button);
                            continue;
                        }
                    };
                    self.editor.apply_gesture(&gesture);
                }
            }
        }
    }
}

#[test]
fn typed_message_reaches_the_outbox() {
    let mut harness = Harness::new();
    // Type two lines, move to the buttons, press Send.
    harness.drive(b"hello\rworld\x1b[B\n", || 0);
    assert_eq!(harness.committed, vec![Ok(())]);
    assert_eq!(harness.outbox.len(), 1);
    assert_eq!(harness.outbox.get(0).unwrap().text(), "hello\nworld");
    assert!(!harness.outbox.get(0).unwrap().is_read());
}

#[test]
fn duplicate_submission_is_rejected() {
    let mut harness = Harness::new();
    harness.drive(b"dup\x1b[B\n", || 0);
    assert_eq!(harness.committed, vec![Ok(())]);

    // Fresh editor for the second visit to the screen; same outbox.
    harness.editor = EditorState::new(EditorOptions::compose());
    harness.drive(b"dup\x1b[B\n", || 0);
    assert_eq!(harness.committed[1], Err(CommitError::Spam));
    assert_eq!(harness.outbox.len(), 1);
}

#[test]
fn whitespace_only_message_is_rejected_as_empty() {
    let mut harness = Harness::new();
    harness.drive(b"   \r \x1b[B\x1b[B\n", || 0);
    assert_eq!(harness.committed, vec![Err(CommitError::Empty)]);
    assert!(harness.outbox.is_empty());
}

#[test]
fn word_jump_then_selection_edit() {
    let mut harness = Harness::new();
    // "foo bar", Ctrl+Left twice lands at 0, Ctrl+Shift+Right selects
    // "foo", typing replaces it.
    harness.drive(b"foo bar\x1b[1;5D\x1b[1;5D\x1b[1;6Cx", || 0);
    assert_eq!(harness.editor.buffer(), "x bar");
    assert_eq!(harness.editor.cursor(), 1);
}

#[test]
fn double_click_selects_word_and_backspace_removes_it() {
    let mut harness = Harness::new();
    let mut times = [0u64, 100, 200].into_iter();
    // Two presses on the same cell within the window, then release,
    // then Backspace.
    harness.drive(
        b"alpha beta\x1b[<0;7;0M\x1b[<0;7;0m\x1b[<0;7;0M\x1b[<0;7;0m\x7f",
        move || times.next().unwrap_or(1000),
    );
    assert_eq!(harness.editor.buffer(), "alpha ");
    assert_eq!(harness.editor.cursor(), 6);
}

#[test]
fn drag_extends_selection_by_words() {
    let mut harness = Harness::new();
    let mut times = [0u64, 100].into_iter();
    // Double-click "beta" (wire column 8 → offset 7), drag onto "gamma",
    // then delete the whole selection.
    harness.drive(
        b"alpha beta gamma\x1b[<0;8;1M\x1b[<0;8;1M\x1b[<32;13;1M\x1b[3~",
        move || times.next().unwrap_or(200),
    );
    assert_eq!(harness.editor.buffer(), "alpha ");
}

#[test]
fn malformed_escape_sequences_do_not_disturb_editing() {
    let mut harness = Harness::new();
    harness.drive(b"a\x1b[Zb\x1b[1;4Cc", || 0);
    assert_eq!(harness.editor.buffer(), "abc");
}

#[test]
fn focus_round_trip_keeps_buffer_intact() {
    let mut harness = Harness::new();
    // Down to the buttons, type (ignored), back up, type for real.
    harness.drive(b"hi\x1b[Bzz\x1b[A!", || 0);
    assert_eq!(harness.editor.buffer(), "hi!");
    assert_eq!(harness.editor.focus(), Focus::TextArea);
}

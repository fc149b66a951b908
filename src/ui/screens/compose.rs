//! Compose screen: the multiline editor, the send/back buttons, and the
//! result sub-state a commit attempt ends in.

use std::io;

use crate::editor::{wrap, EditorAction, EditorOptions, EditorState, Focus};
use crate::error::CommitError;
use crate::input::gesture::{ClickTracker, GestureRecognizer, LEFT_BUTTON};
use crate::input::parser::{InputEvent, MouseEvent, MouseKind};
use crate::input::reader::ByteSource;
use crate::queue::Outbox;

use super::super::draw::{self, Painter, Style, LEFT_X, RIGHT_BUTTON_X};
use super::{acknowledge, Flow, Session};

const AREA_X: u16 = LEFT_X;
const LABEL_Y: u16 = draw::CONTENT_Y;
const AREA_Y: u16 = draw::CONTENT_Y + 1;
const MAX_ROWS: usize = 20;

/// Where a commit attempt left the screen.
enum Outcome {
    Sent(String),
    Rejected(CommitError),
}

enum MouseOutcome {
    Stay,
    Back,
    Finished(Outcome),
}

pub fn run<S: ByteSource>(session: &mut Session<S>) -> io::Result<Flow> {
    let mut editor = EditorState::new(EditorOptions::compose());
    let mut gestures = GestureRecognizer::new();
    let mut clicks = ClickTracker::new();

    loop {
        let button_y = button_row(&editor);
        draw_editing(&mut session.painter, &editor, button_y)?;

        let Some(event) = session.pump.next_event()? else {
            return Ok(Flow::Quit);
        };
        let now = session.clock.now_ms();

        match event {
            InputEvent::Key(key) => match editor.apply_key(&key) {
                EditorAction::Activate(0) => {
                    if let Some(outcome) = try_send(&editor, &mut session.outbox) {
                        return show_outcome(session, outcome);
                    }
                }
                EditorAction::Activate(_) => return Ok(Flow::Back),
                EditorAction::None => {}
            },
            InputEvent::Mouse(mouse) => {
                match handle_mouse(
                    &mut editor,
                    &mut gestures,
                    &mut clicks,
                    &mut session.outbox,
                    mouse,
                    button_y,
                    now,
                ) {
                    MouseOutcome::Stay => {}
                    MouseOutcome::Back => return Ok(Flow::Back),
                    MouseOutcome::Finished(outcome) => return show_outcome(session, outcome),
                }
            }
        }
    }
}

fn button_row(editor: &EditorState) -> u16 {
    let rows = editor.line_count().min(MAX_ROWS) as u16;
    AREA_Y + rows + 1
}

/// Commit policy: a truly empty buffer is not committable at all (the
/// screen just stays open); anything else goes through outbox admission.
fn try_send(editor: &EditorState, outbox: &mut Outbox) -> Option<Outcome> {
    if editor.buffer().is_empty() {
        return None;
    }
    Some(match outbox.submit(editor.buffer()) {
        Ok(()) => {
            tracing::info!(len = editor.buffer().len(), "message queued");
            Outcome::Sent(editor.buffer().to_string())
        }
        Err(err) => {
            tracing::info!(%err, "commit rejected");
            Outcome::Rejected(err)
        }
    })
}

fn handle_mouse(
    editor: &mut EditorState,
    gestures: &mut GestureRecognizer,
    clicks: &mut ClickTracker,
    outbox: &mut Outbox,
    mouse: MouseEvent,
    button_y: u16,
    now: u64,
) -> MouseOutcome {
    match mouse.kind {
        MouseKind::Release => {
            gestures.on_release(mouse.button);
            MouseOutcome::Stay
        }
        MouseKind::Drag => {
            if in_text_area(editor, mouse) {
                let offset = hit_offset(editor, mouse);
                let gesture = gestures.on_drag(editor.buffer(), offset, mouse.button);
                editor.apply_gesture(&gesture);
            }
            MouseOutcome::Stay
        }
        MouseKind::Press => {
            if mouse.button != LEFT_BUTTON {
                return MouseOutcome::Stay;
            }
            if in_text_area(editor, mouse) {
                let offset = hit_offset(editor, mouse);
                let gesture = gestures.on_press(editor.buffer(), offset, mouse.button, now);
                editor.apply_gesture(&gesture);
                return MouseOutcome::Stay;
            }
            if mouse.y >= button_y && mouse.y <= button_y + 2 {
                if (LEFT_X..LEFT_X + 18).contains(&mouse.x) {
                    if clicks.click(0, now)
                        && let Some(outcome) = try_send(editor, outbox)
                    {
                        return MouseOutcome::Finished(outcome);
                    }
                } else if (RIGHT_BUTTON_X..RIGHT_BUTTON_X + 22).contains(&mouse.x)
                    && clicks.click(1, now)
                {
                    return MouseOutcome::Back;
                }
            }
            MouseOutcome::Stay
        }
    }
}

fn in_text_area(editor: &EditorState, mouse: MouseEvent) -> bool {
    let width = editor.options().wrap_width as u16;
    let rows = editor.line_count().min(MAX_ROWS) as u16;
    mouse.y >= AREA_Y
        && mouse.y < AREA_Y + rows
        && mouse.x >= AREA_X
        && mouse.x < AREA_X + width
}

/// Map a cell inside the text rect to a buffer offset through the same
/// wrap geometry vertical navigation uses.
fn hit_offset(editor: &EditorState, mouse: MouseEvent) -> usize {
    let line = (mouse.y - AREA_Y) as usize;
    let col = (mouse.x - AREA_X) as usize;
    wrap::offset_at(editor.buffer(), editor.options().wrap_width, line, col)
}

fn draw_editing(p: &mut Painter, editor: &EditorState, button_y: u16) -> io::Result<()> {
    p.begin_frame()?;
    draw::header(p)?;
    draw::title(p, "COMPOSE MESSAGE")?;
    p.print(AREA_X, LABEL_Y, Style::Plain, "Message:")?;
    draw::text_area(p, AREA_X, AREA_Y, editor, MAX_ROWS)?;

    let focused = (editor.focus() == Focus::Buttons).then_some(editor.selected_button());
    draw::button_pair(p, button_y, "[✓ Send]", focused)?;

    let hint = match editor.focus() {
        Focus::TextArea => "←→ cursor | Ctrl+←→ word | Shift+←→ select | Alt+←→ word block",
        Focus::Buttons => "←→ choose | Enter/double-click confirm | ↑ back to text",
    };
    draw::hint(p, button_y + 4, hint)?;
    p.flush()
}

fn show_outcome<S: ByteSource>(session: &mut Session<S>, outcome: Outcome) -> io::Result<Flow> {
    let lines: Vec<(Style, String)> = match outcome {
        Outcome::Sent(text) => {
            let mut lines = Vec::new();
            for (i, line) in text.split('\n').enumerate() {
                if i == 0 {
                    lines.push((Style::Good, format!("✓ Message sent: {line}")));
                } else {
                    lines.push((Style::Good, format!("                {line}")));
                }
            }
            lines
        }
        Outcome::Rejected(CommitError::Spam) => vec![(
            Style::Bad,
            "✗ Duplicate message! An identical message is already queued.".to_string(),
        )],
        Outcome::Rejected(CommitError::Empty) => vec![(
            Style::Bad,
            "✗ A message cannot be empty or whitespace-only.".to_string(),
        )],
    };
    let back_y = draw::CONTENT_Y + lines.len() as u16 + 1;
    acknowledge(session, back_y, move |p| {
        draw::title(p, "COMPOSE MESSAGE")?;
        for (i, (style, line)) in lines.iter().enumerate() {
            p.print(LEFT_X, draw::CONTENT_Y + i as u16, *style, line)?;
        }
        Ok(())
    })
}

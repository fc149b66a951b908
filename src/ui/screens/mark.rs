//! Mark-as-read screen: the message list, a one-row selector field
//! driven by the same edit engine as the compose area, and the result
//! sub-state.

use std::io;

use crate::editor::{EditorAction, EditorOptions, EditorState, Focus};
use crate::input::gesture::{ClickTracker, GestureRecognizer, LEFT_BUTTON};
use crate::input::parser::{InputEvent, MouseEvent, MouseKind};
use crate::input::reader::ByteSource;
use crate::queue::selector::parse_selection;
use crate::queue::Outbox;

use super::super::draw::{self, Painter, Style, LEFT_X, RIGHT_BUTTON_X};
use super::{acknowledge, Flow, Session};

const FIELD_WIDTH: usize = 30;
const LIST_CAP: usize = 10;
const LIST_Y: u16 = draw::CONTENT_Y + 2;

enum Outcome {
    Marked { count: usize, all: bool },
    Invalid,
}

struct Layout {
    prompt_y: u16,
    field_y: u16,
    button_y: u16,
}

pub fn run<S: ByteSource>(session: &mut Session<S>) -> io::Result<Flow> {
    if session.outbox.is_empty() {
        return acknowledge(session, draw::CONTENT_Y + 2, |p| {
            draw::title(p, "MARK AS READ")?;
            p.print(LEFT_X, draw::CONTENT_Y, Style::Bad, "No messages.")
        });
    }

    let mut editor = EditorState::new(EditorOptions::single_line(FIELD_WIDTH));
    let mut gestures = GestureRecognizer::new();
    let mut clicks = ClickTracker::new();

    loop {
        let layout = compute_layout(session);
        let messages = snapshot(session);
        draw_editing(&mut session.painter, &messages, &editor, &layout)?;

        let Some(event) = session.pump.next_event()? else {
            return Ok(Flow::Quit);
        };
        let now = session.clock.now_ms();

        match event {
            InputEvent::Key(key) => match editor.apply_key(&key) {
                EditorAction::Activate(0) => {
                    let outcome = mark(&mut session.outbox, &editor);
                    return show_outcome(session, outcome);
                }
                EditorAction::Activate(_) => return Ok(Flow::Back),
                EditorAction::None => {}
            },
            InputEvent::Mouse(mouse) => match handle_mouse(
                &mut editor,
                &mut gestures,
                &mut clicks,
                mouse,
                &layout,
                now,
            ) {
                MouseOutcome::Stay => {}
                MouseOutcome::Back => return Ok(Flow::Back),
                MouseOutcome::Activate => {
                    let outcome = mark(&mut session.outbox, &editor);
                    return show_outcome(session, outcome);
                }
            },
        }
    }
}

enum MouseOutcome {
    Stay,
    Back,
    Activate,
}

fn snapshot<S: ByteSource>(session: &Session<S>) -> Vec<(String, bool)> {
    session
        .outbox
        .iter()
        .map(|m| (m.text().to_string(), m.is_read()))
        .collect()
}

fn compute_layout<S: ByteSource>(session: &Session<S>) -> Layout {
    let mut rows = 0usize;
    for message in session.outbox.iter().take(LIST_CAP) {
        rows += message.text().split('\n').count();
    }
    if session.outbox.len() > LIST_CAP {
        rows += 1;
    }
    let prompt_y = LIST_Y + rows as u16 + 2;
    Layout {
        prompt_y,
        field_y: prompt_y + 1,
        button_y: prompt_y + 4,
    }
}

fn mark(outbox: &mut Outbox, editor: &EditorState) -> Outcome {
    let indices = parse_selection(editor.buffer(), outbox.len());
    if indices.is_empty() {
        tracing::info!(input = editor.buffer(), "selector matched nothing");
        return Outcome::Invalid;
    }
    let all = indices.len() == outbox.len();
    for &index in &indices {
        outbox.mark_as_read(index);
    }
    tracing::info!(count = indices.len(), "messages marked as read");
    Outcome::Marked {
        count: indices.len(),
        all,
    }
}

fn handle_mouse(
    editor: &mut EditorState,
    gestures: &mut GestureRecognizer,
    clicks: &mut ClickTracker,
    mouse: MouseEvent,
    layout: &Layout,
    now: u64,
) -> MouseOutcome {
    let in_field = mouse.y == layout.field_y
        && mouse.x >= LEFT_X
        && mouse.x < LEFT_X + FIELD_WIDTH as u16;

    match mouse.kind {
        MouseKind::Release => {
            gestures.on_release(mouse.button);
            MouseOutcome::Stay
        }
        MouseKind::Drag => {
            if in_field {
                let offset = field_offset(editor, mouse);
                let gesture = gestures.on_drag(editor.buffer(), offset, mouse.button);
                editor.apply_gesture(&gesture);
            }
            MouseOutcome::Stay
        }
        MouseKind::Press => {
            if mouse.button != LEFT_BUTTON {
                return MouseOutcome::Stay;
            }
            if in_field {
                let offset = field_offset(editor, mouse);
                let gesture = gestures.on_press(editor.buffer(), offset, mouse.button, now);
                editor.apply_gesture(&gesture);
                return MouseOutcome::Stay;
            }
            if mouse.y >= layout.button_y && mouse.y <= layout.button_y + 2 {
                if (LEFT_X..LEFT_X + 18).contains(&mouse.x) {
                    if clicks.click(0, now) {
                        return MouseOutcome::Activate;
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

fn field_offset(editor: &EditorState, mouse: MouseEvent) -> usize {
    ((mouse.x - LEFT_X) as usize).min(editor.buffer().len())
}

fn draw_editing(
    p: &mut Painter,
    snapshot: &[(String, bool)],
    editor: &EditorState,
    layout: &Layout,
) -> io::Result<()> {
    p.begin_frame()?;
    draw::header(p)?;
    draw::title(p, "MARK AS READ")?;
    p.print(LEFT_X, draw::CONTENT_Y, Style::Hint, "── Messages ──")?;

    let total = snapshot.len();
    let mut y = LIST_Y;
    for (i, (text, read)) in snapshot.iter().take(LIST_CAP).enumerate() {
        y = draw::message_entry(p, y, &format!("{}.", i + 1), text, *read)?;
    }
    if total > LIST_CAP {
        p.print(
            LEFT_X,
            y,
            Style::Dim,
            &format!("... and {} more", total - LIST_CAP),
        )?;
    }

    p.print(
        LEFT_X,
        layout.prompt_y,
        Style::Plain,
        &format!("Select (1-{total} / 1,3 / 1-3 / all): "),
    )?;
    draw::text_area(p, LEFT_X, layout.field_y, editor, 1)?;

    let focused = (editor.focus() == Focus::Buttons).then_some(editor.selected_button());
    draw::button_pair(p, layout.button_y, "[✓ Mark]", focused)?;

    let hint = match editor.focus() {
        Focus::TextArea => "←→ cursor | Ctrl+←→ word | Shift+←→ select | ↓ buttons",
        Focus::Buttons => "←→ choose | Enter/double-click | ↑ input",
    };
    draw::hint(p, layout.button_y + 4, hint)?;
    p.flush()
}

fn show_outcome<S: ByteSource>(session: &mut Session<S>, outcome: Outcome) -> io::Result<Flow> {
    let (style, line) = match outcome {
        Outcome::Invalid => (
            Style::Bad,
            "✗ Invalid input! Use: 1 or 1,3 or 1-3 or all".to_string(),
        ),
        Outcome::Marked { count, all } if all => (
            Style::Good,
            format!("✓ All {count} messages marked as read!"),
        ),
        Outcome::Marked { count, .. } if count > 1 => (
            Style::Good,
            format!("✓ {count} messages marked as read!"),
        ),
        Outcome::Marked { .. } => (Style::Good, "✓ 1 message marked as read!".to_string()),
    };

    acknowledge(session, draw::CONTENT_Y + 2, move |p| {
        draw::title(p, "MARK AS READ")?;
        p.print(LEFT_X, draw::CONTENT_Y, style, &line)
    })
}

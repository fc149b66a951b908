//! Screen loops.
//!
//! Each screen owns its editor state for exactly as long as the screen is
//! open, polls one event per redraw, and reports how it ended: back to the
//! menu, or quit (stdin closed). The outbox lives in the [`Session`] for
//! the whole process.

pub mod browse;
pub mod compose;
pub mod confirm;
pub mod mark;
pub mod menu;

use std::io;

use crate::input::gesture::{ClickTracker, LEFT_BUTTON};
use crate::input::parser::{InputEvent, KeyCode, MouseKind};
use crate::input::reader::{ByteSource, EventPump};
use crate::queue::Outbox;

use super::draw::{self, Painter};
use super::Clock;

/// How a screen ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Return to the caller (menu).
    Back,
    /// Input stream closed; unwind the whole program.
    Quit,
}

/// Long-lived pieces threaded through every screen.
pub struct Session<S: ByteSource> {
    pub pump: EventPump<S>,
    pub painter: Painter,
    pub clock: Clock,
    pub outbox: Outbox,
}

impl<S: ByteSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            pump: EventPump::new(source),
            painter: Painter::new(),
            clock: Clock::new(),
            outbox: Outbox::new(),
        }
    }
}

/// Enter, or a double click on the back-button rows, acknowledges.
pub(crate) fn back_pressed(
    event: &InputEvent,
    button_y: u16,
    clicks: &mut ClickTracker,
    now_ms: u64,
) -> bool {
    match event {
        InputEvent::Key(key) => key.code == KeyCode::Enter,
        InputEvent::Mouse(mouse) => {
            mouse.kind == MouseKind::Press
                && mouse.button == LEFT_BUTTON
                && mouse.y >= button_y
                && mouse.y <= button_y + 2
                && clicks.click(0, now_ms)
        }
    }
}

/// Redraw-and-wait loop for acknowledge-only screens: draws the given
/// content plus a back button, and returns once the user confirms.
pub(crate) fn acknowledge<S, F>(
    session: &mut Session<S>,
    button_y: u16,
    content: F,
) -> io::Result<Flow>
where
    S: ByteSource,
    F: Fn(&mut Painter) -> io::Result<()>,
{
    let mut clicks = ClickTracker::new();
    loop {
        session.painter.begin_frame()?;
        draw::header(&mut session.painter)?;
        content(&mut session.painter)?;
        draw::back_button(&mut session.painter, button_y)?;
        session.painter.flush()?;

        let Some(event) = session.pump.next_event()? else {
            return Ok(Flow::Quit);
        };
        let now = session.clock.now_ms();
        if back_pressed(&event, button_y, &mut clicks, now) {
            return Ok(Flow::Back);
        }
    }
}

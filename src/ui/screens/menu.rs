//! Top-level menu loop.

use std::io;

use crate::input::gesture::{ClickTracker, LEFT_BUTTON};
use crate::input::parser::{InputEvent, KeyCode, MouseKind};
use crate::input::reader::ByteSource;

use super::super::draw::{self, Painter, Style};
use super::{browse, compose, confirm, mark, Flow, Session};

const ITEMS: [&str; 6] = [
    "1. Compose message",
    "2. Delete first message",
    "3. Cancel last message",
    "4. Browse messages",
    "5. Mark as read",
    "6. Quit",
];

const MENU_X: u16 = draw::LEFT_X;
const MENU_Y: u16 = 4;
const FIRST_ITEM_Y: u16 = MENU_Y + 1;

/// Run the menu until the user quits or stdin closes.
pub fn run<S: ByteSource>(session: &mut Session<S>) -> io::Result<()> {
    let mut selected = 0usize;
    let mut clicks = ClickTracker::new();

    loop {
        draw_menu(&mut session.painter, selected)?;

        let Some(event) = session.pump.next_event()? else {
            return Ok(());
        };
        let now = session.clock.now_ms();

        let mut activate = false;
        match event {
            InputEvent::Key(key) => match key.code {
                KeyCode::Up => selected = (selected + ITEMS.len() - 1) % ITEMS.len(),
                KeyCode::Down => selected = (selected + 1) % ITEMS.len(),
                KeyCode::Enter => activate = true,
                _ => {}
            },
            InputEvent::Mouse(mouse) => {
                if mouse.kind == MouseKind::Press
                    && mouse.button == LEFT_BUTTON
                    && mouse.y >= FIRST_ITEM_Y
                    && mouse.y < FIRST_ITEM_Y + ITEMS.len() as u16
                {
                    let row = (mouse.y - FIRST_ITEM_Y) as usize;
                    selected = row;
                    activate = clicks.click(row as u32, now);
                }
            }
        }

        if activate {
            clicks.reset();
            tracing::debug!(item = ITEMS[selected], "menu selection");
            let flow = match selected {
                0 => compose::run(session)?,
                1 => confirm::run(session, confirm::QueueOp::DeleteFirst)?,
                2 => confirm::run(session, confirm::QueueOp::CancelLast)?,
                3 => browse::run(session)?,
                4 => mark::run(session)?,
                _ => return Ok(()),
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn draw_menu(p: &mut Painter, selected: usize) -> io::Result<()> {
    p.begin_frame()?;
    draw::header(p)?;

    p.print(MENU_X, MENU_Y, Style::Plain, &format!("╔{}╗", "═".repeat(46)))?;
    for (i, label) in ITEMS.iter().enumerate() {
        let y = FIRST_ITEM_Y + i as u16;
        if i == selected {
            p.print(MENU_X, y, Style::Plain, "║")?;
            p.print(MENU_X + 1, y, Style::Focused, &format!(" > {label:<43}"))?;
            p.print(MENU_X + 47, y, Style::Plain, "║")?;
        } else {
            p.print(MENU_X, y, Style::Plain, &format!("║   {label:<43}║"))?;
        }
    }
    p.print(
        MENU_X,
        FIRST_ITEM_Y + ITEMS.len() as u16,
        Style::Plain,
        &format!("╚{}╝", "═".repeat(46)),
    )?;
    draw::hint(
        p,
        FIRST_ITEM_Y + ITEMS.len() as u16 + 2,
        "Mouse: double-click | Keys: ↑↓ Enter",
    )?;
    p.flush()
}

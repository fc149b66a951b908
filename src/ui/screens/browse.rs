//! Browse screen: the full message list with read markers.

use std::io;

use crate::input::reader::ByteSource;

use super::super::draw::{self, Style, LEFT_X};
use super::{acknowledge, Flow, Session};

pub fn run<S: ByteSource>(session: &mut Session<S>) -> io::Result<Flow> {
    let snapshot: Vec<(String, bool)> = session
        .outbox
        .iter()
        .map(|m| (m.text().to_string(), m.is_read()))
        .collect();
    let total = snapshot.len();

    let list_rows: usize = if snapshot.is_empty() {
        1
    } else {
        snapshot.iter().map(|(text, _)| text.split('\n').count()).sum()
    };
    let total_y = draw::CONTENT_Y + list_rows as u16 + 1;
    let back_y = draw::CONTENT_Y + list_rows as u16 + 3;

    acknowledge(session, back_y, move |p| {
        draw::title(p, "ALL MESSAGES")?;
        if snapshot.is_empty() {
            p.print(LEFT_X, draw::CONTENT_Y, Style::Bad, "No messages.")?;
        } else {
            let mut y = draw::CONTENT_Y;
            for (i, (text, read)) in snapshot.iter().enumerate() {
                y = draw::message_entry(p, y, &format!("Message {}:", i + 1), text, *read)?;
            }
        }
        p.print(
            LEFT_X,
            total_y,
            Style::Hint,
            &format!("Total messages: {total}"),
        )
    })
}

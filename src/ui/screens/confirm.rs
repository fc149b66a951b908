//! Delete-first and cancel-last screens: perform the queue operation once
//! on entry, report the result, wait for acknowledgment.

use std::io;

use crate::input::reader::ByteSource;

use super::super::draw::{self, Style, LEFT_X};
use super::{acknowledge, Flow, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOp {
    DeleteFirst,
    CancelLast,
}

pub fn run<S: ByteSource>(session: &mut Session<S>, op: QueueOp) -> io::Result<Flow> {
    let success = match op {
        QueueOp::DeleteFirst => session.outbox.dequeue(),
        QueueOp::CancelLast => session.outbox.cancel_last(),
    };
    tracing::info!(?op, success, remaining = session.outbox.len(), "queue operation");

    let title = match op {
        QueueOp::DeleteFirst => "DELETE FIRST MESSAGE",
        QueueOp::CancelLast => "CANCEL LAST MESSAGE",
    };
    let (style, line) = match (op, success) {
        (QueueOp::DeleteFirst, true) => (Style::Good, "✓ First message deleted."),
        (QueueOp::DeleteFirst, false) => (Style::Bad, "✗ No messages to delete."),
        (QueueOp::CancelLast, true) => (Style::Good, "✓ Last message cancelled."),
        (QueueOp::CancelLast, false) => (Style::Bad, "✗ No messages to cancel."),
    };

    acknowledge(session, draw::CONTENT_Y + 2, move |p| {
        draw::title(p, title)?;
        p.print(LEFT_X, draw::CONTENT_Y, style, line)
    })
}

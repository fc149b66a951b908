//! Error taxonomy.
//!
//! Every condition here is recoverable at the point of detection; nothing
//! in the editing or queue path terminates the process.

use thiserror::Error;

/// Why a composed message was not accepted into the outbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitError {
    /// An identical message is already queued.
    #[error("duplicate message: an identical message is already queued")]
    Spam,
    /// The buffer is empty or holds only whitespace.
    #[error("message is empty or whitespace-only")]
    Empty,
}

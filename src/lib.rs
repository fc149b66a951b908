//! # relay-tui
//!
//! Terminal message composer and outbox triage with mouse-aware line
//! editing.
//!
//! The program is a strictly blocking, single-threaded pipeline from raw
//! terminal bytes to an in-memory message queue:
//!
//! ```text
//! stdin bytes → Decoder → InputEvent ─┬─► EditorState (buffer/cursor/
//!                                     │       selection/focus)
//!                                     │            │ commit
//!                              GestureRecognizer   ▼
//!                              (double-click,    Outbox
//!                               word drag)    (dedup admission,
//!                                              FIFO + cancel-last)
//! ```
//!
//! Input is hand-decoded byte by byte (arrows with modifier parameters,
//! the Delete sequence, SGR mouse reports) because the editing
//! vocabulary depends on exact modifier and button codes. Terminal
//! *output* (raw mode, alternate screen, colors) goes through crossterm's
//! command layer in the [`ui`] module; the core modules never emit an
//! escape code.
//!
//! ## Modules
//!
//! - [`input`] - escape-sequence decoder, event pump, gesture recognition
//! - [`editor`] - the buffer/cursor/selection state machine and its
//!   word/wrap geometry
//! - [`queue`] - the outbox and the mark-as-read selector parser
//! - [`ui`] - terminal guard, batched painter, screen loops
//! - [`error`] - the recoverable error taxonomy
//! - [`config`] - CLI options for the `relay` binary

pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod queue;
pub mod ui;

pub use editor::{EditorAction, EditorOptions, EditorState, Focus};
pub use error::CommitError;
pub use input::{Decoder, EventPump, Gesture, GestureRecognizer, InputEvent};
pub use queue::Outbox;

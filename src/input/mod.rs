//! Terminal input: raw bytes → decoded events → gestures.
//!
//! ```text
//! stdin bytes → Decoder → InputEvent
//!                             │
//!                  ┌──────────┴───────────┐
//!                  │                      │
//!             key events            mouse events
//!                  │                      │
//!                  │              GestureRecognizer
//!                  │                      │
//!                  └──────► EditorState ◄─┘
//! ```

pub mod gesture;
pub mod parser;
pub mod reader;

pub use gesture::{ClickTracker, Gesture, GestureRecognizer};
pub use parser::{Decoder, InputEvent, KeyCode, KeyEvent, Modifier, MouseEvent, MouseKind};
pub use reader::{ByteSource, EventPump};

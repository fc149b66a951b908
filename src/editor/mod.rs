//! The text edit engine: buffer, cursor, selection, focus, and the
//! word/wrap geometry it navigates by.

pub mod state;
pub mod word;
pub mod wrap;

pub use state::{EditorAction, EditorOptions, EditorState, Focus, Selection, BUTTON_COUNT};
pub use wrap::WRAP_WIDTH;

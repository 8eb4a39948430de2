//! Rich-text editing as an explicit document model.
//!
//! Formatting commands operate on structured blocks and spans instead of
//! live markup, and every change serializes back to an HTML fragment.

pub mod document;
pub mod html;
pub mod rich_text;

pub use document::{Block, BlockKind, Document, Mark, Marks, Position, Selection, Span};
pub use html::to_html;
pub use rich_text::{EditorCommand, ListKind, RichTextEditor};

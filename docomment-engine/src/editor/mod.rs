//! Editor access seam and the in-memory reference implementation.

pub mod buffer;
pub mod interface;

pub use buffer::BufferEditor;
pub use interface::{EditorAccess, TARGET_LANGUAGE_ID};

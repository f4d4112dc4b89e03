//! Host editor seam consumed by the pipeline.
//!
//! Everything the engine knows about the surrounding editor goes through
//! this trait. Implementations wrap a real host (document, cursor, change
//! events) or an in-memory buffer; the pipeline receives one per invocation
//! and holds no editor state across edit events.

use crate::errors::Result;
use crate::types::{EditedChar, Position};

/// Language id the classifier's declaration grammar targets.
pub const TARGET_LANGUAGE_ID: &str = "csharp";

/// Editor operations the pipeline needs.
///
/// The "cursor" exposed here is the active-edit position: the coordinates at
/// which the just-typed character landed, as a host derives them from its
/// change notification.
pub trait EditorAccess {
    /// True only when the active document's language matches the grammar
    /// this engine understands.
    fn is_target_language(&self) -> bool;

    /// Character just edited, or `None` at document boundaries. A line break
    /// is reported as [`EditedChar::LineBreak`], never as an empty string.
    fn read_char_at_cursor(&self) -> Option<EditedChar>;

    /// Full text of the line containing the active position.
    fn read_line_at_cursor(&self) -> Option<String>;

    /// Column of the active position within its line.
    fn cursor_column(&self) -> usize;

    /// Best-effort single line of code following the active position,
    /// skipping blank lines and further `///` lines. Empty when the document
    /// ends before a code line is found.
    fn read_next_declaration_line(&self) -> String;

    fn cursor_position(&self) -> Position;

    /// Shift a position horizontally by `delta` characters, clamped to the
    /// line's bounds.
    fn offset_position(&self, pos: Position, delta: isize) -> Position;

    /// Single synchronous write of (possibly multi-line) text at `pos`.
    fn insert_text(&mut self, pos: Position, text: &str) -> Result<()>;

    /// Move the visible cursor, e.g. onto a template placeholder.
    fn move_cursor(&mut self, pos: Position) -> Result<()>;
}

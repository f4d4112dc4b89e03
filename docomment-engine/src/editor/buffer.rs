//! In-memory editor buffer used by the tests and the demo driver.
//!
//! `BufferEditor` mirrors the slice of host-editor behavior the pipeline
//! needs: single-character edits, line splits, multi-line insertion and
//! position clamping. It tracks the last edit explicitly, so the probe
//! semantics match a host that derives the active position from its change
//! notification.

use tracing::trace;

use super::interface::{EditorAccess, TARGET_LANGUAGE_ID};
use crate::errors::{Error, Result};
use crate::trigger::MARKER;
use crate::types::{EditedChar, Position};

/// Line-based text buffer with a caret and a record of the last edit.
#[derive(Debug, Clone)]
pub struct BufferEditor {
    lines: Vec<String>,
    cursor: Position,
    /// Position and character of the most recent edit, if any.
    active: Option<(Position, EditedChar)>,
    language_id: String,
}

impl BufferEditor {
    pub fn new(text: &str, language_id: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            cursor: Position { line: 0, column: 0 },
            active: None,
            language_id: language_id.to_string(),
        }
    }

    /// Place the caret. Clears the pending edit record: after a bare cursor
    /// move there is no "just typed" character to probe.
    pub fn cursor_to(&mut self, line: usize, column: usize) {
        self.cursor = self.clamp(Position { line, column });
        self.active = None;
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Insert one character at the caret and record it as the active edit.
    pub fn type_char(&mut self, c: char) {
        let at = self.clamp(self.cursor);
        let byte = byte_of_column(&self.lines[at.line], at.column);
        self.lines[at.line].insert(byte, c);
        self.active = Some((at, EditedChar::Char(c)));
        self.cursor = Position {
            line: at.line,
            column: at.column + 1,
        };
    }

    /// Split the current line at the caret. The break is recorded at the
    /// position it was pressed, on the line that keeps the leading text.
    pub fn press_enter(&mut self) {
        let at = self.clamp(self.cursor);
        let byte = byte_of_column(&self.lines[at.line], at.column);
        let rest = self.lines[at.line].split_off(byte);
        self.lines.insert(at.line + 1, rest);
        self.active = Some((at, EditedChar::LineBreak));
        self.cursor = Position {
            line: at.line + 1,
            column: 0,
        };
    }

    /// Type a string character by character; `\n` becomes an Enter press.
    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.press_enter();
            } else {
                self.type_char(c);
            }
        }
    }

    /// Render the whole buffer.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn active_position(&self) -> Position {
        self.active.map(|(pos, _)| pos).unwrap_or(self.cursor)
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len().saturating_sub(1));
        let column = pos.column.min(self.lines[line].chars().count());
        Position { line, column }
    }
}

/// Byte offset of a character column, saturating at line end.
fn byte_of_column(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

impl EditorAccess for BufferEditor {
    fn is_target_language(&self) -> bool {
        self.language_id == TARGET_LANGUAGE_ID
    }

    fn read_char_at_cursor(&self) -> Option<EditedChar> {
        self.active.map(|(_, c)| c)
    }

    fn read_line_at_cursor(&self) -> Option<String> {
        self.lines.get(self.active_position().line).cloned()
    }

    fn cursor_column(&self) -> usize {
        self.active_position().column
    }

    fn read_next_declaration_line(&self) -> String {
        let start = self.active_position().line + 1;
        for line in self.lines.iter().skip(start) {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(MARKER) {
                continue;
            }
            return line.clone();
        }
        trace!("no code line after the comment block");
        String::new()
    }

    fn cursor_position(&self) -> Position {
        self.active_position()
    }

    fn offset_position(&self, pos: Position, delta: isize) -> Position {
        let line_len = self.lines.get(pos.line).map_or(0, |l| l.chars().count());
        let column = pos.column.saturating_add_signed(delta).min(line_len);
        Position {
            line: pos.line,
            column,
        }
    }

    fn insert_text(&mut self, pos: Position, text: &str) -> Result<()> {
        if pos.line >= self.lines.len() {
            return Err(Error::OutOfBounds(pos));
        }
        let at = self.clamp(pos);
        let byte = byte_of_column(&self.lines[at.line], at.column);
        let tail = self.lines[at.line].split_off(byte);

        let mut pieces = text.split('\n');
        if let Some(first) = pieces.next() {
            self.lines[at.line].push_str(first);
        }
        let mut last = at.line;
        for piece in pieces {
            last += 1;
            self.lines.insert(last, piece.to_string());
        }
        self.lines[last].push_str(&tail);
        Ok(())
    }

    fn move_cursor(&mut self, pos: Position) -> Result<()> {
        if pos.line >= self.lines.len() {
            return Err(Error::OutOfBounds(pos));
        }
        self.cursor = self.clamp(pos);
        Ok(())
    }
}

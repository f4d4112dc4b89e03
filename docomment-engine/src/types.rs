use serde::{Deserialize, Serialize};

use crate::editor::EditorAccess;

//
// ──────────────────────────────────────────────────────────────────────────
//  Edit input
// ──────────────────────────────────────────────────────────────────────────
//

/// A single just-typed character.
///
/// A line break is a distinct variant rather than an empty string, so that
/// "Enter was pressed" can never be confused with "no character available"
/// (the latter is `Option::<EditedChar>::None` at the editor boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditedChar {
    Char(char),
    LineBreak,
}

/// Zero-based (line, column) document coordinates.
///
/// Columns count characters, not bytes. For edit events this is the position
/// at which the typed character landed, which is what a host derives from its
/// change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// One keystroke as seen by the pipeline: the inserted character plus its
/// absolute position. Captured once per edit notification and consumed within
/// a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditEvent {
    pub inserted: EditedChar,
    pub position: Position,
}

impl EditEvent {
    /// Probe the editor for the active character. Returns `None` at document
    /// boundaries (nothing was typed, or the probe has no value), which the
    /// pipeline treats as a normal no-op.
    pub fn capture<E: EditorAccess + ?Sized>(editor: &E) -> Option<Self> {
        let inserted = editor.read_char_at_cursor()?;
        Some(Self {
            inserted,
            position: editor.cursor_position(),
        })
    }
}

//
// ──────────────────────────────────────────────────────────────────────────
//  Declarations
// ──────────────────────────────────────────────────────────────────────────
//

/// Declaration kinds the classifier can report.
///
/// Keep this list closed and stable. `Unknown` covers empty input and lines
/// no pattern matched; it is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Namespace,
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
    Field,
    Property,
    Method,
    Event,
    Unknown,
}

/// A classified declaration paired with the raw line that produced it.
/// Lives for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: DeclarationKind,
    pub line: String,
}

//
// ──────────────────────────────────────────────────────────────────────────
//  Templates
// ──────────────────────────────────────────────────────────────────────────
//

/// Where editing resumes after insertion: `line_delta` lines below the
/// insertion point, at an absolute `column` within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorTarget {
    pub line_delta: usize,
    pub column: usize,
}

/// A comment skeleton: ordered lines inserted verbatim, plus the optional
/// placeholder position. Produced fresh per invocation; never cached, since
/// declaration text and indentation vary per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTemplate {
    pub lines: Vec<String>,
    pub cursor: Option<CursorTarget>,
}

impl CommentTemplate {
    /// Render the insertion payload. Lines are joined with `\n`; the first
    /// line continues the marker the user already typed.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.is_empty())
    }
}

/// Leading whitespace run of `line`, verbatim. Every marker-prefixed template
/// line is prefixed with exactly this string so the inserted block aligns
/// with the declaration.
pub fn leading_indent(line: &str) -> &str {
    match line.find(|c: char| !c.is_whitespace()) {
        Some(first) => &line[..first],
        None => line,
    }
}

//
// ──────────────────────────────────────────────────────────────────────────
//  Pipeline outcome
// ──────────────────────────────────────────────────────────────────────────
//

/// Which stage opted out of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skip {
    NotTargetLanguage,
    NoActiveChar,
    NoActiveLine,
    NoTrigger,
    UnknownDeclaration,
    NoTemplate,
}

/// Terminal result of one pipeline run. A skip means nothing was written;
/// per-stage reasons are surfaced for logs and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Inserted { kind: DeclarationKind, at: Position },
    Skipped(Skip),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_is_taken_verbatim() {
        assert_eq!(leading_indent("  public class Foo"), "  ");
        assert_eq!(leading_indent("\t\tvar x;"), "\t\t");
        assert_eq!(leading_indent("class Foo"), "");
        assert_eq!(leading_indent("    "), "    ");
        assert_eq!(leading_indent(""), "");
    }

    #[test]
    fn template_renders_and_reports_emptiness() {
        let t = CommentTemplate {
            lines: vec![" <summary>".into(), "/// ".into()],
            cursor: None,
        };
        assert_eq!(t.text(), " <summary>\n/// ");
        assert!(!t.is_empty());

        let empty = CommentTemplate {
            lines: vec![String::new()],
            cursor: None,
        };
        assert!(empty.is_empty());
    }
}

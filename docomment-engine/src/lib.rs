//! Doc-comment skeleton generation for C# sources.
//!
//! The engine reacts to a doc-comment trigger (`///` completed by the third
//! slash, or Enter pressed right after it) typed above a declaration:
//! it classifies the following line of code, renders the matching comment
//! skeleton at the declaration's indentation, inserts it, and parks the
//! cursor on the skeleton's placeholder line.
//!
//! Control flows strictly through three gates — trigger detection,
//! declaration classification, template generation — and any gate can opt
//! out, in which case nothing is written. The host editor is abstracted
//! behind [`EditorAccess`]; [`BufferEditor`] is the in-memory realization
//! used by tests and the demo driver.

pub mod classify;
pub mod editor;
pub mod errors;
pub mod template;
pub mod trigger;
pub mod types;

pub use editor::{BufferEditor, EditorAccess, TARGET_LANGUAGE_ID};
pub use errors::{Error, Result};
pub use types::{
    Classification, CommentTemplate, CursorTarget, DeclarationKind, EditEvent, EditedChar,
    Outcome, Position, Skip,
};

use tracing::debug;

/// Run the full pipeline for one edit notification.
///
/// Stages run in order and short-circuit: language gate, edit capture,
/// trigger detection, classification, template generation, then the terminal
/// insert + cursor move. Every early exit is a [`Outcome::Skipped`] with the
/// stage that opted out; `Err` is reserved for editor write failures, which
/// abort the run with nothing inserted.
pub fn process_edit<E: EditorAccess>(editor: &mut E) -> Result<Outcome> {
    if !editor.is_target_language() {
        return Ok(Outcome::Skipped(Skip::NotTargetLanguage));
    }
    let Some(event) = EditEvent::capture(editor) else {
        return Ok(Outcome::Skipped(Skip::NoActiveChar));
    };
    let Some(line) = editor.read_line_at_cursor() else {
        return Ok(Outcome::Skipped(Skip::NoActiveLine));
    };
    if !trigger::should_trigger(event.inserted, &line, editor.cursor_column()) {
        return Ok(Outcome::Skipped(Skip::NoTrigger));
    }

    let code = editor.read_next_declaration_line();
    let kind = classify::classify(&code);
    if kind == DeclarationKind::Unknown {
        debug!(%code, "trigger fired but no declaration recognized");
        return Ok(Outcome::Skipped(Skip::UnknownDeclaration));
    }

    let classification = Classification { kind, line: code };
    let Some(template) = template::generate(&classification) else {
        debug!(?kind, "declaration kind has no template yet");
        return Ok(Outcome::Skipped(Skip::NoTemplate));
    };

    // Insert one character past the keystroke that completed the trigger.
    let at = editor.offset_position(event.position, 1);
    editor.insert_text(at, &template.text())?;
    if let Some(target) = template.cursor {
        editor.move_cursor(Position {
            line: at.line + target.line_delta,
            column: target.column,
        })?;
    }
    debug!(?kind, line = at.line, "doc comment skeleton inserted");
    Ok(Outcome::Inserted { kind, at })
}

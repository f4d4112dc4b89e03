//! Keystroke gate for the generation pipeline.
//!
//! The detector is a pure function over the just-typed character, the text of
//! the edited line, and the column the edit landed on. All failure modes fall
//! through to `false`; nothing here panics or errors.

use tracing::trace;

use crate::types::EditedChar;

/// The doc-comment marker that opens a skeleton.
pub const MARKER: &str = "///";

/// Decide whether the keystroke completed a doc-comment trigger.
///
/// Rules, checked in order, short-circuiting to `false`:
/// 1. `inserted` is the slash key or a line break; any other character fails.
/// 2. `line` ends with exactly `///` — a fourth slash extending the run
///    disqualifies the line, as does any shorter run.
/// 3. `column` equals the last marker index plus 3 when break-triggered,
///    plus 2 when the third slash itself completed the marker.
pub fn should_trigger(inserted: EditedChar, line: &str, column: usize) -> bool {
    let after_marker = match inserted {
        EditedChar::Char('/') => 2,
        EditedChar::LineBreak => 3,
        EditedChar::Char(_) => return false,
    };

    let Some(marker_at) = line.rfind(MARKER) else {
        return false;
    };
    if !line.ends_with(MARKER) {
        return false;
    }
    // A longer slash run is not a doc-comment marker.
    if line[..line.len() - MARKER.len()].ends_with('/') {
        return false;
    }

    let expected = marker_at + after_marker;
    if column != expected {
        trace!(column, expected, "marker complete but edit landed elsewhere");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EditedChar::{Char, LineBreak};

    #[test]
    fn third_slash_completes_the_marker() {
        assert!(should_trigger(Char('/'), "///", 2));
        assert!(should_trigger(Char('/'), "    ///", 6));
    }

    #[test]
    fn enter_right_after_the_marker() {
        assert!(should_trigger(LineBreak, "///", 3));
        assert!(should_trigger(LineBreak, "  ///", 5));
    }

    #[test]
    fn column_must_sit_on_the_marker_end() {
        assert!(!should_trigger(Char('/'), "///", 1));
        assert!(!should_trigger(Char('/'), "///", 3));
        assert!(!should_trigger(LineBreak, "///", 2));
    }

    #[test]
    fn only_slash_or_break_can_trigger() {
        assert!(!should_trigger(Char('a'), "///", 2));
        assert!(!should_trigger(Char(' '), "///", 2));
    }

    #[test]
    fn shorter_or_longer_slash_runs_do_not_qualify() {
        assert!(!should_trigger(Char('/'), "//", 1));
        assert!(!should_trigger(Char('/'), "////", 3));
        assert!(!should_trigger(LineBreak, "////", 4));
        assert!(!should_trigger(Char('/'), "//////", 5));
    }

    #[test]
    fn marker_may_follow_other_text() {
        // The marker need not start the line; only its end position matters.
        assert!(should_trigger(Char('/'), "int x; ///", 9));
        assert!(!should_trigger(Char('/'), "/// done", 2));
    }

    #[test]
    fn lines_without_a_marker_fail_closed() {
        assert!(!should_trigger(Char('/'), "", 0));
        assert!(!should_trigger(LineBreak, "public class Foo", 16));
    }
}

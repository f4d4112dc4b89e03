//! Best-effort declaration classification over a single line of source.
//!
//! No AST is built. The classifier applies an ordered keyword policy table
//! against the raw line; the first matching entry wins, so precedence is
//! declarative and independently testable. Matching is case-sensitive and
//! does not anchor at line start, which tolerates access modifiers before
//! the keyword (`public`, `abstract`, ...).

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::types::DeclarationKind;

/// Ordered keyword policy. Earlier entries win on lines containing several
/// keywords. Field, property and method detection have no entries here —
/// they need real signature matching, and an absent entry keeps "not yet
/// implemented" distinguishable from "implemented and didn't match".
const KEYWORDS: &[(&str, DeclarationKind)] = &[
    ("namespace", DeclarationKind::Namespace),
    ("class", DeclarationKind::Class),
    ("interface", DeclarationKind::Interface),
    ("struct", DeclarationKind::Struct),
    ("enum", DeclarationKind::Enum),
    ("delegate", DeclarationKind::Delegate),
    ("event", DeclarationKind::Event),
];

// Each keyword must be followed by at least one whitespace character.
static PATTERNS: LazyLock<Vec<(Regex, DeclarationKind)>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|(kw, kind)| {
            let re = Regex::new(&format!(r"{kw}\s")).expect("fixed keyword pattern");
            (re, *kind)
        })
        .collect()
});

/// Classify the line of code following a doc-comment trigger.
///
/// Returns [`DeclarationKind::Unknown`] for empty input or when no pattern
/// matches; that is a normal outcome, never an error.
pub fn classify(code: &str) -> DeclarationKind {
    if code.trim().is_empty() {
        return DeclarationKind::Unknown;
    }
    for (re, kind) in PATTERNS.iter() {
        if re.is_match(code) {
            return *kind;
        }
    }
    trace!(code, "no declaration pattern matched");
    DeclarationKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_type_declarations() {
        assert_eq!(classify("namespace Demo.App"), DeclarationKind::Namespace);
        assert_eq!(classify("  public class Foo"), DeclarationKind::Class);
        assert_eq!(
            classify("public interface IFoo"),
            DeclarationKind::Interface
        );
        assert_eq!(classify("internal struct Point"), DeclarationKind::Struct);
        assert_eq!(classify("enum Colors"), DeclarationKind::Enum);
        assert_eq!(
            classify("public delegate void Handler(object sender)"),
            DeclarationKind::Delegate
        );
        assert_eq!(
            classify("public event Handler Changed;"),
            DeclarationKind::Event
        );
    }

    #[test]
    fn table_order_settles_ambiguous_lines() {
        // Both keywords present: the earlier table entry wins regardless of
        // where each appears in the text.
        assert_eq!(classify("interface class Foo"), DeclarationKind::Class);
        assert_eq!(
            classify("namespace N { class C"),
            DeclarationKind::Namespace
        );
    }

    #[test]
    fn keyword_requires_trailing_whitespace() {
        assert_eq!(classify("class"), DeclarationKind::Unknown);
        assert_eq!(classify("enum\tColors"), DeclarationKind::Enum);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify("Class Foo"), DeclarationKind::Unknown);
        assert_eq!(classify("NAMESPACE Demo"), DeclarationKind::Unknown);
    }

    #[test]
    fn members_are_not_detected_yet() {
        assert_eq!(classify("  void Bar()"), DeclarationKind::Unknown);
        assert_eq!(classify("  public int Count { get; }"), DeclarationKind::Unknown);
        assert_eq!(classify("  private string _name;"), DeclarationKind::Unknown);
    }

    #[test]
    fn empty_or_unrelated_input_is_unknown() {
        assert_eq!(classify(""), DeclarationKind::Unknown);
        assert_eq!(classify("   "), DeclarationKind::Unknown);
        assert_eq!(classify("x += 1;"), DeclarationKind::Unknown);
    }
}

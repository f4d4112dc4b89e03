//! Per-kind comment template registry.
//!
//! Kinds map to pure generator functions `fn(indent) -> CommentTemplate`.
//! A kind with no registered generator simply produces nothing — that is how
//! placeholder kinds stay placeholders without special cases in the
//! dispatcher.

use crate::types::{
    Classification, CommentTemplate, CursorTarget, DeclarationKind, leading_indent,
};

type TemplateFn = fn(&str) -> CommentTemplate;

/// Registered generators. Kinds missing here (Namespace, Interface, Struct,
/// Enum, Delegate, Event, Method, Field, Property) yield no template yet.
const GENERATORS: &[(DeclarationKind, TemplateFn)] = &[(DeclarationKind::Class, summary_block)];

/// Three-line `<summary>` skeleton.
///
/// The opening line carries no marker: the user already typed `///` as the
/// trigger, and the generated text continues that marker. The middle line is
/// the empty placeholder the cursor lands on.
fn summary_block(indent: &str) -> CommentTemplate {
    CommentTemplate {
        lines: vec![
            " <summary>".to_string(),
            format!("{indent}/// "),
            format!("{indent}/// </summary>"),
        ],
        cursor: Some(CursorTarget {
            line_delta: 1,
            column: indent.len() + 4,
        }),
    }
}

/// Produce the comment skeleton for a classified declaration, indented to
/// match the declaration line. `None` means "insert nothing": the kind is
/// unknown, has no registered generator, or rendered an empty template.
pub fn generate(classification: &Classification) -> Option<CommentTemplate> {
    let generator = GENERATORS
        .iter()
        .find(|(kind, _)| *kind == classification.kind)
        .map(|(_, f)| *f)?;

    let indent = leading_indent(&classification.line);
    let template = generator(indent);
    if template.is_empty() {
        return None;
    }
    Some(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(kind: DeclarationKind, line: &str) -> Classification {
        Classification {
            kind,
            line: line.to_string(),
        }
    }

    #[test]
    fn class_summary_block_follows_declaration_indent() {
        let t = generate(&classified(DeclarationKind::Class, "  public class Foo"))
            .expect("class has a template");
        assert_eq!(
            t.lines,
            vec![" <summary>", "  /// ", "  /// </summary>"]
        );
        assert_eq!(t.text(), " <summary>\n  /// \n  /// </summary>");
        // Placeholder: one line below the insertion point, right after "/// ".
        assert_eq!(
            t.cursor,
            Some(CursorTarget {
                line_delta: 1,
                column: 6
            })
        );
    }

    #[test]
    fn unindented_declaration_gets_unindented_block() {
        let t = generate(&classified(DeclarationKind::Class, "class Foo"))
            .expect("class has a template");
        assert_eq!(t.lines[1], "/// ");
        assert_eq!(t.cursor.map(|c| c.column), Some(4));
    }

    #[test]
    fn tab_indentation_is_preserved() {
        let t = generate(&classified(DeclarationKind::Class, "\tclass Inner"))
            .expect("class has a template");
        assert_eq!(t.lines[2], "\t/// </summary>");
    }

    #[test]
    fn unregistered_kinds_produce_nothing() {
        for kind in [
            DeclarationKind::Namespace,
            DeclarationKind::Interface,
            DeclarationKind::Struct,
            DeclarationKind::Enum,
            DeclarationKind::Delegate,
            DeclarationKind::Event,
            DeclarationKind::Method,
            DeclarationKind::Field,
            DeclarationKind::Property,
            DeclarationKind::Unknown,
        ] {
            assert_eq!(generate(&classified(kind, "  whatever")), None, "{kind:?}");
        }
    }
}

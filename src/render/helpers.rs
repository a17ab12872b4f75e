//! Shared layout-contract helpers used across theme renderers
//!
//! Every theme styles differently but obeys the same data-exposure rules:
//! empty fields leave no empty container or stray separator behind, and
//! derived display values are computed from the profile at render time,
//! never stored back.

use crate::document::Node;

/// A span for the value, or nothing when the value is empty.
pub fn span_if(classes: &str, value: &str) -> Option<Node> {
    if value.is_empty() {
        None
    } else {
        Some(Node::span(classes, value))
    }
}

/// A paragraph for the value, or nothing when the value is empty.
pub fn paragraph_if(classes: &str, value: &str) -> Option<Node> {
    if value.is_empty() {
        None
    } else {
        Some(Node::paragraph(classes, value))
    }
}

/// A heading for the value, or nothing when the value is empty.
pub fn heading_if(level: u8, classes: &str, value: &str) -> Option<Node> {
    if value.is_empty() {
        None
    } else {
        Some(Node::heading(level, classes, value))
    }
}

/// Join the non-empty parts with a separator.
///
/// Keeps a separator glyph from appearing next to an empty field, e.g.
/// "Acme | 2020" collapses to "Acme" when the duration is blank.
pub fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .copied()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Append the given parts to a row container, inserting a separator span
/// between consecutive present parts. Empty slots contribute neither a
/// node nor a separator.
pub fn separated_row(
    mut row: Node,
    sep_classes: &str,
    sep: &str,
    parts: Vec<Option<Node>>,
) -> Node {
    let mut first = true;
    for part in parts.into_iter().flatten() {
        if !first {
            row.children.push(Node::span(sep_classes, sep));
        }
        row.children.push(part);
        first = false;
    }
    row
}

/// First character of the full name, used for initial-letter avatars.
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Decompose long-form text into bullet fragments.
///
/// Splits on sentence terminators and newlines, discards whitespace-only
/// fragments, and re-appends a period to each retained fragment.
pub fn sentence_bullets(text: &str) -> Vec<String> {
    text.split(['.', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{s}."))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_if_skips_empty() {
        assert!(span_if("c", "").is_none());
        assert_eq!(span_if("c", "x").unwrap().text.as_deref(), Some("x"));
    }

    #[test]
    fn test_join_present_drops_empty_sides() {
        assert_eq!(join_present(&["Acme", "2020"], " | "), "Acme | 2020");
        assert_eq!(join_present(&["Acme", ""], " | "), "Acme");
        assert_eq!(join_present(&["", ""], " | "), "");
    }

    #[test]
    fn test_separated_row_no_stray_separator() {
        let row = separated_row(
            Node::block("row"),
            "sep",
            "|",
            vec![None, span_if("c", "555-0100"), None],
        );
        assert_eq!(row.children.len(), 1);
        assert_eq!(row.children[0].text.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_separated_row_separator_between_present() {
        let row = separated_row(
            Node::block("row"),
            "sep",
            "|",
            vec![span_if("c", "a"), span_if("c", "b")],
        );
        let texts: Vec<_> = row.children.iter().filter_map(|n| n.text.as_deref()).collect();
        assert_eq!(texts, vec!["a", "|", "b"]);
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("Alex Rivera"), "A");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn test_sentence_bullets_drop_empty_fragments() {
        let bullets = sentence_bullets("Led the team. Shipped v2.\nImproved latency.");
        assert_eq!(
            bullets,
            vec!["Led the team.", "Shipped v2.", "Improved latency."]
        );
    }

    #[test]
    fn test_sentence_bullets_consecutive_delimiters() {
        assert_eq!(sentence_bullets("One..\n\nTwo"), vec!["One.", "Two."]);
        assert!(sentence_bullets("  \n. ").is_empty());
    }
}

//! Label string codec.
//!
//! Converts between the single-line form a user types (`"prod; eu ; db"`)
//! and the ordered label list stored on an account:
//! - Parsing: split on `;`, trim each segment, drop empty segments
//! - Formatting: join label texts with `"; "`
//!
//! The two are not strict inverses. Parsing is whitespace-tolerant and only
//! looks at the separator, while formatting always writes the canonical
//! `"; "`. A label whose text contains `;` or leading/trailing whitespace
//! will not survive `parse_labels(&format_labels(..))` unchanged.

use crate::types::Label;

/// Label separator accepted by [`parse_labels`].
pub const LABEL_SEPARATOR: char = ';';

/// Separator written by [`format_labels`].
const FORMAT_SEPARATOR: &str = "; ";

/// Parses a `;`-separated string into labels, preserving order.
///
/// Blank input yields an empty list.
#[must_use]
pub fn parse_labels(text: &str) -> Vec<Label> {
    text.split(LABEL_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(Label::new)
        .collect()
}

/// Joins label texts with `"; "`.
#[must_use]
pub fn format_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| label.text.as_str())
        .collect::<Vec<_>>()
        .join(FORMAT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(labels: &[Label]) -> Vec<&str> {
        labels.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn parse_drops_empty_segments_and_trims() {
        let labels = parse_labels("a; b ;; c");
        assert_eq!(labels, vec![Label::new("a"), Label::new("b"), Label::new("c")]);
    }

    #[test]
    fn parse_blank_input() {
        assert!(parse_labels("").is_empty());
        assert!(parse_labels("   ").is_empty());
        assert!(parse_labels(" ; ;; ").is_empty());
    }

    #[test]
    fn parse_keeps_duplicates_and_order() {
        let labels = parse_labels("z;a;z");
        assert_eq!(texts(&labels), vec!["z", "a", "z"]);
    }

    #[test]
    fn parse_keeps_inner_whitespace() {
        let labels = parse_labels("  team alpha ;beta");
        assert_eq!(texts(&labels), vec!["team alpha", "beta"]);
    }

    #[test]
    fn format_joins_with_canonical_separator() {
        let formatted = format_labels(&[Label::new("a"), Label::new("b")]);
        assert_eq!(formatted, "a; b");
    }

    #[test]
    fn format_empty() {
        assert_eq!(format_labels(&[]), "");
    }

    #[test]
    fn format_then_parse_is_not_identity_for_separator_text() {
        let original = vec![Label::new("a;b"), Label::new(" padded ")];
        let reparsed = parse_labels(&format_labels(&original));
        assert_eq!(texts(&reparsed), vec!["a", "b", "padded"]);
        assert_ne!(reparsed, original);
    }
}

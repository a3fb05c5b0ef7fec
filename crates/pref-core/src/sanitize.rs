//! Neutralise server-provided text before it is written to a terminal.
//!
//! Names, codes, and descriptions come straight from the backend. Control
//! characters (ESC in particular) would let a crafted value rewrite the
//! screen, so they are replaced with their escaped spelling.

use std::borrow::Cow;

/// Escape every control character in `value`; borrows when nothing changes.
#[must_use]
pub fn display_text(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        if ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Owned variant of [`display_text`] for optional fields, `N/A` when absent
/// or blank.
#[must_use]
pub fn display_opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => display_text(v).into_owned(),
        _ => String::from("N/A"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(display_text("Ana Pop"), Cow::Borrowed("Ana Pop")));
    }

    #[test]
    fn escape_sequences_are_neutralised() {
        let hostile = "Bob\u{1b}[2J\u{1b}[31mX";
        let shown = display_text(hostile);
        assert!(!shown.contains('\u{1b}'));
        assert_eq!(shown, "Bob\\u{1b}[2J\\u{1b}[31mX");
    }

    #[test]
    fn newlines_cannot_split_rows() {
        assert_eq!(display_text("a\nb"), "a\\nb");
    }

    #[test]
    fn markup_is_kept_literal() {
        assert_eq!(display_text("<b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn optional_fields_fall_back_to_na() {
        assert_eq!(display_opt(None), "N/A");
        assert_eq!(display_opt(Some("  ")), "N/A");
        assert_eq!(display_opt(Some("ALG")), "ALG");
    }
}

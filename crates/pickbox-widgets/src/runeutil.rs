//! Display-width helpers for fitting labels into terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns. Wide (CJK) characters
/// count as 2, zero-width and control characters as 0.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_width` display columns.
///
/// If the string fits it is returned unchanged. Otherwise `tail` (e.g. `…`)
/// is appended and the result, tail included, is no wider than `max_width`.
///
/// # Examples
///
/// ```
/// use pickbox_widgets::runeutil::truncate;
///
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("hi", 10, "..."), "hi");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let tail_width = display_width(tail);
    if tail_width >= max_width {
        return take_width(tail, max_width);
    }

    let mut result = take_width(s, max_width - tail_width);
    result.push_str(tail);
    result
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("\u{4E16}\u{754C}"), 4);
    }

    #[test]
    fn truncate_no_truncation_needed() {
        assert_eq!(truncate("hello", 10, "…"), "hello");
        assert_eq!(truncate("hello", 5, "…"), "hello");
    }

    #[test]
    fn truncate_basic() {
        assert_eq!(truncate("hello world", 8, "..."), "hello...");
        assert_eq!(truncate("Second", 4, "…"), "Sec…");
    }

    #[test]
    fn truncate_with_cjk() {
        let result = truncate("\u{4E16}\u{754C}abc", 6, "\u{2026}");
        assert_eq!(display_width(&result), 6);
    }

    #[test]
    fn truncate_tail_wider_than_max() {
        assert_eq!(truncate("hello", 2, "..."), "..");
        assert_eq!(truncate("hello", 0, "…"), "");
    }
}

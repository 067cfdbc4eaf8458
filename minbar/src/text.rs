use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate to at most `max_width` display columns, appending an ellipsis
/// when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_to_width("makkah", 10), "makkah");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("pilgrimage", 6), "pilgr…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // Each CJK glyph is two columns.
        assert_eq!(truncate_to_width("麥加朝覲", 5), "麥加…");
    }

    #[test]
    fn align_offset_centers_and_right_aligns() {
        assert_eq!(align_offset(4, 10, TextAlign::Left), 0);
        assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
        assert_eq!(align_offset(4, 10, TextAlign::Right), 6);
        assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
    }
}

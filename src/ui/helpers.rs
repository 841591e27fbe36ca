//! Shared rendering utilities.
//!
//! Cursor positioning, width-aware truncation and match highlighting used by
//! several components. All width arithmetic is in characters, never bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// ```rust
/// use bookfinder::ui::helpers::truncate;
///
/// assert_eq!(truncate("The Left Hand of Darkness", 12), "The Left ...");
/// assert_eq!(truncate("Emma", 12), "Emma");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }

    let mut shortened: String = text.chars().take(max - 3).collect();
    shortened.push_str("...");
    shortened
}

/// Prints `text` padded with spaces to exactly `width` characters.
pub fn print_padded(text: &str, width: usize) {
    print!("{text}");
    print!("{}", " ".repeat(width.saturating_sub(char_len(text))));
}

/// Prints `text` centered in `width` characters.
pub fn print_centered(text: &str, width: usize) {
    let len = char_len(text).min(width);
    let padding = (width - len) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(width.saturating_sub(padding + len)));
}

/// Renders text with highlighted character ranges.
///
/// Ranges are `(start, end)` character indices with exclusive end. Selected
/// rows skip highlighting so the selection colors stay intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Cien años de soledad", 10), "Cien añ...");
        assert_eq!(char_len(&truncate("Cien años de soledad", 10)), 10);
    }

    #[test]
    fn tiny_widths_do_not_underflow() {
        assert_eq!(truncate("Dune", 2), "Du");
        assert_eq!(truncate("Dune", 0), "");
    }
}

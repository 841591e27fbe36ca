//! Search bar component renderer.
//!
//! Renders the bordered search box and, while it is focused, the live
//! suggestion dropdown hanging below it.

use crate::ui::helpers::{char_len, position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, SuggestionItem};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PLACEHOLDER: &str = "Search by title, author, or subject";

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: query▏  │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// The border is highlighted while the box has focus. An empty unfocused box
/// shows a dimmed placeholder.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    if search.query.is_empty() && !search.focused {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_padded(&truncate(&format!(" {PLACEHOLDER}"), inner_width), inner_width);
    } else {
        let cursor = if search.focused { "▏" } else { "" };
        let text = format!(" Search: {}{cursor}", search.query);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_padded(&tail(&text, inner_width), inner_width);
    }
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the suggestion dropdown starting at `row`, over whatever was
/// drawn there. Draws nothing when there are no suggestions.
pub fn render_suggestions(row: usize, items: &[SuggestionItem], theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);

    for (offset, item) in items.iter().enumerate() {
        position_cursor(row + offset, SEARCH_BOX_MARGIN + 2);
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print_padded(&truncate(&format!(" ⌕ {}", item.text), width), width);
        print!("{}", Theme::reset());
    }
}

/// Keeps the last `width` characters so the cursor end of a long query stays
/// visible.
fn tail(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len <= width {
        text.to_string()
    } else {
        text.chars().skip(len - width).collect()
    }
}

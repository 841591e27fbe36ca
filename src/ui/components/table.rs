//! Book list renderer.
//!
//! Renders the book rows as a two-column table (TITLE, AUTHOR) with a saved
//! marker, selection highlighting and query match highlighting.

use crate::ui::helpers::{self, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const SAVED_MARKER: &str = "♥ ";
const UNSAVED_MARKER: &str = "  ";

/// Width of the title column for a pane `cols` wide, marker excluded.
fn title_width(cols: usize) -> usize {
    cols.saturating_sub(SAVED_MARKER.chars().count()) * 3 / 5
}

/// Renders the column headers at `row` and returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{UNSAVED_MARKER}");
    helpers::print_padded("TITLE", title_width(cols));
    print!("AUTHOR");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one book row.
///
/// Styling precedence: selection background, then match highlights, then the
/// normal text color. The row is padded to the full width so the selection
/// background spans the pane.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base = |theme: &Theme| {
        if item.is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    position_cursor(row, 1);
    print!("{}", base(theme));

    if item.is_saved {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.saved_fg));
        }
        print!("{SAVED_MARKER}");
        print!("{}", base(theme));
    } else {
        print!("{UNSAVED_MARKER}");
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    let width = title_width(cols);
    print!("{}", " ".repeat(width.saturating_sub(char_len(&item.title))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.author);

    let line_len = char_len(SAVED_MARKER) + width + char_len(&item.author);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

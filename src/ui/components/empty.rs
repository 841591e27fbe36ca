//! Empty state and status line renderers.

use crate::ui::helpers::{position_cursor, print_centered, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, StatusLine};

/// Renders a centered two-line message at `row` and `row + 1`.
///
/// Used for the welcome screen, "No results found", and an empty saved list.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(&truncate(&empty.message, cols), cols);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&truncate(&empty.subtitle, cols), cols);
    print!("{}", Theme::reset());
}

/// Renders the loading indicator or error banner on one line.
pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match status {
        StatusLine::Loading(message) => {
            print!("{}", Theme::fg(&theme.colors.accent_fg));
            print_centered(&truncate(message, cols), cols);
        }
        StatusLine::Error(message) => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print_centered(&truncate(&format!("⚠ {message}"), cols), cols);
        }
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a left-aligned accent heading.
pub fn render_heading(row: usize, heading: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!(" {}", truncate(heading, cols.saturating_sub(1)));
    print!("{}", Theme::reset());
    row + 1
}

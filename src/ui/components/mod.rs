//! Composable UI component renderers.
//!
//! Each component draws one part of the pane at an explicit row and returns
//! the next free row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: Title bar with saved count and theme badges
//! - [`search`]: Search box and live suggestion dropdown
//! - [`table`]: Book list with TITLE and AUTHOR columns
//! - [`empty`]: Welcome/empty messages, status line, heading
//! - [`detail`]: Work key and cover URL of the selected book
//! - [`explore`]: Category picker overlay
//! - [`footer`]: Keybinding hints and attribution
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]      ← suggestion dropdown hangs below
//! [Heading | Status]
//! [Table Headers]
//! [Table Rows | Empty State]  ← explore menu overlays
//! [Blank padding to fill screen]
//! [Detail]
//! [Border]
//! [Footer - 2 lines]
//! ```

mod detail;
mod empty;
mod explore;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::{render_empty_state, render_heading, render_status};
use explore::render_explore_menu;
use footer::render_footer;
use header::render_header;
use search::{render_search_bar, render_suggestions};
use table::{render_table_headers, render_table_rows};

/// Column at which overlays (explore menu) start.
const OVERLAY_COLUMN: usize = 6;

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout.
///
/// Overlays (suggestion dropdown, explore menu) are drawn last so they sit on
/// top of the list.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    let overlay_row = current_row;

    if let Some(status) = &vm.status {
        current_row = render_status(current_row, status, theme, cols);
    } else if let Some(heading) = &vm.heading {
        current_row = render_heading(current_row, heading, theme, cols);
    } else {
        current_row += 1;
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else if !vm.display_items.is_empty() {
        current_row = render_table_headers(current_row, theme, cols);
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    if let Some(detail) = &vm.detail {
        render_detail(border_row.saturating_sub(1), detail, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(menu) = &vm.explore_menu {
        render_explore_menu(overlay_row, OVERLAY_COLUMN, menu, theme);
    }
    render_suggestions(overlay_row, &vm.search_bar.suggestions, theme, cols);
}

//! Selected book detail line.

use crate::ui::helpers::{position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Renders the work key and cover image URL of the selected book at `row`.
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize) -> usize {
    let text = format!(" {}  cover: {}", detail.key, detail.cover_url);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_padded(&truncate(&text, cols), cols);
    print!("{}", Theme::reset());
    row + 1
}

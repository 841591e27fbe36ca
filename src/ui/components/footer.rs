//! Footer component renderer.
//!
//! Renders the keybinding hints and the attribution line, both centered and
//! dimmed.

use crate::ui::helpers::{position_cursor, print_centered, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the two footer lines starting at `row`. Text wider than the pane
/// is truncated to keep the layout intact.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&truncate(&footer.keybindings, cols), cols);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&truncate(&footer.credits, cols), cols);
    print!("{}", Theme::reset());

    row + 2
}

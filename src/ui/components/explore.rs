//! Explore menu renderer.
//!
//! Renders the category picker as a bordered box overlaying the list area.

use crate::ui::helpers::{char_len, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ExploreMenu;

const TITLE: &str = " Explore ";

/// Renders the menu with its top border at `row`, left-aligned at `col`.
pub fn render_explore_menu(row: usize, col: usize, menu: &ExploreMenu, theme: &Theme) {
    let inner_width = menu
        .categories
        .iter()
        .map(|item| char_len(&item.name) + 4)
        .max()
        .unwrap_or(0)
        .max(char_len(TITLE) + 2);

    position_cursor(row, col);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{TITLE}{}┐", "─".repeat(inner_width - char_len(TITLE)));

    for (offset, item) in menu.categories.iter().enumerate() {
        position_cursor(row + 1 + offset, col);
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("│");
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print_padded(&format!(" ▸ {}", item.name), inner_width);
            print!("{}", Theme::reset());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print_padded(&format!("   {}", item.name), inner_width);
        }
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("│");
    }

    position_cursor(row + 1 + menu.categories.len(), col);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

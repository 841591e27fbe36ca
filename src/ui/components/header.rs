//! Header component renderer.
//!
//! Renders the title bar: the plugin name centered, with the saved count and
//! theme indicator right-aligned.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at `row` and returns the next free row.
///
/// ```text
/// [padding] TITLE [padding] badges
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = char_len(&header.title);
    let badges_len = char_len(&header.badges) + 1;
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);

    let used = padding + title_len;
    if cols >= used + badges_len {
        print!("{}", " ".repeat(cols - used - badges_len));
        print!("{}", Theme::fg(&theme.colors.saved_fg));
        print!("{} ", header.badges);
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(used)));
    }

    print!("{}", Theme::reset());
    row + 1
}

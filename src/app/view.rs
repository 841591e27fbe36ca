//! View model computation.
//!
//! Transforms an [`AppState`] snapshot into a [`UIViewModel`]: picks which of
//! the welcome screen, loading indicator, error banner, empty message or book
//! list is shown, windows the list around the cursor, and computes match
//! highlights for result titles.

use super::categories::{EXAMPLE_QUERY, EXPLORE_CATEGORIES};
use super::modes::{InputMode, SearchPhase, ViewMode};
use super::state::AppState;
use crate::domain::BookRecord;
use crate::ui::helpers::truncate;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, ExploreItem, ExploreMenu, FooterInfo, HeaderInfo,
    SearchBarInfo, StatusLine, SuggestionItem, UIViewModel,
};
use chrono::Datelike;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows taken by everything except the list: blank line, header, border,
/// search box (3), heading, column headers, detail line, border, footer (2).
const CHROME_ROWS: usize = 12;

pub const LOADING_MESSAGE: &str = "Searching…";

impl AppState {
    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mut vm = UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            explore_menu: self.compute_explore_menu(),
            heading: None,
            status: None,
            display_items: vec![],
            selected_index: 0,
            detail: None,
            empty_state: None,
            footer: self.compute_footer(),
        };

        match (self.view_mode, &self.phase) {
            (ViewMode::Saved, _) => {
                vm.heading = Some(format!("Your Saved Books ({})", self.saved.len()));
                if self.saved.is_empty() {
                    vm.empty_state = Some(EmptyState {
                        message: "No saved books yet".to_string(),
                        subtitle: "Press Enter on a search result to save it".to_string(),
                    });
                    return vm;
                }
            }
            (ViewMode::Normal, SearchPhase::Idle) => {
                vm.empty_state = Some(EmptyState {
                    message: "Discover your next favorite book".to_string(),
                    subtitle: format!(
                        "Press / to search, e to explore categories, or t to try \"{EXAMPLE_QUERY}\""
                    ),
                });
                return vm;
            }
            (ViewMode::Normal, SearchPhase::Loading) => {
                vm.status = Some(StatusLine::Loading(LOADING_MESSAGE.to_string()));
                return vm;
            }
            (ViewMode::Normal, SearchPhase::Error(message)) => {
                vm.status = Some(StatusLine::Error(message.clone()));
                return vm;
            }
            (ViewMode::Normal, SearchPhase::Results) => {
                if self.results.is_empty() {
                    vm.empty_state = Some(EmptyState {
                        message: "No results found".to_string(),
                        subtitle: "Try a different title, author or subject".to_string(),
                    });
                    return vm;
                }
                vm.heading = Some(format!(
                    "Results for \"{}\" ({})",
                    self.committed_query,
                    self.results.len()
                ));
            }
        }

        let books = self.displayed_books();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(books.len());
        if visible_end - visible_start < available_rows && books.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = (self.view_mode == ViewMode::Normal && !self.committed_query.is_empty())
            .then(SkimMatcherV2::default);

        vm.display_items = books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                self.compute_display_item(book, visible_start + relative_idx, cols, matcher.as_ref())
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);

        vm.detail = self.selected_book().map(|book| DetailInfo {
            key: book.key.clone(),
            cover_url: self.catalog.cover_url(book),
        });

        vm
    }

    fn compute_display_item(
        &self,
        book: &BookRecord,
        absolute_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let (title_width, author_width) = column_widths(cols);
        let title = truncate(&book.title, title_width.saturating_sub(2));

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            compute_highlight_ranges(&title, &self.committed_query, m)
        });

        DisplayItem {
            title,
            author: truncate(book.author_display(), author_width.saturating_sub(1)),
            is_selected: absolute_idx == self.selected_index,
            is_saved: self.saved.contains(&book.key),
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let theme = if self.dark_mode { "dark" } else { "light" };
        HeaderInfo {
            title: " Bookfinder ".to_string(),
            badges: format!("♥ {}  ◐ {theme}", self.saved.len()),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let focused = self.input_mode == InputMode::Search;
        let suggestions = if focused && self.suggestions.visible {
            self.suggestions
                .items
                .iter()
                .enumerate()
                .map(|(index, text)| SuggestionItem {
                    text: text.clone(),
                    is_selected: self.suggestions.selected == Some(index),
                })
                .collect()
        } else {
            vec![]
        };

        SearchBarInfo {
            query: self.query.clone(),
            focused,
            suggestions,
        }
    }

    fn compute_explore_menu(&self) -> Option<ExploreMenu> {
        (self.input_mode == InputMode::Explore).then(|| ExploreMenu {
            categories: EXPLORE_CATEGORIES
                .iter()
                .enumerate()
                .map(|(index, name)| ExploreItem {
                    name: (*name).to_string(),
                    is_selected: index == self.explore_index,
                })
                .collect(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.view_mode) {
            (InputMode::Search, _) => {
                "Enter: search  ↑/↓ or Ctrl+n/p: suggestions  ESC: leave search box"
            }
            (InputMode::Explore, _) => "j/k: choose category  Enter: search  ESC: close",
            (InputMode::Browse, ViewMode::Normal) => {
                "/: search  j/k: navigate  Enter: save  f: saved  e: explore  h: home  d: theme  q: quit"
            }
            (InputMode::Browse, ViewMode::Saved) => {
                "j/k: navigate  Enter: unsave  f: back  /: search  h: home  d: theme  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            credits: format!(
                "Powered by Open Library API • © {}",
                chrono::Local::now().year()
            ),
        }
    }
}

/// Splits the pane width between the title and author columns.
const fn column_widths(cols: usize) -> (usize, usize) {
    const MARKER_WIDTH: usize = 2;
    let usable = cols.saturating_sub(MARKER_WIDTH);
    let title = usable * 3 / 5;
    (title, usable - title)
}

/// Computes character index ranges of `text` matching `query`, coalescing
/// consecutive indices into `(start, end)` runs with exclusive end.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PLACEHOLDER_COVER_URL;

    fn with_results(count: usize) -> AppState {
        let mut state = AppState::default();
        state.submit_search("book");
        state.complete_search_for_tests(
            (1..=count)
                .map(|n| BookRecord::new(format!("/works/OL{n}W"), format!("Book {n}")))
                .collect(),
        );
        state
    }

    impl AppState {
        fn complete_search_for_tests(&mut self, books: Vec<BookRecord>) {
            self.results = books;
            self.phase = SearchPhase::Results;
        }
    }

    #[test]
    fn welcome_screen_before_any_search() {
        let vm = AppState::default().compute_viewmodel(30, 100);
        let empty = vm.empty_state.unwrap();
        assert!(empty.subtitle.contains("Harry Potter"));
        assert!(vm.display_items.is_empty());
    }

    #[test]
    fn loading_hides_list() {
        let mut state = with_results(3);
        state.submit_search("again");

        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.status, Some(StatusLine::Loading(LOADING_MESSAGE.to_string())));
        assert!(vm.display_items.is_empty());
    }

    #[test]
    fn error_banner_carries_message() {
        let mut state = AppState::default();
        state.phase = SearchPhase::Error("Something went wrong. Please try again.".to_string());

        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(
            vm.status,
            Some(StatusLine::Error("Something went wrong. Please try again.".to_string()))
        );
    }

    #[test]
    fn empty_results_say_so() {
        let vm = with_results(0).compute_viewmodel(30, 100);
        assert_eq!(vm.empty_state.unwrap().message, "No results found");
    }

    #[test]
    fn saved_view_heading_counts_books() {
        let mut state = with_results(2);
        let first = state.results[0].clone();
        state.toggle_saved(&first);
        state.enter_saved_view();

        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.heading.as_deref(), Some("Your Saved Books (1)"));
        assert_eq!(vm.display_items.len(), 1);
        assert!(vm.display_items[0].is_saved);
    }

    #[test]
    fn list_window_follows_cursor() {
        let mut state = with_results(24);
        for _ in 0..20 {
            state.move_selection_down();
        }

        let vm = state.compute_viewmodel(22, 100);
        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].title, "Book 21");
    }

    #[test]
    fn detail_shows_cover_or_placeholder() {
        let mut state = with_results(1);
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.detail.unwrap().cover_url, PLACEHOLDER_COVER_URL);

        state.results[0] = state.results[0].clone().with_cover(42);
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(
            vm.detail.unwrap().cover_url,
            "https://covers.openlibrary.org/b/id/42-M.jpg"
        );
    }

    #[test]
    fn committed_query_is_highlighted_in_titles() {
        let vm = with_results(1).compute_viewmodel(30, 100);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 4)]);
    }

    #[test]
    fn footer_credits_current_year() {
        let vm = AppState::default().compute_viewmodel(30, 100);
        let year = chrono::Local::now().year().to_string();
        assert!(vm.footer.credits.starts_with("Powered by Open Library API"));
        assert!(vm.footer.credits.ends_with(&year));
    }

    #[test]
    fn dropdown_only_while_typing() {
        let mut state = AppState::default();
        state.suggestions.items = vec!["Dune".to_string()];
        state.suggestions.visible = true;
        assert!(state.compute_viewmodel(30, 100).search_bar.suggestions.is_empty());

        state.focus_search();
        assert_eq!(state.compute_viewmodel(30, 100).search_bar.suggestions.len(), 1);
    }

    #[test]
    fn coalesces_consecutive_matches() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(
            compute_highlight_ranges("harry potter", "potter", &matcher),
            vec![(6, 12)]
        );
    }
}

//! Application state and the search/view state machine.
//!
//! This module defines [`AppState`], the single owned container for everything
//! the plugin displays: the search box text, the latest catalog results, the
//! saved books, live suggestions, and the mode flags layered on top of them.
//! Every mutation goes through one of the transition methods below, so the
//! cross-field invariants are enforced in one place:
//!
//! - `view_mode == Saved` means the displayed list is the saved set, whatever
//!   `results` holds
//! - a loading search never carries an error message
//! - suggestions are cleared when the query is too short or a search commits
//!
//! # Search lifecycle
//!
//! ```text
//!            submit_search("")                 complete_search(Ok)
//!   ┌──────────────────────────┐         ┌──────────────────────► Results
//!   ▼                          │         │
//! Idle ──submit_search(text)──► Loading ─┤
//!   ▲                                    │     complete_search(Err)
//!   └──── go_home / saved view ──────────┴──────────────────────► Error
//! ```
//!
//! Catalog round trips are not performed here. Transitions that need the
//! network return a [`CatalogRequest`] for the caller to issue, and the
//! response is fed back through [`AppState::complete_search`] or
//! [`AppState::complete_suggestions`]. Each main search carries a generation
//! number, so a response that arrives after a newer search (or after the
//! search was abandoned) is discarded instead of overwriting newer state.
//!
//! # Example
//!
//! ```rust
//! use bookfinder::app::{AppState, SearchPhase};
//! use bookfinder::catalog::RequestPurpose;
//!
//! let mut state = AppState::default();
//! let request = state.submit_search("Harry Potter").unwrap();
//! assert_eq!(state.phase, SearchPhase::Loading);
//!
//! let RequestPurpose::Search { generation } = request.purpose else { unreachable!() };
//! state.complete_search(generation, Ok(vec![]));
//! assert_eq!(state.phase, SearchPhase::Results);
//! ```

use super::categories::{EXAMPLE_QUERY, EXPLORE_CATEGORIES};
use super::debounce::{Debounce, SuggestionDebouncer};
use super::modes::{InputMode, SearchPhase, ViewMode};
use crate::catalog::{
    suggestion_titles, CatalogClient, CatalogRequest, RequestPurpose, DEFAULT_PAGE_SIZE,
    DEFAULT_SUGGESTION_LIMIT,
};
use crate::domain::{BookRecord, FetchError, SavedSet, Toggle};
use crate::ui::theme::{Theme, ThemePair};
use std::time::Duration;

/// Message shown for any failed main search. Remote details are only logged.
pub const SEARCH_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Live suggestion dropdown state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    /// Distinct titles, most relevant first.
    pub items: Vec<String>,

    /// Whether the dropdown is shown. Items survive hiding so refocusing the
    /// search box brings them back.
    pub visible: bool,

    /// Highlighted entry, if the user has moved into the dropdown.
    pub selected: Option<usize>,
}

impl Suggestions {
    fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    /// Returns the highlighted title, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text currently in the search box.
    pub query: String,

    /// Trimmed text of the most recent committed search, used for match
    /// highlighting and the results heading.
    pub committed_query: String,

    /// Results of the most recent successful search, replaced wholesale.
    pub results: Vec<BookRecord>,

    /// Durable saved books, hydrated at startup.
    pub saved: SavedSet,

    pub phase: SearchPhase,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub suggestions: Suggestions,

    /// Cursor over [`AppState::displayed_books`].
    pub selected_index: usize,

    /// Cursor over the explore categories.
    pub explore_index: usize,

    pub dark_mode: bool,
    pub themes: ThemePair,

    /// Whether the host granted web access. Searches are still attempted
    /// without it; the host then reports them as failed.
    pub web_access: bool,

    pub catalog: CatalogClient,
    pub page_size: usize,
    pub suggestion_limit: usize,

    debouncer: SuggestionDebouncer,
    search_generation: u64,
}

impl AppState {
    /// Creates the startup state from persisted data.
    #[must_use]
    pub fn new(saved: SavedSet, dark_mode: bool, themes: ThemePair) -> Self {
        Self {
            query: String::new(),
            committed_query: String::new(),
            results: Vec::new(),
            saved,
            phase: SearchPhase::Idle,
            view_mode: ViewMode::Normal,
            input_mode: InputMode::Browse,
            suggestions: Suggestions::default(),
            selected_index: 0,
            explore_index: 0,
            dark_mode,
            themes,
            web_access: false,
            catalog: CatalogClient::default(),
            page_size: DEFAULT_PAGE_SIZE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            debouncer: SuggestionDebouncer::default(),
            search_generation: 0,
        }
    }

    /// Replaces the catalog endpoint and request sizes.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogClient, page_size: usize, suggestion_limit: usize) -> Self {
        self.catalog = catalog;
        self.page_size = page_size;
        self.suggestion_limit = suggestion_limit;
        self
    }

    /// Replaces the suggestion debounce delay.
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = SuggestionDebouncer::new(delay);
        self
    }

    /// Returns the theme matching the current preference.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.select(self.dark_mode)
    }

    /// Returns the list currently on screen.
    #[must_use]
    pub fn displayed_books(&self) -> &[BookRecord] {
        match self.view_mode {
            ViewMode::Saved => self.saved.as_slice(),
            ViewMode::Normal => &self.results,
        }
    }

    #[must_use]
    pub fn selected_book(&self) -> Option<&BookRecord> {
        self.displayed_books().get(self.selected_index)
    }

    // ---- committed search ----

    /// Commits a search for `text`.
    ///
    /// Always leaves the saved view, cancels any pending suggestion lookup and
    /// closes the dropdown. A blank `text` resets to `Idle` with no results and
    /// no error and returns `None`. Otherwise the phase becomes `Loading` and
    /// the returned request must be issued by the caller.
    pub fn submit_search(&mut self, text: &str) -> Option<CatalogRequest> {
        self.view_mode = ViewMode::Normal;
        self.search_generation += 1;
        self.selected_index = 0;
        self.debouncer.cancel();
        self.suggestions.clear();
        self.suggestions.visible = false;

        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(generation = self.search_generation, "blank search, resetting to idle");
            self.reset_search();
            return None;
        }

        tracing::debug!(generation = self.search_generation, query = %text, "search submitted");
        self.committed_query = text.to_string();
        self.phase = SearchPhase::Loading;

        Some(self.catalog.search_request(
            text,
            self.page_size,
            RequestPurpose::Search {
                generation: self.search_generation,
            },
        ))
    }

    /// Applies the outcome of the search issued as `generation`.
    ///
    /// Returns `false` and leaves the state untouched when the response is
    /// stale, meaning a newer search was submitted or the search was abandoned
    /// since it was issued.
    pub fn complete_search(&mut self, generation: u64, outcome: Result<Vec<BookRecord>, FetchError>) -> bool {
        if generation != self.search_generation || !self.phase.is_loading() {
            tracing::debug!(
                generation,
                current = self.search_generation,
                "discarding stale search response"
            );
            return false;
        }

        self.selected_index = 0;
        match outcome {
            Ok(books) => {
                tracing::debug!(generation, count = books.len(), "search completed");
                self.results = books;
                self.phase = SearchPhase::Results;
            }
            Err(error) => {
                tracing::warn!(generation, reason = error.reason(), "search failed");
                self.results.clear();
                self.phase = SearchPhase::Error(SEARCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Shared flow behind submit, suggestion picks, category picks and the
    /// example shortcut.
    ///
    /// Blank text is a no-op. Otherwise the search box takes `text`, focus
    /// leaves it, and the search is submitted.
    pub fn do_search(&mut self, text: &str) -> Option<CatalogRequest> {
        if text.trim().is_empty() {
            return None;
        }

        self.query = text.to_string();
        self.input_mode = InputMode::Browse;

        self.submit_search(text)
    }

    /// Runs the shared flow on the search box text or the highlighted
    /// suggestion.
    pub fn submit_query(&mut self) -> Option<CatalogRequest> {
        let text = self
            .suggestions
            .selected_item()
            .map_or_else(|| self.query.clone(), str::to_string);
        self.do_search(&text)
    }

    /// Runs the shared flow on the highlighted explore category.
    pub fn pick_category(&mut self) -> Option<CatalogRequest> {
        let category = EXPLORE_CATEGORIES[self.explore_index % EXPLORE_CATEGORIES.len()];
        tracing::debug!(category, "explore category picked");
        self.do_search(category)
    }

    pub fn try_example(&mut self) -> Option<CatalogRequest> {
        self.do_search(EXAMPLE_QUERY)
    }

    // ---- saved books ----

    /// Adds `book` to the saved set, or removes it if already present.
    ///
    /// Neither the view mode nor the search state changes. The caller
    /// persists the resulting set.
    pub fn toggle_saved(&mut self, book: &BookRecord) -> Toggle {
        let toggle = self.saved.toggle(book);
        tracing::debug!(key = %book.key, ?toggle, saved = self.saved.len(), "saved set toggled");

        if self.view_mode == ViewMode::Saved {
            self.clamp_selection();
        }
        toggle
    }

    /// Toggles the book under the cursor.
    pub fn toggle_selected(&mut self) -> Option<Toggle> {
        let book = self.selected_book()?.clone();
        Some(self.toggle_saved(&book))
    }

    /// Shows the saved books instead of search results.
    pub fn enter_saved_view(&mut self) {
        tracing::debug!(saved = self.saved.len(), "entering saved view");
        self.abandon_search();
        self.view_mode = ViewMode::Saved;
    }

    /// Returns to the empty search view.
    pub fn exit_saved_view(&mut self) {
        tracing::debug!("leaving saved view");
        self.abandon_search();
        self.view_mode = ViewMode::Normal;
    }

    /// Enters the saved view, or leaves it if already there.
    pub fn toggle_saved_view(&mut self) {
        match self.view_mode {
            ViewMode::Normal => self.enter_saved_view(),
            ViewMode::Saved => self.exit_saved_view(),
        }
    }

    /// Leaves the saved view and clears any search, results, or error.
    pub fn go_home(&mut self) {
        self.exit_saved_view();
        self.input_mode = InputMode::Browse;
    }

    // ---- search box and suggestions ----

    /// Focuses the search box, leaving the saved view first if needed.
    pub fn focus_search(&mut self) {
        if self.view_mode == ViewMode::Saved {
            self.exit_saved_view();
        }
        self.input_mode = InputMode::Search;
        self.suggestions.visible = true;
    }

    /// Unfocuses the search box and hides the dropdown.
    pub fn blur_search(&mut self) {
        self.input_mode = InputMode::Browse;
        self.suggestions.visible = false;
        self.suggestions.selected = None;
    }

    /// Replaces the search box text and reschedules the suggestion lookup.
    ///
    /// Typing while the saved view is shown leaves it first. Returns the delay
    /// of the host timer to set, if one is needed.
    pub fn set_query(&mut self, text: String) -> Option<Duration> {
        if self.view_mode == ViewMode::Saved {
            self.exit_saved_view();
        }

        self.query = text;
        self.suggestions.selected = None;

        match self.debouncer.on_query_change(&self.query) {
            Debounce::Cleared => {
                self.suggestions.clear();
                None
            }
            Debounce::Scheduled { ticket, delay } => {
                tracing::trace!(ticket, query = %self.query, "suggestion lookup scheduled");
                Some(delay)
            }
        }
    }

    pub fn push_char(&mut self, c: char) -> Option<Duration> {
        let mut text = if self.view_mode == ViewMode::Saved {
            String::new()
        } else {
            self.query.clone()
        };
        text.push(c);
        self.set_query(text)
    }

    pub fn pop_char(&mut self) -> Option<Duration> {
        let mut text = self.query.clone();
        text.pop();
        self.set_query(text)
    }

    /// Handles an elapsed suggestion timer.
    ///
    /// Returns the lookup to issue if the timer belongs to the latest
    /// keystroke, or `None` if it was superseded.
    pub fn suggestion_timer_elapsed(&mut self) -> Option<CatalogRequest> {
        let (ticket, query) = self.debouncer.timer_elapsed()?;
        tracing::debug!(ticket, query = %query, "suggestion lookup fired");

        Some(self.catalog.search_request(
            &query,
            self.suggestion_limit,
            RequestPurpose::Suggest { ticket },
        ))
    }

    /// Applies the outcome of the suggestion lookup `ticket`.
    ///
    /// Failures are logged and leave the dropdown untouched. They never reach
    /// the search phase.
    pub fn complete_suggestions(&mut self, ticket: u64, outcome: Result<Vec<BookRecord>, FetchError>) -> bool {
        if !self.debouncer.complete(ticket) {
            tracing::trace!(ticket, "discarding superseded suggestions");
            return false;
        }

        match outcome {
            Ok(books) => {
                self.suggestions.items = suggestion_titles(&books, self.suggestion_limit);
                self.suggestions.selected = None;
                self.suggestions.visible = self.input_mode == InputMode::Search;
                tracing::debug!(ticket, count = self.suggestions.items.len(), "suggestions updated");
                true
            }
            Err(error) => {
                tracing::warn!(ticket, reason = error.reason(), "suggestion lookup failed");
                false
            }
        }
    }

    pub fn suggestion_next(&mut self) {
        if !self.suggestions.visible || self.suggestions.items.is_empty() {
            return;
        }
        let len = self.suggestions.items.len();
        self.suggestions.selected = Some(self.suggestions.selected.map_or(0, |index| (index + 1) % len));
    }

    pub fn suggestion_previous(&mut self) {
        if !self.suggestions.visible || self.suggestions.items.is_empty() {
            return;
        }
        let len = self.suggestions.items.len();
        self.suggestions.selected = Some(match self.suggestions.selected {
            None | Some(0) => len - 1,
            Some(index) => index - 1,
        });
    }

    // ---- explore menu ----

    pub fn open_explore(&mut self) {
        self.input_mode = InputMode::Explore;
        self.suggestions.visible = false;
    }

    pub fn close_explore(&mut self) {
        self.input_mode = InputMode::Browse;
    }

    pub fn explore_next(&mut self) {
        self.explore_index = (self.explore_index + 1) % EXPLORE_CATEGORIES.len();
    }

    pub fn explore_previous(&mut self) {
        self.explore_index = self
            .explore_index
            .checked_sub(1)
            .unwrap_or(EXPLORE_CATEGORIES.len() - 1);
    }

    // ---- theme ----

    /// Flips the theme preference and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "theme toggled");
        self.dark_mode
    }

    // ---- list cursor ----

    /// Moves the cursor down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.displayed_books().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.displayed_books().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.displayed_books().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Clears query, results and error, and fences off any in-flight search.
    fn abandon_search(&mut self) {
        self.search_generation += 1;
        self.query.clear();
        self.debouncer.cancel();
        self.suggestions.clear();
        self.selected_index = 0;
        self.reset_search();
    }

    fn reset_search(&mut self) {
        self.committed_query.clear();
        self.results.clear();
        self.phase = SearchPhase::Idle;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SavedSet::new(), false, ThemePair::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books(count: usize) -> Vec<BookRecord> {
        (1..=count)
            .map(|n| BookRecord::new(format!("/works/OL{n}W"), format!("Book {n}")))
            .collect()
    }

    fn generation_of(request: &CatalogRequest) -> u64 {
        match request.purpose {
            RequestPurpose::Search { generation } => generation,
            RequestPurpose::Suggest { .. } => panic!("expected a search request"),
        }
    }

    fn ticket_of(request: &CatalogRequest) -> u64 {
        match request.purpose {
            RequestPurpose::Suggest { ticket } => ticket,
            RequestPurpose::Search { .. } => panic!("expected a suggestion request"),
        }
    }

    #[test]
    fn submit_goes_through_loading_to_results() {
        let mut state = AppState::default();
        let request = state.submit_search("  Harry Potter ").unwrap();

        assert_eq!(state.phase, SearchPhase::Loading);
        assert!(request.url.contains("q=Harry%20Potter&limit=24"));

        assert!(state.complete_search(generation_of(&request), Ok(books(24))));
        assert_eq!(state.phase, SearchPhase::Results);
        assert!(state.phase.searched());
        assert_eq!(state.results.len(), 24);
        assert_eq!(state.committed_query, "Harry Potter");
    }

    #[test]
    fn failed_search_shows_fixed_message() {
        let mut state = AppState::default();
        let request = state.submit_search("xyzzy").unwrap();

        state.complete_search(generation_of(&request), Err(FetchError::status(500)));

        assert_eq!(state.phase.error_message(), Some(SEARCH_ERROR_MESSAGE));
        assert!(state.results.is_empty());
    }

    #[test]
    fn blank_submit_resets_to_idle_from_any_phase() {
        let mut state = AppState::default();
        let request = state.submit_search("xyzzy").unwrap();
        state.complete_search(generation_of(&request), Err(FetchError::new("boom")));

        assert!(state.submit_search("   ").is_none());
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.results.is_empty());
        assert!(state.phase.error_message().is_none());
    }

    #[test]
    fn older_response_cannot_overwrite_newer_search() {
        let mut state = AppState::default();
        let first = state.submit_search("dune").unwrap();
        let second = state.submit_search("emma").unwrap();

        assert!(state.complete_search(generation_of(&second), Ok(books(2))));
        assert!(!state.complete_search(generation_of(&first), Ok(books(9))));
        assert_eq!(state.results.len(), 2);
    }

    #[test]
    fn response_after_going_home_is_discarded() {
        let mut state = AppState::default();
        let request = state.submit_search("dune").unwrap();
        state.go_home();

        assert!(!state.complete_search(generation_of(&request), Ok(books(3))));
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.results.is_empty());
    }

    #[test]
    fn submit_leaves_saved_view() {
        let mut state = AppState::default();
        state.enter_saved_view();
        state.submit_search("dune");
        assert_eq!(state.view_mode, ViewMode::Normal);
    }

    #[test]
    fn saved_view_round_trip_clears_search() {
        let mut state = AppState::default();
        let request = state.do_search("dune").unwrap();
        state.complete_search(generation_of(&request), Ok(books(3)));

        state.enter_saved_view();
        assert_eq!(state.view_mode, ViewMode::Saved);
        assert!(state.query.is_empty());
        assert!(!state.phase.searched());
        assert!(state.results.is_empty());

        state.toggle_saved_view();
        assert_eq!(state.view_mode, ViewMode::Normal);
        assert!(state.query.is_empty());
        assert!(!state.phase.searched());
    }

    #[test]
    fn saved_view_displays_saved_set() {
        let mut state = AppState::default();
        state.toggle_saved(&BookRecord::new("/works/OL1W", "Book 1"));
        state.results = books(5);

        assert_eq!(state.displayed_books().len(), 5);
        state.enter_saved_view();
        assert_eq!(state.displayed_books().len(), 1);
    }

    #[test]
    fn toggling_twice_restores_saved_set() {
        let mut state = AppState::default();
        let book = BookRecord::new("/works/OL1W", "Book 1");

        assert_eq!(state.toggle_saved(&book), Toggle::Added);
        assert_eq!(state.toggle_saved(&book), Toggle::Removed);
        assert!(state.saved.is_empty());
        assert_eq!(state.view_mode, ViewMode::Normal);
    }

    #[test]
    fn removing_last_saved_book_clamps_cursor() {
        let mut state = AppState::default();
        for book in books(2) {
            state.toggle_saved(&book);
        }
        state.enter_saved_view();
        state.move_selection_down();
        assert_eq!(state.selected_index, 1);

        state.toggle_selected();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.saved.len(), 1);
    }

    #[test]
    fn blank_plain_submit_is_a_no_op() {
        let mut state = AppState::default();
        let request = state.do_search("dune").unwrap();
        state.complete_search(generation_of(&request), Ok(books(3)));

        state.focus_search();
        state.set_query("   ".to_string());
        assert!(state.submit_query().is_none());
        assert_eq!(state.phase, SearchPhase::Results);
        assert_eq!(state.results.len(), 3);
    }

    #[test]
    fn typing_in_saved_view_leaves_it_and_starts_fresh() {
        let mut state = AppState::default();
        state.enter_saved_view();

        state.push_char('d');
        assert_eq!(state.view_mode, ViewMode::Normal);
        assert_eq!(state.query, "d");
    }

    #[test]
    fn suggestions_follow_latest_keystroke() {
        let mut state = AppState::default();
        state.focus_search();

        assert!(state.push_char('h').is_none());
        assert!(state.push_char('a').is_some());
        assert!(state.push_char('r').is_some());

        assert!(state.suggestion_timer_elapsed().is_none());
        let request = state.suggestion_timer_elapsed().unwrap();
        assert!(request.url.contains("q=har&limit=7"));

        let docs = vec![
            BookRecord::new("/works/OL1W", "Harry"),
            BookRecord::new("/works/OL2W", "Harry"),
            BookRecord::new("/works/OL3W", "Harriet"),
        ];
        assert!(state.complete_suggestions(ticket_of(&request), Ok(docs)));
        assert_eq!(state.suggestions.items, vec!["Harry", "Harriet"]);
        assert!(state.suggestions.visible);
    }

    #[test]
    fn suggestion_failure_never_touches_search_phase() {
        let mut state = AppState::default();
        state.focus_search();
        state.set_query("ha".to_string());
        let request = state.suggestion_timer_elapsed().unwrap();

        assert!(!state.complete_suggestions(ticket_of(&request), Err(FetchError::status(503))));
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.suggestions.items.is_empty());
    }

    #[test]
    fn short_query_clears_suggestions() {
        let mut state = AppState::default();
        state.focus_search();
        state.suggestions.items = vec!["Harry".to_string()];

        assert!(state.set_query("h".to_string()).is_none());
        assert!(state.suggestions.items.is_empty());
    }

    #[test]
    fn picking_suggestion_commits_search_and_hides_dropdown() {
        let mut state = AppState::default();
        state.focus_search();
        state.set_query("ha".to_string());
        state.suggestions.items = vec!["Harry".to_string(), "Hamlet".to_string()];

        state.suggestion_previous();
        let request = state.submit_query().unwrap();

        assert_eq!(state.query, "Hamlet");
        assert!(request.url.contains("q=Hamlet"));
        assert!(!state.suggestions.visible);
        assert!(state.suggestions.items.is_empty());
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.suggestion_timer_elapsed().is_none());
    }

    #[test]
    fn committing_any_search_drops_pending_suggestions() {
        let mut state = AppState::default();
        state.focus_search();
        state.set_query("ha".to_string());
        let request = state.suggestion_timer_elapsed().unwrap();
        state.set_query("har".to_string());
        state.suggestions.items = vec!["Harry".to_string()];
        state.suggestions.visible = true;

        assert!(state.submit_search("harvest").is_some());

        assert!(state.suggestions.items.is_empty());
        assert!(!state.suggestions.visible);
        assert!(state.suggestion_timer_elapsed().is_none());
        assert!(!state.complete_suggestions(
            ticket_of(&request),
            Ok(vec![BookRecord::new("/works/OL1W", "Harry")])
        ));
        assert!(state.suggestions.items.is_empty());
    }

    #[test]
    fn category_pick_runs_shared_search() {
        let mut state = AppState::default();
        state.enter_saved_view();
        state.open_explore();
        state.explore_previous();

        let request = state.pick_category().unwrap();
        assert_eq!(state.query, "Comics & Graphic Novels");
        assert_eq!(state.view_mode, ViewMode::Normal);
        assert!(request.url.contains("q=Comics%20%26%20Graphic%20Novels"));
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = AppState::default();
        state.results = books(3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn dark_mode_selects_theme() {
        let mut state = AppState::default();
        let light = state.theme().name.clone();
        assert!(state.toggle_dark_mode());
        assert_ne!(state.theme().name, light);
    }
}

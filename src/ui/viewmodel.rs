//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready data only: truncated text, highlight ranges, selection flags.
//!
//! # Example
//!
//! ```rust
//! use bookfinder::ui::viewmodel::{DisplayItem, EmptyState};
//!
//! let item = DisplayItem {
//!     title: "Dune".to_string(),
//!     author: "Frank Herbert".to_string(),
//!     is_selected: true,
//!     is_saved: false,
//!     highlight_ranges: vec![(0, 4)],
//! };
//! let empty = EmptyState {
//!     message: "No results found".to_string(),
//!     subtitle: String::new(),
//! };
//! # let _ = (item, empty);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Search box, always shown.
    pub search_bar: SearchBarInfo,

    /// Category picker, shown in explore mode.
    pub explore_menu: Option<ExploreMenu>,

    /// Heading above the list ("Your Saved Books (N)", result count).
    pub heading: Option<String>,

    /// Loading indicator or error banner.
    pub status: Option<StatusLine>,

    /// Visible window of the displayed list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    /// Details of the selected book.
    pub detail: Option<DetailInfo>,

    /// Welcome screen or empty-list message.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// One book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the column width.
    pub title: String,

    /// First author, or the unknown-author placeholder.
    pub author: String,

    pub is_selected: bool,
    pub is_saved: bool,

    /// Character ranges of `title` matching the committed query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Right-aligned indicators (saved count, theme).
    pub badges: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub focused: bool,

    /// Dropdown entries. Empty when the dropdown is hidden.
    pub suggestions: Vec<SuggestionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub text: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreMenu {
    pub categories: Vec<ExploreItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreItem {
    pub name: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Loading(String),
    Error(String),
}

/// Selected book details shown under the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub key: String,
    pub cover_url: String,
}

/// Centered message shown instead of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No results found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding hints for the active mode.
    pub keybindings: String,

    /// Attribution line.
    pub credits: String,
}

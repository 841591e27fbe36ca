//! Mode and phase types for the search/view state machine.
//!
//! Three orthogonal enums describe where the application is:
//!
//! - [`SearchPhase`]: progress of the most recent committed search
//!   (`Idle → Loading → Results | Error`)
//! - [`ViewMode`]: whether the displayed list is the search results or the
//!   saved books
//! - [`InputMode`]: which keybindings are active (browsing the list, typing
//!   in the search box, or picking an explore category)
//!
//! # Example
//!
//! ```rust
//! use bookfinder::app::modes::{InputMode, SearchPhase, ViewMode};
//!
//! let phase = SearchPhase::Loading;
//! assert!(phase.is_loading());
//! assert!(phase.error_message().is_none());
//! assert_eq!(ViewMode::default(), ViewMode::Normal);
//! assert_eq!(InputMode::default(), InputMode::Browse);
//! ```

/// Progress of the most recent committed search.
///
/// Carrying the error message inside [`SearchPhase::Error`] makes "loading
/// with an error" unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing searched yet, or the search was cleared.
    #[default]
    Idle,
    /// A catalog request is outstanding.
    Loading,
    /// The last search succeeded. The result list may be empty.
    Results,
    /// The last search failed with a user-facing message.
    Error(String),
}

impl SearchPhase {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Distinguishes "never searched" from "searched, zero results".
    #[must_use]
    pub const fn searched(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Which list is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Search results.
    #[default]
    Normal,
    /// The saved books, regardless of any search results.
    Saved,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and the footer hint text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating the book list and issuing single-key commands.
    #[default]
    Browse,

    /// The search box has focus; characters edit the query and arrow keys
    /// move through live suggestions.
    Search,

    /// The explore category menu is open.
    Explore,
}

//! Event handling and state transition logic.
//!
//! This module implements the handler that turns key presses, timer expiries
//! and catalog responses into [`AppState`] transitions and [`Action`]s. It is
//! the only caller of the state machine's mutation methods.
//!
//! # Event Types
//!
//! - **Navigation**: `SelectNext`, `SelectPrevious`, `ToggleSaveSelected`
//! - **Search box**: `FocusSearch`, `BlurSearch`, `Char`, `Backspace`,
//!   `SubmitQuery`, `SuggestionNext`, `SuggestionPrevious`
//! - **Views**: `ToggleSavedView`, `GoHome`, `ToggleDarkMode`, `TryExample`
//! - **Explore menu**: `OpenExplore`, `ExploreNext`, `ExplorePrevious`,
//!   `PickCategory`, `CloseExplore`
//! - **Host**: `SuggestionTimerElapsed`, `CatalogResponse`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use bookfinder::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::TryExample)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::FetchCatalog(_)));
//! # Ok::<(), bookfinder::domain::BookfinderError>(())
//! ```

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::catalog::{CatalogRequest, RequestPurpose};
use crate::domain::error::Result;
use std::time::Duration;
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input, host timers, or catalog responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down (wraps to top).
    SelectNext,
    /// Moves the list cursor up (wraps to bottom).
    SelectPrevious,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Focuses the search box. Leaves the saved view.
    FocusSearch,
    /// Unfocuses the search box and hides suggestions.
    BlurSearch,
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,
    /// Commits the highlighted suggestion, or the search box text.
    SubmitQuery,
    SuggestionNext,
    SuggestionPrevious,

    /// Saves or unsaves the book under the cursor.
    ToggleSaveSelected,
    /// Enters the saved view, or leaves it when already there.
    ToggleSavedView,
    /// Returns to the empty search view.
    GoHome,
    ToggleDarkMode,
    /// Searches for the example query shown on the welcome screen.
    TryExample,

    OpenExplore,
    ExploreNext,
    ExplorePrevious,
    /// Searches for the highlighted explore category.
    PickCategory,
    CloseExplore,

    /// One suggestion debounce timer expired.
    SuggestionTimerElapsed,

    /// A catalog request completed at the transport level.
    CatalogResponse {
        /// Purpose recovered from the request context.
        purpose: RequestPurpose,
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Reports granted Zellij permissions after the permission request.
    PermissionsResult {
        /// Permissions granted by the user.
        granted: Vec<PermissionType>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, along with the side effects to run
/// in order.
///
/// # Errors
///
/// Reserved for transitions that can fail. None of the current events do:
/// catalog failures become the error phase or a logged suggestion failure.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::SelectNext => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectPrevious => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FocusSearch => {
            state.focus_search();
            Ok((true, vec![]))
        }
        Event::BlurSearch => {
            state.blur_search();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let delay = state.push_char(*c);
            tracing::trace!(query = %state.query, char = %c, "search query updated");
            Ok((true, schedule(delay)))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let delay = state.pop_char();
            Ok((true, schedule(delay)))
        }
        Event::SubmitQuery => {
            let request = state.submit_query();
            if request.is_none() {
                tracing::debug!("blank query, submit ignored");
            }
            Ok((true, fetch(request)))
        }
        Event::SuggestionNext => {
            state.suggestion_next();
            Ok((true, vec![]))
        }
        Event::SuggestionPrevious => {
            state.suggestion_previous();
            Ok((true, vec![]))
        }
        Event::ToggleSaveSelected => {
            let Some(toggle) = state.toggle_selected() else {
                tracing::debug!("no book selected");
                return Ok((false, vec![]));
            };
            tracing::debug!(?toggle, "persisting saved books");
            Ok((true, vec![Action::PersistSavedBooks(state.saved.clone())]))
        }
        Event::ToggleSavedView => {
            state.toggle_saved_view();
            Ok((true, vec![]))
        }
        Event::GoHome => {
            state.go_home();
            Ok((true, vec![]))
        }
        Event::ToggleDarkMode => {
            let dark = state.toggle_dark_mode();
            Ok((true, vec![Action::PersistTheme(dark)]))
        }
        Event::TryExample => Ok((true, fetch(state.try_example()))),
        Event::OpenExplore => {
            state.open_explore();
            Ok((true, vec![]))
        }
        Event::ExploreNext => {
            state.explore_next();
            Ok((true, vec![]))
        }
        Event::ExplorePrevious => {
            state.explore_previous();
            Ok((true, vec![]))
        }
        Event::PickCategory => Ok((true, fetch(state.pick_category()))),
        Event::CloseExplore => {
            state.close_explore();
            Ok((true, vec![]))
        }
        Event::SuggestionTimerElapsed => {
            let request = state.suggestion_timer_elapsed();
            Ok((false, fetch(request)))
        }
        Event::CatalogResponse { purpose, status, body } => {
            let outcome = {
                let _span = tracing::debug_span!("decode_catalog_response", status, bytes = body.len()).entered();
                state.catalog.complete(*status, body)
            };

            let applied = match purpose {
                RequestPurpose::Search { generation } => state.complete_search(*generation, outcome),
                RequestPurpose::Suggest { ticket } => state.complete_suggestions(*ticket, outcome),
            };
            Ok((applied, vec![]))
        }
        Event::PermissionsResult { granted } => {
            state.web_access = granted.contains(&PermissionType::WebAccess);
            if !state.web_access {
                tracing::warn!(?granted, "web access not granted, catalog searches will fail");
            }
            Ok((true, vec![]))
        }
    }
}

fn schedule(delay: Option<Duration>) -> Vec<Action> {
    delay
        .map(|delay| Action::ScheduleSuggestionTimer { delay })
        .into_iter()
        .collect()
}

fn fetch(request: Option<CatalogRequest>) -> Vec<Action> {
    request.map(Action::FetchCatalog).into_iter().collect()
}

/// Debug view of an event without its response body.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::CatalogResponse { purpose, status, body } => f
                .debug_struct("CatalogResponse")
                .field("purpose", purpose)
                .field("status", status)
                .field("bytes", &body.len())
                .finish(),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}

//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host. It returns a `Vec<Action>` after
//! each event and the runtime executes them in order: catalog fetches go out
//! through `web_request`, suggestion timers through `set_timeout`, and
//! persistence writes through the storage adapter.
//!
//! # Example
//!
//! ```rust
//! use bookfinder::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::ScheduleSuggestionTimer { delay: Duration::from_millis(400) },
//!     Action::PersistTheme(true),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::catalog::CatalogRequest;
use crate::domain::SavedSet;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues a catalog GET request.
    ///
    /// The request purpose must be passed as the web request context so the
    /// response can be routed back as a [`crate::app::Event::CatalogResponse`].
    FetchCatalog(CatalogRequest),

    /// Sets one host timer for the suggestion debouncer.
    ///
    /// Its expiry is reported back as
    /// [`crate::app::Event::SuggestionTimerElapsed`].
    ScheduleSuggestionTimer {
        /// Time to wait before the timer fires.
        delay: Duration,
    },

    /// Writes the saved books to durable storage.
    PersistSavedBooks(SavedSet),

    /// Writes the theme preference to durable storage.
    PersistTheme(bool),
}

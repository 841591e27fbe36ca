//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Bookfinder library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait, maps
//! host events to library events, and executes the actions the library returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, open storage, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, `Timer`, `PermissionRequestResult`
//! 3. **Update**: Handle events, delegate to library layer
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → one of the input events, depending on the input mode
//! - `WebRequestResult` → `Event::CatalogResponse` (routed by request context)
//! - `Timer` → `Event::SuggestionTimerElapsed`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Browsing:
//! - `/` or `i`: Focus the search box
//! - `j`/`Down`, `k`/`Up`: Move the cursor
//! - `Enter` or `Space`: Save or unsave the selected book
//! - `f`: Toggle the saved books view
//! - `h`: Go home
//! - `d`: Toggle dark mode
//! - `e`: Explore categories
//! - `t`: Try the example search
//! - `q` or `Esc`: Close
//!
//! In the search box:
//! - Characters and `Backspace`: Edit the query
//! - `Enter`: Search
//! - `Up`/`Down` or `Ctrl+p`/`Ctrl+n`: Move through suggestions
//! - `Esc`: Leave the search box
//!
//! In the explore menu:
//! - `j`/`k`: Choose a category
//! - `Enter`: Search the category
//! - `Esc`: Close the menu

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookfinder::catalog::RequestPurpose;
use bookfinder::infrastructure::{get_data_dir, store_file};
use bookfinder::storage::{JsonFileStore, KeyValueStore, MemoryStore, Persistence};
use bookfinder::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the storage handle that the
/// persistence actions write through.
struct State {
    /// Core application state from library layer.
    app: bookfinder::AppState,

    persistence: Persistence<Box<dyn KeyValueStore>>,
}

impl Default for State {
    fn default() -> Self {
        let persistence: Persistence<Box<dyn KeyValueStore>> =
            Persistence::new(Box::new(MemoryStore::default()));
        Self {
            app: bookfinder::initialize(&Config::default(), &persistence),
            persistence,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, opens the JSON store under the plugin data
    /// directory, restores saved books and the theme preference, requests
    /// web access and subscribes to events.
    ///
    /// When the store cannot be opened the plugin keeps running with an
    /// in-memory store, so nothing is persisted for this session.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookfinder::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            catalog_url = %config.catalog_url,
            page_size = config.page_size,
            debounce_ms = config.debounce.as_millis(),
            "parsed configuration"
        );

        let path = store_file(&get_data_dir());
        let store: Box<dyn KeyValueStore> = match JsonFileStore::new(path.clone()) {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "storage unavailable, preferences will not persist");
                Box::new(MemoryStore::default())
            }
        };
        self.persistence = Persistence::new(store);
        self.app = bookfinder::initialize(&config, &self.persistence);

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_response(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::SuggestionTimerElapsed,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = match status {
                    PermissionStatus::Granted => vec![PermissionType::WebAccess],
                    PermissionStatus::Denied => vec![],
                };
                Event::PermissionsResult { granted }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled successfully"
                );
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        bookfinder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Char('n') if ctrl => Event::SuggestionNext,
                BareKey::Char('p') if ctrl => Event::SuggestionPrevious,
                BareKey::Down => Event::SuggestionNext,
                BareKey::Up => Event::SuggestionPrevious,
                BareKey::Enter => Event::SubmitQuery,
                BareKey::Esc => Event::BlurSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl => Event::Char(c),
                _ => return None,
            }),
            InputMode::Explore => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::ExploreNext,
                BareKey::Up | BareKey::Char('k') => Event::ExplorePrevious,
                BareKey::Enter => Event::PickCategory,
                BareKey::Esc | BareKey::Char('e' | 'q') => Event::CloseExplore,
                _ => return None,
            }),
            InputMode::Browse => Some(match key.bare_key {
                BareKey::Char('n') if ctrl => Event::SelectNext,
                BareKey::Char('p') if ctrl => Event::SelectPrevious,
                BareKey::Down | BareKey::Char('j') => Event::SelectNext,
                BareKey::Up | BareKey::Char('k') => Event::SelectPrevious,
                BareKey::Char('/' | 'i') => Event::FocusSearch,
                BareKey::Enter | BareKey::Char(' ') => Event::ToggleSaveSelected,
                BareKey::Char('f') => Event::ToggleSavedView,
                BareKey::Char('h') => Event::GoHome,
                BareKey::Char('d') => Event::ToggleDarkMode,
                BareKey::Char('e') => Event::OpenExplore,
                BareKey::Char('t') => Event::TryExample,
                BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
                _ => return None,
            }),
        }
    }

    /// Routes a web response to the request that issued it.
    ///
    /// Responses without a recognizable context did not come from the
    /// catalog client and are ignored.
    fn map_web_response(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(purpose) = RequestPurpose::from_context(context) else {
            tracing::debug!(?context, "ignoring web response with unknown context");
            return None;
        };
        tracing::debug!(status, body_len = body.len(), ?purpose, "catalog response");
        Some(Event::CatalogResponse {
            purpose,
            status,
            body,
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls and storage writes.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchCatalog(request) => {
                tracing::debug!(url = %request.url, "issuing catalog request");
                web_request(
                    request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.purpose.to_context(),
                );
            }
            Action::ScheduleSuggestionTimer { delay } => {
                set_timeout(delay.as_secs_f64());
            }
            Action::PersistSavedBooks(saved) => {
                self.persistence.store_saved_set(&saved);
            }
            Action::PersistTheme(dark) => {
                self.persistence.store_theme(dark);
            }
        }
    }
}

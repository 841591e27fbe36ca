//! Bookfinder: a Zellij plugin for discovering books in the Open Library catalog.
//!
//! Bookfinder is a floating-pane plugin that provides:
//! - Catalog search with a fixed-size result page
//! - Live title suggestions while typing, debounced and cancellable
//! - Curated explore categories and a one-key example search
//! - A saved-books list and light/dark theme preference that persist between sessions

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - key mapping, web_request, set_timeout            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Search/view transitions                          │
//! │  - Suggestion debouncer                             │
//! │  - Event handling, actions, view model              │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Catalog       │
//! │ (ui/)         │   │ (storage/)    │   │ (catalog/)    │
//! │ - Rendering   │   │ - JSON file   │   │ - Search URLs │
//! │ - Theming     │   │ - Saved books │   │ - Decoding    │
//! │ - Components  │   │ - Theme pref  │   │ - Cover URLs  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - BookRecord, SavedSet, errors (domain/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookfinder.wasm" {
//!         page_size "24"
//!         debounce_ms "400"
//!         dark_theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookfinder::storage::{MemoryStore, Persistence};
//! use bookfinder::{handle_event, initialize, Action, Config, Event};
//!
//! let persistence = Persistence::new(MemoryStore::default());
//! let mut state = initialize(&Config::default(), &persistence);
//!
//! let (_, actions) = handle_event(&mut state, &Event::TryExample)?;
//! assert!(matches!(&actions[..], [Action::FetchCatalog(_)]));
//! # Ok::<(), bookfinder::BookfinderError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchPhase, ViewMode};
pub use domain::{BookRecord, BookfinderError, FetchError, Result, SavedSet};
pub use ui::{Theme, ThemePair};

use catalog::{CatalogClient, DEFAULT_CATALOG_URL, DEFAULT_COVERS_URL, DEFAULT_PAGE_SIZE, DEFAULT_SUGGESTION_LIMIT};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;
use storage::{KeyValueStore, Persistence};

/// Plugin configuration parsed from Zellij's configuration map.
///
/// Every key is optional. Numeric values that fail to parse fall back to
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog host serving `/search.json`.
    pub catalog_url: String,

    /// Cover image host serving `/b/id/<id>-M.jpg`.
    pub covers_url: String,

    /// Entries requested per committed search. Default: 24
    pub page_size: usize,

    /// Entries requested per suggestion lookup, and titles shown. Default: 7
    pub suggestion_limit: usize,

    /// Pause after the last keystroke before suggestions are fetched.
    pub debounce: Duration,

    pub light_theme: String,
    pub dark_theme: String,

    /// Custom TOML theme used for both light and dark mode.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: String,

    /// Trace file size before rotation.
    pub trace_max_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            debounce: app::debounce::DEFAULT_DEBOUNCE,
            light_theme: ui::theme::DEFAULT_LIGHT_THEME.to_string(),
            dark_theme: ui::theme::DEFAULT_DARK_THEME.to_string(),
            theme_file: None,
            trace_level: "info".to_string(),
            trace_max_bytes: observability::DEFAULT_MAX_BYTES,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use bookfinder::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("page_size".to_string(), "12".to_string()),
    ///     ("debounce_ms".to_string(), "250".to_string()),
    ///     ("suggestion_limit".to_string(), "lots".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 12);
    /// assert_eq!(config.debounce, Duration::from_millis(250));
    /// assert_eq!(config.suggestion_limit, 7);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map_or(default, str::to_string)
        };

        Self {
            catalog_url: text("catalog_url", defaults.catalog_url),
            covers_url: text("covers_url", defaults.covers_url),
            page_size: positive(config, "page_size", defaults.page_size),
            suggestion_limit: positive(config, "suggestion_limit", defaults.suggestion_limit),
            debounce: config
                .get("debounce_ms")
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map_or(defaults.debounce, Duration::from_millis),
            light_theme: text("light_theme", defaults.light_theme),
            dark_theme: text("dark_theme", defaults.dark_theme),
            theme_file: config
                .get("theme_file")
                .map(|path| infrastructure::expand_tilde(path.trim())),
            trace_level: text("trace_level", defaults.trace_level),
            trace_max_bytes: positive(config, "trace_max_bytes", defaults.trace_max_bytes),
        }
    }
}

fn positive<T: FromStr + PartialOrd + Default>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    config
        .get(key)
        .and_then(|value| value.trim().parse::<T>().ok())
        .filter(|value| *value > T::default())
        .unwrap_or(default)
}

/// Builds the startup state from configuration and persisted preferences.
///
/// Loads the saved books and theme preference through `persistence`; missing
/// or malformed stored data yields an empty list and light mode.
pub fn initialize<S: KeyValueStore>(config: &Config, persistence: &Persistence<S>) -> AppState {
    tracing::debug!("initializing bookfinder plugin");

    let saved = persistence.load_saved_set();
    let dark_mode = persistence.load_theme();
    let themes = ThemePair::load(&config.light_theme, &config.dark_theme, config.theme_file.as_deref());

    tracing::debug!(saved = saved.len(), dark_mode, "restored preferences");

    AppState::new(saved, dark_mode, themes)
        .with_catalog(
            CatalogClient::new(config.catalog_url.clone(), config.covers_url.clone()),
            config.page_size,
            config.suggestion_limit,
        )
        .with_debounce(config.debounce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::MemoryStore;

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn zero_and_garbage_numbers_fall_back() {
        let map = BTreeMap::from([
            ("page_size".to_string(), "0".to_string()),
            ("trace_max_bytes".to_string(), "-5".to_string()),
            ("catalog_url".to_string(), "  ".to_string()),
        ]);
        let config = Config::from_zellij(&map);

        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.trace_max_bytes, observability::DEFAULT_MAX_BYTES);
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn theme_file_expands_tilde() {
        let map = BTreeMap::from([("theme_file".to_string(), "~/dusk.toml".to_string())]);
        assert_eq!(Config::from_zellij(&map).theme_file.as_deref(), Some("/host/dusk.toml"));
    }

    #[test]
    fn initialize_restores_preferences() {
        let mut persistence = Persistence::new(MemoryStore::default());
        persistence.store_saved_set(&SavedSet::from_records(vec![BookRecord::new("/works/OL1W", "Book 1")]));
        persistence.store_theme(true);

        let config = Config {
            page_size: 10,
            ..Config::default()
        };
        let mut state = initialize(&config, &persistence);

        assert!(state.saved.contains("/works/OL1W"));
        assert!(state.dark_mode);
        let request = state.submit_search("dune").unwrap();
        assert!(request.url.ends_with("&limit=10"));
    }
}

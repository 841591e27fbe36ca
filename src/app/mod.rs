//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain,
//! catalog and storage layers. It owns the search/view state machine and the
//! suggestion debouncer.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer / WebRequestResult → Event → handle_event → AppState transitions → Actions
//!                  ↑                                                               ↓
//!                  └─────────── web_request / set_timeout / storage writes ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`categories`]: Curated explore categories
//! - [`debounce`]: Cancellable scheduling of suggestion lookups
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Search phase, view mode and input mode types
//! - [`state`]: Central application state container
//! - [`view`]: View model computation
//!
//! # Example
//!
//! ```rust
//! use bookfinder::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::ToggleSavedView)?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), bookfinder::domain::BookfinderError>(())
//! ```

pub mod actions;
pub mod categories;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchPhase, ViewMode};
pub use state::{AppState, Suggestions, SEARCH_ERROR_MESSAGE};

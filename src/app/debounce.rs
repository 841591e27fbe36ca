//! Debounced scheduling of live-suggestion lookups.
//!
//! Zellij timers cannot be cancelled once set, so cancellation lives here
//! instead: the debouncer holds at most one pending ticket, and a timer that
//! fires for anything but that ticket does nothing. A superseded keystroke
//! therefore never reaches the network.
//!
//! # Lifecycle of a ticket
//!
//! ```text
//! on_query_change ──► pending ──timer_elapsed──► in flight ──complete──► applied
//!        │               │                           │
//!        └── newer change or cancel() drops either ──┘
//! ```
//!
//! Every [`Debounce::Scheduled`] corresponds to exactly one host timer. All
//! timers share the same delay, so they elapse in scheduling order and
//! [`SuggestionDebouncer::timer_elapsed`] pairs each elapsed timer with the
//! oldest outstanding one.
//!
//! # Example
//!
//! ```rust
//! use bookfinder::app::debounce::{Debounce, SuggestionDebouncer};
//! use std::time::Duration;
//!
//! let mut debouncer = SuggestionDebouncer::new(Duration::from_millis(400));
//!
//! assert_eq!(debouncer.on_query_change("h"), Debounce::Cleared);
//! assert!(matches!(debouncer.on_query_change("ha"), Debounce::Scheduled { .. }));
//! assert!(matches!(debouncer.on_query_change("har"), Debounce::Scheduled { .. }));
//!
//! // The "ha" timer elapses first and is a no-op; the "har" timer fires.
//! assert_eq!(debouncer.timer_elapsed(), None);
//! let (ticket, query) = debouncer.timer_elapsed().unwrap();
//! assert_eq!(query, "har");
//! assert!(debouncer.complete(ticket));
//! ```

use std::collections::VecDeque;
use std::time::Duration;

/// Queries shorter than this (after trimming) clear suggestions instead of
/// scheduling a lookup.
pub const MIN_SUGGESTION_CHARS: usize = 2;

/// Default pause after the last keystroke before a lookup fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// What the caller must do after a query change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Debounce {
    /// The query is too short: clear suggestions now, set no timer.
    Cleared,
    /// Set one host timer of `delay` for `ticket`.
    Scheduled { ticket: u64, delay: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    ticket: u64,
    query: String,
}

/// Cancellable, single-slot scheduler for suggestion lookups.
#[derive(Debug, Clone)]
pub struct SuggestionDebouncer {
    delay: Duration,
    next_ticket: u64,

    /// Scheduled lookup whose timer has not elapsed yet.
    pending: Option<Pending>,

    /// Ticket whose lookup was issued and whose response may still be applied.
    in_flight: Option<u64>,

    /// Host timers not yet elapsed, oldest first.
    timers: VecDeque<u64>,
}

impl SuggestionDebouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_ticket: 0,
            pending: None,
            in_flight: None,
            timers: VecDeque::new(),
        }
    }

    /// Reacts to a new search box value.
    ///
    /// Short queries cancel everything and bypass the delay. Otherwise any
    /// pending or in-flight lookup is cancelled and a new ticket is scheduled
    /// for `text`, which is kept verbatim.
    pub fn on_query_change(&mut self, text: &str) -> Debounce {
        if text.trim().chars().count() < MIN_SUGGESTION_CHARS {
            self.cancel();
            return Debounce::Cleared;
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;

        if let Some(superseded) = self.pending.replace(Pending {
            ticket,
            query: text.to_string(),
        }) {
            tracing::trace!(superseded = superseded.ticket, ticket, "suggestion lookup rescheduled");
        }
        self.in_flight = None;
        self.timers.push_back(ticket);

        Debounce::Scheduled {
            ticket,
            delay: self.delay,
        }
    }

    /// Handles one elapsed host timer.
    ///
    /// Returns the ticket and query to look up if the timer belongs to the
    /// pending ticket, or `None` if that ticket was cancelled or superseded.
    pub fn timer_elapsed(&mut self) -> Option<(u64, String)> {
        let Some(elapsed) = self.timers.pop_front() else {
            tracing::debug!("timer elapsed with no outstanding suggestion timers");
            return None;
        };

        match self.pending.take() {
            Some(pending) if pending.ticket == elapsed => {
                self.in_flight = Some(pending.ticket);
                Some((pending.ticket, pending.query))
            }
            other => {
                self.pending = other;
                tracing::trace!(ticket = elapsed, "cancelled suggestion timer elapsed");
                None
            }
        }
    }

    /// Claims the response for `ticket`.
    ///
    /// Returns `true` exactly once for the most recently fired ticket, and only
    /// if nothing was scheduled or cancelled since it fired.
    pub fn complete(&mut self, ticket: u64) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Drops the pending and in-flight lookups.
    ///
    /// Outstanding host timers still elapse later and are ignored.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.in_flight = None;
    }

    #[cfg(test)]
    const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SuggestionDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_never_schedule() {
        let mut debouncer = SuggestionDebouncer::default();

        assert_eq!(debouncer.on_query_change(""), Debounce::Cleared);
        assert_eq!(debouncer.on_query_change("h"), Debounce::Cleared);
        assert_eq!(debouncer.on_query_change(" h  "), Debounce::Cleared);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.timer_elapsed(), None);
    }

    #[test]
    fn two_characters_schedule_one_lookup_after_delay() {
        let mut debouncer = SuggestionDebouncer::default();

        assert_eq!(
            debouncer.on_query_change("ha"),
            Debounce::Scheduled {
                ticket: 1,
                delay: Duration::from_millis(400)
            }
        );
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.timer_elapsed(), Some((1, "ha".to_string())));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.timer_elapsed(), None);
    }

    #[test]
    fn newer_keystroke_cancels_pending_lookup() {
        let mut debouncer = SuggestionDebouncer::default();

        debouncer.on_query_change("ha");
        debouncer.on_query_change("har");
        debouncer.on_query_change("harr");

        assert_eq!(debouncer.timer_elapsed(), None);
        assert_eq!(debouncer.timer_elapsed(), None);
        assert_eq!(debouncer.timer_elapsed(), Some((3, "harr".to_string())));
    }

    #[test]
    fn response_of_superseded_lookup_is_refused() {
        let mut debouncer = SuggestionDebouncer::default();

        debouncer.on_query_change("ha");
        let (first, _) = debouncer.timer_elapsed().unwrap();

        debouncer.on_query_change("har");
        assert!(!debouncer.complete(first));

        let (second, query) = debouncer.timer_elapsed().unwrap();
        assert_eq!(query, "har");
        assert!(debouncer.complete(second));
        assert!(!debouncer.complete(second));
    }

    #[test]
    fn shrinking_below_minimum_cancels_everything() {
        let mut debouncer = SuggestionDebouncer::default();

        debouncer.on_query_change("ha");
        assert_eq!(debouncer.on_query_change("h"), Debounce::Cleared);
        assert_eq!(debouncer.timer_elapsed(), None);

        debouncer.on_query_change("ha");
        let (ticket, _) = debouncer.timer_elapsed().unwrap();
        debouncer.cancel();
        assert!(!debouncer.complete(ticket));
    }

    #[test]
    fn query_text_is_kept_verbatim() {
        let mut debouncer = SuggestionDebouncer::default();
        debouncer.on_query_change("  dune ");
        assert_eq!(debouncer.timer_elapsed(), Some((1, "  dune ".to_string())));
    }
}

//! Small client-side utilities shared by list/search views.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Delay applied to search-as-you-type inputs before a request is fired.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Monotonic ticket issuer enforcing "last request wins" for views that fire
/// a request per keystroke.
///
/// Responses arriving for a superseded ticket are discarded, so two searches
/// resolving out of order can never leave stale rows on screen. Single
/// threaded by construction (one per view, browser event loop).
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier tickets.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` is still the newest request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Suspend the calling task for `ms` milliseconds.
#[cfg(not(feature = "ssr"))]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(feature = "ssr")]
pub async fn sleep_ms(_ms: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let sequence = RequestSequence::new();

        let first = sequence.begin();
        let second = sequence.begin();

        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn test_tickets_are_monotonic() {
        let sequence = RequestSequence::new();
        let a = sequence.begin();
        let b = sequence.begin();
        let c = sequence.begin();

        assert!(a < b && b < c);
        assert!(sequence.is_current(c));
    }

    #[test]
    fn test_clones_share_the_same_sequence() {
        let sequence = RequestSequence::new();
        let handle = sequence.clone();

        let stale = sequence.begin();
        let fresh = handle.begin();

        assert!(!sequence.is_current(stale));
        assert!(sequence.is_current(fresh));
        assert!(handle.is_current(fresh));
    }
}

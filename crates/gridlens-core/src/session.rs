//! Session-wide card state.
//!
//! Every estimation card shares one [`SessionState`]: the running count of
//! collapse/expand toggles and whether the feedback survey has been shown.
//! The handle is cheap to clone and is provided once through the app context.

use std::sync::Arc;

use parking_lot::Mutex;

/// Counters driving the feedback survey gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedbackState {
    /// Toggles across all cards this session; never decreases
    pub collapsed_count: u32,
    /// Set once the survey has been shown; never cleared
    pub has_been_seen_before: bool,
    /// Whether a survey prompt is currently on screen
    pub is_visible: bool,
}

/// Shared, mutex-guarded session state.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    inner: Arc<Mutex<FeedbackState>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> FeedbackState {
        *self.inner.lock()
    }

    pub fn collapsed_count(&self) -> u32 {
        self.inner.lock().collapsed_count
    }

    /// Counts one collapse or expand action and returns the new total.
    pub fn record_toggle(&self) -> u32 {
        let mut state = self.inner.lock();
        state.collapsed_count = state.collapsed_count.saturating_add(1);
        state.collapsed_count
    }

    pub fn has_been_seen(&self) -> bool {
        self.inner.lock().has_been_seen_before
    }

    /// Marks the survey as seen for the rest of the session.
    pub fn mark_seen(&self) {
        let mut state = self.inner.lock();
        if !state.has_been_seen_before {
            tracing::debug!("Estimation feedback marked as seen");
        }
        state.has_been_seen_before = true;
    }

    pub fn set_visible(&self, visible: bool) {
        self.inner.lock().is_visible = visible;
    }
}

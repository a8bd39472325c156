//! Analytics collaborator.
//!
//! Events are fire-and-forget: tracking never fails from the caller's view.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Sink for UI analytics events.
pub trait Analytics: Send + Sync {
    fn track(&self, event: &str, props: &BTreeMap<String, String>);
}

/// Emits events as structured `tracing` records.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn track(&self, event: &str, props: &BTreeMap<String, String>) {
        tracing::info!(target: "gridlens::analytics", event, ?props, "track");
    }
}

/// A recorded analytics event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedEvent {
    pub name: String,
    pub props: BTreeMap<String, String>,
}

/// Keeps events in memory; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct MemoryAnalytics {
    events: Arc<Mutex<Vec<TrackedEvent>>>,
}

impl MemoryAnalytics {
    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events.lock().iter().filter(|e| e.name == name).count()
    }
}

impl Analytics for MemoryAnalytics {
    fn track(&self, event: &str, props: &BTreeMap<String, String>) {
        self.events.lock().push(TrackedEvent {
            name: event.to_string(),
            props: props.clone(),
        });
    }
}

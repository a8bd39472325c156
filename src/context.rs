//! Service and session context for GridLens.
//!
//! Collaborators (translation, flags, analytics, feedback submission) and the
//! shared estimation-card session are provided once by `App` and read by every
//! widget via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let services = use_services();
//! let session = use_session();
//! let title = services.t("legends.carbonintensity");
//! ```

use std::sync::Arc;

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::tao::window::Window;
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;
use gridlens_core::{
    Analytics, AppConfig, FeatureFlags, FeedbackSubmitter, SessionState, StaticTranslator,
    Translator, ZoneSnapshot,
};

/// Collaborators shared by every widget.
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub translator: Arc<StaticTranslator>,
    pub flags: Arc<dyn FeatureFlags>,
    pub analytics: Arc<dyn Analytics>,
    pub submitter: Arc<dyn FeedbackSubmitter>,
    /// Use dark-theme assets
    pub dark: bool,
}

impl AppServices {
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }
}

/// Session state plus a reactive revision so cards re-render when another
/// card changes the shared counters.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: Signal<SessionState>,
    revision: Signal<u64>,
}

impl SessionHandle {
    pub fn new(state: Signal<SessionState>, revision: Signal<u64>) -> Self {
        Self { state, revision }
    }

    /// Current state handle without subscribing.
    pub fn state(&self) -> SessionState {
        self.state.peek().clone()
    }

    /// Reads the revision, subscribing the caller to session changes.
    pub fn revision(&self) -> u64 {
        (self.revision)()
    }

    /// Notifies subscribed cards that the session changed.
    pub fn bump(&mut self) {
        let next = self.revision.peek().wrapping_add(1);
        self.revision.set(next);
    }
}

/// Hook to access the app services from context.
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Hook to access the estimation-card session from context.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Hook to access the loaded zone snapshots.
pub fn use_zones() -> Arc<Vec<ZoneSnapshot>> {
    use_context::<Arc<Vec<ZoneSnapshot>>>()
}

/// Hook reporting whether the window is narrower than the configured mobile
/// breakpoint. Re-renders the caller when a resize crosses it.
pub fn use_is_mobile() -> bool {
    let services = use_services();
    let window = use_window();
    let initial = window.clone();
    let mut width = use_signal(move || logical_width(&initial.window));

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(_),
            ..
        } = event
        {
            let current = logical_width(&window.window);
            if *width.peek() != current {
                width.set(current);
            }
        }
    });

    services.config.is_mobile_width(width())
}

fn logical_width(window: &Window) -> f64 {
    window.inner_size().to_logical::<f64>(window.scale_factor()).width
}

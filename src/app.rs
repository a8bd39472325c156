use std::sync::Arc;

use dioxus::prelude::*;
use gridlens_core::SessionState;

use crate::context::SessionHandle;
use crate::pages::{ZonePanel, ZoneView};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Zone panel for the first loaded zone
/// - `/zones/:zone` - Zone panel for a specific zone
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    ZonePanel {},
    #[route("/zones/:zone")]
    ZoneView { zone: String },
}

/// Root application component.
///
/// Provides global styles, services, the card session and routing.
#[component]
pub fn App() -> Element {
    let services = crate::services();
    let zones = crate::zones();

    // One session per app run, shared by every estimation card.
    let session = use_signal(SessionState::new);
    let revision = use_signal(|| 0u64);

    use_context_provider(|| services);
    use_context_provider(|| Arc::new(zones));
    use_context_provider(|| SessionHandle::new(session, revision));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

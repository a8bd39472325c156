//! Per-card expand/collapse state.

use std::collections::BTreeMap;

use crate::analytics::Analytics;
use crate::session::SessionState;

use super::CardRenderSpec;

pub const EXPANDED_EVENT: &str = "EstimationCard Expanded";
pub const METHODOLOGY_LINK_EVENT: &str = "EstimationCard Methodology Link Clicked";

/// Collapse toggle for one mounted card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollapseController {
    is_collapsed: bool,
    card_tag: &'static str,
}

impl CollapseController {
    /// Starts in the variant's default state.
    pub fn new(spec: &CardRenderSpec) -> Self {
        Self {
            is_collapsed: spec.is_collapsed_default(),
            card_tag: spec.card_tag(),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    pub fn card_tag(&self) -> &'static str {
        self.card_tag
    }

    /// Flips the state, counts the toggle in the session and reports expansions.
    pub fn toggle(&mut self, session: &SessionState, analytics: &dyn Analytics) -> bool {
        if self.is_collapsed {
            analytics.track(EXPANDED_EVENT, &self.event_props());
        }
        session.record_toggle();
        self.is_collapsed = !self.is_collapsed;
        self.is_collapsed
    }

    /// Reports a methodology link click; collapse state is untouched.
    pub fn methodology_link_clicked(&self, analytics: &dyn Analytics) {
        analytics.track(METHODOLOGY_LINK_EVENT, &self.event_props());
    }

    fn event_props(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("cardType".to_string(), self.card_tag.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MemoryAnalytics;
    use crate::estimation::{CardRenderSpec, ZoneMessage};

    #[test]
    fn outage_starts_expanded() {
        let spec = CardRenderSpec::Outage {
            zone_message: Some(ZoneMessage::new("down")),
        };
        assert!(!CollapseController::new(&spec).is_collapsed());
        assert!(CollapseController::new(&CardRenderSpec::EstimatedTsa).is_collapsed());
    }

    #[test]
    fn expand_tracks_collapse_does_not() {
        let analytics = MemoryAnalytics::default();
        let session = SessionState::new();
        let mut controller = CollapseController::new(&CardRenderSpec::Aggregated {
            estimated_percentage: None,
        });

        assert!(!controller.toggle(&session, &analytics));
        assert_eq!(analytics.count(EXPANDED_EVENT), 1);
        assert!(controller.toggle(&session, &analytics));
        assert_eq!(analytics.count(EXPANDED_EVENT), 1);
        assert_eq!(session.collapsed_count(), 2);

        let events = analytics.events();
        assert_eq!(events[0].props["cardType"], "aggregated-card");
    }

    #[test]
    fn methodology_click_keeps_state() {
        let analytics = MemoryAnalytics::default();
        let controller = CollapseController::new(&CardRenderSpec::EstimatedTsa);
        controller.methodology_link_clicked(&analytics);
        assert!(controller.is_collapsed());
        assert_eq!(analytics.count(METHODOLOGY_LINK_EVENT), 1);
        assert_eq!(analytics.count(EXPANDED_EVENT), 0);
    }
}

//! End-to-end estimation card scenarios
//!
//! Drives the resolver, collapse controller, feedback gate and message
//! formatter together the way a mounted card does.

use gridlens_core::analytics::MemoryAnalytics;
use gridlens_core::estimation::collapse::{EXPANDED_EVENT, METHODOLOGY_LINK_EVENT};
use gridlens_core::estimation::message::{DEFAULT_ISSUE_BASE_URL, OUTAGE_MESSAGE_MAX_LEN};
use gridlens_core::estimation::{
    format_zone_message, resolve, CardText, CardType, CollapseController, EstimationMethod,
    FeedbackGate, ThresholdPolicy, TitleColor, ZoneMessage, FEEDBACK_FLAG,
};
use gridlens_core::{SessionState, StaticFlags, StaticTranslator, Translator};

fn outage_text(spec: &gridlens_core::CardRenderSpec) -> Option<gridlens_core::estimation::FormattedZoneMessage> {
    format_zone_message(spec.zone_message(), OUTAGE_MESSAGE_MAX_LEN, DEFAULT_ISSUE_BASE_URL)
}

#[test]
fn aggregated_with_percentage() {
    let t = StaticTranslator::english();
    let spec = resolve(Some(CardType::Aggregated), None, Some(42.0), None, &t).unwrap();

    assert!(spec.show_badge());
    assert_eq!(spec.title_color(), TitleColor::Black);
    assert_eq!(spec.title_color().class(), "text-black dark:text-white");
    assert!(!spec.show_methodology_link());

    let text = CardText::for_spec(&spec, &t);
    assert_eq!(text.pill, "42% estimated");
}

#[test]
fn outage_threshold_filtered_uses_translated_body() {
    let t = StaticTranslator::english();
    let spec = resolve(
        Some(CardType::Outage),
        Some(EstimationMethod::ThresholdFiltered),
        None,
        Some(ZoneMessage::new("caller message").with_issue("99")),
        &t,
    )
    .unwrap();

    let formatted = outage_text(&spec).unwrap();
    assert_eq!(formatted.text, t.t("estimation-card.threshold_filtered.body"));
    assert_ne!(formatted.text, "caller message");
    assert_eq!(formatted.issue_url, None);
}

#[test]
fn long_outage_message_is_truncated_and_linked() {
    let t = StaticTranslator::english();
    let spec = resolve(
        Some(CardType::Outage),
        None,
        None,
        Some(ZoneMessage::new("A".repeat(400)).with_issue("123")),
        &t,
    )
    .unwrap();

    let formatted = outage_text(&spec).unwrap();
    assert_eq!(formatted.text.chars().count(), 303);
    assert!(formatted.text.ends_with("..."));
    assert!(formatted.text.starts_with(&"A".repeat(300)));
    assert!(formatted.issue_url.unwrap().ends_with("/issues/123"));
}

#[test]
fn none_issue_has_no_link() {
    let t = StaticTranslator::english();
    let spec = resolve(
        Some(CardType::Outage),
        None,
        None,
        Some(ZoneMessage::new("ok").with_issue("None")),
        &t,
    )
    .unwrap();

    let formatted = outage_text(&spec).unwrap();
    assert_eq!(formatted.text, "ok");
    assert_eq!(formatted.issue_url, None);
}

#[test]
fn tsa_card_session_flow() {
    let t = StaticTranslator::english();
    let analytics = MemoryAnalytics::default();
    let flags = StaticFlags::from_iter([(FEEDBACK_FLAG, true)]);
    let session = SessionState::new();
    let gate = FeedbackGate::new(ThresholdPolicy { threshold: 2 });

    let spec = resolve(
        Some(CardType::Estimated),
        Some(EstimationMethod::Tsa),
        None,
        None,
        &t,
    )
    .unwrap();
    assert!(spec.accepts_feedback_prompt());

    let mut controller = CollapseController::new(&spec);
    assert!(controller.is_collapsed());
    assert!(!gate.evaluate(&flags, &session, false));

    controller.toggle(&session, &analytics);
    controller.methodology_link_clicked(&analytics);
    assert!(!controller.is_collapsed());
    assert!(!gate.evaluate(&flags, &session, false));

    controller.toggle(&session, &analytics);
    let visible = gate.evaluate(&flags, &session, false);
    assert!(visible);
    assert!(session.has_been_seen());

    assert_eq!(analytics.count(EXPANDED_EVENT), 1);
    assert_eq!(analytics.count(METHODOLOGY_LINK_EVENT), 1);

    // A second card in the same session never shows the survey again.
    let mut other = CollapseController::new(&spec);
    for _ in 0..4 {
        other.toggle(&session, &analytics);
    }
    assert!(!gate.evaluate(&flags, &session, false));
    assert_eq!(session.collapsed_count(), 6);
}

#[test]
fn card_text_falls_back_for_generic_estimates() {
    let t = StaticTranslator::english();
    let spec = resolve(Some(CardType::Estimated), None, None, None, &t).unwrap();
    let text = CardText::for_spec(&spec, &t);
    assert_eq!(text.title, t.t("estimation-card.estimated_general.title"));
    assert_eq!(text.pill, t.t("estimation-card.estimated_general.pill"));
}

//! Estimation Card Component
//!
//! Explains why a zone's data is estimated. The variant (outage, aggregated,
//! preliminary, estimated) is resolved in core; this component wires the
//! collapse toggle, the methodology link and the feedback survey.

use dioxus::prelude::*;
use gridlens_core::estimation::{
    resolve, CardRenderSpec, CardText, CardType, CollapseController, EstimationMethod,
    FeedbackGate, ThresholdPolicy, ZoneMessage,
};
use gridlens_core::Translator;
use gridlens_ui::{Accordion, Badge};

use super::{FeedbackCard, ZoneMessageBlock};
use crate::context::{use_services, use_session};

/// Estimation card for a zone
///
/// Unknown `card_type` strings render nothing.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     EstimationCard {
///         card_type: "aggregated".to_string(),
///         estimated_percentage: Some(42.0),
///     }
/// }
/// ```
#[component]
pub fn EstimationCard(
    card_type: String,
    #[props(default)] estimation_method: Option<EstimationMethod>,
    #[props(default)] estimated_percentage: Option<f64>,
    #[props(default)] zone_message: Option<ZoneMessage>,
) -> Element {
    let services = use_services();
    let mut session = use_session();
    let mut is_feedback_visible = use_signal(|| false);

    let spec = resolve(
        CardType::parse(&card_type),
        estimation_method,
        estimated_percentage,
        zone_message,
        services.translator.as_ref(),
    );

    let gate_services = services.clone();
    let gate_card = spec.clone();
    use_effect(move || {
        // Subscribe to toggles and seen-flag changes from any card.
        let _ = session.revision();
        let Some(card) = gate_card.as_ref() else {
            return;
        };
        let state = session.state();
        let was_seen = state.has_been_seen();
        let gate = FeedbackGate::new(ThresholdPolicy {
            threshold: gate_services.config.feedback_threshold,
        });
        let visible = gate.evaluate_for_card(
            card,
            gate_services.flags.as_ref(),
            &state,
            *is_feedback_visible.peek(),
        );
        if visible != *is_feedback_visible.peek() {
            is_feedback_visible.set(visible);
        }
        if !was_seen && state.has_been_seen() {
            session.bump();
        }
    });

    let Some(spec) = spec else {
        tracing::warn!(card_type = %card_type, "Unknown estimation card type, rendering nothing");
        return rsx! {};
    };

    let show_feedback = spec.accepts_feedback_prompt() && is_feedback_visible();
    let reference = spec
        .estimation_method()
        .map(|m| m.to_string())
        .unwrap_or_default();
    let t = services.translator.clone();

    rsx! {
        div { class: "estimation-card-container",
            BaseCard { spec: spec.clone() }
            if show_feedback {
                FeedbackCard {
                    survey_reference: reference,
                    primary_question: t.t("feedback-card.estimations.primary-question"),
                    secondary_question_high: t.t("feedback-card.estimations.secondary-question"),
                    secondary_question_low: t.t("feedback-card.estimations.secondary-question"),
                    subtitle: t.t("feedback-card.estimations.subtitle"),
                }
            }
        }
    }
}

/// Shared card layout parameterized by the resolved variant
#[component]
fn BaseCard(spec: CardRenderSpec) -> Element {
    let services = use_services();
    let mut session = use_session();
    let initial = spec.clone();
    let mut controller = use_signal(move || CollapseController::new(&initial));

    let text = CardText::for_spec(&spec, services.translator.as_ref());
    let dark = services.dark;
    let icon = spec.icon().asset(dark);
    let title_class = spec.title_color().class().to_string();
    let container_class = if matches!(spec, CardRenderSpec::Outage { .. }) {
        "estimation-card estimation-card--outage"
    } else {
        "estimation-card"
    };

    let badge = if spec.show_badge() {
        rsx! {
            Badge {
                pill_text: text.pill.clone(),
                pill_type: spec.pill_type().unwrap_or_default(),
                icon: spec.icon_pill().map(|i| i.asset(dark).to_string()),
            }
        }
    } else {
        rsx! {}
    };

    let toggle_services = services.clone();
    let on_toggle = move |_| {
        let state = session.state();
        let collapsed = controller
            .write()
            .toggle(&state, toggle_services.analytics.as_ref());
        tracing::debug!(card = controller.peek().card_tag(), collapsed, "Estimation card toggled");
        session.bump();
    };

    let link_services = services.clone();
    let on_methodology_click = move |_| {
        controller
            .read()
            .methodology_link_clicked(link_services.analytics.as_ref());
    };

    let is_outage = matches!(spec, CardRenderSpec::Outage { .. });
    let zone_message = spec.zone_message().cloned();
    let methodology_url = services.config.methodology_url.clone();
    let link_label = services.t("estimation-card.link");

    rsx! {
        div { class: "{container_class}",
            Accordion {
                title: text.title.clone(),
                is_collapsed: controller.read().is_collapsed(),
                on_toggle: on_toggle,
                class: title_class,
                icon: rsx! {
                    div { class: "card-icon", style: "background-image: url({icon})" }
                },
                badge: badge,
                div { class: "estimation-card__body",
                    div { class: "estimation-card__text", "data-test-id": "body-text",
                        if is_outage {
                            ZoneMessageBlock { zone_message: zone_message }
                        } else {
                            "{text.body}"
                        }
                    }
                    if spec.show_methodology_link() {
                        a {
                            class: "estimation-card__link",
                            href: "{methodology_url}",
                            target: "_blank",
                            rel: "noreferrer",
                            "data-test-id": "methodology-link",
                            onclick: on_methodology_click,
                            span { "{link_label}" }
                        }
                    }
                }
            }
        }
    }
}

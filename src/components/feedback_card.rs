//! Feedback Card Component
//!
//! Short survey asking whether the estimation explanation was useful.
//! Responses are submitted fire-and-forget; the card only shows a thank-you.

use dioxus::prelude::*;
use gridlens_core::estimation::SurveyState;
use gridlens_core::SurveyResponse;
use gridlens_ui::{Button, ButtonVariant, CloseButton};

use crate::context::use_services;

#[component]
pub fn FeedbackCard(
    /// Estimation method the survey refers to
    survey_reference: String,
    primary_question: String,
    /// Follow-up question after a high score
    secondary_question_high: String,
    /// Follow-up question after a low score
    secondary_question_low: String,
    subtitle: String,
) -> Element {
    let services = use_services();
    let mut survey = use_signal(SurveyState::default);
    let mut comment = use_signal(String::new);

    let state = survey();
    if matches!(state, SurveyState::Dismissed) {
        return rsx! {};
    }

    let thank_you = services.t("feedback-card.thank-you");
    let placeholder = services.t("feedback-card.placeholder");
    let submit_label = services.t("feedback-card.submit");
    let scale_low = services.t("feedback-card.not-useful");
    let scale_high = services.t("feedback-card.very-useful");
    let submitter = services.submitter.clone();

    let on_submit = move |_| {
        let (next, score) = survey.peek().submit();
        if let Some(score) = score {
            submitter.submit(SurveyResponse {
                score,
                feedback: comment.peek().clone(),
                reference: survey_reference.clone(),
            });
            tracing::info!(score, "Estimation feedback submitted");
        }
        survey.set(next);
    };

    let secondary = if state.is_low_score() {
        secondary_question_low
    } else {
        secondary_question_high
    };
    let selected = match state {
        SurveyState::Commenting { score } => Some(score),
        _ => None,
    };

    rsx! {
        div { class: "feedback-card",
            div { class: "feedback-card__header",
                span { class: "feedback-card__subtitle", "{subtitle}" }
                CloseButton {
                    onclick: move |_| {
                        let next = survey.peek().dismiss();
                        survey.set(next);
                    }
                }
            }
            if state.is_open() {
                p { class: "feedback-card__question", "{primary_question}" }
                div { class: "feedback-card__scores", role: "radiogroup",
                    for score in SurveyState::MIN_SCORE..=SurveyState::MAX_SCORE {
                        Button {
                            variant: if selected == Some(score) { ButtonVariant::ScoreSelected } else { ButtonVariant::Score },
                            onclick: move |_| {
                                let next = survey.peek().score(score);
                                survey.set(next);
                            },
                            "{score}"
                        }
                    }
                }
                div { class: "feedback-card__scale",
                    span { "{scale_low}" }
                    span { "{scale_high}" }
                }
                if selected.is_some() {
                    p { class: "feedback-card__question", "{secondary}" }
                    textarea {
                        class: "feedback-card__input",
                        placeholder: "{placeholder}",
                        value: "{comment}",
                        oninput: move |e| comment.set(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: on_submit,
                        "{submit_label}"
                    }
                }
            } else {
                p { class: "feedback-card__thanks", "{thank_you}" }
            }
        }
    }
}

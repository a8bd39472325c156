//! Feedback survey gating.
//!
//! The survey attached to preliminary-estimate cards is shown at most once per
//! session. [`FeedbackGate`] checks the feature flag and then asks a
//! [`FeedbackPolicy`] whether the prompt should be on screen.

use crate::flags::FeatureFlags;
use crate::session::SessionState;

use super::{CardRenderSpec, FEEDBACK_FLAG};

/// Decides whether the survey prompt is visible.
///
/// `mark_seen` must be called when the prompt is shown for the first time.
pub trait FeedbackPolicy: Send + Sync {
    fn should_show(
        &self,
        collapsed_count: u32,
        currently_visible: bool,
        has_been_seen_before: bool,
        mark_seen: &mut dyn FnMut(),
    ) -> bool;
}

/// Shows the prompt once, after a number of card toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdPolicy {
    pub threshold: u32,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self { threshold: 3 }
    }
}

impl FeedbackPolicy for ThresholdPolicy {
    fn should_show(
        &self,
        collapsed_count: u32,
        currently_visible: bool,
        has_been_seen_before: bool,
        mark_seen: &mut dyn FnMut(),
    ) -> bool {
        if currently_visible {
            return true;
        }
        if has_been_seen_before || collapsed_count < self.threshold {
            return false;
        }
        mark_seen();
        true
    }
}

/// Flag check plus policy, evaluated against the shared session.
pub struct FeedbackGate<P: FeedbackPolicy = ThresholdPolicy> {
    policy: P,
}

impl<P: FeedbackPolicy> FeedbackGate<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Recomputes prompt visibility; call whenever the flag, the toggle count
    /// or the seen flag changes.
    pub fn evaluate(
        &self,
        flags: &dyn FeatureFlags,
        session: &SessionState,
        currently_visible: bool,
    ) -> bool {
        if !flags.is_enabled(FEEDBACK_FLAG) {
            session.set_visible(false);
            return false;
        }

        let state = session.snapshot();
        let visible = self.policy.should_show(
            state.collapsed_count,
            currently_visible,
            state.has_been_seen_before,
            &mut || session.mark_seen(),
        );
        session.set_visible(visible);
        visible
    }

    /// Like [`FeedbackGate::evaluate`], but only cards that carry the survey
    /// consult the policy. Other cards leave the session untouched, so they
    /// cannot use up the one-time prompt.
    pub fn evaluate_for_card(
        &self,
        card: &CardRenderSpec,
        flags: &dyn FeatureFlags,
        session: &SessionState,
        currently_visible: bool,
    ) -> bool {
        if !card.accepts_feedback_prompt() {
            return false;
        }
        self.evaluate(flags, session, currently_visible)
    }
}

impl Default for FeedbackGate<ThresholdPolicy> {
    fn default() -> Self {
        Self::new(ThresholdPolicy::default())
    }
}

/// Progress through the survey card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SurveyState {
    /// Waiting for a 1-5 score
    #[default]
    Scoring,
    /// Score given; optional free-text comment being written
    Commenting { score: u8 },
    Submitted,
    Dismissed,
}

impl SurveyState {
    pub const MIN_SCORE: u8 = 1;
    pub const MAX_SCORE: u8 = 5;

    /// Records a score; out-of-range scores and finished surveys are ignored.
    pub fn score(&self, score: u8) -> Self {
        match self {
            SurveyState::Scoring | SurveyState::Commenting { .. }
                if (Self::MIN_SCORE..=Self::MAX_SCORE).contains(&score) =>
            {
                SurveyState::Commenting { score }
            }
            other => other.clone(),
        }
    }

    /// Finishes the survey; returns the score to submit, if any.
    pub fn submit(&self) -> (Self, Option<u8>) {
        match self {
            SurveyState::Commenting { score } => (SurveyState::Submitted, Some(*score)),
            other => (other.clone(), None),
        }
    }

    pub fn dismiss(&self) -> Self {
        match self {
            SurveyState::Submitted => SurveyState::Submitted,
            _ => SurveyState::Dismissed,
        }
    }

    /// Low scores get the follow-up question phrased for improvements.
    pub fn is_low_score(&self) -> bool {
        matches!(self, SurveyState::Commenting { score } if *score <= 3)
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self,
            SurveyState::Scoring | SurveyState::Commenting { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::StaticFlags;

    fn flags_on() -> StaticFlags {
        StaticFlags::from_iter([(FEEDBACK_FLAG, true)])
    }

    #[test]
    fn disabled_flag_hides_prompt() {
        let gate = FeedbackGate::new(ThresholdPolicy::default());
        let session = SessionState::new();
        for _ in 0..10 {
            session.record_toggle();
        }
        assert!(!gate.evaluate(&StaticFlags::default(), &session, false));
        assert!(!session.has_been_seen());
    }

    #[test]
    fn shows_after_threshold_and_marks_seen() {
        let gate = FeedbackGate::new(ThresholdPolicy::default());
        let session = SessionState::new();
        let flags = flags_on();

        assert!(!gate.evaluate(&flags, &session, false));
        session.record_toggle();
        session.record_toggle();
        assert!(!gate.evaluate(&flags, &session, false));
        session.record_toggle();
        assert!(gate.evaluate(&flags, &session, false));
        assert!(session.has_been_seen());
        assert!(session.snapshot().is_visible);
    }

    #[test]
    fn never_reshows_once_seen() {
        let gate = FeedbackGate::new(ThresholdPolicy::default());
        let session = SessionState::new();
        let flags = flags_on();
        for _ in 0..3 {
            session.record_toggle();
        }
        assert!(gate.evaluate(&flags, &session, false));

        // Another card mounts later in the session.
        for _ in 0..20 {
            session.record_toggle();
        }
        assert!(!gate.evaluate(&flags, &session, false));
    }

    #[test]
    fn visible_prompt_stays_visible() {
        let gate = FeedbackGate::new(ThresholdPolicy::default());
        let session = SessionState::new();
        session.mark_seen();
        assert!(gate.evaluate(&flags_on(), &session, true));
    }

    #[test]
    fn custom_policy_is_used() {
        struct Never;
        impl FeedbackPolicy for Never {
            fn should_show(&self, _: u32, _: bool, _: bool, _: &mut dyn FnMut()) -> bool {
                false
            }
        }
        let gate = FeedbackGate::new(Never);
        let session = SessionState::new();
        for _ in 0..5 {
            session.record_toggle();
        }
        assert!(!gate.evaluate(&flags_on(), &session, false));
        assert!(!session.has_been_seen());
    }

    #[test]
    fn cards_without_survey_leave_session_untouched() {
        let gate = FeedbackGate::new(ThresholdPolicy::default());
        let session = SessionState::new();
        let flags = flags_on();
        for _ in 0..5 {
            session.record_toggle();
        }

        let others = [
            CardRenderSpec::Outage { zone_message: None },
            CardRenderSpec::Aggregated {
                estimated_percentage: Some(40.0),
            },
            CardRenderSpec::Estimated {
                estimation_method: None,
            },
        ];
        for card in &others {
            assert!(!gate.evaluate_for_card(card, &flags, &session, false));
        }
        assert!(!session.has_been_seen());

        assert!(gate.evaluate_for_card(&CardRenderSpec::EstimatedTsa, &flags, &session, false));
        assert!(session.has_been_seen());
    }

    #[test]
    fn survey_flow() {
        let state = SurveyState::default();
        assert!(state.is_open());
        let state = state.score(9);
        assert_eq!(state, SurveyState::Scoring);
        let state = state.score(2);
        assert!(state.is_low_score());
        let state = state.score(5);
        assert!(!state.is_low_score());
        let (state, score) = state.submit();
        assert_eq!(state, SurveyState::Submitted);
        assert_eq!(score, Some(5));
        assert_eq!(state.dismiss(), SurveyState::Submitted);
    }

    #[test]
    fn submit_without_score_does_nothing() {
        let (state, score) = SurveyState::Scoring.submit();
        assert_eq!(state, SurveyState::Scoring);
        assert_eq!(score, None);
        assert_eq!(state.dismiss(), SurveyState::Dismissed);
        assert!(!SurveyState::Dismissed.is_open());
    }
}

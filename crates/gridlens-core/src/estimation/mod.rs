//! Estimation card model.
//!
//! Decides which card variant explains a data gap and what each variant needs:
//! icon, pill, title color, methodology link, default collapse state.
//!
//! ## Variants
//!
//! ```text
//! CardType::Outage                      -> CardRenderSpec::Outage
//! CardType::Aggregated                  -> CardRenderSpec::Aggregated
//! CardType::Estimated + Tsa             -> CardRenderSpec::EstimatedTsa
//! CardType::Estimated + anything else   -> CardRenderSpec::Estimated
//! unknown card type                     -> None
//! ```

pub mod collapse;
pub mod feedback;
pub mod message;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;

pub use collapse::CollapseController;
pub use feedback::{FeedbackGate, FeedbackPolicy, SurveyState, ThresholdPolicy};
pub use message::{format_zone_message, issue_link, truncate, FormattedZoneMessage};

/// Feature flag that enables the estimation feedback survey.
pub const FEEDBACK_FLAG: &str = "feedback-estimation-labels";

/// Technique used to fill a gap in real-time electricity data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EstimationMethod {
    /// Time-slicer average, shown as "preliminary" data
    Tsa,
    ThresholdFiltered,
    Outage,
    Aggregated,
    ConstructBreakdown,
    ReconstructBreakdown,
    EstimatedModeBreakdown,
    /// Any method without dedicated copy
    Other(String),
}

impl EstimationMethod {
    /// Wire name as it appears in zone data.
    pub fn as_str(&self) -> &str {
        match self {
            EstimationMethod::Tsa => "ESTIMATED_TIME_SLICER_AVERAGE",
            EstimationMethod::ThresholdFiltered => "threshold_filtered",
            EstimationMethod::Outage => "outage",
            EstimationMethod::Aggregated => "aggregated",
            EstimationMethod::ConstructBreakdown => "CONSTRUCT_BREAKDOWN",
            EstimationMethod::ReconstructBreakdown => "ESTIMATED_RECONSTRUCT_BREAKDOWN",
            EstimationMethod::EstimatedModeBreakdown => "ESTIMATED_MODE_BREAKDOWN",
            EstimationMethod::Other(name) => name,
        }
    }

    /// Segment used in translation keys (`estimation-card.<segment>.<field>`).
    pub fn translation_segment(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl FromStr for EstimationMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ESTIMATED_TIME_SLICER_AVERAGE" | "tsa" => EstimationMethod::Tsa,
            "threshold_filtered" => EstimationMethod::ThresholdFiltered,
            "outage" => EstimationMethod::Outage,
            "aggregated" => EstimationMethod::Aggregated,
            "CONSTRUCT_BREAKDOWN" => EstimationMethod::ConstructBreakdown,
            "ESTIMATED_RECONSTRUCT_BREAKDOWN" => EstimationMethod::ReconstructBreakdown,
            "ESTIMATED_MODE_BREAKDOWN" => EstimationMethod::EstimatedModeBreakdown,
            other => EstimationMethod::Other(other.to_string()),
        })
    }
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EstimationMethod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EstimationMethod {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|never| match never {}))
    }
}

/// Top-level dispatch key chosen by the parent view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Outage,
    Aggregated,
    Estimated,
}

impl CardType {
    /// Parses a caller-supplied card type; unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "outage" => Some(CardType::Outage),
            "aggregated" => Some(CardType::Aggregated),
            "estimated" => Some(CardType::Estimated),
            _ => None,
        }
    }

    /// Tag attached to analytics events.
    pub fn analytics_tag(&self) -> &'static str {
        match self {
            CardType::Outage => "outage-card",
            CardType::Aggregated => "aggregated-card",
            CardType::Estimated => "estimated-card",
        }
    }
}

/// Operator-supplied outage explanation, optionally linked to an issue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

impl ZoneMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            issue: None,
        }
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Some(issue.into());
        self
    }

    /// Issue id if it is usable; `"None"` and empty strings count as absent.
    pub fn issue_id(&self) -> Option<&str> {
        self.issue
            .as_deref()
            .filter(|issue| !issue.is_empty() && *issue != "None")
    }
}

/// Visual severity of a card's pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PillType {
    #[default]
    Default,
    Warning,
    Success,
}

impl PillType {
    pub fn class(&self) -> &'static str {
        match self {
            PillType::Default => "badge badge--default",
            PillType::Warning => "badge badge--warning",
            PillType::Success => "badge badge--success",
        }
    }
}

/// Icons used in card titles and pills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIcon {
    Estimated,
    Aggregated,
    Preliminary,
    Warning,
}

impl CardIcon {
    /// Asset path for the light or dark theme.
    pub fn asset(&self, dark: bool) -> &'static str {
        match (self, dark) {
            (CardIcon::Estimated, false) => "/images/estimated_light.svg",
            (CardIcon::Estimated, true) => "/images/estimated_dark.svg",
            (CardIcon::Aggregated, false) => "/images/aggregated_light.svg",
            (CardIcon::Aggregated, true) => "/images/aggregated_dark.svg",
            (CardIcon::Preliminary, false) => "/images/preliminary_light.svg",
            (CardIcon::Preliminary, true) => "/images/preliminary_dark.svg",
            (CardIcon::Warning, false) => "/images/warning_light.svg",
            (CardIcon::Warning, true) => "/images/warning_dark.svg",
        }
    }
}

/// Title text color of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleColor {
    Amber,
    Black,
}

impl TitleColor {
    pub fn class(&self) -> &'static str {
        match self {
            TitleColor::Amber => "text-amber-700 dark:text-amber-500",
            TitleColor::Black => "text-black dark:text-white",
        }
    }
}

/// Fully resolved card variant with its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum CardRenderSpec {
    /// Outage card; message already replaced for threshold-filtered data
    Outage { zone_message: Option<ZoneMessage> },
    /// Aggregated card; badge only for a positive percentage
    Aggregated { estimated_percentage: Option<f64> },
    /// Preliminary (time-slicer average) estimate
    EstimatedTsa,
    /// Any other estimation method
    Estimated {
        estimation_method: Option<EstimationMethod>,
    },
}

impl CardRenderSpec {
    pub fn card_type(&self) -> CardType {
        match self {
            CardRenderSpec::Outage { .. } => CardType::Outage,
            CardRenderSpec::Aggregated { .. } => CardType::Aggregated,
            CardRenderSpec::EstimatedTsa | CardRenderSpec::Estimated { .. } => CardType::Estimated,
        }
    }

    /// Analytics tag of the rendered card.
    pub fn card_tag(&self) -> &'static str {
        self.card_type().analytics_tag()
    }

    /// Method the card is rendered with, after variant overrides.
    pub fn estimation_method(&self) -> Option<EstimationMethod> {
        match self {
            CardRenderSpec::Outage { .. } => Some(EstimationMethod::Outage),
            CardRenderSpec::Aggregated { .. } => Some(EstimationMethod::Aggregated),
            CardRenderSpec::EstimatedTsa => Some(EstimationMethod::Tsa),
            CardRenderSpec::Estimated { estimation_method } => estimation_method.clone(),
        }
    }

    pub fn estimated_percentage(&self) -> Option<f64> {
        match self {
            CardRenderSpec::Aggregated {
                estimated_percentage,
            } => *estimated_percentage,
            _ => None,
        }
    }

    pub fn zone_message(&self) -> Option<&ZoneMessage> {
        match self {
            CardRenderSpec::Outage { zone_message } => zone_message.as_ref(),
            _ => None,
        }
    }

    pub fn icon(&self) -> CardIcon {
        match self {
            CardRenderSpec::Outage { .. } | CardRenderSpec::Estimated { .. } => CardIcon::Estimated,
            CardRenderSpec::Aggregated { .. } => CardIcon::Aggregated,
            CardRenderSpec::EstimatedTsa => CardIcon::Preliminary,
        }
    }

    pub fn icon_pill(&self) -> Option<CardIcon> {
        match self {
            CardRenderSpec::Outage { .. } => Some(CardIcon::Warning),
            _ => None,
        }
    }

    pub fn pill_type(&self) -> Option<PillType> {
        match self {
            CardRenderSpec::Outage { .. } | CardRenderSpec::Aggregated { .. } => {
                Some(PillType::Warning)
            }
            CardRenderSpec::EstimatedTsa => None,
            CardRenderSpec::Estimated { .. } => Some(PillType::Default),
        }
    }

    pub fn show_methodology_link(&self) -> bool {
        matches!(
            self,
            CardRenderSpec::EstimatedTsa | CardRenderSpec::Estimated { .. }
        )
    }

    pub fn title_color(&self) -> TitleColor {
        match self {
            CardRenderSpec::Aggregated { .. } => TitleColor::Black,
            _ => TitleColor::Amber,
        }
    }

    /// Whether the pill badge is rendered next to the title.
    pub fn show_badge(&self) -> bool {
        match self {
            CardRenderSpec::Aggregated {
                estimated_percentage,
            } => estimated_percentage.is_some_and(|p| p.is_finite() && p > 0.0),
            _ => self.pill_type().is_some(),
        }
    }

    /// Outage cards open expanded; everything else starts collapsed.
    pub fn is_collapsed_default(&self) -> bool {
        !matches!(self, CardRenderSpec::Outage { .. })
    }

    /// Only preliminary estimates may carry the feedback survey.
    pub fn accepts_feedback_prompt(&self) -> bool {
        matches!(self, CardRenderSpec::EstimatedTsa)
    }
}

/// Selects the card variant for the given inputs.
///
/// Returns `None` for an unknown card type; callers render nothing in that case.
pub fn resolve(
    card_type: Option<CardType>,
    estimation_method: Option<EstimationMethod>,
    estimated_percentage: Option<f64>,
    zone_message: Option<ZoneMessage>,
    t: &dyn Translator,
) -> Option<CardRenderSpec> {
    let spec = match card_type? {
        CardType::Outage => {
            let zone_message = if estimation_method == Some(EstimationMethod::ThresholdFiltered) {
                Some(ZoneMessage::new(t.t(&format!(
                    "estimation-card.{}.body",
                    EstimationMethod::ThresholdFiltered.translation_segment()
                ))))
            } else {
                zone_message
            };
            CardRenderSpec::Outage { zone_message }
        }
        CardType::Aggregated => CardRenderSpec::Aggregated {
            estimated_percentage,
        },
        CardType::Estimated => match estimation_method {
            Some(EstimationMethod::Tsa) => CardRenderSpec::EstimatedTsa,
            other => CardRenderSpec::Estimated {
                estimation_method: other,
            },
        },
    };
    Some(spec)
}

/// Text slot of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimationField {
    Title,
    Pill,
    Body,
}

impl EstimationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimationField::Title => "title",
            EstimationField::Pill => "pill",
            EstimationField::Body => "body",
        }
    }
}

/// Looks up card copy for a method, falling back to the general estimate copy.
pub fn estimation_text(
    field: EstimationField,
    estimation_method: Option<&EstimationMethod>,
    estimated_percentage: Option<f64>,
    t: &dyn Translator,
) -> String {
    let positive_percentage = estimated_percentage.filter(|p| p.is_finite() && *p > 0.0);
    let exact = match (estimation_method, positive_percentage) {
        (Some(EstimationMethod::Aggregated), Some(percentage)) => {
            let percentage = format!("{}", percentage.round());
            t.lookup_with(
                &format!("estimation-card.aggregated_estimated.{}", field.as_str()),
                &[("percentage", percentage.as_str())],
            )
        }
        (Some(method), _) => t.lookup(&format!(
            "estimation-card.{}.{}",
            method.translation_segment(),
            field.as_str()
        )),
        (None, _) => None,
    };

    exact.unwrap_or_else(|| t.t(&format!("estimation-card.estimated_general.{}", field.as_str())))
}

/// Title, pill and body copy of a resolved card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardText {
    pub title: String,
    pub pill: String,
    pub body: String,
}

impl CardText {
    pub fn for_spec(spec: &CardRenderSpec, t: &dyn Translator) -> Self {
        let method = spec.estimation_method();
        let percentage = spec.estimated_percentage();
        Self {
            title: estimation_text(EstimationField::Title, method.as_ref(), None, t),
            pill: estimation_text(EstimationField::Pill, method.as_ref(), percentage, t),
            body: estimation_text(EstimationField::Body, method.as_ref(), percentage, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::StaticTranslator;

    fn t() -> StaticTranslator {
        StaticTranslator::english()
    }

    #[test]
    fn outage_forces_outage_method() {
        let spec = resolve(
            Some(CardType::Outage),
            Some(EstimationMethod::Tsa),
            Some(80.0),
            Some(ZoneMessage::new("down")),
            &t(),
        )
        .unwrap();
        assert_eq!(spec.estimation_method(), Some(EstimationMethod::Outage));
        assert_eq!(spec.estimated_percentage(), None);
        assert_eq!(spec.zone_message().unwrap().message, "down");
        assert_eq!(spec.pill_type(), Some(PillType::Warning));
        assert_eq!(spec.icon_pill(), Some(CardIcon::Warning));
        assert!(!spec.show_methodology_link());
        assert_eq!(spec.title_color(), TitleColor::Amber);
        assert!(!spec.is_collapsed_default());
    }

    #[test]
    fn outage_threshold_filtered_synthesizes_message() {
        let translator = t();
        let spec = resolve(
            Some(CardType::Outage),
            Some(EstimationMethod::ThresholdFiltered),
            None,
            Some(ZoneMessage::new("caller text").with_issue("12")),
            &translator,
        )
        .unwrap();
        let message = spec.zone_message().unwrap();
        assert_eq!(
            message.message,
            translator.t("estimation-card.threshold_filtered.body")
        );
        assert_eq!(message.issue, None);
    }

    #[test]
    fn aggregated_ignores_zone_message() {
        let spec = resolve(
            Some(CardType::Aggregated),
            None,
            Some(42.0),
            Some(ZoneMessage::new("ignored")),
            &t(),
        )
        .unwrap();
        assert_eq!(spec.zone_message(), None);
        assert!(spec.show_badge());
        assert_eq!(spec.title_color().class(), "text-black dark:text-white");
        assert!(!spec.show_methodology_link());
        assert_eq!(spec.icon(), CardIcon::Aggregated);
    }

    #[test]
    fn aggregated_badge_hidden_without_percentage() {
        for percentage in [
            None,
            Some(0.0),
            Some(-3.0),
            Some(f64::NAN),
            Some(f64::INFINITY),
            Some(f64::NEG_INFINITY),
        ] {
            let spec = resolve(Some(CardType::Aggregated), None, percentage, None, &t()).unwrap();
            assert!(!spec.show_badge(), "badge shown for {percentage:?}");
        }
    }

    #[test]
    fn estimated_tsa_variant() {
        let spec = resolve(
            Some(CardType::Estimated),
            Some(EstimationMethod::Tsa),
            None,
            None,
            &t(),
        )
        .unwrap();
        assert_eq!(spec, CardRenderSpec::EstimatedTsa);
        assert_eq!(spec.icon(), CardIcon::Preliminary);
        assert_eq!(spec.pill_type(), None);
        assert!(!spec.show_badge());
        assert!(spec.show_methodology_link());
        assert!(spec.accepts_feedback_prompt());
        assert!(spec.is_collapsed_default());
    }

    #[test]
    fn estimated_other_variant() {
        let spec = resolve(
            Some(CardType::Estimated),
            Some(EstimationMethod::ConstructBreakdown),
            None,
            None,
            &t(),
        )
        .unwrap();
        assert_eq!(spec.icon(), CardIcon::Estimated);
        assert_eq!(spec.pill_type(), Some(PillType::Default));
        assert!(spec.show_badge());
        assert!(spec.show_methodology_link());
        assert!(!spec.accepts_feedback_prompt());
        assert_eq!(spec.card_tag(), "estimated-card");
    }

    #[test]
    fn unknown_card_type_renders_nothing() {
        assert_eq!(CardType::parse("mystery"), None);
        assert!(resolve(CardType::parse("mystery"), None, None, None, &t()).is_none());
    }

    #[test]
    fn method_parsing() {
        assert_eq!("tsa".parse::<EstimationMethod>(), Ok(EstimationMethod::Tsa));
        assert_eq!(
            "ESTIMATED_TIME_SLICER_AVERAGE".parse::<EstimationMethod>(),
            Ok(EstimationMethod::Tsa)
        );
        assert_eq!(
            "SOMETHING_NEW".parse::<EstimationMethod>(),
            Ok(EstimationMethod::Other("SOMETHING_NEW".to_string()))
        );
        let json = serde_json::to_string(&EstimationMethod::ThresholdFiltered).unwrap();
        assert_eq!(json, "\"threshold_filtered\"");
    }

    #[test]
    fn issue_id_treats_none_sentinel_as_absent() {
        assert_eq!(ZoneMessage::new("x").with_issue("None").issue_id(), None);
        assert_eq!(ZoneMessage::new("x").with_issue("").issue_id(), None);
        assert_eq!(ZoneMessage::new("x").with_issue("7").issue_id(), Some("7"));
    }

    #[test]
    fn aggregated_pill_interpolates_percentage() {
        let translator = t();
        let text = estimation_text(
            EstimationField::Pill,
            Some(&EstimationMethod::Aggregated),
            Some(42.4),
            &translator,
        );
        assert!(text.contains("42"), "{text}");
    }

    #[test]
    fn infinite_percentage_is_not_interpolated() {
        let translator = t();
        for percentage in [f64::INFINITY, f64::NEG_INFINITY] {
            let text = estimation_text(
                EstimationField::Pill,
                Some(&EstimationMethod::Aggregated),
                Some(percentage),
                &translator,
            );
            assert_eq!(text, translator.t("estimation-card.aggregated.pill"));
        }
    }

    #[test]
    fn unknown_method_falls_back_to_general_copy() {
        let translator = t();
        let text = estimation_text(
            EstimationField::Title,
            Some(&EstimationMethod::Other("NEW_MODEL".to_string())),
            None,
            &translator,
        );
        assert_eq!(text, translator.t("estimation-card.estimated_general.title"));
    }
}

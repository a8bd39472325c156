//! Badge Component
//!
//! Small pill next to a card title showing the estimation status.

use dioxus::prelude::*;
use gridlens_core::PillType;

/// Properties for the Badge component
#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    /// Text inside the pill
    pub pill_text: String,
    /// Severity styling
    #[props(default)]
    pub pill_type: PillType,
    /// Optional leading icon asset
    #[props(default)]
    pub icon: Option<String>,
}

/// Rounded status pill
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Badge {
///         pill_text: "42% estimated".to_string(),
///         pill_type: PillType::Warning,
///     }
/// }
/// ```
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = props.pill_type.class();

    rsx! {
        span {
            class: "{class}",
            "data-test-id": "badge",
            if let Some(icon) = &props.icon {
                img { class: "badge__icon", src: "{icon}", alt: "" }
            }
            span { class: "badge__text", "{props.pill_text}" }
        }
    }
}

//! Tooltip Component
//!
//! Hover/tap tooltip. On narrow layouts the content opens as a full-width
//! overlay with a close button instead of a floating bubble.

use dioxus::prelude::*;

use super::CloseButton;

/// Where the bubble appears relative to its trigger
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TooltipSide {
    Top,
    #[default]
    Bottom,
}

impl TooltipSide {
    pub fn class(&self) -> &'static str {
        match self {
            TooltipSide::Top => "tooltip tooltip--top",
            TooltipSide::Bottom => "tooltip tooltip--bottom",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TooltipProps {
    /// Tooltip text
    pub content: String,
    #[props(default)]
    pub side: TooltipSide,
    /// Render as an overlay instead of a bubble
    #[props(default = false)]
    pub is_mobile: bool,
    /// Trigger element
    pub children: Element,
}

#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let mut open = use_signal(|| false);
    let bubble_class = props.side.class();

    rsx! {
        span {
            class: "tooltip-trigger",
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),
            span { onclick: move |_| open.set(true), {props.children} }
            if open() {
                if props.is_mobile {
                    div { class: "tooltip-overlay",
                        div { class: "tooltip-overlay__content", "{props.content}" }
                        CloseButton { onclick: move |_| open.set(false) }
                    }
                } else {
                    div { class: "{bubble_class}", role: "tooltip", "{props.content}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_classes() {
        assert_eq!(TooltipSide::default(), TooltipSide::Bottom);
        assert_eq!(TooltipSide::Top.class(), "tooltip tooltip--top");
    }
}

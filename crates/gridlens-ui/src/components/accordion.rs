//! Accordion Component
//!
//! Controlled collapsible section. The owner keeps the collapsed flag so that
//! toggles can be counted and reported.

use dioxus::prelude::*;

/// Properties for the Accordion component
#[derive(Clone, PartialEq, Props)]
pub struct AccordionProps {
    /// Header title
    pub title: String,
    /// Whether the body is hidden
    pub is_collapsed: bool,
    /// Called when the header is clicked
    pub on_toggle: EventHandler<()>,
    /// Icon rendered before the title
    pub icon: Element,
    /// Badge rendered after the title; pass an empty `rsx! {}` for none
    pub badge: Element,
    /// Extra classes for the title
    #[props(default)]
    pub class: Option<String>,
    /// Body content
    pub children: Element,
}

#[component]
pub fn Accordion(props: AccordionProps) -> Element {
    let title_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("accordion__title {extra}"),
        _ => "accordion__title".to_string(),
    };
    let chevron = chevron(props.is_collapsed);

    rsx! {
        div { class: "accordion",
            button {
                class: "accordion__header",
                "aria-expanded": if props.is_collapsed { "false" } else { "true" },
                "data-test-id": "collapse-button",
                onclick: move |_| props.on_toggle.call(()),
                {props.icon}
                span { class: "{title_class}", "{props.title}" }
                {props.badge}
                span { class: "accordion__chevron", "{chevron}" }
            }
            if !props.is_collapsed {
                div { class: "accordion__body", {props.children} }
            }
        }
    }
}

/// Chevron glyph for the header.
pub fn chevron(is_collapsed: bool) -> &'static str {
    if is_collapsed {
        "\u{25B8}"
    } else {
        "\u{25BE}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chevron_follows_state() {
        assert_eq!(chevron(true), "\u{25B8}");
        assert_eq!(chevron(false), "\u{25BE}");
    }
}

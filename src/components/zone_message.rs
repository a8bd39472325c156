//! Zone Message Block
//!
//! Operator outage message, shortened to the configured length, with a link
//! to the tracking issue when one is given.

use dioxus::prelude::*;
use gridlens_core::estimation::format_zone_message;
use gridlens_core::ZoneMessage;

use crate::context::use_services;

#[component]
pub fn ZoneMessageBlock(#[props(default)] zone_message: Option<ZoneMessage>) -> Element {
    let services = use_services();
    let Some(formatted) = format_zone_message(
        zone_message.as_ref(),
        services.config.outage_message_max_len,
        &services.config.issue_base_url,
    ) else {
        return rsx! {};
    };
    let details = services.t("estimation-card.outage-details");

    rsx! {
        span { class: "zone-message",
            "{formatted.text} "
            if let Some(url) = formatted.issue_url {
                span { class: "zone-message__issue",
                    a { class: "zone-message__link", href: "{url}", target: "_blank",
                        span { "{details}" }
                    }
                }
            }
        }
    }
}

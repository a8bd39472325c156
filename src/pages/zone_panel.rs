//! Zone panel page.
//!
//! Zone picker on top, then the selected zone's estimation card, data
//! sources and exchange chart, with the CO2 legend at the bottom.

use dioxus::prelude::*;
use gridlens_core::ZoneSnapshot;

use crate::app::Route;
use crate::components::{BarElectricityExchangeChart, Co2Legend, DataSources, EstimationCard};
use crate::context::{use_is_mobile, use_services, use_zones};

const CHART_WIDTH: f64 = 420.0;

/// Default page: the first known zone.
#[component]
pub fn ZonePanel() -> Element {
    let zones = use_zones();
    match zones.first() {
        Some(zone) => rsx! {
            ZoneView { zone: zone.zone_key.clone() }
        },
        None => rsx! {
            main { class: "zone-panel zone-panel--empty", "No zones loaded" }
        },
    }
}

#[component]
pub fn ZoneView(zone: String) -> Element {
    let services = use_services();
    let zones = use_zones();
    let mut hovered = use_signal(|| None::<String>);
    let is_mobile = use_is_mobile();

    let Some(snapshot) = zones.iter().find(|z| z.zone_key == zone).cloned() else {
        tracing::warn!(zone = %zone, "Unknown zone requested");
        return rsx! {
            main { class: "zone-panel zone-panel--empty", "Unknown zone: {zone}" }
        };
    };
    let ZoneSnapshot {
        zone_key,
        card_type,
        estimation_method,
        estimated_percentage,
        zone_message,
        sources,
        emission_factor_sources,
        exchanges,
    } = snapshot;

    let sources_title = services.t("country-panel.source");
    let exchanges_title = services.t("country-panel.exchanges");
    let estimations_title = services.t("country-panel.estimations");
    let hovered_label = hovered().unwrap_or_default();

    rsx! {
        main { class: "zone-panel",
            nav { class: "zone-panel__nav",
                for other in zones.iter() {
                    Link {
                        class: if other.zone_key == zone_key { "zone-tab selected".to_string() } else { "zone-tab".to_string() },
                        to: Route::ZoneView { zone: other.zone_key.clone() },
                        "{other.zone_key}"
                    }
                }
            }
            h1 { class: "zone-panel__title", "{zone_key}" }

            if let Some(card_type) = card_type {
                section { class: "zone-panel__estimations",
                    h2 { "{estimations_title}" }
                    EstimationCard {
                        key: "{zone_key}",
                        card_type: card_type,
                        estimation_method: estimation_method,
                        estimated_percentage: estimated_percentage,
                        zone_message: zone_message,
                    }
                }
            }

            DataSources {
                title: sources_title,
                icon: "\u{1F5C2}".to_string(),
                sources: sources,
                emission_factor_sources: emission_factor_sources,
                is_mobile: is_mobile,
            }

            if !exchanges.is_empty() {
                section { class: "zone-panel__exchanges",
                    h2 { "{exchanges_title}" }
                    BarElectricityExchangeChart {
                        rows: exchanges,
                        width: CHART_WIDTH,
                        graph_unit: "MW".to_string(),
                        on_row_hover: move |zone: String| hovered.set(Some(zone)),
                        on_row_leave: move |_| hovered.set(None),
                    }
                    p { class: "zone-panel__hovered", "{hovered_label}" }
                }
            }

            footer { class: "zone-panel__legend",
                Co2Legend {}
            }
        }
    }
}

//! Data Sources Component
//!
//! Lists the sources behind a chart. Sources with a known or domain-like
//! name become links; emission-factor sources also list the production
//! modes they cover.

use dioxus::prelude::*;
use gridlens_core::sources::{
    default_source_links, extract_link_from_source, production_sources_for,
    show_data_sources, sorted_sources, EmissionFactorSources,
};
use gridlens_ui::Tooltip;

use crate::context::use_services;

#[component]
pub fn DataSources(
    title: String,
    /// Leading icon glyph
    #[props(default)]
    icon: Option<String>,
    sources: Vec<String>,
    #[props(default)] emission_factor_sources: Option<EmissionFactorSources>,
    /// Narrow layout: tooltip opens as an overlay
    #[props(default = false)]
    is_mobile: bool,
) -> Element {
    let services = use_services();

    if !show_data_sources(&sources, emission_factor_sources.as_ref()) {
        return rsx! {};
    }

    let tooltip = services.t("country-panel.emissionFactorDataSourcesTooltip");
    let has_emission_factors = emission_factor_sources.is_some();

    rsx! {
        div { class: "data-sources",
            div { class: "data-sources__header",
                if let Some(icon) = icon {
                    span { class: "data-sources__icon", "{icon}" }
                }
                p { class: "data-sources__title", "{title}" }
                if has_emission_factors {
                    Tooltip { content: tooltip, is_mobile: is_mobile,
                        span { class: "data-sources__info", "\u{24D8}" }
                    }
                }
            }
            div { class: "data-sources__list",
                for source in sorted_sources(&sources) {
                    div { class: "data-sources__item", key: "{source}",
                        Source { source: source.clone() }
                        if has_emission_factors {
                            span { class: "data-sources__modes",
                                for mode in production_sources_for(&source, emission_factor_sources.as_ref()).iter() {
                                    span { class: "production-mode production-mode--{mode}", "{mode}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Source(source: String) -> Element {
    match extract_link_from_source(&source, &default_source_links()) {
        Some(link) => rsx! {
            a { class: "data-sources__link", href: "{link}", target: "_blank", "{source}" }
        },
        None => rsx! {
            span { "{source}" }
        },
    }
}

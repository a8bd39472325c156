//! CO2 Legend Component
//!
//! Carbon intensity label, unit and a horizontal gradient bar with ticks.

use dioxus::prelude::*;
use gridlens_core::color_scale::ColorScale;

use crate::context::use_services;

pub const CO2_UNIT: &str = "gCO\u{2082}eq/kWh";
const TICK_COUNT: usize = 6;

#[component]
pub fn Co2Legend() -> Element {
    let services = use_services();
    let scale = ColorScale::co2();

    rsx! {
        LegendItem { label: services.t("legends.carbonintensity"), unit: CO2_UNIT.to_string(),
            HorizontalColorbar { scale: scale, ticks_count: TICK_COUNT }
        }
    }
}

#[component]
pub fn LegendItem(label: String, unit: String, children: Element) -> Element {
    rsx! {
        div { class: "legend-item",
            p { class: "legend-item__label",
                "{label} "
                span { class: "legend-item__unit", "({unit})" }
            }
            {children}
        }
    }
}

/// Gradient bar through every stop of `scale`, with evenly spaced tick labels
#[component]
pub fn HorizontalColorbar(scale: ColorScale, #[props(default = 6)] ticks_count: usize) -> Element {
    let gradient = scale.css_gradient();
    let ticks: Vec<String> = scale
        .ticks(ticks_count)
        .into_iter()
        .map(|tick| format!("{tick}"))
        .collect();

    rsx! {
        div { class: "colorbar",
            div { class: "colorbar__bar", style: "background: {gradient}" }
            div { class: "colorbar__ticks",
                for tick in ticks {
                    span { class: "colorbar__tick", "{tick}" }
                }
            }
        }
    }
}

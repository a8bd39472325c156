//! Exchange Bar Chart Component
//!
//! One row per neighbouring zone: a faint bar for the interconnector capacity
//! and a colored bar for the current flow, tinted by carbon intensity.

use dioxus::prelude::*;
use gridlens_core::color_scale::ColorScale;
use gridlens_core::exchange::{
    bar_color, bar_extent, chart_height, format_power_tick, ExchangeRow, PowerScale,
    EXCHANGE_PADDING, LABEL_WIDTH, ROW_HEIGHT,
};

use super::co2_legend::HorizontalColorbar;
use crate::context::use_services;

const AXIS_TICKS: usize = 5;
const BAR_HEIGHT: f64 = ROW_HEIGHT - 3.0;

#[component]
pub fn BarElectricityExchangeChart(
    rows: Vec<ExchangeRow>,
    width: f64,
    /// Unit shown next to the capacity legend
    graph_unit: String,
    #[props(default)] on_row_hover: Option<EventHandler<String>>,
    #[props(default)] on_row_leave: Option<EventHandler<()>>,
) -> Element {
    let services = use_services();

    if rows.is_empty() {
        return rsx! {};
    }

    let height = chart_height(rows.len());
    let power_scale = PowerScale::for_rows(&rows, width);
    let co2_scale = ColorScale::co2();
    let capacity_label = services.t("country-panel.graph-legends.exchange-capacity");
    let ticks: Vec<(f64, String)> = power_scale
        .ticks(AXIS_TICKS)
        .into_iter()
        .map(|mw| (LABEL_WIDTH + power_scale.apply(mw), format_power_tick(mw)))
        .collect();

    rsx! {
        div { class: "exchange-chart__legend", "{capacity_label} ({graph_unit})" }
        svg { class: "exchange-chart", width: "{width}", height: "{height}",
            g { class: "exchange-chart__axis",
                for (x, label) in ticks {
                    line { x1: "{x}", x2: "{x}", y1: "0", y2: "{height}", class: "axis-line" }
                    text { x: "{x}", y: "{height}", class: "axis-label", "{label}" }
                }
            }
            g { transform: "translate(0, {EXCHANGE_PADDING})",
                for (index, row) in rows.iter().enumerate() {
                    {
                        let y = index as f64 * ROW_HEIGHT;
                        let (cap_x, cap_w) = bar_extent(&power_scale, row.capacity_range);
                        let (flow_x, flow_w) = bar_extent(&power_scale, (0.0, row.exchange));
                        let cap_x = LABEL_WIDTH + cap_x;
                        let flow_x = LABEL_WIDTH + flow_x;
                        let fill = bar_color(row, &co2_scale).to_string();
                        let zone = row.zone_key.clone();
                        rsx! {
                            g {
                                key: "{row.zone_key}",
                                transform: "translate(0, {y})",
                                onmouseenter: move |_| {
                                    if let Some(handler) = &on_row_hover {
                                        handler.call(zone.clone());
                                    }
                                },
                                onmouseleave: move |_| {
                                    if let Some(handler) = &on_row_leave {
                                        handler.call(());
                                    }
                                },
                                text { x: "0", y: "{BAR_HEIGHT}", class: "exchange-chart__zone", "{row.zone_key}" }
                                rect {
                                    class: "exchange-chart__capacity",
                                    x: "{cap_x}",
                                    width: "{cap_w}",
                                    height: "{BAR_HEIGHT}",
                                }
                                rect {
                                    class: "exchange",
                                    fill: "{fill}",
                                    x: "{flow_x}",
                                    width: "{flow_w}",
                                    height: "{BAR_HEIGHT}",
                                }
                            }
                        }
                    }
                }
            }
        }
        div { class: "exchange-chart__scale",
            HorizontalColorbar { scale: co2_scale.clone(), ticks_count: 6 }
        }
    }
}

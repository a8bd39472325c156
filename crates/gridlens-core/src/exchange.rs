//! Cross-zone exchange bar chart model.
//!
//! Positive exchange is import into the viewed zone, negative is export.

use serde::{Deserialize, Serialize};

use crate::color_scale::{ColorScale, Rgb};

pub const ROW_HEIGHT: f64 = 13.0;
pub const EXCHANGE_PADDING: f64 = 12.0;
pub const LABEL_WIDTH: f64 = 44.0;

/// One neighbouring zone in the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRow {
    pub zone_key: String,
    /// MW, signed
    pub exchange: f64,
    /// Interconnector capacity as `(min, max)` MW
    pub capacity_range: (f64, f64),
    /// Carbon intensity of the exported/imported power
    #[serde(default)]
    pub g_co2eq_per_kwh: Option<f64>,
}

/// Linear mapping from MW to horizontal pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl PowerScale {
    /// Scale whose domain covers every row's exchange and capacity, including zero.
    pub fn for_rows(rows: &[ExchangeRow], width: f64) -> Self {
        let (lo, hi) = rows.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), row| {
            let (cap_lo, cap_hi) = row.capacity_range;
            (
                lo.min(row.exchange).min(cap_lo),
                hi.max(row.exchange).max(cap_hi),
            )
        });
        Self {
            domain: (lo, hi),
            range: (0.0, (width - LABEL_WIDTH).max(0.0)),
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) * (r1 - r0) / (d1 - d0)
    }

    /// Evenly spaced axis values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        match count {
            0 => Vec::new(),
            1 => vec![d0],
            n => (0..n).map(|i| d0 + (d1 - d0) * i as f64 / (n - 1) as f64).collect(),
        }
    }
}

/// Left edge and width of a bar spanning `range`.
pub fn bar_extent(scale: &PowerScale, range: (f64, f64)) -> (f64, f64) {
    let a = scale.apply(range.0);
    let b = scale.apply(range.1);
    (a.min(b), (b - a).abs())
}

/// Pixel height of the chart; zero rows means the chart is not drawn.
pub fn chart_height(row_count: usize) -> f64 {
    if row_count == 0 {
        0.0
    } else {
        row_count as f64 * ROW_HEIGHT + EXCHANGE_PADDING
    }
}

/// Fill color of an exchange bar; unknown intensity is drawn grey.
pub fn bar_color(row: &ExchangeRow, scale: &ColorScale) -> Rgb {
    row.g_co2eq_per_kwh
        .map_or(Rgb(0x99, 0x99, 0x99), |intensity| scale.color(intensity))
}

/// Tick label: whole MW below 1 GW, GW with one decimal above.
pub fn format_power_tick(mw: f64) -> String {
    if mw.abs() >= 1000.0 {
        format!("{:.1} GW", mw / 1000.0)
    } else {
        format!("{mw:.0} MW")
    }
}

//! Linear color scales for the map legend and chart bars.

use std::fmt;

/// An sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Piecewise-linear scale from values to colors, clamped at both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    stops: Vec<(f64, Rgb)>,
}

impl ColorScale {
    /// Builds a scale from `(value, color)` stops; stops are sorted by value.
    /// Returns `None` when no stops are given.
    pub fn new(mut stops: Vec<(f64, Rgb)>) -> Option<Self> {
        stops.retain(|(value, _)| value.is_finite());
        if stops.is_empty() {
            return None;
        }
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Some(Self { stops })
    }

    /// CO2 intensity scale in gCO2eq/kWh.
    pub fn co2() -> Self {
        Self {
            stops: vec![
                (0.0, Rgb(0x2a, 0xa3, 0x64)),
                (150.0, Rgb(0xf5, 0xeb, 0x4d)),
                (600.0, Rgb(0x9e, 0x42, 0x29)),
                (750.0, Rgb(0x38, 0x1d, 0x02)),
                (800.0, Rgb(0x38, 0x1d, 0x02)),
            ],
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        let first = self.stops.first().map_or(0.0, |s| s.0);
        let last = self.stops.last().map_or(0.0, |s| s.0);
        (first, last)
    }

    pub fn color(&self, value: f64) -> Rgb {
        let (first, last) = (self.stops[0], self.stops[self.stops.len() - 1]);
        if value.is_nan() || value <= first.0 {
            return first.1;
        }
        if value >= last.0 {
            return last.1;
        }
        self.stops
            .windows(2)
            .find(|w| value <= w[1].0)
            .map(|w| {
                let span = w[1].0 - w[0].0;
                let t = if span > 0.0 { (value - w[0].0) / span } else { 1.0 };
                w[0].1.lerp(w[1].1, t)
            })
            .unwrap_or(last.1)
    }

    /// `count` evenly spaced values across the domain, ends included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.domain();
        match count {
            0 => Vec::new(),
            1 => vec![lo],
            n => (0..n)
                .map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64)
                .collect(),
        }
    }

    /// CSS `linear-gradient` through every stop.
    pub fn css_gradient(&self) -> String {
        let (lo, hi) = self.domain();
        let width = if hi > lo { hi - lo } else { 1.0 };
        let parts: Vec<String> = self
            .stops
            .iter()
            .map(|(value, color)| format!("{color} {:.1}%", (value - lo) / width * 100.0))
            .collect();
        format!("linear-gradient(to right, {})", parts.join(", "))
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::co2()
    }
}

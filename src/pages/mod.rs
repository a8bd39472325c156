//! Page components for GridLens.

mod zone_panel;

pub use zone_panel::{ZonePanel, ZoneView};

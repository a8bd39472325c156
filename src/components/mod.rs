//! Zone-panel widgets for GridLens.

mod co2_legend;
mod data_sources;
mod estimation_card;
mod exchange_chart;
mod feedback_card;
mod zone_message;

pub use co2_legend::{Co2Legend, HorizontalColorbar, LegendItem};
pub use data_sources::DataSources;
pub use estimation_card::EstimationCard;
pub use exchange_chart::BarElectricityExchangeChart;
pub use feedback_card::FeedbackCard;
pub use zone_message::ZoneMessageBlock;

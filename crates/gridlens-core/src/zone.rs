//! Zone snapshot fed to the zone panel.
//!
//! A snapshot is what the panel knows about one zone at one hour: whether and
//! how its data was estimated, who reported it, and its cross-border flows.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::estimation::{EstimationMethod, ZoneMessage};
use crate::exchange::ExchangeRow;
use crate::sources::EmissionFactorSources;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneSnapshot {
    pub zone_key: String,
    /// `outage`, `aggregated` or `estimated`; absent for measured data
    pub card_type: Option<String>,
    pub estimation_method: Option<EstimationMethod>,
    pub estimated_percentage: Option<f64>,
    pub zone_message: Option<ZoneMessage>,
    pub sources: Vec<String>,
    pub emission_factor_sources: Option<EmissionFactorSources>,
    pub exchanges: Vec<ExchangeRow>,
}

impl ZoneSnapshot {
    pub fn load(path: &Path) -> Result<Vec<Self>> {
        let raw = std::fs::read_to_string(path)?;
        let zones: Vec<Self> = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), count = zones.len(), "Loaded zone snapshots");
        Ok(zones)
    }

    /// Built-in zones covering every card variant.
    pub fn samples() -> Vec<Self> {
        let exchanges = vec![
            ExchangeRow {
                zone_key: "FR".to_string(),
                exchange: 1850.0,
                capacity_range: (-3000.0, 3000.0),
                g_co2eq_per_kwh: Some(32.0),
            },
            ExchangeRow {
                zone_key: "NL".to_string(),
                exchange: -640.0,
                capacity_range: (-2450.0, 2450.0),
                g_co2eq_per_kwh: Some(410.0),
            },
            ExchangeRow {
                zone_key: "PL".to_string(),
                exchange: 320.0,
                capacity_range: (-1500.0, 1500.0),
                g_co2eq_per_kwh: Some(690.0),
            },
        ];

        vec![
            Self {
                zone_key: "DE".to_string(),
                card_type: Some("estimated".to_string()),
                estimation_method: Some(EstimationMethod::Tsa),
                sources: vec!["entsoe.eu".to_string(), "Climatiq".to_string()],
                emission_factor_sources: Some(EmissionFactorSources::from([
                    ("Climatiq".to_string(), vec!["coal".to_string(), "gas".to_string()]),
                ])),
                exchanges,
                ..Self::default()
            },
            Self {
                zone_key: "ES".to_string(),
                card_type: Some("outage".to_string()),
                zone_message: Some(
                    ZoneMessage::new("The data provider for this zone has been unreachable since this morning.")
                        .with_issue("6412"),
                ),
                sources: vec!["ree.es".to_string()],
                ..Self::default()
            },
            Self {
                zone_key: "GB".to_string(),
                card_type: Some("aggregated".to_string()),
                estimation_method: Some(EstimationMethod::Aggregated),
                estimated_percentage: Some(42.0),
                sources: vec!["bmreports.com".to_string()],
                ..Self::default()
            },
            Self {
                zone_key: "IT-NO".to_string(),
                card_type: Some("estimated".to_string()),
                estimation_method: Some(EstimationMethod::ConstructBreakdown),
                sources: vec!["terna.it".to_string()],
                ..Self::default()
            },
        ]
    }
}

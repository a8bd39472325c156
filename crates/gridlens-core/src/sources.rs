//! Data-source disclosure helpers.

use std::collections::{BTreeMap, HashMap};

/// Emission-factor source to the production modes it covers.
pub type EmissionFactorSources = BTreeMap<String, Vec<String>>;

/// Known sources without a URL in their name.
pub fn default_source_links() -> HashMap<String, String> {
    [
        ("Climatiq", "https://www.climatiq.io/"),
        ("IPCC (2014)", "https://www.ipcc.ch/report/ar5/wg3/"),
        ("Ember, Yearly electricity data", "https://ember-climate.org/data-catalogue/yearly-electricity-data/"),
        ("Our World in Data", "https://ourworldindata.org/energy"),
        ("UNECE 2022", "https://unece.org/sustainable-energy/cleaner-electricity-systems/life-cycle-assessment-electricity-generation"),
    ]
    .into_iter()
    .map(|(name, url)| (name.to_string(), url.to_string()))
    .collect()
}

/// The panel renders only with sources or an emission-factor mapping.
pub fn show_data_sources(sources: &[String], emission_factors: Option<&EmissionFactorSources>) -> bool {
    !sources.is_empty() || emission_factors.is_some()
}

pub fn sorted_sources(sources: &[String]) -> Vec<String> {
    let mut sorted = sources.to_vec();
    sorted.sort();
    sorted
}

/// URL for a source: the explicit mapping first, then the source itself when it
/// looks like a domain. Bare domains get an `http://` prefix.
pub fn extract_link_from_source(source: &str, mapping: &HashMap<String, String>) -> Option<String> {
    if let Some(link) = mapping.get(source) {
        return Some(link.clone());
    }
    if !source.contains('.') {
        return None;
    }
    if source.contains("http") {
        return Some(source.to_string());
    }
    Some(format!("http://{source}"))
}

/// Production modes listed next to an emission-factor source.
pub fn production_sources_for<'a>(
    source: &str,
    emission_factors: Option<&'a EmissionFactorSources>,
) -> &'a [String] {
    emission_factors
        .and_then(|map| map.get(source))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gridlens_core::estimation::FEEDBACK_FLAG;
use gridlens_core::{
    AppConfig, HttpFeedbackSubmitter, StaticTranslator, TracingAnalytics, ZoneSnapshot,
};
use tracing_subscriber::EnvFilter;

use crate::context::AppServices;

/// Services built from command line and config, read by `App` on mount
static SERVICES: OnceLock<AppServices> = OnceLock::new();

/// Zones shown in the panel
static ZONES: OnceLock<Vec<ZoneSnapshot>> = OnceLock::new();

/// Get the app services (set from command line or default)
pub fn services() -> AppServices {
    SERVICES
        .get()
        .cloned()
        .unwrap_or_else(|| build_services(AppConfig::default(), false))
}

/// Get the loaded zones (built-in samples when no zone file was given)
pub fn zones() -> Vec<ZoneSnapshot> {
    ZONES.get().cloned().unwrap_or_else(ZoneSnapshot::samples)
}

/// GridLens - zone panel of the electricity map
#[derive(Parser, Debug)]
#[command(name = "gridlens-desktop")]
#[command(about = "GridLens - carbon intensity zone panel")]
struct Args {
    /// Config file (defaults to <config dir>/gridlens/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file with zone snapshots
    #[arg(short, long)]
    zones: Option<PathBuf>,

    /// Locale bundle layered over the built-in English text
    #[arg(short, long)]
    locale_file: Option<PathBuf>,

    /// Override the feedback webhook
    #[arg(long)]
    feedback_endpoint: Option<String>,

    /// Hide the estimation feedback survey
    #[arg(long)]
    no_feedback: bool,

    /// Use dark-theme icons
    #[arg(long)]
    dark: bool,
}

fn build_services(config: AppConfig, dark: bool) -> AppServices {
    let translator = match &config.locale_file {
        Some(path) => StaticTranslator::english_with_overrides(path).unwrap_or_else(|e| {
            tracing::error!("Failed to load locale file {:?}: {}", path, e);
            StaticTranslator::english()
        }),
        None => StaticTranslator::english(),
    };

    let submitter = HttpFeedbackSubmitter::new(config.feedback_endpoint.clone());
    tracing::debug!(
        entries = translator.len(),
        endpoint = submitter.endpoint(),
        "Services ready"
    );

    AppServices {
        translator: Arc::new(translator),
        flags: Arc::new(config.flags()),
        analytics: Arc::new(TracingAnalytics),
        submitter: Arc::new(submitter),
        config,
        dark,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&config_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load config {:?}: {}", config_path, e);
        AppConfig::default()
    });
    if let Some(endpoint) = args.feedback_endpoint {
        config.feedback_endpoint = endpoint;
    }
    if let Some(locale_file) = args.locale_file {
        config.locale_file = Some(locale_file);
    }
    if args.no_feedback {
        config.feature_flags.insert(FEEDBACK_FLAG.to_string(), false);
    }

    let zones = match &args.zones {
        Some(path) => ZoneSnapshot::load(path).unwrap_or_else(|e| {
            tracing::error!("Failed to load zones {:?}: {}", path, e);
            ZoneSnapshot::samples()
        }),
        None => ZoneSnapshot::samples(),
    };

    tracing::info!("Starting GridLens with {} zones, config {:?}", zones.len(), config_path);

    let _ = ZONES.set(zones);
    let _ = SERVICES.set(build_services(config, args.dark));

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("GridLens")
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

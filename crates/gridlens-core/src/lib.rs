//! GridLens Core Library
//!
//! View-model logic for the zone panel of a carbon-intensity electricity map.
//!
//! ## Overview
//!
//! The Dioxus front end stays declarative; every decision it makes lives here:
//!
//! - **Estimation cards**: which of the four card variants to render, whether the
//!   card starts collapsed, when the feedback survey may appear, and how outage
//!   messages are shortened and linked to the issue tracker.
//! - **Legend**: the CO2 intensity color scale and its ticks.
//! - **Data sources**: link extraction and ordering for the disclosure panel.
//! - **Exchange chart**: rows, scale and bar extents for cross-zone flows.
//!
//! Collaborators (translation, feature flags, analytics, feedback submission) are
//! traits so the app can wire real implementations and tests can record calls.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gridlens_core::estimation::{resolve, CardType, EstimationMethod};
//! use gridlens_core::i18n::StaticTranslator;
//!
//! let t = StaticTranslator::english();
//! let spec = resolve(Some(CardType::Aggregated), None, Some(42.0), None, &t);
//! assert!(spec.unwrap().show_badge());
//! ```

pub mod analytics;
pub mod color_scale;
pub mod config;
pub mod error;
pub mod estimation;
pub mod exchange;
pub mod flags;
pub mod i18n;
pub mod session;
pub mod sources;
pub mod submit;
pub mod zone;

// Re-exports
pub use analytics::{Analytics, MemoryAnalytics, TracingAnalytics};
pub use config::AppConfig;
pub use error::{GridLensError, Result};
pub use estimation::{CardRenderSpec, CardType, EstimationMethod, PillType, ZoneMessage};
pub use flags::{FeatureFlags, StaticFlags};
pub use i18n::{StaticTranslator, Translator};
pub use session::{FeedbackState, SessionState};
pub use submit::{FeedbackSubmitter, HttpFeedbackSubmitter, SurveyResponse};
pub use zone::ZoneSnapshot;

//! GridLens UI Components
//!
//! Dioxus primitives shared by the zone-panel widgets: pills, accordions,
//! buttons and tooltips. They carry no domain logic; variants and text come
//! from `gridlens-core`.

pub mod components;

pub use components::*;

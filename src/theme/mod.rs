//! Styling for GridLens.

mod styles;

pub use styles::GLOBAL_STYLES;

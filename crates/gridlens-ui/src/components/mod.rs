//! Reusable UI primitives.

mod accordion;
mod badge;
mod button;
mod tooltip;

pub use accordion::*;
pub use badge::*;
pub use button::*;
pub use tooltip::*;

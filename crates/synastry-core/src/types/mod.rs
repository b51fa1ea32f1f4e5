//! Core domain types for the Synastry state engine.

mod body;
mod chart;
mod state;

pub use body::*;
pub use chart::*;
pub use state::*;

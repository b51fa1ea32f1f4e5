//! Synastry Core Library
//!
//! Shared domain types, error taxonomy, and configuration for the Synastry
//! deterministic state engine.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`NatalChart`, `TransitEvent`, `LatentState`, `StateModel`, etc.)
//! - The central [`CoreError`] type and [`CoreResult<T>`] alias
//! - The aggregated [`Config`] structure with per-subsystem sub-configs
//!
//! The computation engines live in sibling crates (`synastry-astro`,
//! `synastry-fusion`, `synastry-graph`); everything here is plain data with
//! no I/O and no hidden state.
//!
//! # Example
//!
//! ```
//! use synastry_core::types::StateModel;
//!
//! let model = StateModel::default();
//! assert!((model.w_user - 0.60).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{CoreError, CoreResult};

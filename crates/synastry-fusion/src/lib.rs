//! Multi-source signal fusion engine for the Synastry state core.
//!
//! Combines transit-derived timing priors with optional self-report and
//! inferred-context signals into a nine-dimensional latent state with
//! calibrated uncertainty, plus a bounded online weight-adaptation rule
//! triggered when ground truth becomes available.
//!
//! Every function here is a pure transform: no I/O, no shared state, no
//! retries. The per-subject [`StateModel`] is the only entity with
//! cross-call memory, and it travels by value - concurrent callers must
//! serialize fusion and update per subject themselves.
//!
//! # Example
//!
//! ```
//! use synastry_core::types::{CheckIn, StateModel};
//! use synastry_fusion::fuse;
//!
//! let checkin = CheckIn {
//!     stress: Some(40),
//!     ..Default::default()
//! };
//! let state = fuse(Some(&checkin), None, None, &StateModel::default());
//! assert!((state.vector.stress - 0.40).abs() < 1e-12);
//! assert_eq!(state.confidence, 0.80);
//! ```

pub mod engine;
pub mod update;
pub mod weights;

pub use engine::{fuse, UNCERTAINTY_WITHOUT_CHECKIN, UNCERTAINTY_WITH_CHECKIN};
pub use update::update_state_model;
pub use weights::{normalize_weights, DEFAULT_WEIGHTS};

// Re-export core types from synastry-core (do not duplicate)
pub use synastry_core::types::{
    CheckIn, Driver, DriverSource, InferredContext, LatentState, LatentUncertainty, LatentVector,
    ReportSource, StateModel, StatePriors,
};

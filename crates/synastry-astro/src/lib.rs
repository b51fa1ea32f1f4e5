//! Natal/transit computation engine for the Synastry state core.
//!
//! Turns ephemeris positions into natal charts, transit snapshots,
//! transit events, state priors, and multi-day timing windows. Celestial
//! mechanics itself lives behind the [`EphemerisProvider`] boundary; this
//! crate is pure angular arithmetic with well-defined tie-break and
//! rounding rules.
//!
//! # Modules
//!
//! - [`angles`]: longitude normalization, angular difference, aspect strength
//! - [`provider`]: the ephemeris provider trait and its raw types
//! - [`natal`]: natal charts, aspect detection, house systems, content digest
//! - [`transits`]: transit snapshots, events, state priors, timing windows
//! - [`stubs`]: deterministic straight-line ephemeris (test only)
//!
//! # Example
//!
//! ```
//! use synastry_astro::angles::{angular_difference, aspect_strength};
//!
//! let d = angular_difference(359.0, 2.0);
//! assert!((d - 3.0).abs() < 1e-12);
//! assert_eq!(aspect_strength(3.0, 3.0), 0.0);
//! ```

pub mod angles;
pub mod error;
pub mod natal;
pub mod provider;
pub mod transits;

#[cfg(any(test, feature = "test-utils"))]
pub mod stubs;

pub use error::{AstroError, AstroResult};
pub use natal::{compute_natal, detect_aspects, whole_sign_houses};
pub use provider::{EclipticPosition, EphemerisProvider, HouseFrame};
pub use transits::{
    compute_timing_window, compute_transits, detect_transit_events, squash,
    state_priors_from_transits, OrbPolicy, TimingDay, TimingWindow,
};

//! The ephemeris provider boundary.
//!
//! The core does not implement celestial mechanics. It consumes positions
//! and house frames from a provider behind this trait and treats them as a
//! pure function of the inputs: identical inputs must yield identical
//! outputs, or chart digests stop being cache keys.

use chrono::{DateTime, Utc};

use synastry_core::types::Body;

use crate::error::AstroResult;

/// Raw ecliptic position as returned by a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Ecliptic longitude in degrees; the engine normalizes into [0, 360).
    pub longitude: f64,
    /// Angular speed in degrees per day. Negative while retrograde.
    pub speed: f64,
}

/// House cusps and angles for one instant and observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseFrame {
    /// Twelve cusp longitudes, index 0 = house 1.
    pub cusps: [f64; 12],
    pub asc: f64,
    pub mc: f64,
    pub dsc: f64,
    pub ic: f64,
}

/// Source of celestial positions and house frames.
///
/// Implementations must be deterministic for identical inputs. Failures are
/// configuration-class (missing ephemeris data, unknown body) and propagate
/// unretried.
pub trait EphemerisProvider {
    /// Ecliptic longitude and speed for a body at a UTC instant, as seen
    /// from the given observer location.
    fn position(
        &self,
        instant: DateTime<Utc>,
        lat: f64,
        lon: f64,
        body: Body,
    ) -> AstroResult<EclipticPosition>;

    /// Placidus house cusps and chart angles for an instant and location.
    fn houses(&self, instant: DateTime<Utc>, lat: f64, lon: f64) -> AstroResult<HouseFrame>;
}

//! Stub ephemeris for development and testing.
//!
//! Test-only: exports are gated with `#[cfg(any(test, feature = "test-utils"))]`
//! so production code cannot pick up the stub unless the `test-utils`
//! feature is explicitly enabled. For real charts, wire an actual ephemeris
//! backend (e.g. a Swiss Ephemeris binding) behind [`EphemerisProvider`].
//!
//! [`LinearEphemeris`] moves every body on a straight line in longitude:
//! `lon(t) = wrap360(lon_at_epoch + speed_deg_per_day * days_since_epoch)`.
//! Houses come from a fixed Ascendant/Midheaven with equal 30-degree cusps.
//! That is nothing like real celestial mechanics, but it is deterministic,
//! exactly reproducible, and lets tests place bodies at chosen separations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use synastry_core::types::Body;

use crate::angles::wrap360;
use crate::error::{AstroError, AstroResult};
use crate::provider::{EclipticPosition, EphemerisProvider, HouseFrame};

/// Linear motion state for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBodyState {
    pub lon_at_epoch: f64,
    pub speed_deg_per_day: f64,
}

/// Deterministic straight-line ephemeris.
#[derive(Debug, Clone)]
pub struct LinearEphemeris {
    epoch: DateTime<Utc>,
    bodies: BTreeMap<Body, LinearBodyState>,
    asc: f64,
    mc: f64,
}

impl LinearEphemeris {
    /// Create an empty stub anchored at `epoch` with the given chart frame.
    pub fn new(epoch: DateTime<Utc>, asc: f64, mc: f64) -> Self {
        Self {
            epoch,
            bodies: BTreeMap::new(),
            asc: wrap360(asc),
            mc: wrap360(mc),
        }
    }

    /// Place a body at `lon_at_epoch`, moving `speed_deg_per_day`.
    pub fn with_body(mut self, body: Body, lon_at_epoch: f64, speed_deg_per_day: f64) -> Self {
        self.bodies.insert(
            body,
            LinearBodyState {
                lon_at_epoch: wrap360(lon_at_epoch),
                speed_deg_per_day,
            },
        );
        self
    }

    /// Place all ten bodies at the same longitude, stationary.
    ///
    /// Useful for saturating event detection in truncation tests.
    pub fn all_bodies_at(epoch: DateTime<Utc>, longitude: f64, asc: f64, mc: f64) -> Self {
        let mut stub = Self::new(epoch, asc, mc);
        for body in Body::ALL {
            stub = stub.with_body(body, longitude, 0.0);
        }
        stub
    }

    fn days_since_epoch(&self, instant: DateTime<Utc>) -> f64 {
        let delta = instant.signed_duration_since(self.epoch);
        delta.num_milliseconds() as f64 / 86_400_000.0
    }
}

impl EphemerisProvider for LinearEphemeris {
    fn position(
        &self,
        instant: DateTime<Utc>,
        _lat: f64,
        _lon: f64,
        body: Body,
    ) -> AstroResult<EclipticPosition> {
        let state = self
            .bodies
            .get(&body)
            .ok_or(AstroError::UnknownBody { body })?;
        let t = self.days_since_epoch(instant);
        Ok(EclipticPosition {
            longitude: wrap360(state.lon_at_epoch + state.speed_deg_per_day * t),
            speed: state.speed_deg_per_day,
        })
    }

    fn houses(&self, _instant: DateTime<Utc>, _lat: f64, _lon: f64) -> AstroResult<HouseFrame> {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = wrap360(self.asc + i as f64 * 30.0);
        }
        Ok(HouseFrame {
            cusps,
            asc: self.asc,
            mc: self.mc,
            dsc: wrap360(self.asc + 180.0),
            ic: wrap360(self.mc + 180.0),
        })
    }
}

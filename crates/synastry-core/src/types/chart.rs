//! Chart structures: positions, angles, houses, aspects, transit events.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AspectType, Body, ChartAngle, ChartPoint};
use crate::config::{HouseSystem, ZodiacMode};

/// A computed position for one body at one instant.
///
/// Ephemeral - recomputed on every call, never persisted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    /// Ecliptic longitude, normalized into [0, 360).
    pub longitude: f64,
    /// Angular speed in degrees per day. Negative while retrograde.
    pub speed: f64,
    /// Whether the body is in apparent retrograde motion (speed < 0).
    pub retrograde: bool,
}

/// The four chart angles, as longitudes in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub asc: f64,
    pub mc: f64,
    pub dsc: f64,
    pub ic: f64,
}

impl ChartAngles {
    /// Longitude of the given angle.
    pub fn longitude(&self, angle: ChartAngle) -> f64 {
        match angle {
            ChartAngle::Asc => self.asc,
            ChartAngle::Mc => self.mc,
            ChartAngle::Dsc => self.dsc,
            ChartAngle::Ic => self.ic,
        }
    }
}

/// Twelve house cusp longitudes, index 0 = house 1.
pub type HouseCusps = [f64; 12];

/// House cusps per computed system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Houses {
    /// Placidus cusps, from the ephemeris provider's house routine.
    pub placidus: HouseCusps,
    /// Whole-sign cusps, derived from the Ascendant's sign index.
    pub whole_sign: HouseCusps,
}

/// A matched angular relationship between two chart points.
///
/// Only emitted when `orb <= max_orb`; `strength` falls off quadratically
/// from 1 at exact to 0 at the orb boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub point_a: ChartPoint,
    pub point_b: ChartPoint,
    pub aspect: AspectType,
    /// The exact angle of the aspect type, in degrees.
    pub exact_angle_deg: f64,
    /// Observed deviation from the exact angle, in degrees.
    pub orb: f64,
    /// Match strength in [0, 1].
    pub strength: f64,
}

/// The configuration snapshot echoed inside every chart.
///
/// Lets a caller tell at a glance which contract produced the payload, and
/// feeds the content digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub zodiac: ZodiacMode,
    pub house_systems: Vec<HouseSystem>,
    pub aspect_max_orb_deg: f64,
}

/// A natal chart: the fixed snapshot of positions, angles, houses, and
/// aspects at a birth instant and location.
///
/// Immutable once computed. `content_hash` is a deterministic SHA-256 digest
/// of all computation inputs (instant, location, configuration); callers use
/// it for cache keys and dedup - the core itself is stateless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub settings: ChartSettings,
    pub positions: BTreeMap<Body, CelestialPosition>,
    pub angles: ChartAngles,
    pub houses: Houses,
    /// Sorted by descending strength, then ascending orb.
    pub aspects: Vec<AspectMatch>,
    pub content_hash: String,
}

/// Positions of all tracked bodies at a single instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitSnapshot {
    pub as_of: DateTime<Utc>,
    pub positions: BTreeMap<Body, CelestialPosition>,
}

/// Precision tier for a transit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbTier {
    Tight,
    Medium,
}

/// An aspect between a moving transit body and a fixed natal point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEvent {
    pub tier: OrbTier,
    pub transit: Body,
    pub natal: ChartPoint,
    pub aspect: AspectType,
    pub orb: f64,
    pub strength: f64,
}

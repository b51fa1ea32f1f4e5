//! Transit snapshots, transit events, state priors, and timing windows.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use synastry_core::config::AstroConfig;
use synastry_core::types::{
    Body, CelestialPosition, NatalChart, OrbTier, StatePriors, TransitEvent, TransitSnapshot,
};

use crate::angles::{angular_difference, aspect_strength, wrap360};
use crate::error::AstroResult;
use crate::natal::chart_points;
use crate::provider::EphemerisProvider;

use synastry_core::types::AspectType;

/// Positions of all tracked bodies at a single instant.
pub fn compute_transits(
    provider: &dyn EphemerisProvider,
    instant: DateTime<Utc>,
    lat: f64,
    lon: f64,
) -> AstroResult<TransitSnapshot> {
    let mut positions = BTreeMap::new();
    for body in Body::ALL {
        let raw = provider.position(instant, lat, lon, body)?;
        positions.insert(
            body,
            CelestialPosition {
                longitude: wrap360(raw.longitude),
                speed: raw.speed,
                retrograde: raw.speed < 0.0,
            },
        );
    }
    Ok(TransitSnapshot {
        as_of: instant,
        positions,
    })
}

/// Detect aspects between every moving transit body and every fixed natal
/// point (bodies plus angles), within `max_orb`.
///
/// Sorted by descending strength, then ascending orb, like the natal
/// aspect list.
pub fn detect_transit_events(
    natal: &NatalChart,
    snapshot: &TransitSnapshot,
    max_orb: f64,
    tier: OrbTier,
) -> Vec<TransitEvent> {
    let natal_points = chart_points(&natal.positions, &natal.angles);
    let mut events = Vec::new();
    for (transit_body, transit_pos) in &snapshot.positions {
        for (natal_point, natal_lon) in &natal_points {
            let d = angular_difference(transit_pos.longitude, *natal_lon);
            for aspect in AspectType::ALL {
                let orb = (d - aspect.exact_angle()).abs();
                if orb <= max_orb {
                    events.push(TransitEvent {
                        tier,
                        transit: *transit_body,
                        natal: *natal_point,
                        aspect,
                        orb,
                        strength: aspect_strength(orb, max_orb),
                    });
                }
            }
        }
    }
    events.sort_by(|a, b| {
        b.strength
            .total_cmp(&a.strength)
            .then(a.orb.total_cmp(&b.orb))
    });
    events
}

/// Saturating squash: `1 - e^(-max(0, x))`.
///
/// Monotonically increasing from 0, approaching 1. In floating point the
/// result rounds to exactly 1.0 once `e^(-x)` drops below one ulp of 1.0
/// (around x = 36).
#[inline]
pub fn squash(x: f64) -> f64 {
    1.0 - (-x.max(0.0)).exp()
}

/// Reduce transit events into the three state priors.
///
/// A fixed weighted sum per body, not a generic aggregator:
///
/// - Saturn feeds BIS: 0.8x strength on hard aspects, else 0.4x
/// - Mars feeds BAS (0.7/0.4x) and FFFS (0.6/0.2x)
/// - Jupiter feeds BAS at 0.5x on any aspect
/// - Uranus and Pluto feed FFFS (0.4x) and BIS (0.3x) on hard aspects only
///
/// Jupiter not gating on hardness while Uranus/Pluto do is intentional,
/// not a bug.
pub fn state_priors_from_transits(events: &[TransitEvent]) -> StatePriors {
    let mut bis = 0.0;
    let mut bas = 0.0;
    let mut fffs = 0.0;
    for event in events {
        let s = event.strength;
        let hard = event.aspect.is_hard();
        match event.transit {
            Body::Saturn => {
                bis += if hard { 0.8 } else { 0.4 } * s;
            }
            Body::Mars => {
                bas += if hard { 0.7 } else { 0.4 } * s;
                fffs += if hard { 0.6 } else { 0.2 } * s;
            }
            Body::Jupiter => {
                bas += 0.5 * s;
            }
            Body::Uranus | Body::Pluto if hard => {
                fffs += 0.4 * s;
                bis += 0.3 * s;
            }
            _ => {}
        }
    }
    StatePriors {
        bis: squash(bis),
        bas: squash(bas),
        fffs: squash(fffs),
    }
}

/// The orb policy a timing window was computed under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbPolicy {
    pub tight_orb: f64,
    pub medium_orb: f64,
}

/// One day of a timing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingDay {
    pub date: NaiveDate,
    pub priors: StatePriors,
    /// Tight events followed by medium events, truncated to the strongest
    /// cap entries.
    pub events: Vec<TransitEvent>,
}

/// A multi-day transit window against a fixed natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingWindow {
    pub as_of: DateTime<Utc>,
    pub days: Vec<TimingDay>,
    pub policy: OrbPolicy,
}

/// Compute a day-by-day timing window.
///
/// Each day recomputes a full transit snapshot and runs event detection
/// twice - tight orb first, then medium - concatenates in that order, and
/// truncates to the strongest `timing_event_cap` events before reducing to
/// priors. Brute-force by design: there is no incremental shortcut, and the
/// concatenation order and truncation are part of the output contract.
pub fn compute_timing_window(
    provider: &dyn EphemerisProvider,
    config: &AstroConfig,
    natal: &NatalChart,
    lat: f64,
    lon: f64,
    start: DateTime<Utc>,
    days: u32,
) -> AstroResult<TimingWindow> {
    let mut out = Vec::with_capacity(days as usize);
    for i in 0..days {
        let instant = start + Duration::days(i64::from(i));
        let snapshot = compute_transits(provider, instant, lat, lon)?;
        let mut events =
            detect_transit_events(natal, &snapshot, config.timing_orb_tight, OrbTier::Tight);
        events.extend(detect_transit_events(
            natal,
            &snapshot,
            config.timing_orb_medium,
            OrbTier::Medium,
        ));
        events.truncate(config.timing_event_cap);
        let priors = state_priors_from_transits(&events);
        out.push(TimingDay {
            date: instant.date_naive(),
            priors,
            events,
        });
    }
    tracing::debug!(days = out.len(), "timing window computed");
    Ok(TimingWindow {
        as_of: start,
        days: out,
        policy: OrbPolicy {
            tight_orb: config.timing_orb_tight,
            medium_orb: config.timing_orb_medium,
        },
    })
}

//! Natal chart computation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use synastry_core::config::AstroConfig;
use synastry_core::types::{
    AspectMatch, AspectType, Body, CelestialPosition, ChartAngle, ChartAngles, ChartPoint,
    ChartSettings, Houses, NatalChart,
};

use crate::angles::{angular_difference, aspect_strength, sign_index, wrap360};
use crate::error::AstroResult;
use crate::provider::EphemerisProvider;

/// Whole-sign house cusps from the Ascendant's longitude.
///
/// Twelve 30-degree houses starting at 0° of the Ascendant's sign.
pub fn whole_sign_houses(asc_longitude: f64) -> [f64; 12] {
    let h1_cusp = sign_index(asc_longitude) as f64 * 30.0;
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = wrap360(h1_cusp + i as f64 * 30.0);
    }
    cusps
}

/// Detect aspects between every unordered pair of chart points.
///
/// Emits a match per (pair, aspect type) whenever `orb <= max_orb`; the
/// result is sorted by descending strength, then ascending orb.
pub fn detect_aspects(points: &[(ChartPoint, f64)], max_orb: f64) -> Vec<AspectMatch> {
    let mut aspects = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let (point_a, lon_a) = points[i];
            let (point_b, lon_b) = points[j];
            let d = angular_difference(lon_a, lon_b);
            for aspect in AspectType::ALL {
                let orb = (d - aspect.exact_angle()).abs();
                if orb <= max_orb {
                    aspects.push(AspectMatch {
                        point_a,
                        point_b,
                        aspect,
                        exact_angle_deg: aspect.exact_angle(),
                        orb,
                        strength: aspect_strength(orb, max_orb),
                    });
                }
            }
        }
    }
    aspects.sort_by(|a, b| {
        b.strength
            .total_cmp(&a.strength)
            .then(a.orb.total_cmp(&b.orb))
    });
    aspects
}

/// The chart points participating in aspect detection: all tracked bodies
/// plus the four angles, in canonical order.
pub(crate) fn chart_points(
    positions: &BTreeMap<Body, CelestialPosition>,
    angles: &ChartAngles,
) -> Vec<(ChartPoint, f64)> {
    let mut points: Vec<(ChartPoint, f64)> = Body::ALL
        .iter()
        .filter_map(|body| {
            positions
                .get(body)
                .map(|pos| (ChartPoint::Body(*body), pos.longitude))
        })
        .collect();
    for angle in ChartAngle::ALL {
        points.push((ChartPoint::Angle(angle), angles.longitude(angle)));
    }
    points
}

#[derive(Serialize)]
struct DigestInput<'a> {
    instant: String,
    lat: f64,
    lon: f64,
    config: &'a AstroConfig,
}

/// Deterministic SHA-256 digest over all computation inputs.
///
/// Same instant, location, and configuration always hash identically, so
/// callers can use the digest as a cache/dedup key.
fn content_hash(
    instant: DateTime<Utc>,
    lat: f64,
    lon: f64,
    config: &AstroConfig,
) -> AstroResult<String> {
    let input = DigestInput {
        instant: instant.to_rfc3339(),
        lat,
        lon,
        config,
    };
    let bytes = serde_json::to_vec(&input)?;
    let digest = Sha256::digest(&bytes);
    Ok(hex::encode(digest))
}

/// Compute a natal chart for a birth instant and observer location.
///
/// Positions for the ten classical bodies, the four angles, Placidus and
/// whole-sign house cusps, the sorted aspect list, and the input digest.
/// Provider failures propagate as configuration errors; geographic/time
/// range validation is the caller's responsibility.
pub fn compute_natal(
    provider: &dyn EphemerisProvider,
    config: &AstroConfig,
    instant: DateTime<Utc>,
    lat: f64,
    lon: f64,
) -> AstroResult<NatalChart> {
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

    let frame = provider.houses(instant, lat, lon)?;
    let angles = ChartAngles {
        asc: wrap360(frame.asc),
        mc: wrap360(frame.mc),
        dsc: wrap360(frame.dsc),
        ic: wrap360(frame.ic),
    };

    let mut placidus = frame.cusps;
    for cusp in placidus.iter_mut() {
        *cusp = wrap360(*cusp);
    }
    let houses = Houses {
        placidus,
        whole_sign: whole_sign_houses(angles.asc),
    };

    let points = chart_points(&positions, &angles);
    let aspects = detect_aspects(&points, config.aspect_max_orb_deg);
    tracing::debug!(
        aspect_count = aspects.len(),
        max_orb = config.aspect_max_orb_deg,
        "natal chart computed"
    );

    Ok(NatalChart {
        settings: ChartSettings {
            zodiac: config.zodiac,
            house_systems: config.house_systems.clone(),
            aspect_max_orb_deg: config.aspect_max_orb_deg,
        },
        positions,
        angles,
        houses,
        aspects,
        content_hash: content_hash(instant, lat, lon, config)?,
    })
}

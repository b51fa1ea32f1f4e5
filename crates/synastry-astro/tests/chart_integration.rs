//! End-to-end chart and timing-window checks against the stub ephemeris.

use chrono::{DateTime, TimeZone, Utc};

use synastry_astro::stubs::LinearEphemeris;
use synastry_astro::{compute_natal, compute_timing_window, compute_transits};
use synastry_core::config::AstroConfig;
use synastry_core::types::{AspectType, Body, ChartPoint, OrbTier, StatePriors};

fn birth_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap()
}

/// A stub with all ten bodies placed, Sun and Moon at a chosen separation,
/// the rest scattered far from each other.
fn scattered_stub(sun_lon: f64, moon_lon: f64) -> LinearEphemeris {
    LinearEphemeris::new(birth_instant(), 200.0, 110.0)
        .with_body(Body::Sun, sun_lon, 1.0)
        .with_body(Body::Moon, moon_lon, 13.2)
        .with_body(Body::Mercury, 34.0, 1.4)
        .with_body(Body::Venus, 76.0, 1.2)
        .with_body(Body::Mars, 141.0, 0.6)
        .with_body(Body::Jupiter, 217.0, 0.08)
        .with_body(Body::Saturn, 305.0, -0.05)
        .with_body(Body::Uranus, 99.0, 0.04)
        .with_body(Body::Neptune, 173.0, 0.02)
        .with_body(Body::Pluto, 251.0, 0.01)
}

#[test]
fn natal_conjunction_at_orb_boundary_has_zero_strength() {
    let stub = scattered_stub(10.0, 13.0);
    let chart = compute_natal(
        &stub,
        &AstroConfig::default(),
        birth_instant(),
        51.5,
        -0.12,
    )
    .unwrap();

    let sun_moon: Vec<_> = chart
        .aspects
        .iter()
        .filter(|a| {
            (a.point_a, a.point_b) == (ChartPoint::Body(Body::Sun), ChartPoint::Body(Body::Moon))
                || (a.point_b, a.point_a)
                    == (ChartPoint::Body(Body::Sun), ChartPoint::Body(Body::Moon))
        })
        .collect();

    assert_eq!(sun_moon.len(), 1);
    assert_eq!(sun_moon[0].aspect, AspectType::Conjunction);
    assert_eq!(sun_moon[0].orb, 3.0);
    assert_eq!(sun_moon[0].strength, 0.0);
}

#[test]
fn natal_exact_conjunction_has_full_strength_and_sorts_first() {
    let stub = scattered_stub(10.0, 10.0);
    let chart = compute_natal(
        &stub,
        &AstroConfig::default(),
        birth_instant(),
        51.5,
        -0.12,
    )
    .unwrap();

    let top = &chart.aspects[0];
    assert_eq!(top.orb, 0.0);
    assert_eq!(top.strength, 1.0);

    let sun_moon = chart
        .aspects
        .iter()
        .find(|a| {
            a.point_a == ChartPoint::Body(Body::Sun) && a.point_b == ChartPoint::Body(Body::Moon)
        })
        .expect("Sun-Moon conjunction missing");
    assert_eq!(sun_moon.aspect, AspectType::Conjunction);
    assert_eq!(sun_moon.strength, 1.0);
}

#[test]
fn natal_chart_is_reproducible() {
    let stub = scattered_stub(10.0, 13.0);
    let config = AstroConfig::default();
    let a = compute_natal(&stub, &config, birth_instant(), 51.5, -0.12).unwrap();
    let b = compute_natal(&stub, &config, birth_instant(), 51.5, -0.12).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.content_hash, b.content_hash);

    // Different instant, different digest.
    let later = birth_instant() + chrono::Duration::seconds(1);
    let c = compute_natal(&stub, &config, later, 51.5, -0.12).unwrap();
    assert_ne!(a.content_hash, c.content_hash);
}

#[test]
fn natal_marks_retrograde_bodies() {
    let stub = scattered_stub(10.0, 13.0);
    let chart = compute_natal(
        &stub,
        &AstroConfig::default(),
        birth_instant(),
        51.5,
        -0.12,
    )
    .unwrap();
    assert!(chart.positions[&Body::Saturn].retrograde);
    assert!(!chart.positions[&Body::Sun].retrograde);
}

#[test]
fn whole_sign_houses_follow_ascendant_sign() {
    let stub = scattered_stub(10.0, 13.0);
    let chart = compute_natal(
        &stub,
        &AstroConfig::default(),
        birth_instant(),
        51.5,
        -0.12,
    )
    .unwrap();
    // ASC at 200° is 20° Libra; whole-sign house 1 starts at 180°.
    assert_eq!(chart.houses.whole_sign[0], 180.0);
    assert_eq!(chart.houses.whole_sign[1], 210.0);
    // Placidus cusps come straight from the provider frame.
    assert_eq!(chart.houses.placidus[0], 200.0);
}

#[test]
fn timing_window_caps_events_and_keeps_tier_order() {
    // Every body stacked on one longitude saturates event detection.
    let stub = LinearEphemeris::all_bodies_at(birth_instant(), 100.0, 100.0, 190.0);
    let config = AstroConfig::default();
    let natal = compute_natal(&stub, &config, birth_instant(), 51.5, -0.12).unwrap();

    let window =
        compute_timing_window(&stub, &config, &natal, 51.5, -0.12, birth_instant(), 3).unwrap();

    assert_eq!(window.days.len(), 3);
    assert_eq!(window.policy.tight_orb, 1.5);
    assert_eq!(window.policy.medium_orb, 3.0);

    for (i, day) in window.days.iter().enumerate() {
        assert_eq!(
            day.date,
            (birth_instant() + chrono::Duration::days(i as i64)).date_naive()
        );
        // 10 transit bodies against 14 natal points produce far more than
        // 50 candidate events; the cap must hold.
        assert_eq!(day.events.len(), 50);
        // Tight tier alone overflows the cap, so everything retained is tight.
        assert!(day.events.iter().all(|e| e.tier == OrbTier::Tight));
        assert!(day.events.iter().all(|e| e.strength == 1.0));
        // With every candidate at equal strength, the stable sort keeps
        // generation order: Sun, Moon, Mercury, and part of Venus fill the
        // cap. None of the prior-weighted bodies survive truncation, so the
        // priors reduce to exactly zero. Reproducing this is part of the
        // output contract.
        assert_eq!(day.priors, StatePriors::default());
        assert!(day
            .events
            .iter()
            .all(|e| matches!(e.transit, Body::Sun | Body::Moon | Body::Mercury | Body::Venus)));
    }
}

#[test]
fn timing_window_day_zero_self_conjunctions_drive_priors() {
    let stub = scattered_stub(10.0, 13.0);
    let config = AstroConfig::default();
    let natal = compute_natal(&stub, &config, birth_instant(), 51.5, -0.12).unwrap();

    let window =
        compute_timing_window(&stub, &config, &natal, 51.5, -0.12, birth_instant(), 1).unwrap();
    let day = &window.days[0];

    // On day zero every body is conjunct its own natal position, in both
    // the tight and medium tiers (the tiers concatenate, they do not dedup).
    assert!(day.events.iter().any(|e| e.tier == OrbTier::Tight));
    assert!(day.events.iter().any(|e| e.tier == OrbTier::Medium));
    assert!(day.priors.bis > 0.5);
    assert!(day.priors.bas > 0.5);
    assert!(day.priors.fffs > 0.5);
}

#[test]
fn transit_snapshot_moves_with_time() {
    let stub = scattered_stub(10.0, 13.0);
    let day0 = compute_transits(&stub, birth_instant(), 51.5, -0.12).unwrap();
    let day1 = compute_transits(
        &stub,
        birth_instant() + chrono::Duration::days(1),
        51.5,
        -0.12,
    )
    .unwrap();

    let sun0 = day0.positions[&Body::Sun].longitude;
    let sun1 = day1.positions[&Body::Sun].longitude;
    assert!((sun1 - sun0 - 1.0).abs() < 1e-9);
}

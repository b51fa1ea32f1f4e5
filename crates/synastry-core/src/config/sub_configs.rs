//! Per-subsystem configuration types.
//!
//! Each sub-config validates independently and reports a plain-string reason;
//! the aggregated [`Config`](super::Config) wraps those into `CoreError`.

use serde::{Deserialize, Serialize};

/// Zodiac reference frame for ecliptic longitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacMode {
    /// Tropical zodiac - 0° Aries at the vernal equinox.
    #[default]
    Tropical,
    /// Sidereal zodiac - fixed-star referenced (provider applies the ayanamsa).
    Sidereal,
}

/// House division scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Placidus cusps, taken from the ephemeris provider's house routine.
    Placidus,
    /// Whole-sign houses, derived from the Ascendant's sign index.
    WholeSign,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    pub level: String,
    /// Emit structured JSON instead of human-readable lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Natal/transit computation settings.
///
/// The orb thresholds are behavioral contracts: aspect lists, transit events,
/// and derived state priors all change if they move.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AstroConfig {
    /// Zodiac reference frame.
    pub zodiac: ZodiacMode,
    /// House systems computed into every chart.
    pub house_systems: Vec<HouseSystem>,
    /// Maximum orb for natal aspect matching, in degrees.
    pub aspect_max_orb_deg: f64,
    /// Tight orb band for transit events, in degrees.
    pub timing_orb_tight: f64,
    /// Medium orb band for transit events, in degrees.
    pub timing_orb_medium: f64,
    /// Per-day cap on retained transit events in a timing window.
    pub timing_event_cap: usize,
}

impl Default for AstroConfig {
    fn default() -> Self {
        Self {
            zodiac: ZodiacMode::default(),
            house_systems: vec![HouseSystem::Placidus, HouseSystem::WholeSign],
            aspect_max_orb_deg: 3.0,
            timing_orb_tight: 1.5,
            timing_orb_medium: 3.0,
            timing_event_cap: 50,
        }
    }
}

impl AstroConfig {
    /// Validate the configuration, returning an error reason if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.aspect_max_orb_deg > 0.0) {
            return Err(format!(
                "astro.aspect_max_orb_deg must be positive, got {}",
                self.aspect_max_orb_deg
            ));
        }
        if !(self.timing_orb_tight > 0.0) || !(self.timing_orb_medium > 0.0) {
            return Err("astro timing orbs must be positive".to_string());
        }
        if self.timing_orb_tight > self.timing_orb_medium {
            return Err(format!(
                "astro.timing_orb_tight ({}) must not exceed timing_orb_medium ({})",
                self.timing_orb_tight, self.timing_orb_medium
            ));
        }
        if self.timing_event_cap == 0 {
            return Err("astro.timing_event_cap must be greater than 0".to_string());
        }
        if self.house_systems.is_empty() {
            return Err("astro.house_systems must name at least one system".to_string());
        }
        Ok(())
    }
}

/// Signal fusion settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FusionConfig {
    /// Learning rate for the stress bias nudge.
    pub lr_bias: f64,
    /// Learning rate for the timing-weight nudge.
    pub lr_w: f64,
    /// Upper clamp for the timing weight after an online update.
    pub max_timing_weight: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            lr_bias: 0.05,
            lr_w: 0.02,
            max_timing_weight: 0.35,
        }
    }
}

impl FusionConfig {
    /// Validate the configuration, returning an error reason if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.lr_bias) {
            return Err(format!(
                "fusion.lr_bias must be in [0, 1], got {}",
                self.lr_bias
            ));
        }
        if !(0.0..=1.0).contains(&self.lr_w) {
            return Err(format!("fusion.lr_w must be in [0, 1], got {}", self.lr_w));
        }
        // Below 0.05 the clamp range for w_timing collapses.
        if !(0.05..=1.0).contains(&self.max_timing_weight) {
            return Err(format!(
                "fusion.max_timing_weight must be in [0.05, 1], got {}",
                self.max_timing_weight
            ));
        }
        Ok(())
    }
}

/// Relational graph settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphConfig {
    /// Minimum risk for a triangle to be retained.
    pub triangle_risk_threshold: f64,
    /// Maximum number of triangles returned, strongest first.
    pub max_triangles: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            triangle_risk_threshold: 0.4,
            max_triangles: 20,
        }
    }
}

impl GraphConfig {
    /// Validate the configuration, returning an error reason if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.triangle_risk_threshold) {
            return Err(format!(
                "graph.triangle_risk_threshold must be in [0, 1], got {}",
                self.triangle_risk_threshold
            ));
        }
        if self.max_triangles == 0 {
            return Err("graph.max_triangles must be greater than 0".to_string());
        }
        Ok(())
    }
}

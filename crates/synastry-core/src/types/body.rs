//! Celestial bodies, chart angles, and aspect types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The ten classical bodies tracked by the engine.
///
/// The set is fixed: aspect detection, transit events, and the state-prior
/// weighting all assume exactly these bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// All tracked bodies, in canonical order.
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four chart angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChartAngle {
    /// Ascendant - eastern horizon intersection.
    Asc,
    /// Midheaven - upper meridian intersection.
    Mc,
    /// Descendant - opposite the Ascendant.
    Dsc,
    /// Imum Coeli - opposite the Midheaven.
    Ic,
}

impl ChartAngle {
    /// All four angles, in canonical order.
    pub const ALL: [ChartAngle; 4] = [
        ChartAngle::Asc,
        ChartAngle::Mc,
        ChartAngle::Dsc,
        ChartAngle::Ic,
    ];
}

impl fmt::Display for ChartAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartAngle::Asc => "ASC",
            ChartAngle::Mc => "MC",
            ChartAngle::Dsc => "DSC",
            ChartAngle::Ic => "IC",
        };
        f.write_str(s)
    }
}

/// A point participating in aspect detection: a body or a chart angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPoint {
    Body(Body),
    Angle(ChartAngle),
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartPoint::Body(b) => b.fmt(f),
            ChartPoint::Angle(a) => a.fmt(f),
        }
    }
}

/// The five supported aspect types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectType {
    /// All supported aspects, in detection order.
    pub const ALL: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Opposition,
        AspectType::Trine,
        AspectType::Square,
        AspectType::Sextile,
    ];

    /// The exact angle for this aspect, in degrees.
    pub fn exact_angle(&self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Opposition => 180.0,
            AspectType::Trine => 120.0,
            AspectType::Square => 90.0,
            AspectType::Sextile => 60.0,
        }
    }

    /// Whether this is a hard aspect (conjunction, square, opposition).
    ///
    /// Hard aspects carry higher coefficients in the transit-to-prior
    /// reduction, and gate the Uranus/Pluto contributions entirely.
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            AspectType::Conjunction | AspectType::Square | AspectType::Opposition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_canonical_order() {
        assert_eq!(Body::ALL.len(), 10);
        assert_eq!(Body::ALL[0], Body::Sun);
        assert_eq!(Body::ALL[9], Body::Pluto);
    }

    #[test]
    fn test_aspect_exact_angles() {
        assert_eq!(AspectType::Conjunction.exact_angle(), 0.0);
        assert_eq!(AspectType::Opposition.exact_angle(), 180.0);
        assert_eq!(AspectType::Trine.exact_angle(), 120.0);
        assert_eq!(AspectType::Square.exact_angle(), 90.0);
        assert_eq!(AspectType::Sextile.exact_angle(), 60.0);
    }

    #[test]
    fn test_hard_aspects() {
        assert!(AspectType::Conjunction.is_hard());
        assert!(AspectType::Square.is_hard());
        assert!(AspectType::Opposition.is_hard());
        assert!(!AspectType::Trine.is_hard());
        assert!(!AspectType::Sextile.is_hard());
    }

    #[test]
    fn test_point_display() {
        assert_eq!(ChartPoint::Body(Body::Saturn).to_string(), "Saturn");
        assert_eq!(ChartPoint::Angle(ChartAngle::Asc).to_string(), "ASC");
    }
}

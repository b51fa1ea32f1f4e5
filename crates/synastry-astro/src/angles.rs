//! Angular arithmetic on the ecliptic circle.
//!
//! All longitudes live in degrees on [0, 360). These helpers define the
//! numeric contract everything downstream depends on: wrap-around
//! differences never exceed 180 degrees, and aspect strength falls off
//! quadratically to exactly 0 at the orb boundary.

/// Normalize a longitude into [0, 360).
#[inline]
pub fn wrap360(x: f64) -> f64 {
    let r = x % 360.0;
    if r < 0.0 {
        r + 360.0
    } else {
        r
    }
}

/// Minimum angular difference between two longitudes.
///
/// Symmetric in its arguments and always in [0, 180]: the shorter of the
/// direct and wrap-around separations.
#[inline]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let d = (wrap360(a) - wrap360(b)).abs() % 360.0;
    d.min(360.0 - d)
}

/// Aspect strength for an observed orb against a maximum orb.
///
/// Quadratic falloff: exactly 1 at `orb == 0`, exactly 0 at
/// `orb >= max_orb`.
#[inline]
pub fn aspect_strength(orb: f64, max_orb: f64) -> f64 {
    if orb >= max_orb {
        return 0.0;
    }
    let x = orb / max_orb;
    (1.0 - x) * (1.0 - x)
}

/// Zodiac sign index (0 = Aries .. 11 = Pisces) for a longitude.
#[inline]
pub fn sign_index(longitude: f64) -> usize {
    (wrap360(longitude) / 30.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap360_negative_input() {
        assert_eq!(wrap360(-30.0), 330.0);
        assert_eq!(wrap360(-360.0), 0.0);
        assert_eq!(wrap360(725.0), 5.0);
    }

    #[test]
    fn test_angular_difference_symmetry_and_range() {
        // Grid sweep over both arguments.
        let mut a = 0.0;
        while a < 360.0 {
            let mut b = 0.0;
            while b < 360.0 {
                let d_ab = angular_difference(a, b);
                let d_ba = angular_difference(b, a);
                assert!(
                    (d_ab - d_ba).abs() < 1e-12,
                    "asymmetry at a={a}, b={b}: {d_ab} vs {d_ba}"
                );
                assert!((0.0..=180.0).contains(&d_ab), "out of range at a={a}, b={b}");
                b += 7.3;
            }
            a += 7.3;
        }
    }

    #[test]
    fn test_angular_difference_wraps() {
        assert!((angular_difference(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((angular_difference(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((angular_difference(10.0, 350.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_aspect_strength_boundaries() {
        assert_eq!(aspect_strength(0.0, 3.0), 1.0);
        assert_eq!(aspect_strength(3.0, 3.0), 0.0);
        assert_eq!(aspect_strength(4.0, 3.0), 0.0);
    }

    #[test]
    fn test_aspect_strength_quadratic_falloff() {
        // At half orb, strength is (1 - 0.5)^2 = 0.25.
        assert!((aspect_strength(1.5, 3.0) - 0.25).abs() < 1e-12);
        // Monotonically decreasing in orb.
        assert!(aspect_strength(0.5, 3.0) > aspect_strength(1.0, 3.0));
        assert!(aspect_strength(1.0, 3.0) > aspect_strength(2.0, 3.0));
    }

    #[test]
    fn test_sign_index() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.9), 11);
        assert_eq!(sign_index(-10.0), 11);
    }
}

//! Great-circle distance via the haversine formula.
//!
//! Spherical Earth, radius 6371 km. Good to ~0.5% against the ellipsoid,
//! which is plenty for map annotations.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two `(lat, lng)` pairs given
/// in degrees. Symmetric; zero for identical points; never fails for
/// in-range coordinates.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lng1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lng2) = (b.0.to_radians(), b.1.to_radians());

    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let h = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Arithmetic midpoint of two `(lat, lng)` pairs in degrees. Used as the
/// anchor for the distance annotation, matching the straight connector line
/// drawn in plate-carree space.
pub fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LONDON: (f64, f64) = (51.5072, -0.1276);
    const PARIS: (f64, f64) = (48.8566, 2.3522);
    const SYDNEY: (f64, f64) = (-33.8688, 151.2093);

    #[test]
    fn test_london_paris() {
        let d = haversine_km(LONDON, PARIS);
        assert!(d > 343.0 && d < 344.0, "got {:.3} km", d);
    }

    #[test]
    fn test_symmetry() {
        assert_relative_eq!(
            haversine_km(LONDON, SYDNEY),
            haversine_km(SYDNEY, LONDON),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_for_identical_points() {
        assert_eq!(haversine_km(PARIS, PARIS), 0.0);
    }

    #[test]
    fn test_antipodal_near_half_circumference() {
        // Half the circumference of the 6371 km sphere.
        let d = haversine_km((0.0, 0.0), (0.0, 180.0));
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM, epsilon = 1e-6);
    }

    #[test]
    fn test_long_haul_sanity() {
        // London–Sydney is roughly 17,000 km.
        let d = haversine_km(LONDON, SYDNEY);
        assert!(d > 16_800.0 && d < 17_200.0, "got {:.0} km", d);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint((10.0, 20.0), (30.0, -40.0));
        assert_relative_eq!(m.0, 20.0);
        assert_relative_eq!(m.1, -10.0);
    }
}

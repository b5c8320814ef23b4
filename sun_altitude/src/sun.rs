//! Low precision solar coordinates from the mean elements of the orbit.
//! https://en.wikipedia.org/wiki/Position_of_the_Sun

use log::warn;
use serde::{Deserialize, Serialize};
use utilities::{angles, wrap_into};

/// Mean obliquity of the ecliptic at J2000, degrees
pub const AXIAL_TILT: f64 = 23.439;

/// Stepping by 90 degrees lines up within 3 steps. The cap only trips on
/// angles that land exactly on a quadrant edge after rounding.
pub const QUADRANT_STEP_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// Quadrant of the angle after wrapping into [0, 360). NaN lands in the fourth.
    pub fn from_angle(angle: f64) -> Self {
        let angle = wrap_into(0.0, 360.0, angle);
        if angle < 90.0 {
            Quadrant::First
        } else if angle < 180.0 {
            Quadrant::Second
        } else if angle < 270.0 {
            Quadrant::Third
        } else {
            Quadrant::Fourth
        }
    }
}

/// Geocentric ecliptic coordinates of the sun, degrees.
/// Mean longitude and anomaly are not wrapped and grow with time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EclipticCoordinates {
    pub mean_longitude: f64,
    pub mean_anomaly: f64,
    pub longitude: f64,
}

impl EclipticCoordinates {
    /// `jdn` is days since J2000.0
    pub fn from_jdn(jdn: f64) -> Self {
        let mean_longitude = get_mean_longitude(jdn);
        let mean_anomaly = get_mean_anomaly(jdn);
        Self {
            mean_longitude,
            mean_anomaly,
            longitude: get_ecliptic_longitude(mean_longitude, mean_anomaly),
        }
    }
}

/// Geocentric equatorial coordinates of the sun, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EquatorialCoordinates {
    /// In the same quadrant as the ecliptic longitude, not wrapped.
    pub right_ascension: f64,
    pub declination: f64,
}

impl EquatorialCoordinates {
    pub fn from_ecliptic(ecliptic: &EclipticCoordinates, axial_tilt: f64) -> Self {
        Self {
            right_ascension: get_right_ascension(ecliptic.longitude, axial_tilt),
            declination: get_declination(ecliptic.longitude, axial_tilt),
        }
    }
}

pub fn get_mean_longitude(jdn: f64) -> f64 {
    wrap_into(0.0, 360.0, 280.460) + 0.9856474 * jdn
}

pub fn get_mean_anomaly(jdn: f64) -> f64 {
    wrap_into(0.0, 360.0, 357.528) + 0.9856003 * jdn
}

/// Mean longitude plus the equation of center.
pub fn get_ecliptic_longitude(mean_longitude: f64, mean_anomaly: f64) -> f64 {
    mean_longitude + 1.915 * angles::sin(mean_anomaly) + 0.02 * angles::sin(2.0 * mean_anomaly)
}

pub fn get_right_ascension(ecliptic_longitude: f64, axial_tilt: f64) -> f64 {
    let raw = angles::atan(angles::cos(axial_tilt) * angles::tan(ecliptic_longitude));
    correct_quadrant(raw, ecliptic_longitude).0
}

pub fn get_declination(ecliptic_longitude: f64, axial_tilt: f64) -> f64 {
    angles::asin(angles::sin(axial_tilt) * angles::sin(ecliptic_longitude))
}

/// atan only covers (-90, 90), so step the right ascension by 90 degrees
/// toward the ecliptic longitude until both sit in the same quadrant.
/// Returns the corrected angle and the number of steps taken.
pub(crate) fn correct_quadrant(mut right_ascension: f64, ecliptic_longitude: f64) -> (f64, usize) {
    let target = Quadrant::from_angle(ecliptic_longitude);
    let mut steps = 0;
    while Quadrant::from_angle(right_ascension) != target {
        if steps == QUADRANT_STEP_LIMIT {
            warn!(
                "right ascension {} did not reach {:?} of ecliptic longitude {}",
                right_ascension, target, ecliptic_longitude
            );
            break;
        }
        if right_ascension < ecliptic_longitude {
            right_ascension += 90.0;
        } else {
            right_ascension -= 90.0;
        }
        steps += 1;
    }
    (right_ascension, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quadrant_from_angle() {
        assert_eq!(Quadrant::from_angle(0.0), Quadrant::First);
        assert_eq!(Quadrant::from_angle(89.9), Quadrant::First);
        assert_eq!(Quadrant::from_angle(90.0), Quadrant::Second);
        assert_eq!(Quadrant::from_angle(180.0), Quadrant::Third);
        assert_eq!(Quadrant::from_angle(359.9), Quadrant::Fourth);
        assert_eq!(Quadrant::from_angle(-45.0), Quadrant::Fourth);
        assert_eq!(Quadrant::from_angle(9000.5), Quadrant::First);
        assert_eq!(Quadrant::from_angle(f64::NAN), Quadrant::Fourth);
    }

    #[test]
    fn test_quadrant_correction_every_degree() {
        for degree in 0..360 {
            let ecliptic_longitude = degree as f64;
            let raw = angles::atan(angles::cos(AXIAL_TILT) * angles::tan(ecliptic_longitude));
            let (right_ascension, steps) = correct_quadrant(raw, ecliptic_longitude);
            assert!(steps <= 3, "{steps} steps at {ecliptic_longitude}");
            assert_eq!(
                Quadrant::from_angle(right_ascension),
                Quadrant::from_angle(ecliptic_longitude),
                "at {ecliptic_longitude}"
            );
        }
    }

    #[test]
    fn test_quadrant_correction_unwrapped_longitudes() {
        // mean longitude keeps growing, and is negative before J2000
        for turns in [-30.0, -1.0, 25.0] {
            for degree in (0..360).step_by(7) {
                let ecliptic_longitude = degree as f64 + 360.0 * turns;
                let raw = angles::atan(angles::cos(AXIAL_TILT) * angles::tan(ecliptic_longitude));
                let (right_ascension, steps) = correct_quadrant(raw, ecliptic_longitude);
                assert!(steps <= 3, "{steps} steps at {ecliptic_longitude}");
                assert_eq!(
                    Quadrant::from_angle(right_ascension),
                    Quadrant::from_angle(ecliptic_longitude)
                );
            }
        }
    }

    #[test]
    fn test_right_ascension_tracks_longitude() {
        // at the equinoxes and solstices the right ascension equals the longitude
        for longitude in [0.0, 180.0] {
            assert_abs_diff_eq!(
                wrap_into(0.0, 360.0, get_right_ascension(longitude, AXIAL_TILT)),
                longitude,
                epsilon = 1e-9
            );
        }
        assert_abs_diff_eq!(
            wrap_into(0.0, 360.0, get_right_ascension(89.999999, AXIAL_TILT)),
            90.0,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            wrap_into(0.0, 360.0, get_right_ascension(270.000001, AXIAL_TILT)),
            270.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_declination_extremes() {
        assert_abs_diff_eq!(get_declination(90.0, AXIAL_TILT), AXIAL_TILT, epsilon = 1e-9);
        assert_abs_diff_eq!(get_declination(270.0, AXIAL_TILT), -AXIAL_TILT, epsilon = 1e-9);
        assert_abs_diff_eq!(get_declination(0.0, AXIAL_TILT), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ecliptic_at_j2000() {
        let ecliptic = EclipticCoordinates::from_jdn(0.0);
        assert_abs_diff_eq!(ecliptic.mean_longitude, 280.460, epsilon = 1e-12);
        assert_abs_diff_eq!(ecliptic.mean_anomaly, 357.528, epsilon = 1e-12);
        // equation of center is small and negative just before perihelion
        assert_abs_diff_eq!(ecliptic.longitude, 280.3757, epsilon = 1e-3);
    }
}

use serde::{Deserialize, Serialize};
use utilities::{angles, wrap_into};

/// Observer location in decimal degrees, longitude positive east of Greenwich.
/// Ranges are not enforced, out of range values are extrapolated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Local hour angle in degrees, west of the meridian. Not wrapped.
// gst -> local sidereal time by adding the east longitude
pub fn get_hour_angle(greenwich_sidereal_time: f64, longitude: f64, right_ascension: f64) -> f64 {
    wrap_into(0.0, 360.0, greenwich_sidereal_time) + longitude - right_ascension
}

/// Altitude above (+) or below (-) the horizon, degrees. Not clamped.
pub fn get_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    angles::asin(
        angles::sin(latitude) * angles::sin(declination)
            + angles::cos(latitude) * angles::cos(declination) * angles::cos(hour_angle),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hour_angle() {
        assert_abs_diff_eq!(get_hour_angle(370.0, 5.0, 15.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(get_hour_angle(100.0, -75.0, 300.0), -275.0, epsilon = 1e-9);
    }

    #[test]
    fn test_altitude_on_meridian() {
        // on the meridian the altitude is 90 - |latitude - declination|
        assert_abs_diff_eq!(get_altitude(40.0, 10.0, 0.0), 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(get_altitude(-33.0, 23.0, 360.0), 34.0, epsilon = 1e-9);
    }

    #[test]
    fn test_altitude_at_pole_is_declination() {
        for hour_angle in [0.0, 47.0, 180.0, 300.0] {
            assert_abs_diff_eq!(get_altitude(90.0, 12.5, hour_angle), 12.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_altitude_at_six_hours_on_equator() {
        assert_abs_diff_eq!(get_altitude(0.0, 0.0, 90.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(get_altitude(0.0, 0.0, 180.0), -90.0, epsilon = 1e-6);
    }
}

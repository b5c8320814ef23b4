//! Altitude of the Sun above or below the horizon for any time and observer
//! position. Useful for estimating sky brightness around sunrise and sunset.
//!
//! Steps:
//! 1. ecliptic coordinates of the sun from the julian date
//! 2. equatorial coordinates (right ascension, declination)
//! 3. hour angle from greenwich sidereal time and the observer longitude
//! 4. horizontal altitude
//!
//! Typical accuracy is around 0.1 degree. Refraction and parallax are not applied.

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{
    Time,
    julian::{get_jdn, time_to_jd},
    sidereal::get_gst,
};

pub mod horizontal;
pub mod parameters;
pub mod sun;

pub use horizontal::GeoPosition;
pub use parameters::SolarParameters;
pub use sun::{EclipticCoordinates, EquatorialCoordinates, Quadrant};

pub mod prelude {
    pub use crate::{
        GeoPosition, SolarParameters, SolarPosition, SunErrors, altitude, altitude_at,
        solar_position,
    };
    pub use time::Time;
}

#[derive(Debug, Error)]
pub enum SunErrors {
    #[error("RonError: {0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("RonSerializeError: {0}")]
    RonSerializeError(#[from] ron::Error),
}

/// Every intermediate of one altitude evaluation. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SolarPosition {
    pub julian_date: f64,
    pub ecliptic: EclipticCoordinates,
    pub equatorial: EquatorialCoordinates,
    pub greenwich_sidereal_time: f64,
    pub hour_angle: f64,
    pub altitude: f64,
}

/// Altitude of the sun above (+) or below (-) the horizon in degrees.
///
/// Any timezone on `t` is converted away, so `Utc::now()` and `Local::now()`
/// give the same result. Latitude and longitude are decimal degrees,
/// longitude positive east. NaN inputs give NaN.
pub fn altitude(t: impl Into<Time>, latitude: f64, longitude: f64) -> f64 {
    altitude_at(t, &GeoPosition::new(latitude, longitude))
}

pub fn altitude_at(t: impl Into<Time>, observer: &GeoPosition) -> f64 {
    solar_position(t, observer, &SolarParameters::default()).altitude
}

pub fn solar_position(
    t: impl Into<Time>,
    observer: &GeoPosition,
    params: &SolarParameters,
) -> SolarPosition {
    let t = t.into();
    let julian_date = time_to_jd(&t);
    let jdn = get_jdn(julian_date);

    let ecliptic = EclipticCoordinates::from_jdn(jdn);
    let equatorial = EquatorialCoordinates::from_ecliptic(&ecliptic, params.axial_tilt);

    let greenwich_sidereal_time = get_gst(julian_date);
    let hour_angle = horizontal::get_hour_angle(
        greenwich_sidereal_time,
        observer.longitude,
        equatorial.right_ascension,
    );
    let altitude = horizontal::get_altitude(observer.latitude, equatorial.declination, hour_angle);

    let position = SolarPosition {
        julian_date,
        ecliptic,
        equatorial,
        greenwich_sidereal_time,
        hour_angle,
        altitude,
    };
    trace!("{:?} at {:?}: {:?}", t.get_datetime(), observer, position);
    position
}

//! Greenwich mean sidereal time from a UT julian date.
//!
//! https://aa.usno.navy.mil/faq/GAST
//! The T^2 term is dropped, which is well inside 0.1 degrees for modern dates.

use utilities::wrap_into;

use crate::julian::get_jdn;

/// Most recent 0h UT at or before `jd`. Julian dates roll over at noon, so
/// midnights sit on the .5 boundaries.
pub fn get_last_jd_midnight(jd: f64) -> f64 {
    let midnight = jd.floor() + 0.5;
    if jd >= midnight {
        midnight
    } else {
        midnight - 1.0
    }
}

pub fn get_ut_hours(jd: f64, last_jd_midnight: f64) -> f64 {
    24.0 * (jd - last_jd_midnight)
}

/// GMST in hours within [0, 24).
pub fn get_gst_hours(jdn_midnight: f64, ut_hours: f64) -> f64 {
    let gmst = 6.697374558 + 0.06570982441908 * jdn_midnight + 1.00273790935 * ut_hours;
    wrap_into(0.0, 24.0, gmst)
}

/// Greenwich mean sidereal time in degrees.
pub fn get_gst(jd: f64) -> f64 {
    let jdm = get_last_jd_midnight(jd);
    15.0 * get_gst_hours(get_jdn(jdm), get_ut_hours(jd, jdm))
}

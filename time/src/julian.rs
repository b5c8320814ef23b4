//! Gregorian calendar <-> julian date conversions.
//!
//! reference: Meeus, Jean. Astronomical Algorithms, 2nd Edition, 1998. Willmann-Bell, Inc

use utilities::floor_div;

use crate::{JD_J2000, Time};

/// Converts a Gregorian year, month, and fractional day of month to a julian date.
///
/// Negative years are valid back to JD 0. The result is not valid for dates
/// before JD 0. Months outside 1..=12 are not rejected.
pub fn calendar_gregorian_to_jd(year: i32, month: i32, day: f64) -> f64 {
    // shift so the year starts in march and the leap day lands at its end
    let (y, m) = match month {
        1 | 2 => (year - 1, month + 12),
        _ => (year, month),
    };

    // corrections for leap years
    let a = floor_div(y, 100);
    let b = 2 - a + floor_div(a, 4);

    // (7.1) p. 61
    floor_div(36525 * (i64::from(y) + 4716), 100) as f64
        + (floor_div(306 * (m + 1), 10) + b) as f64
        + day
        - 1524.5
}

/// Julian date of the instant, taken in UTC.
pub fn time_to_jd(t: &Time) -> f64 {
    let (year, month, day) = t.calendar_date();
    calendar_gregorian_to_jd(year, month as i32, day)
}

/// Days since the J2000.0 epoch (2000-01-01 12:00 UTC).
pub fn get_jdn(jd: f64) -> f64 {
    jd - JD_J2000
}

/// Inverse of [`calendar_gregorian_to_jd`], always on the proleptic Gregorian
/// calendar. Returns year, month and fractional day of month.
pub fn jd_to_calendar_gregorian(jd: f64) -> (i32, u32, f64) {
    // (7.3) p. 63
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1867216.25) / 36524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

use std::ops::Add;

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod julian;
pub mod sidereal;

pub const JD_J2000: f64 = 2451545.0;
pub const NANOS_PER_DAY: i64 = 86_400_000_000_000;

pub mod prelude {
    pub use crate::julian::{
        calendar_gregorian_to_jd, get_jdn, jd_to_calendar_gregorian, time_to_jd,
    };
    pub use crate::sidereal::get_gst;
    pub use crate::{Time, TimeErrors};
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeErrors {
    #[error("invalid calendar date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("invalid time of day {hour}:{minute}:{second}")]
    InvalidTimeOfDay { hour: u32, minute: u32, second: f64 },
    #[error("julian date {0} has no calendar representation")]
    InvalidJulianDate(f64),
    #[error("cannot offset time by {0} seconds")]
    InvalidOffset(f64),
}

/// An instant held as UTC wall clock time.
///
/// Anything carrying a timezone is converted to the same absolute instant in
/// UTC, so `Utc::now()` and `Local::now()` give the same `Time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct Time {
    utc: NaiveDateTime,
}

impl Time {
    pub fn now() -> Self {
        Self {
            utc: Utc::now().naive_utc(),
        }
    }

    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            utc: dt.naive_utc(),
        }
    }

    /// Takes the wall clock fields as already being UTC.
    pub fn from_naive_utc(utc: NaiveDateTime) -> Self {
        Self { utc }
    }

    pub fn from_ymdhms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeErrors> {
        let sec = second.floor();
        let nano = ((second - sec) * 1e9).round();
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeErrors::InvalidDate { year, month, day })?;
        if !(0.0..60.0).contains(&sec) {
            return Err(TimeErrors::InvalidTimeOfDay {
                hour,
                minute,
                second,
            });
        }
        // nano can round up to a whole second, so it is added rather than set
        let utc = date
            .and_hms_opt(hour, minute, sec as u32)
            .and_then(|t| t.checked_add_signed(TimeDelta::nanoseconds(nano as i64)))
            .ok_or(TimeErrors::InvalidTimeOfDay {
                hour,
                minute,
                second,
            })?;
        Ok(Self { utc })
    }

    /// Builds the instant for a julian date, rounded to the nearest nanosecond.
    pub fn from_jd(jd: f64) -> Result<Self, TimeErrors> {
        if !jd.is_finite() {
            return Err(TimeErrors::InvalidJulianDate(jd));
        }
        let (year, month, day) = julian::jd_to_calendar_gregorian(jd);
        let whole_day = day.floor();
        let nanos = ((day - whole_day) * NANOS_PER_DAY as f64).round() as i64;
        let utc = NaiveDate::from_ymd_opt(year, month, whole_day as u32)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .and_then(|midnight| midnight.checked_add_signed(TimeDelta::nanoseconds(nanos)))
            .ok_or(TimeErrors::InvalidJulianDate(jd))?;
        Ok(Self { utc })
    }

    /// Year, month and day of month, the day carrying the elapsed fraction of
    /// that day.
    pub fn calendar_date(&self) -> (i32, u32, f64) {
        let since_day_zero = i64::from(self.utc.day()) * NANOS_PER_DAY
            + i64::from(self.utc.num_seconds_from_midnight()) * 1_000_000_000
            + i64::from(self.utc.nanosecond());
        (
            self.utc.year(),
            self.utc.month(),
            since_day_zero as f64 / NANOS_PER_DAY as f64,
        )
    }

    pub fn get_jd(&self) -> f64 {
        julian::time_to_jd(self)
    }

    /// Days since J2000.0
    pub fn get_jdn(&self) -> f64 {
        julian::get_jdn(self.get_jd())
    }

    pub fn get_datetime(&self) -> NaiveDateTime {
        self.utc
    }

    /// Offsets by `seconds`, rounded to the nearest nanosecond. Fails on a
    /// non-finite offset or one that leaves the representable date range.
    pub fn checked_add_seconds(&self, seconds: f64) -> Result<Self, TimeErrors> {
        if !seconds.is_finite() {
            return Err(TimeErrors::InvalidOffset(seconds));
        }
        let whole = seconds.trunc();
        if whole.abs() >= i64::MAX as f64 {
            return Err(TimeErrors::InvalidOffset(seconds));
        }
        let nanos = ((seconds - whole) * 1e9).round() as i64;
        let utc = TimeDelta::try_seconds(whole as i64)
            .and_then(|delta| delta.checked_add(&TimeDelta::nanoseconds(nanos)))
            .and_then(|delta| self.utc.checked_add_signed(delta))
            .ok_or(TimeErrors::InvalidOffset(seconds))?;
        Ok(Self { utc })
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Time {
    fn from(dt: DateTime<Tz>) -> Self {
        Time::from_datetime(&dt)
    }
}

impl From<NaiveDateTime> for Time {
    fn from(utc: NaiveDateTime) -> Self {
        Time::from_naive_utc(utc)
    }
}

/// Adds seconds.
///
/// # Panics
///
/// On a non-finite offset or a result outside the representable date range,
/// see [`Time::checked_add_seconds`].
impl Add<f64> for Time {
    type Output = Self;
    fn add(self, rhs: f64) -> Self::Output {
        match self.checked_add_seconds(rhs) {
            Ok(t) => t,
            Err(e) => panic!("{e}"),
        }
    }
}

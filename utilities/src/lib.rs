use num_traits::{PrimInt, Signed};

pub mod angles;

/// Reduces `val` into the half-open cyclic interval `[min, max)`.
///
/// The interval size `max - min` is one cycle, e.g. `[0, 360)` for degrees or
/// `[0, 24)` for hours. Non-finite input returns NaN.
pub fn wrap_into(min: f64, max: f64, val: f64) -> f64 {
    if !val.is_finite() {
        return f64::NAN;
    }
    let cycle = max - min;
    let wrapped = min + (val - min).rem_euclid(cycle);
    // tiny negative offsets can round up onto the open end
    if wrapped >= max {
        wrapped - cycle
    } else {
        wrapped
    }
}

/// Returns the integer floor of the fractional value (x / y).
///
/// Uses integer math only, so there is no precision loss for large values.
/// As with built in integer division, panics when `y` is zero.
pub fn floor_div<T>(x: T, y: T) -> T
where
    T: PrimInt + Signed,
{
    let q = x / y;
    if x.is_negative() != y.is_negative() && x % y != T::zero() {
        q - T::one()
    } else {
        q
    }
}

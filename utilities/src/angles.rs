//! Trigonometry on angles expressed in degrees.

use std::f64::consts::PI;

pub fn to_radians(angle: f64) -> f64 {
    angle * PI / 180.0
}

pub fn to_angle(rad: f64) -> f64 {
    rad * 180.0 / PI
}

pub fn sin(angle: f64) -> f64 {
    to_radians(angle).sin()
}

pub fn cos(angle: f64) -> f64 {
    to_radians(angle).cos()
}

pub fn tan(angle: f64) -> f64 {
    to_radians(angle).tan()
}

/// Returns degrees. Input outside [-1, 1] gives NaN.
pub fn asin(x: f64) -> f64 {
    to_angle(x.asin())
}

/// Returns degrees in (-90, 90).
pub fn atan(x: f64) -> f64 {
    to_angle(x.atan())
}

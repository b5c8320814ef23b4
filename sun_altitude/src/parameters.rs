use ron::ser::{PrettyConfig, to_string_pretty};
use serde::{Deserialize, Serialize};

use crate::SunErrors;
use crate::sun::AXIAL_TILT;

/// Constants of the solar model that callers may override.
///
/// Reads from RON, any missing field takes its default:
/// ```
/// use sun_altitude::SolarParameters;
///
/// let params = SolarParameters::from_ron("(axial_tilt: 23.44)").unwrap();
/// assert_eq!(params.axial_tilt, 23.44);
/// assert_eq!(SolarParameters::from_ron("()").unwrap(), SolarParameters::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SolarParameters {
    /// obliquity of the ecliptic in degrees
    pub axial_tilt: f64,
}

impl Default for SolarParameters {
    fn default() -> Self {
        Self {
            axial_tilt: AXIAL_TILT,
        }
    }
}

impl SolarParameters {
    pub fn new(axial_tilt: f64) -> Self {
        Self { axial_tilt }
    }

    pub fn from_ron(s: &str) -> Result<Self, SunErrors> {
        Ok(ron::from_str(s)?)
    }

    pub fn to_ron(&self) -> Result<String, SunErrors> {
        Ok(to_string_pretty(self, PrettyConfig::new())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tilt() {
        assert_eq!(SolarParameters::default().axial_tilt, 23.439);
    }

    #[test]
    fn test_ron_round_trip() {
        let params = SolarParameters::new(23.4392911);
        let s = params.to_ron().unwrap();
        assert_eq!(SolarParameters::from_ron(&s).unwrap(), params);
    }

    #[test]
    fn test_named_struct() {
        let params = SolarParameters::from_ron("SolarParameters(axial_tilt: 24.0)").unwrap();
        assert_eq!(params.axial_tilt, 24.0);
    }

    #[test]
    fn test_bad_ron() {
        let result = SolarParameters::from_ron("(axial_tilt: \"steep\")");
        assert!(matches!(result, Err(SunErrors::RonError(_))));
    }
}

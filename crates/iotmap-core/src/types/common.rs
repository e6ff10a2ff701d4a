use serde::{Deserialize, Serialize};

/// Geographic location information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Two-letter country code (ISO 3166-1 alpha-2)
    #[serde(default)]
    pub country_code: Option<String>,

    /// Full country name
    #[serde(default)]
    pub country_name: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// Region/state code
    #[serde(default)]
    pub region_code: Option<String>,

    /// Latitude coordinate
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude coordinate
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl GeoLocation {
    /// Returns true if the location has both coordinates.
    ///
    /// A coordinate of exactly `0.0` is present, not missing.
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Returns the coordinates as a (latitude, longitude) pair if available
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Transport protocol for a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// TCP protocol
    Tcp,
    /// UDP protocol
    Udp,
}

impl Default for Transport {
    fn default() -> Self {
        Self::Tcp
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
            Self::Udp => write!(f, "udp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_coordinates_are_present() {
        let loc = GeoLocation {
            latitude: Some(0.0),
            longitude: Some(0.0),
            ..GeoLocation::default()
        };
        assert!(loc.has_coordinates());
        assert_eq!(loc.coordinates(), Some((0.0, 0.0)));
    }

    #[test]
    fn missing_longitude_means_no_coordinates() {
        let loc = GeoLocation {
            latitude: Some(51.5),
            ..GeoLocation::default()
        };
        assert!(!loc.has_coordinates());
        assert_eq!(loc.coordinates(), None);
    }
}

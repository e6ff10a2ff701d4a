use iotmap_core::SearchMatch;

use crate::html::html_escape;

/// Popup line shown for a device without known vulnerabilities
pub const NO_VULNS_LABEL: &str = "No known vulnerabilities.";

/// Icon styling for a map marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Device has at least one known vulnerability
    Alert,
    /// Device has no known vulnerabilities
    Neutral,
}

impl MarkerStyle {
    /// CSS color used for the marker icon
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Alert => "#f87171",
            Self::Neutral => "#60a5fa",
        }
    }
}

/// A single point on the device map with its popup content
#[derive(Debug, Clone)]
pub struct Marker {
    /// Latitude coordinate
    pub lat: f64,

    /// Longitude coordinate
    pub lon: f64,

    /// Popup body as an HTML fragment
    pub popup: String,

    /// Icon style
    pub style: MarkerStyle,
}

impl Marker {
    /// Create a marker from raw parts.
    ///
    /// `popup` is embedded in the document verbatim; escape untrusted text
    /// with the popup builder in [`Marker::from_match`] or by hand.
    #[must_use]
    pub fn new(lat: f64, lon: f64, popup: impl Into<String>, style: MarkerStyle) -> Self {
        Self {
            lat,
            lon,
            popup: popup.into(),
            style,
        }
    }

    /// Derive a marker from a search match.
    ///
    /// Returns `None` when either coordinate is missing. A coordinate of
    /// exactly `0.0` is a position, not an absence.
    #[must_use]
    pub fn from_match(m: &SearchMatch) -> Option<Self> {
        let (lat, lon) = m.location.coordinates()?;

        let vuln_lines = if m.vulns.is_empty() {
            html_escape(NO_VULNS_LABEL)
        } else {
            m.vulns
                .keys()
                .map(|id| html_escape(id))
                .collect::<Vec<_>>()
                .join("<br>")
        };

        let popup = format!(
            "<b>IP Address:</b> {}<br><b>Vulnerabilities:</b><br>{}",
            html_escape(m.ip_display()),
            vuln_lines,
        );

        let style = if m.is_vulnerable() {
            MarkerStyle::Alert
        } else {
            MarkerStyle::Neutral
        };

        Some(Self::new(lat, lon, popup, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotmap_core::{GeoLocation, VulnInfo};

    fn match_at(lat: Option<f64>, lon: Option<f64>) -> SearchMatch {
        SearchMatch {
            ip_str: Some("1.2.3.4".to_string()),
            port: 23,
            location: GeoLocation {
                latitude: lat,
                longitude: lon,
                ..GeoLocation::default()
            },
            ..SearchMatch::default()
        }
    }

    #[test]
    fn missing_latitude_yields_no_marker() {
        assert!(Marker::from_match(&match_at(None, Some(-4.5))).is_none());
    }

    #[test]
    fn missing_longitude_yields_no_marker() {
        assert!(Marker::from_match(&match_at(Some(54.5), None)).is_none());
    }

    #[test]
    fn zero_coordinates_yield_a_marker() {
        let marker = Marker::from_match(&match_at(Some(0.0), Some(0.0))).unwrap();
        assert_eq!(marker.lat, 0.0);
        assert_eq!(marker.lon, 0.0);
    }

    #[test]
    fn clean_device_is_neutral_with_sentinel_popup() {
        let marker = Marker::from_match(&match_at(Some(37.4), Some(-122.1))).unwrap();
        assert_eq!(marker.style, MarkerStyle::Neutral);
        assert!(marker.popup.contains("1.2.3.4"));
        assert!(marker.popup.contains(NO_VULNS_LABEL));
    }

    #[test]
    fn vulnerable_device_is_alert_and_lists_ids_sorted() {
        let mut m = match_at(Some(40.7), Some(-74.0));
        m.vulns
            .insert("CVE-2021-9999".to_string(), VulnInfo::default());
        m.vulns
            .insert("CVE-2014-0160".to_string(), VulnInfo::default());

        let marker = Marker::from_match(&m).unwrap();
        assert_eq!(marker.style, MarkerStyle::Alert);
        assert!(marker.popup.contains("CVE-2014-0160<br>CVE-2021-9999"));
        assert!(!marker.popup.contains(NO_VULNS_LABEL));
    }

    #[test]
    fn absent_ip_uses_placeholder() {
        let mut m = match_at(Some(1.0), Some(2.0));
        m.ip_str = None;
        let marker = Marker::from_match(&m).unwrap();
        assert!(marker.popup.contains("N/A"));
    }

    #[test]
    fn popup_escapes_hostile_identifiers() {
        let mut m = match_at(Some(1.0), Some(2.0));
        m.ip_str = Some("<script>alert('xss')</script>".to_string());
        let marker = Marker::from_match(&m).unwrap();
        assert!(!marker.popup.contains("<script>"));
        assert!(marker.popup.contains("&lt;script&gt;"));
    }
}

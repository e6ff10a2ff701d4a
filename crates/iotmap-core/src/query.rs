use crate::{IotmapError, Result};

/// Country/port filter for a device search.
///
/// Both parts are trimmed on construction and must be non-empty. The
/// [`Display`](std::fmt::Display) implementation renders the combined
/// filter expression sent to the search API, e.g. `country:GB port:23`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFilter {
    country: String,
    port: String,
}

impl DeviceFilter {
    /// Build a filter from a country code and a port number.
    ///
    /// Fails with [`IotmapError::InvalidQuery`] when either value is empty
    /// after trimming surrounding whitespace.
    pub fn new(country: impl AsRef<str>, port: impl AsRef<str>) -> Result<Self> {
        let country = country.as_ref().trim();
        let port = port.as_ref().trim();

        if country.is_empty() {
            return Err(IotmapError::InvalidQuery(
                "country code must not be empty".to_string(),
            ));
        }
        if port.is_empty() {
            return Err(IotmapError::InvalidQuery(
                "port number must not be empty".to_string(),
            ));
        }

        Ok(Self {
            country: country.to_string(),
            port: port.to_string(),
        })
    }

    /// The country code part of the filter
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The port part of the filter
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }
}

impl std::fmt::Display for DeviceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "country:{} port:{}", self.country, self.port)
    }
}

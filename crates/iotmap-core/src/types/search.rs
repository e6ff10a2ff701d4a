use super::{GeoLocation, Transport};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Placeholder shown when a match carries no IP string
pub const UNKNOWN_IP: &str = "N/A";

/// Search results from /shodan/host/search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching banners/services
    #[serde(default)]
    pub matches: Vec<SearchMatch>,

    /// Total number of results
    #[serde(default)]
    pub total: u64,

    /// Facet aggregations if requested
    #[serde(default)]
    pub facets: HashMap<String, Vec<FacetValue>>,
}

impl SearchResults {
    /// Returns true if there are no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the number of matches in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Individual match in search results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchMatch {
    /// IP address as string
    #[serde(default)]
    pub ip_str: Option<String>,

    /// Port number
    #[serde(default)]
    pub port: u16,

    /// Transport protocol
    #[serde(default)]
    pub transport: Transport,

    /// Hostnames associated with this IP
    #[serde(default)]
    pub hostnames: Vec<String>,

    /// Organization that owns the IP
    #[serde(default)]
    pub org: Option<String>,

    /// Product name
    #[serde(default)]
    pub product: Option<String>,

    /// Geographic location
    #[serde(flatten)]
    pub location: GeoLocation,

    /// Timestamp
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Known vulnerabilities, keyed by identifier (e.g. CVE)
    ///
    /// Ordered map so downstream rendering is deterministic.
    #[serde(default)]
    pub vulns: BTreeMap<String, VulnInfo>,
}

impl SearchMatch {
    /// Returns the IP string, or [`UNKNOWN_IP`] when the match has none
    #[must_use]
    pub fn ip_display(&self) -> &str {
        self.ip_str.as_deref().unwrap_or(UNKNOWN_IP)
    }

    /// Returns true if this service has known vulnerabilities
    #[must_use]
    pub fn is_vulnerable(&self) -> bool {
        !self.vulns.is_empty()
    }
}

/// Details of one known vulnerability
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VulnInfo {
    /// CVSS score if known
    #[serde(default)]
    pub cvss: Option<f64>,

    /// Short summary of the vulnerability
    #[serde(default)]
    pub summary: Option<String>,

    /// Reference URLs
    #[serde(default)]
    pub references: Vec<String>,

    /// Whether the vulnerability has been verified
    #[serde(default)]
    pub verified: bool,
}

/// Facet aggregation value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetValue {
    /// The value being aggregated
    pub value: serde_json::Value,

    /// Count of matches with this value
    pub count: u64,
}

impl FacetValue {
    /// Try to get the value as a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Host count result from /shodan/host/count
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostCount {
    /// Total number of matching results
    pub total: u64,

    /// Facet aggregations if requested
    #[serde(default)]
    pub facets: HashMap<String, Vec<FacetValue>>,
}

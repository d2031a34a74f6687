use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named maps web service. Known services carry a built-in URL path segment;
/// `Other` services need a path from configuration. Names are case-insensitive and
/// `Other` names are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Service {
    Geocode,
    Directions,
    DistanceMatrix,
    Elevation,
    TimeZone,
    PlaceNearbySearch,
    PlaceTextSearch,
    PlaceDetails,
    Other(String),
}

impl Service {
    pub fn name(&self) -> &str {
        match self {
            Service::Geocode => "geocode",
            Service::Directions => "directions",
            Service::DistanceMatrix => "distancematrix",
            Service::Elevation => "elevation",
            Service::TimeZone => "timezone",
            Service::PlaceNearbySearch => "place_nearbysearch",
            Service::PlaceTextSearch => "place_textsearch",
            Service::PlaceDetails => "place_details",
            Service::Other(name) => name,
        }
    }

    /// Built-in URL path segment, `None` for `Other`.
    pub fn default_path(&self) -> Option<&'static str> {
        match self {
            Service::Geocode => Some("/geocode"),
            Service::Directions => Some("/directions"),
            Service::DistanceMatrix => Some("/distancematrix"),
            Service::Elevation => Some("/elevation"),
            Service::TimeZone => Some("/timezone"),
            Service::PlaceNearbySearch => Some("/place/nearbysearch"),
            Service::PlaceTextSearch => Some("/place/textsearch"),
            Service::PlaceDetails => Some("/place/details"),
            Service::Other(_) => None,
        }
    }
}

impl From<String> for Service {
    fn from(name: String) -> Self {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "geocode" => Service::Geocode,
            "directions" => Service::Directions,
            "distancematrix" | "distance_matrix" => Service::DistanceMatrix,
            "elevation" => Service::Elevation,
            "timezone" | "time_zone" => Service::TimeZone,
            "place_nearbysearch" => Service::PlaceNearbySearch,
            "place_textsearch" => Service::PlaceTextSearch,
            "place_details" => Service::PlaceDetails,
            _ => Service::Other(name),
        }
    }
}

impl From<Service> for String {
    fn from(service: Service) -> Self {
        service.name().to_string()
    }
}

impl FromStr for Service {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Service::from(s.to_string()))
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Parsed JSON body of a maps service response.
#[derive(Debug, Clone, PartialEq)]
pub struct MapsResponse {
    body: serde_json::Value,
}

impl MapsResponse {
    pub fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    /// Top-level `status` field, `None` when absent or not a string.
    pub fn status(&self) -> Option<&str> {
        self.body.get("status").and_then(|v| v.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.body.get(key)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error_message").and_then(|v| v.as_str())
    }

    pub fn results(&self) -> &[serde_json::Value] {
        self.body
            .get("results")
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.body
    }

    pub fn deserialize<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.body)
    }
}

//! Digitransit endpoint configuration

use serde::Deserialize;

/// Settings shared by the geocoding and routing clients.
///
/// Built once at startup and handed to both client constructors.
#[derive(Debug, Clone, Deserialize)]
pub struct DigitransitConfig {
    /// Subscription key sent as `digitransit-subscription-key`
    #[serde(default)]
    pub api_key: String,

    /// Address search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// GraphQL endpoint of the HSL router
    #[serde(default = "default_routing_url")]
    pub routing_url: String,

    /// Maximum number of geocoding matches to request
    #[serde(default = "default_geocoding_size")]
    pub geocoding_size: u32,

    /// Number of itineraries to request from the router
    #[serde(default = "default_itinerary_count")]
    pub itinerary_count: u32,
}

fn default_geocoding_url() -> String {
    "https://api.digitransit.fi/geocoding/v1/search".to_string()
}

fn default_routing_url() -> String {
    "https://api.digitransit.fi/routing/v1/routers/hsl/index/graphql".to_string()
}

const fn default_geocoding_size() -> u32 {
    1
}

const fn default_itinerary_count() -> u32 {
    3
}

impl Default for DigitransitConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            geocoding_url: default_geocoding_url(),
            routing_url: default_routing_url(),
            geocoding_size: default_geocoding_size(),
            itinerary_count: default_itinerary_count(),
        }
    }
}

impl DigitransitConfig {
    /// Public endpoints with the given subscription key
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Point both endpoints at a local mock server
    pub fn for_mock(base_url: &str) -> Self {
        Self {
            api_key: "test-key".to_string(),
            geocoding_url: format!("{base_url}/geocoding/v1/search"),
            routing_url: format!("{base_url}/routing/v1/routers/hsl/index/graphql"),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_digitransit() {
        let config = DigitransitConfig::default();
        assert_eq!(
            config.geocoding_url,
            "https://api.digitransit.fi/geocoding/v1/search"
        );
        assert_eq!(
            config.routing_url,
            "https://api.digitransit.fi/routing/v1/routers/hsl/index/graphql"
        );
        assert_eq!(config.geocoding_size, 1);
        assert_eq!(config.itinerary_count, 3);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: DigitransitConfig = serde_json::from_str(r#"{ "api_key": "abc" }"#).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.itinerary_count, 3);
        assert_eq!(config.routing_url, default_routing_url());
    }

    #[test]
    fn mock_config_keeps_api_paths() {
        let config = DigitransitConfig::for_mock("http://127.0.0.1:4000");
        assert_eq!(
            config.geocoding_url,
            "http://127.0.0.1:4000/geocoding/v1/search"
        );
        assert!(config.routing_url.ends_with("/routers/hsl/index/graphql"));
    }
}

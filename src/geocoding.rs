//! Digitransit address search
//!
//! Matches free text (an address or a point of interest) to coordinates.
//! See <https://digitransit.fi/en/developers/apis/2-geocoding-api/address-search/>.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    SUBSCRIPTION_KEY_HEADER,
    config::DigitransitConfig,
    error::{Error, Result},
    http,
    place::Place,
};

const API: &str = "geocoding";

/// Characters left alone by JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Deserialize)]
pub struct AddressSearchResponse {
    pub features: Vec<Feature>,
}

/// A single geocoding match
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: FeatureGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureGeometry {
    /// GeoJSON order: `[lon, lat]`
    pub coordinates: (f64, f64),
}

impl From<Feature> for Place {
    fn from(feature: Feature) -> Self {
        let (lon, lat) = feature.geometry.coordinates;
        Place::named(feature.properties.label, lat, lon)
    }
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    config: DigitransitConfig,
}

impl GeocodingClient {
    pub fn new(config: &DigitransitConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(API)?,
            config: config.clone(),
        })
    }

    /// Search URL with the text encoded as a URI component (space becomes `%20`)
    pub fn search_url(&self, text: &str, size: u32) -> String {
        let encoded = utf8_percent_encode(text, COMPONENT);
        format!("{}?text={encoded}&size={size}", self.config.geocoding_url)
    }

    /// Up to `size` matches for `text`, best first
    #[instrument(skip(self))]
    pub async fn address_search(&self, text: &str, size: u32) -> Result<AddressSearchResponse> {
        let url = self.search_url(text, size);
        debug!(%url, "searching address");

        let response = self
            .client
            .get(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|source| Error::Transport { api: API, source })?;

        let body = http::success_body(API, response).await?;

        serde_json::from_str(&body)
            .map_err(|e| Error::InvalidResponse(format!("address search for {text:?}: {e}")))
    }

    /// Best match for `text`, `None` when nothing matched
    #[instrument(skip(self))]
    pub async fn find_place(&self, text: &str) -> Result<Option<Place>> {
        let AddressSearchResponse { features } =
            self.address_search(text, self.config.geocoding_size).await?;

        let place = features.into_iter().next().map(Place::from);
        match &place {
            Some(place) => debug!(?place, "resolved"),
            None => debug!("no match"),
        }
        Ok(place)
    }
}

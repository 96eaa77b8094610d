//! Trip planning for Helsinki region public transport.
//!
//! Free-text place names are resolved through the Digitransit geocoding API,
//! itineraries between them are requested from the Digitransit routing
//! GraphQL API and rendered as plain text.
//!
//! ```rust,ignore
//! use hsl_trip::{DigitransitConfig, GeocodingClient, PlannerClient, trip};
//!
//! let config = DigitransitConfig::from_api_key(key);
//! let geocoder = GeocodingClient::new(&config)?;
//! let planner = PlannerClient::new(&config)?;
//!
//! let outcome = trip::plan_trip(&geocoder, &planner, "Ratapihantie 13", "Suomenlinna", 3).await?;
//! ```

pub mod config;
pub mod error;
pub mod geocoding;
mod http;
pub mod place;
pub mod planner;
pub mod render;
pub mod trip;

pub use config::DigitransitConfig;
pub use error::{Error, Result};
pub use geocoding::{AddressSearchResponse, Feature, GeocodingClient};
pub use place::Place;
pub use planner::{
    PlannerClient,
    model::{Itinerary, Leg, Mode, NamedPlace, Plan, Route},
};
pub use trip::{Resolution, TripOutcome};

/// Header carrying the Digitransit API subscription key on every request.
pub const SUBSCRIPTION_KEY_HEADER: &str = "digitransit-subscription-key";

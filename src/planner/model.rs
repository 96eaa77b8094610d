//! Itinerary plan as returned by the routing API

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Transit or movement type of a leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Walk,
    Bus,
    Rail,
    Tram,
    Ferry,
    Airplane,
    Bicycle,
    CableCar,
    Car,
    Funicular,
    Gondola,
    LegSwitch,
    Subway,
    Transit,
}

impl Mode {
    pub const ALL: [Mode; 14] = [
        Mode::Walk,
        Mode::Bus,
        Mode::Rail,
        Mode::Tram,
        Mode::Ferry,
        Mode::Airplane,
        Mode::Bicycle,
        Mode::CableCar,
        Mode::Car,
        Mode::Funicular,
        Mode::Gondola,
        Mode::LegSwitch,
        Mode::Subway,
        Mode::Transit,
    ];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plan {
    pub itineraries: Vec<Itinerary>,
}

/// One complete proposed trip
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    /// Seconds spent walking
    pub walk_time: i64,
    /// Metres walked
    pub walk_distance: f64,
    pub legs: Vec<Leg>,
}

/// One uninterrupted segment of an itinerary using a single mode
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub from: NamedPlace,
    pub to: NamedPlace,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    pub mode: Mode,
    /// Seconds
    pub duration: f64,
    /// Metres
    pub distance: f64,
    pub route: Option<Route>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedPlace {
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl NamedPlace {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

impl Leg {
    pub fn route_short_name(&self) -> &str {
        self.route
            .as_ref()
            .and_then(|route| route.short_name.as_deref())
            .unwrap_or_default()
    }
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
struct RoutingResponse {
    data: Option<PlanData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct PlanData {
    plan: Option<Plan>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Parse the body of a routing response, insisting on `data.plan`
pub(crate) fn parse_plan(body: &str) -> Result<Plan> {
    let response: RoutingResponse = serde_json::from_str(body)
        .map_err(|e| Error::InvalidResponse(format!("routing response: {e}")))?;

    let plan = response.data.and_then(|data| data.plan);

    plan.ok_or_else(|| {
        if response.errors.is_empty() {
            Error::InvalidResponse("routing response has no `data.plan`".to_string())
        } else {
            let messages = response
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Error::InvalidResponse(format!("routing query rejected: {messages}"))
        }
    })
}

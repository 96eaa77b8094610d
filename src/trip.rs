//! Text to places to itineraries

use std::{fmt::Display, io};

use chrono::TimeZone;
use tracing::{info, instrument};

use crate::{
    error::Result, geocoding::GeocodingClient, place::Place, planner::PlannerClient,
    planner::model::Plan, render,
};

/// How a planning run ended, short of an upstream failure
#[derive(Debug, Clone, PartialEq)]
pub enum TripOutcome {
    OriginNotFound(String),
    DestinationNotFound(String),
    NoItineraries { origin: Place, destination: Place },
    Found {
        origin: Place,
        destination: Place,
        plan: Plan,
    },
}

impl TripOutcome {
    /// Message for the user when nothing can be shown
    pub fn not_found_message(&self) -> Option<String> {
        match self {
            TripOutcome::OriginNotFound(text) | TripOutcome::DestinationNotFound(text) => {
                Some(format!("Could not locate {text}"))
            }
            TripOutcome::NoItineraries { .. } => Some("Could not find any itineraries".to_string()),
            TripOutcome::Found { .. } => None,
        }
    }
}

/// Result of geocoding both ends of a trip
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved { origin: Place, destination: Place },
    OriginNotFound(String),
    DestinationNotFound(String),
}

/// Resolves both texts concurrently. The origin is reported first when both are unknown.
#[instrument(skip(geocoder))]
pub async fn resolve_places(
    geocoder: &GeocodingClient,
    origin_text: &str,
    destination_text: &str,
) -> Result<Resolution> {
    let (origin, destination) = tokio::try_join!(
        geocoder.find_place(origin_text),
        geocoder.find_place(destination_text),
    )?;

    let Some(origin) = origin else {
        return Ok(Resolution::OriginNotFound(origin_text.to_string()));
    };
    let Some(destination) = destination else {
        return Ok(Resolution::DestinationNotFound(destination_text.to_string()));
    };

    info!(origin = %origin.label(), destination = %destination.label(), "places resolved");
    Ok(Resolution::Resolved {
        origin,
        destination,
    })
}

/// Asks the router for `count` itineraries between two resolved places
pub async fn plan_between(
    planner: &PlannerClient,
    origin: Place,
    destination: Place,
    count: u32,
) -> Result<TripOutcome> {
    let plan = planner.plan_route(&origin, &destination, count).await?;

    if plan.itineraries.is_empty() {
        return Ok(TripOutcome::NoItineraries {
            origin,
            destination,
        });
    }

    Ok(TripOutcome::Found {
        origin,
        destination,
        plan,
    })
}

/// Resolves both texts concurrently, then asks the router for `count` itineraries
#[instrument(skip(geocoder, planner))]
pub async fn plan_trip(
    geocoder: &GeocodingClient,
    planner: &PlannerClient,
    origin_text: &str,
    destination_text: &str,
    count: u32,
) -> Result<TripOutcome> {
    match resolve_places(geocoder, origin_text, destination_text).await? {
        Resolution::OriginNotFound(text) => Ok(TripOutcome::OriginNotFound(text)),
        Resolution::DestinationNotFound(text) => Ok(TripOutcome::DestinationNotFound(text)),
        Resolution::Resolved {
            origin,
            destination,
        } => plan_between(planner, origin, destination, count).await,
    }
}

/// One command-line run.
///
/// The matched places go to `out` as soon as both are known, before routing,
/// so they are visible even when the router fails. Itineraries follow on
/// `out`; "nothing found" messages go to `err`.
#[allow(clippy::too_many_arguments)]
pub async fn run<Tz>(
    geocoder: &GeocodingClient,
    planner: &PlannerClient,
    origin_text: &str,
    destination_text: &str,
    count: u32,
    out: &mut impl io::Write,
    err: &mut impl io::Write,
    tz: &Tz,
) -> Result<TripOutcome>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let outcome = match resolve_places(geocoder, origin_text, destination_text).await? {
        Resolution::OriginNotFound(text) => TripOutcome::OriginNotFound(text),
        Resolution::DestinationNotFound(text) => TripOutcome::DestinationNotFound(text),
        Resolution::Resolved {
            origin,
            destination,
        } => {
            render::write_places(out, &origin, &destination)?;
            out.flush()?;
            plan_between(planner, origin, destination, count).await?
        }
    };

    render::write_outcome(out, err, &outcome, tz)?;
    Ok(outcome)
}

//! GraphQL document for the HSL router

use crate::place::Place;

fn coordinate(place: &Place) -> String {
    format!("{{ lat: {}, lon: {} }}", place.lat, place.lon)
}

/// Plan query between two points asking for `count` itineraries.
///
/// Only numbers are interpolated, so nothing user-provided reaches the document.
pub fn plan_query(from: &Place, to: &Place, count: u32) -> String {
    format!(
        r#"{{
    plan(
        from: {from}
        to: {to}
        numItineraries: {count}
    ) {{
        itineraries {{
            startTime
            endTime
            walkTime
            walkDistance
            legs {{
                from {{
                    name
                    lat
                    lon
                }}
                to {{
                    name
                    lat
                    lon
                }}
                startTime
                endTime
                mode
                duration
                distance
                route {{
                    shortName
                    longName
                }}
            }}
        }}
    }}
}}"#,
        from = coordinate(from),
        to = coordinate(to),
    )
}

//! Plain text itinerary output

use std::{fmt::Display, io};

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    place::Place,
    planner::model::{Itinerary, Leg, Mode, Plan},
    trip::TripOutcome,
};

impl Mode {
    pub const fn icon(self) -> &'static str {
        match self {
            Mode::Walk => "🚶‍",
            Mode::Bus => "🚍",
            Mode::Rail => "🚆",
            Mode::Tram => "🚋",
            Mode::Ferry => "🚢",
            Mode::Airplane => "🛫",
            Mode::Bicycle => "🚲",
            Mode::CableCar => "🚠",
            Mode::Car => "🚘",
            Mode::Funicular => "🚟",
            Mode::Gondola => "🚡",
            Mode::LegSwitch => "🔀",
            Mode::Subway => "🚇",
            Mode::Transit => "🏇",
        }
    }
}

/// Whole minutes between two instants, halves rounded away from zero
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    (millis as f64 / 60_000.0).round() as i64
}

/// `"10:00:00 - 10:42:30, 43 minutes"`, times shown in `tz`
pub fn format_trip_time<Tz>(start: DateTime<Utc>, end: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} - {}, {} minutes",
        start.with_timezone(tz).format("%H:%M:%S"),
        end.with_timezone(tz).format("%H:%M:%S"),
        duration_minutes(start, end),
    )
}

pub fn leg_line(leg: &Leg) -> String {
    format!(
        "{} {} {} -> {}",
        leg.mode.icon(),
        leg.route_short_name(),
        leg.from.display_name(),
        leg.to.display_name(),
    )
}

pub fn write_places(out: &mut impl io::Write, origin: &Place, destination: &Place) -> io::Result<()> {
    writeln!(out, "From: {}", origin.label())?;
    writeln!(out, "To:   {}", destination.label())
}

pub fn write_itinerary<Tz>(out: &mut impl io::Write, itinerary: &Itinerary, tz: &Tz) -> io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(out)?;
    writeln!(
        out,
        "### {} ###",
        format_trip_time(itinerary.start_time, itinerary.end_time, tz)
    )?;
    writeln!(out)?;

    for leg in &itinerary.legs {
        writeln!(out, "{}", leg_line(leg))?;
        writeln!(out, "{}", format_trip_time(leg.start_time, leg.end_time, tz))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Every itinerary in the order given, each followed by a blank line
pub fn write_plan<Tz>(out: &mut impl io::Write, plan: &Plan, tz: &Tz) -> io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    for itinerary in &plan.itineraries {
        write_itinerary(out, itinerary, tz)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Everything that follows the place header: itineraries on `out`,
/// the "nothing found" message on `err`
pub fn write_outcome<Tz>(
    out: &mut impl io::Write,
    err: &mut impl io::Write,
    outcome: &TripOutcome,
    tz: &Tz,
) -> io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if let TripOutcome::Found { plan, .. } = outcome {
        write_plan(out, plan, tz)?;
    }
    if let Some(message) = outcome.not_found_message() {
        writeln!(err, "{message}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::model::{NamedPlace, Route};
    use chrono::FixedOffset;

    fn at(hms: (u32, u32, u32)) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, hms.0, hms.1, hms.2).unwrap()
    }

    fn stop(name: &str) -> NamedPlace {
        NamedPlace {
            name: Some(name.to_string()),
            lat: 60.17,
            lon: 24.95,
        }
    }

    fn leg(mode: Mode, route: Option<&str>, from: &str, to: &str) -> Leg {
        Leg {
            from: stop(from),
            to: stop(to),
            start_time: at((10, 0, 0)),
            end_time: at((10, 15, 0)),
            mode,
            duration: 900.0,
            distance: 1200.0,
            route: route.map(|short| Route {
                short_name: Some(short.to_string()),
                long_name: None,
            }),
        }
    }

    #[test]
    fn every_mode_has_an_icon() {
        for mode in Mode::ALL {
            assert!(!mode.icon().is_empty(), "{mode:?}");
        }
        assert_eq!(Mode::Walk.icon(), "🚶‍");
        assert_eq!(Mode::Ferry.icon(), "🚢");
    }

    #[test]
    fn half_minutes_round_up() {
        assert_eq!(duration_minutes(at((10, 0, 0)), at((10, 42, 30))), 43);
        assert_eq!(duration_minutes(at((10, 0, 0)), at((10, 42, 29))), 42);
        assert_eq!(duration_minutes(at((10, 0, 0)), at((10, 41, 31))), 42);
        assert_eq!(duration_minutes(at((10, 0, 0)), at((10, 0, 0))), 0);
    }

    #[test]
    fn trip_time_uses_given_zone() {
        let helsinki = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            format_trip_time(at((10, 0, 0)), at((10, 42, 30)), &helsinki),
            "13:00:00 - 13:42:30, 43 minutes"
        );
        assert_eq!(
            format_trip_time(at((10, 0, 0)), at((10, 42, 30)), &Utc),
            "10:00:00 - 10:42:30, 43 minutes"
        );
    }

    #[test]
    fn leg_without_route_leaves_name_blank() {
        let line = leg_line(&leg(Mode::Walk, None, "Ratapihantie 13", "Pasila"));
        assert_eq!(line, "🚶‍  Ratapihantie 13 -> Pasila");

        let line = leg_line(&leg(Mode::Tram, Some("7"), "Pasila", "Kauppatori"));
        assert_eq!(line, "🚋 7 Pasila -> Kauppatori");
    }

    #[test]
    fn itinerary_layout() {
        let itinerary = Itinerary {
            start_time: at((10, 0, 0)),
            end_time: at((10, 15, 0)),
            walk_time: 900,
            walk_distance: 1200.0,
            legs: vec![leg(Mode::Bus, Some("23"), "A", "B")],
        };

        let mut out = Vec::new();
        write_itinerary(&mut out, &itinerary, &Utc).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n### 10:00:00 - 10:15:00, 15 minutes ###\n\n\
             🚍 23 A -> B\n\
             10:00:00 - 10:15:00, 15 minutes\n\n"
        );
    }

    #[test]
    fn places_header() {
        let mut out = Vec::new();
        write_places(
            &mut out,
            &Place::named("Ratapihantie 13, Helsinki", 60.2, 24.9),
            &Place::new(60.15, 24.99),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "From: Ratapihantie 13, Helsinki\nTo:   60.15, 24.99\n"
        );
    }

    #[test]
    fn empty_plan_writes_nothing() {
        let mut out = Vec::new();
        write_plan(&mut out, &Plan { itineraries: vec![] }, &Utc).unwrap();
        assert!(out.is_empty());
    }

    fn outcome_streams(outcome: &TripOutcome) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_outcome(&mut out, &mut err, outcome, &Utc).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn unknown_places_only_report_on_stderr() {
        let (out, err) = outcome_streams(&TripOutcome::OriginNotFound("Atlantis".into()));
        assert!(out.is_empty());
        assert_eq!(err, "Could not locate Atlantis\n");

        let (out, err) = outcome_streams(&TripOutcome::DestinationNotFound("Lemuria".into()));
        assert!(out.is_empty());
        assert_eq!(err, "Could not locate Lemuria\n");
    }

    #[test]
    fn no_itineraries_reports_once_without_headers() {
        let (out, err) = outcome_streams(&TripOutcome::NoItineraries {
            origin: Place::new(60.2, 24.9),
            destination: Place::new(60.15, 24.99),
        });
        assert!(out.is_empty());
        assert!(!out.contains("###"));
        assert_eq!(err, "Could not find any itineraries\n");
        assert_eq!(err.lines().count(), 1);
    }

    #[test]
    fn found_writes_plan_and_nothing_to_stderr() {
        let itinerary = Itinerary {
            start_time: at((10, 0, 0)),
            end_time: at((10, 15, 0)),
            walk_time: 0,
            walk_distance: 0.0,
            legs: vec![leg(Mode::Subway, Some("M1"), "Pasila", "Kamppi")],
        };
        let (out, err) = outcome_streams(&TripOutcome::Found {
            origin: Place::new(60.2, 24.9),
            destination: Place::new(60.17, 24.93),
            plan: Plan {
                itineraries: vec![itinerary.clone(), itinerary],
            },
        });
        assert!(err.is_empty());
        assert_eq!(out.lines().filter(|line| line.starts_with("###")).count(), 2);
        assert_eq!(out.matches("🚇 M1 Pasila -> Kamppi").count(), 2);
    }
}

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, Event, EventLike};
use tracing::warn;

use crate::model::fixture::FixtureEntry;
use crate::model::schedule::Schedule;

/// Timezone the source site publishes kickoff times in.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// Two halves plus the break.
pub const MATCH_DURATION_MINUTES: i64 = 105;

/// One VEVENT per fixture, in schedule order. Kickoff times are read as local time in `tz`.
pub fn to_calendar(schedule: &Schedule, name: &str, tz: Tz) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.name(name);
    for (index, entry) in schedule.iter().enumerate() {
        calendar.push(to_event(index, entry, tz));
    }
    calendar.done()
}

/// Render the schedule as an ICS document.
pub fn to_ics(schedule: &Schedule, name: &str, tz: Tz) -> String {
    to_calendar(schedule, name, tz).to_string()
}

fn to_event(index: usize, entry: &FixtureEntry, tz: Tz) -> Event {
    let start = kickoff_utc(entry.date(), tz);
    let end = start + Duration::minutes(MATCH_DURATION_MINUTES);

    let mut event = Event::new();
    event
        .uid(&format!("{}-{}@matchplan", entry.date().format("%Y%m%dT%H%M"), index))
        .summary(&entry.encounter().to_string())
        .starts(start)
        .ends(end);
    if let Some(location) = entry.location() {
        event.location(location);
    }
    if let Some(description) = entry.description() {
        event.description(description);
    }
    if let Some(url) = entry.detail_url() {
        event.add_property("URL", url.as_str());
    }
    event.done()
}

/// Local kickoff to UTC. Times skipped by a DST jump have no local reading; they are kept
/// as if they were UTC.
fn kickoff_utc(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            warn!(kickoff = %local, tz = %tz.name(), "Kickoff does not exist in local time");
            local.and_utc()
        }
    }
}

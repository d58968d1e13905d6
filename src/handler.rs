use chrono::Utc;
use chrono_tz::Tz;
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::fussball::{self, DEFAULT_TEAM_URL};
use crate::ical::{self, DEFAULT_TIMEZONE};
use crate::model::schedule::Schedule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One line per fixture, as `Schedule::output` prints it.
    #[default]
    Text,
    Json,
    Ical,
    /// Only the next fixture from now on.
    Next,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default = "default_team_url")]
    pub team_url: String,
    #[serde(default)]
    pub format: Format,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub fixtures: usize,
}

fn default_team_url() -> String {
    DEFAULT_TEAM_URL.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}

fn default_calendar_name() -> String {
    "Matchplan".to_string()
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;
    let tz: Tz = payload
        .timezone
        .parse()
        .map_err(|e| format!("Unknown timezone {:?}: {}", payload.timezone, e))?;

    // spawn_blocking needs owned inputs; the fetch runs on ureq's blocking client.
    let team_url = payload.team_url.clone();
    let schedule = tokio::task::spawn_blocking(move || fussball::with_schedule(&team_url, |result| result)).await?;
    let schedule = match schedule {
        Ok(schedule) => schedule,
        Err(e) => {
            error!(error = %e, team_url = %payload.team_url, "Failed to load schedule");
            return Err(e.into());
        }
    };

    let message = render(&schedule, payload.format, tz, &payload.calendar_name)?;
    info!(fixtures = schedule.len(), format = ?payload.format, "Rendered schedule");
    Ok(Response { message, fixtures: schedule.len() })
}

/// Render a schedule in the requested format. `tz` is the local timezone of the kickoff times.
pub fn render(schedule: &Schedule, format: Format, tz: Tz, calendar_name: &str) -> Result<String, Error> {
    let message = match format {
        Format::Text => {
            let mut out = Vec::new();
            schedule.write_to(&mut out)?;
            String::from_utf8(out)?
        }
        Format::Json => serde_json::to_string(schedule)?,
        Format::Ical => ical::to_ics(schedule, calendar_name, tz),
        Format::Next => {
            let now = Utc::now().with_timezone(&tz).naive_local();
            match schedule.next_fixture(now) {
                Some(entry) => entry.to_string(),
                None => format!("No upcoming fixtures after {}.", now.format("%d.%m.%Y, %H:%M")),
            }
        }
    };
    Ok(message)
}

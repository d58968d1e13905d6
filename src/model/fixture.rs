use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::encounter::Encounter;

/// Display form of a kickoff time, as the source site writes it.
pub const DATE_DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M";

/// One scheduled match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureEntry {
    date: NaiveDateTime,
    location: Option<String>,
    encounter: Encounter,
    description: Option<String>,
    detail_url: Option<Url>,
}

impl FixtureEntry {
    pub fn new(date: NaiveDateTime, encounter: Encounter) -> Self {
        Self { date, location: None, encounter, description: None, detail_url: None }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_detail_url(mut self, detail_url: Url) -> Self {
        self.detail_url = Some(detail_url);
        self
    }

    /// Kickoff in naive local time.
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn detail_url(&self) -> Option<&Url> {
        self.detail_url.as_ref()
    }
}

/// `"<date>: <home> vs <visiting>"`, followed by the detail URL on its own line when known.
impl fmt::Display for FixtureEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date.format(DATE_DISPLAY_FORMAT), self.encounter)?;
        if let Some(url) = &self.detail_url {
            write!(f, "\n{}", url)?;
        }
        Ok(())
    }
}

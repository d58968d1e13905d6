use std::fmt;

use serde::{Deserialize, Serialize};

/// A home team still waiting for its opponent.
///
/// Produced when a home-team name is read; consumed by [`PendingEncounter::set_visiting_team`],
/// so the visiting slot can be filled exactly once and an incomplete pairing can never be
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEncounter {
    home_team: String,
}

impl PendingEncounter {
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn set_visiting_team(self, name: impl Into<String>) -> Encounter {
        Encounter { home_team: self.home_team, visiting_team: name.into() }
    }
}

/// Home team versus visiting team for a single fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    home_team: String,
    visiting_team: String,
}

impl Encounter {
    /// Start a pairing from the home team's name.
    pub fn create(home_team: impl Into<String>) -> PendingEncounter {
        PendingEncounter { home_team: home_team.into() }
    }

    pub fn new(home_team: impl Into<String>, visiting_team: impl Into<String>) -> Self {
        Self::create(home_team).set_visiting_team(visiting_team)
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn visiting_team(&self) -> &str {
        &self.visiting_team
    }
}

impl fmt::Display for Encounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home_team, self.visiting_team)
    }
}

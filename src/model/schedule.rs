use std::io::{self, Write};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::fixture::FixtureEntry;

/// Fixtures in the order the source lists them. Entries are never sorted, removed or
/// reordered; only the builder appends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<FixtureEntry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    pub(crate) fn append(&mut self, entry: FixtureEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FixtureEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[FixtureEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FixtureEntry> {
        self.entries.iter()
    }

    /// Fixtures kicking off at or after `now`, in schedule order.
    pub fn upcoming(&self, now: NaiveDateTime) -> impl Iterator<Item = &FixtureEntry> {
        self.entries.iter().filter(move |e| e.date() >= now)
    }

    /// The earliest fixture at or after `now`.
    pub fn next_fixture(&self, now: NaiveDateTime) -> Option<&FixtureEntry> {
        self.upcoming(now).min_by_key(|e| e.date())
    }

    /// Write one line per fixture, in order.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{}", entry)?;
        }
        Ok(())
    }

    /// Print the schedule to stdout.
    pub fn output(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_to(stdout.lock())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a FixtureEntry;
    type IntoIter = std::slice::Iter<'a, FixtureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Schedule {
    type Item = FixtureEntry;
    type IntoIter = std::vec::IntoIter<FixtureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

use tracing::debug;
use url::Url;

use crate::error::ScheduleError;
use crate::match_time::parse_match_time;
use crate::model::encounter::{Encounter, PendingEncounter};
use crate::model::fixture::FixtureEntry;
use crate::model::schedule::Schedule;

/// Assemble a schedule from the three sequences read off a match plan.
///
/// * `timestamps` - one headline per row, e.g. `"Sonntag 19.03.2017 - 11:00"`.
/// * `team_fragments` - club names, flat: home then visiting for every row.
/// * `detail_links` - detail pages by row position. Rows past the end of the list have none.
///
/// The sequences come from independent passes over the same markup, so their counts are
/// checked against each other before anything is zipped. Any failure aborts the whole build.
pub fn build<T, F>(timestamps: &[T], team_fragments: &[F], detail_links: &[Url]) -> Result<Schedule, ScheduleError>
where
    T: AsRef<str>,
    F: AsRef<str>,
{
    if team_fragments.len() % 2 != 0 {
        return Err(ScheduleError::UnpairedTeams { count: team_fragments.len() });
    }
    let rows = timestamps.len();
    let pairs = team_fragments.len() / 2;
    if rows != pairs {
        return Err(ScheduleError::RowMismatch { rows, pairs });
    }
    if detail_links.len() > rows {
        return Err(ScheduleError::SurplusDetailLinks { rows, links: detail_links.len() });
    }

    let dates = timestamps
        .iter()
        .map(|raw| parse_match_time(raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let encounters = pair_encounters(team_fragments);

    let mut schedule = Schedule::with_capacity(rows);
    for (index, (date, encounter)) in dates.into_iter().zip(encounters).enumerate() {
        let entry = FixtureEntry::new(date, encounter);
        let entry = match detail_links.get(index) {
            Some(url) => entry.with_detail_url(url.clone()),
            None => entry,
        };
        schedule.append(entry);
    }

    debug!(rows, links = detail_links.len(), "Assembled schedule");
    Ok(schedule)
}

/// Even positions open an encounter as home team, odd positions close it as visiting team.
/// Callers guarantee an even-length input.
fn pair_encounters<F: AsRef<str>>(team_fragments: &[F]) -> Vec<Encounter> {
    let mut encounters = Vec::with_capacity(team_fragments.len() / 2);
    let mut pending: Option<PendingEncounter> = None;
    for (position, name) in team_fragments.iter().enumerate() {
        let name = name.as_ref();
        if position % 2 == 0 {
            pending = Some(Encounter::create(name));
        } else if let Some(home) = pending.take() {
            encounters.push(home.set_visiting_team(name));
        }
    }
    encounters
}

use thiserror::Error;

/// Failures of the schedule assembly. A build that hits any of these produces no schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A match time does not follow the `<weekday> <D.M.YYYY> - <H:MM>` layout.
    #[error("malformed match time {input:?}: {reason}")]
    Format { input: String, reason: &'static str },

    /// Team names come in home/visiting pairs; an odd count means a row lost one.
    #[error("found {count} team names, which cannot be paired into home and visiting teams")]
    UnpairedTeams { count: usize },

    #[error("found {rows} match rows but {pairs} team pairings")]
    RowMismatch { rows: usize, pairs: usize },

    #[error("found {links} detail links for only {rows} match rows")]
    SurplusDetailLinks { rows: usize, links: usize },
}

impl ScheduleError {
    pub(crate) fn format(input: &str, reason: &'static str) -> Self {
        ScheduleError::Format { input: input.to_string(), reason }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, ScheduleError::Format { .. })
    }

    /// True when the parallel row sequences disagree in count.
    pub fn is_alignment(&self) -> bool {
        !self.is_format()
    }
}

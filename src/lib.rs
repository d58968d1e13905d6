//! Fixture schedules scraped from a club's match plan.
//!
//! The markup is reduced to three flat sequences (row headlines, club names, detail links)
//! which [`builder::build`] reassembles into a [`Schedule`] by position.

pub mod builder;
pub mod error;
pub mod fussball;
pub mod handler;
pub mod ical;
pub mod match_time;
pub mod model;

pub use error::ScheduleError;
pub use model::encounter::Encounter;
pub use model::fixture::FixtureEntry;
pub use model::schedule::Schedule;

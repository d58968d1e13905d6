pub mod encounter;
pub mod fixture;
pub mod schedule;

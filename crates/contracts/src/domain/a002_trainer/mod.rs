pub mod aggregate;
pub mod schedule;

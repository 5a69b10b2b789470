//! Use cases (application services)

pub mod compose_records;

//! Domain layer for fallible-flow
//!
//! This crate contains the core abstraction, records, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## AsyncResult
//!
//! [`AsyncResult`] is a deferred computation that yields either a success
//! value or a failure value once executed:
//!
//! - **map**: transform the success value, failures pass through untouched
//! - **chain**: run a second fallible computation only after the first succeeds
//! - **execute**: start the work and wait for its outcome
//!
//! ## Records
//!
//! [`Animal`] and [`Machine`] are looked up independently and merged into a
//! [`Combined`] record.

pub mod config;
pub mod core;
pub mod pipeline;
pub mod records;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{async_result::AsyncResult, error::FetchError};
pub use pipeline::Step;
pub use records::entities::{Animal, Combined, Machine};

//! Application layer for fallible-flow
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    record_source::{AnimalSource, MachineSource},
};
pub use use_cases::compose_records::{Combiner, ComposeRecordsUseCase};

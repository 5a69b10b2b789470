//! Sample producers standing in for remote lookups
//!
//! Each producer answers with a fixed record (or a configured failure) after
//! an optional simulated delay. No real I/O is performed.

mod sources;

pub use sources::{SampleAnimalSource, SampleMachineSource};

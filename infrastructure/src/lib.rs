//! Infrastructure layer for fallible-flow
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod sample;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnimalConfig, FileConfig, FileMachineConfig,
    FileOutputConfig,
};
pub use sample::{SampleAnimalSource, SampleMachineSource};

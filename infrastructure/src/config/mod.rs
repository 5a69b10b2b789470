//! Configuration file loading for fallible-flow
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FALLIBLE_FLOW_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./flow.toml` or `./.flow.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/fallible-flow/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnimalConfig, FileConfig, FileMachineConfig, FileOutputConfig,
    MAX_DELAY_MS,
};
pub use loader::ConfigLoader;

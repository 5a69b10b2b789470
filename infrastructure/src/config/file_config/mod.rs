//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod records;
mod scalar;

pub use output::FileOutputConfig;
pub use records::{FileAnimalConfig, FileMachineConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for simulated producer latency
pub const MAX_DELAY_MS: u64 = 10_000;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} = {value} exceeds the {max} ms limit")]
    DelayTooLong {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Animal producer settings
    pub animal: FileAnimalConfig,
    /// Machine producer settings
    pub machine: FileMachineConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.animal.skin.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField("animal.skin"));
        }
        if self.machine.color.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField("machine.color"));
        }

        for (field, value) in [
            ("animal.delay_ms", self.animal.delay_ms),
            ("machine.delay_ms", self.machine.delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigValidationError::DelayTooLong {
                    field,
                    value,
                    max: MAX_DELAY_MS,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[animal]
skin = "scales"
legs = 0
delay_ms = 250

[machine]
weight = 7
color = "blue"
fail_with = "factory closed"

[output]
format = "json"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.animal.skin, "scales");
        assert_eq!(config.animal.legs, 0);
        assert_eq!(config.animal.delay_ms, 250);
        assert_eq!(config.machine.weight, 7);
        assert_eq!(config.machine.fail_with.as_deref(), Some("factory closed"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.animal, FileAnimalConfig::default());
        assert_eq!(config.machine, FileMachineConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_skin() {
        let mut config = FileConfig::default();
        config.animal.skin = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyField("animal.skin"))
        );
    }

    #[test]
    fn test_validate_rejects_long_delay() {
        let mut config = FileConfig::default();
        config.machine.delay_ms = MAX_DELAY_MS + 1;

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "machine.delay_ms = 10001 exceeds the 10000 ms limit"
        );
    }
}

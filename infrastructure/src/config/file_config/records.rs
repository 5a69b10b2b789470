//! Sample record configuration from TOML (`[animal]` and `[machine]` sections)

use super::scalar;
use flow_domain::{Animal, Machine};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw animal producer configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnimalConfig {
    #[serde(deserialize_with = "scalar::string")]
    pub skin: String,
    pub legs: u32,
    /// When set, the producer fails with this message instead of answering
    #[serde(deserialize_with = "scalar::option_string")]
    pub fail_with: Option<String>,
    /// Simulated round-trip latency in milliseconds
    pub delay_ms: u64,
}

impl Default for FileAnimalConfig {
    fn default() -> Self {
        Self {
            skin: "fur".to_string(),
            legs: 4,
            fail_with: None,
            delay_ms: 0,
        }
    }
}

impl FileAnimalConfig {
    pub fn to_animal(&self) -> Animal {
        Animal::new(self.skin.clone(), self.legs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Raw machine producer configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMachineConfig {
    pub weight: u32,
    #[serde(deserialize_with = "scalar::string")]
    pub color: String,
    /// When set, the producer fails with this message instead of answering
    #[serde(deserialize_with = "scalar::option_string")]
    pub fail_with: Option<String>,
    /// Simulated round-trip latency in milliseconds
    pub delay_ms: u64,
}

impl Default for FileMachineConfig {
    fn default() -> Self {
        Self {
            weight: 100,
            color: "red".to_string(),
            fail_with: None,
            delay_ms: 0,
        }
    }
}

impl FileMachineConfig {
    pub fn to_machine(&self) -> Machine {
        Machine::new(self.weight, self.color.clone())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

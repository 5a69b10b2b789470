//! Fixed-data implementations of the record source ports

use crate::config::{FileAnimalConfig, FileMachineConfig};
use flow_application::{AnimalSource, MachineSource};
use flow_domain::{Animal, AsyncResult, FetchError, Machine};
use std::time::Duration;
use tracing::debug;

/// Animal producer backed by a fixed record
#[derive(Debug, Clone)]
pub struct SampleAnimalSource {
    animal: Animal,
    fail_with: Option<String>,
    delay: Duration,
}

impl SampleAnimalSource {
    pub fn from_config(config: &FileAnimalConfig) -> Self {
        Self {
            animal: config.to_animal(),
            fail_with: config.fail_with.clone(),
            delay: config.delay(),
        }
    }
}

impl AnimalSource for SampleAnimalSource {
    fn fetch_animal(&self) -> AsyncResult<FetchError, Animal> {
        simulated_call(
            "animal",
            outcome(&self.animal, self.fail_with.as_deref()),
            self.delay,
        )
    }
}

/// Machine producer backed by a fixed record
#[derive(Debug, Clone)]
pub struct SampleMachineSource {
    machine: Machine,
    fail_with: Option<String>,
    delay: Duration,
}

impl SampleMachineSource {
    pub fn from_config(config: &FileMachineConfig) -> Self {
        Self {
            machine: config.to_machine(),
            fail_with: config.fail_with.clone(),
            delay: config.delay(),
        }
    }
}

impl MachineSource for SampleMachineSource {
    fn fetch_machine(&self) -> AsyncResult<FetchError, Machine> {
        simulated_call(
            "machine",
            outcome(&self.machine, self.fail_with.as_deref()),
            self.delay,
        )
    }
}

fn outcome<T: Clone>(record: &T, fail_with: Option<&str>) -> Result<T, FetchError> {
    match fail_with {
        Some(message) => Err(FetchError::new(message)),
        None => Ok(record.clone()),
    }
}

/// Answer with `outcome` after `delay`, once per execution
fn simulated_call<T>(
    name: &'static str,
    outcome: Result<T, FetchError>,
    delay: Duration,
) -> AsyncResult<FetchError, T>
where
    T: Clone + Send + Sync + 'static,
{
    AsyncResult::new(move || {
        let outcome = outcome.clone();
        async move {
            debug!("Simulated {} lookup ({:?} latency)", name, delay);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            outcome
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_default_config_returns_sample_data() {
        let animal = SampleAnimalSource::from_config(&FileAnimalConfig::default())
            .fetch_animal()
            .execute()
            .await;
        let machine = SampleMachineSource::from_config(&FileMachineConfig::default())
            .fetch_machine()
            .execute()
            .await;

        assert_eq!(animal, Ok(Animal::new("fur", 4)));
        assert_eq!(machine, Ok(Machine::new(100, "red")));
    }

    #[tokio::test]
    async fn test_configured_failure() {
        let config = FileAnimalConfig {
            fail_with: Some("network down".to_string()),
            ..Default::default()
        };
        let outcome = SampleAnimalSource::from_config(&config)
            .fetch_animal()
            .execute()
            .await;
        assert_eq!(outcome, Err(FetchError::new("network down")));
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = FileMachineConfig {
            weight: 7,
            color: "blue".to_string(),
            fail_with: None,
            delay_ms: 0,
        };
        let outcome = SampleMachineSource::from_config(&config)
            .fetch_machine()
            .execute()
            .await;
        assert_eq!(outcome, Ok(Machine::new(7, "blue")));
    }

    #[tokio::test]
    async fn test_delay_is_applied_on_execute() {
        let config = FileMachineConfig {
            weight: 1,
            color: "grey".to_string(),
            fail_with: None,
            delay_ms: 20,
        };
        let source = SampleMachineSource::from_config(&config);

        let started = Instant::now();
        let lookup = source.fetch_machine();
        assert!(started.elapsed() < Duration::from_millis(20));

        lookup.execute().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}

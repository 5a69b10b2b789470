//! Record source ports
//!
//! Defines the producers the compose use case depends on. Each producer
//! returns an [`AsyncResult`] immediately; no work happens until the caller
//! executes it. Implementations (adapters) live in the infrastructure layer.

use flow_domain::{Animal, AsyncResult, FetchError, Machine};

/// Producer of [`Animal`] records
pub trait AnimalSource: Send + Sync {
    /// Describe a lookup of the animal record
    fn fetch_animal(&self) -> AsyncResult<FetchError, Animal>;
}

/// Producer of [`Machine`] records
pub trait MachineSource: Send + Sync {
    /// Describe a lookup of the machine record
    fn fetch_machine(&self) -> AsyncResult<FetchError, Machine>;
}

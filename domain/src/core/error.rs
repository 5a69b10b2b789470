//! Domain error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure carried by every producer (Value Object)
///
/// A single error kind is used for any lookup failure; only its
/// human-readable message is surfaced to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

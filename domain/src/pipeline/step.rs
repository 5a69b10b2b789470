//! Step value object

use serde::{Deserialize, Serialize};

/// One step of composing an animal and a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Look up the animal record
    FetchAnimal,
    /// Look up the machine record, only after the animal succeeded
    FetchMachine,
    /// Merge both records
    Combine,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::FetchAnimal => "fetch_animal",
            Step::FetchMachine => "fetch_machine",
            Step::Combine => "combine",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Step::FetchAnimal => "Fetch Animal",
            Step::FetchMachine => "Fetch Machine",
            Step::Combine => "Combine",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

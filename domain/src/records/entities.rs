//! Animal, Machine and their merged form

use serde::{Deserialize, Serialize};

/// An animal as returned by the animal lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub skin: String,
    pub legs: u32,
}

impl Animal {
    pub fn new(skin: impl Into<String>, legs: u32) -> Self {
        Self {
            skin: skin.into(),
            legs,
        }
    }
}

/// A machine as returned by the machine lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub weight: u32,
    pub color: String,
}

impl Machine {
    pub fn new(weight: u32, color: impl Into<String>) -> Self {
        Self {
            weight,
            color: color.into(),
        }
    }
}

/// Field-wise union of an [`Animal`] and a [`Machine`]
///
/// The two field sets are disjoint, so no field of one side ever shadows
/// the other. Field order follows the merge order: animal first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combined {
    pub skin: String,
    pub legs: u32,
    pub weight: u32,
    pub color: String,
}

impl Combined {
    /// Merge both records. Pure and total.
    pub fn merge(animal: &Animal, machine: &Machine) -> Self {
        Self {
            skin: animal.skin.clone(),
            legs: animal.legs,
            weight: machine.weight,
            color: machine.color.clone(),
        }
    }
}

impl std::fmt::Display for Combined {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ skin: {}, legs: {}, weight: {}, color: {} }}",
            self.skin, self.legs, self.weight, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_every_field() {
        let combined = Combined::merge(&Animal::new("fur", 4), &Machine::new(100, "red"));
        assert_eq!(
            combined,
            Combined {
                skin: "fur".to_string(),
                legs: 4,
                weight: 100,
                color: "red".to_string(),
            }
        );
    }

    #[test]
    fn test_display() {
        let combined = Combined::merge(&Animal::new("scales", 0), &Machine::new(3, "green"));
        assert_eq!(
            combined.to_string(),
            "{ skin: scales, legs: 0, weight: 3, color: green }"
        );
    }

    #[test]
    fn test_serialize_field_order() {
        let combined = Combined::merge(&Animal::new("fur", 4), &Machine::new(100, "red"));
        let json = serde_json::to_string(&combined).unwrap();
        assert_eq!(
            json,
            r#"{"skin":"fur","legs":4,"weight":100,"color":"red"}"#
        );
    }
}

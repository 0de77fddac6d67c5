//! Defines the `Condition` enum, the categorical label an analysis assigns to a calendar day.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The dominant weather condition expected for a calendar day.
///
/// Exactly one condition is assigned per analysis; see [`crate::ConditionRules`] for the order
/// in which they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    /// Average precipitation above 10 mm.
    Rainy,
    /// Highest maximum temperature above 32 °C.
    Hot,
    /// Average temperature below 10 °C.
    Cold,
    /// Highest maximum wind above 12 m/s.
    Windy,
    /// Average temperature between 18 °C and 25 °C inclusive.
    Pleasant,
    /// Average temperature above 25 °C.
    Warm,
    /// Anything else.
    Cool,
}

impl Condition {
    /// All conditions in rule precedence order.
    pub const ALL: [Condition; 7] = [
        Condition::Rainy,
        Condition::Hot,
        Condition::Cold,
        Condition::Windy,
        Condition::Pleasant,
        Condition::Warm,
        Condition::Cool,
    ];

    /// The human-readable label, e.g. `"Pleasant"`.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Rainy => "Rainy",
            Condition::Hot => "Hot",
            Condition::Cold => "Cold",
            Condition::Windy => "Windy",
            Condition::Pleasant => "Pleasant",
            Condition::Warm => "Warm",
            Condition::Cool => "Cool",
        }
    }
}

/// Formats a `Condition` using its label.
///
/// # Examples
///
/// ```
/// use climate_outlook::Condition;
///
/// assert_eq!(Condition::Pleasant.to_string(), "Pleasant");
/// ```
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returned when a string is not one of the seven condition labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown condition label '{0}'")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|condition| condition.label() == s)
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

//! Invalid input policy value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens when an answer matches none of a question's codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputPolicy {
    /// Tell the user and ask the same question again
    #[default]
    Reprompt,
    /// Stop the quiz with an invalid-choice error
    Abort,
}

impl fmt::Display for InvalidInputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputPolicy::Reprompt => write!(f, "reprompt"),
            InvalidInputPolicy::Abort => write!(f, "abort"),
        }
    }
}

impl std::str::FromStr for InvalidInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reprompt" | "retry" => Ok(InvalidInputPolicy::Reprompt),
            "abort" | "strict" => Ok(InvalidInputPolicy::Abort),
            _ => Err(format!("Invalid InvalidInputPolicy: {}", s)),
        }
    }
}

//! Choice code value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single-letter answer token (Value Object)
///
/// Raw answers are trimmed before parsing; anything that is not exactly one
/// character afterwards is not a choice code. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceCode(char);

impl ChoiceCode {
    /// Create a choice code from a character
    pub const fn new(code: char) -> Self {
        Self(code)
    }

    /// Parse raw user input into a choice code
    pub fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self(c)),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChoiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ChoiceCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChoiceCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ChoiceCode::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid choice code: {:?}", s)))
    }
}

impl From<char> for ChoiceCode {
    fn from(c: char) -> Self {
        Self(c)
    }
}

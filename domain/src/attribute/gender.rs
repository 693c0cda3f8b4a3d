//! Gender preference attribute

use super::{Attribute, AttributeKind};
use crate::core::choice::ChoiceCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender the user's style preference matches the most
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "fem")]
    Feminine,
    #[serde(rename = "masc")]
    Masculine,
}

impl Attribute for Gender {
    const KIND: AttributeKind = AttributeKind::Gender;

    fn all() -> &'static [Self] {
        &[Gender::Feminine, Gender::Masculine]
    }

    fn code(&self) -> ChoiceCode {
        match self {
            Gender::Feminine => ChoiceCode::new('f'),
            Gender::Masculine => ChoiceCode::new('m'),
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Gender::Feminine => "fem",
            Gender::Masculine => "masc",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Gender::resolve("f").unwrap(), Gender::Feminine);
        assert_eq!(Gender::resolve("m").unwrap(), Gender::Masculine);
        assert!(Gender::resolve("a").is_err());
    }

    #[test]
    fn test_serialize_as_tag() {
        let json = serde_json::to_string(&Gender::Masculine).unwrap();
        assert_eq!(json, "\"masc\"");
    }
}

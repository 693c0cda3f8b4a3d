//! Style attribute

use super::{Attribute, AttributeKind};
use crate::core::choice::ChoiceCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall style, decided by the plurality of the style answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "cas")]
    Casual,
    #[serde(rename = "prof")]
    Professional,
    #[serde(rename = "creat")]
    Creative,
}

impl Style {
    /// Human-readable name for result messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Style::Casual => "Casual",
            Style::Professional => "Professional",
            Style::Creative => "Creative",
        }
    }
}

impl Attribute for Style {
    const KIND: AttributeKind = AttributeKind::Style;

    fn all() -> &'static [Self] {
        &[Style::Casual, Style::Professional, Style::Creative]
    }

    fn code(&self) -> ChoiceCode {
        match self {
            Style::Casual => ChoiceCode::new('a'),
            Style::Professional => ChoiceCode::new('b'),
            Style::Creative => ChoiceCode::new('c'),
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Style::Casual => "cas",
            Style::Professional => "prof",
            Style::Creative => "creat",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

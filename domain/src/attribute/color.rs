//! Color palette attribute

use super::{Attribute, AttributeKind};
use crate::core::choice::ChoiceCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color palette the user is drawn to the most
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorPalette {
    /// Blues, greens, purples
    #[serde(rename = "cool")]
    Cool,
    /// Reds, oranges, yellows
    #[serde(rename = "warm")]
    Warm,
    /// Black, white, browns
    #[serde(rename = "neut")]
    Neutral,
}

impl Attribute for ColorPalette {
    const KIND: AttributeKind = AttributeKind::Color;

    fn all() -> &'static [Self] {
        &[ColorPalette::Cool, ColorPalette::Warm, ColorPalette::Neutral]
    }

    fn code(&self) -> ChoiceCode {
        match self {
            ColorPalette::Cool => ChoiceCode::new('a'),
            ColorPalette::Warm => ChoiceCode::new('b'),
            ColorPalette::Neutral => ChoiceCode::new('c'),
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            ColorPalette::Cool => "cool",
            ColorPalette::Warm => "warm",
            ColorPalette::Neutral => "neut",
        }
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

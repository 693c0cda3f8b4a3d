//! Attribute lookup tables
//!
//! Each quiz question resolves into one attribute. The mapping from
//! [`ChoiceCode`] to attribute value is fixed and lives on the enum itself,
//! so every question validates input the same way through
//! [`Attribute::resolve`].
//!
//! | Attribute | Codes | Tags |
//! |-----------|-------|------|
//! | [`Gender`] | `f`, `m` | `fem`, `masc` |
//! | [`ColorPalette`] | `a`, `b`, `c` | `cool`, `warm`, `neut` |
//! | [`Style`] | `a`, `b`, `c` | `cas`, `prof`, `creat` |

mod color;
mod gender;
mod style;

pub use color::ColorPalette;
pub use gender::Gender;
pub use style::Style;

use crate::core::choice::ChoiceCode;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which lookup table an answer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Gender,
    Color,
    Style,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Gender => write!(f, "gender"),
            AttributeKind::Color => write!(f, "color"),
            AttributeKind::Style => write!(f, "style"),
        }
    }
}

/// A closed set of attribute values keyed by choice code.
pub trait Attribute: Copy + Sized + 'static {
    /// The lookup table this attribute belongs to
    const KIND: AttributeKind;

    /// Every value, in code order
    fn all() -> &'static [Self];

    /// The choice code that selects this value
    fn code(&self) -> ChoiceCode;

    /// The tag used in outfit filenames (e.g. "fem", "cool", "prof")
    fn tag(&self) -> &'static str;

    /// Look up the value selected by a choice code
    fn from_code(code: ChoiceCode) -> Option<Self> {
        Self::all().iter().copied().find(|value| value.code() == code)
    }

    /// Resolve raw user input into a value.
    ///
    /// Fails with [`DomainError::InvalidChoice`] when the input is not one
    /// of this table's codes.
    fn resolve(raw: &str) -> Result<Self, DomainError> {
        ChoiceCode::parse(raw)
            .and_then(Self::from_code)
            .ok_or_else(|| DomainError::InvalidChoice {
                kind: Self::KIND,
                input: raw.trim().to_string(),
            })
    }
}

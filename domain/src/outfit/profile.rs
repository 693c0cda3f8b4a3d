//! Style profile entity

use super::key::OutfitKey;
use super::resolver::resolve_style_detailed;
use super::tally::AnswerTally;
use crate::attribute::{ColorPalette, Gender, Style};
use crate::core::error::DomainError;
use crate::core::string::capitalize;
use serde::{Deserialize, Serialize};

/// Everything one quiz run decided about the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Capitalized name the user gave
    pub name: String,
    pub gender: Gender,
    pub color: ColorPalette,
    pub style: Style,
    /// Style answers in the order they were given
    pub tally: AnswerTally,
    /// The style came from answer order rather than a strict plurality
    pub tied: bool,
    pub outfit: OutfitKey,
}

impl StyleProfile {
    /// Resolve the style from the tally and compose the outfit key
    pub fn resolve(
        name: &str,
        gender: Gender,
        color: ColorPalette,
        tally: AnswerTally,
    ) -> Result<Self, DomainError> {
        let resolution = resolve_style_detailed(&tally)?;
        Ok(Self {
            name: capitalize(name),
            gender,
            color,
            style: resolution.style,
            tally,
            tied: resolution.tied,
            outfit: OutfitKey::compose(resolution.style, color, gender),
        })
    }
}

//! Outfit key value object

use crate::attribute::{Attribute, ColorPalette, Gender, Style};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the working directory that holds the outfit images
pub const OUTFITS_DIR: &str = "outfits";

/// Filename of one outfit image, e.g. `prof_cool_fem.jpg` (Value Object)
///
/// The format must match the image files shipped in the outfits directory
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutfitKey(String);

impl OutfitKey {
    /// Image file extension
    pub const EXTENSION: &'static str = "jpg";

    /// Build the key from the three resolved attributes
    pub fn compose(style: Style, color: ColorPalette, gender: Gender) -> Self {
        Self(format!(
            "{}_{}_{}.{}",
            style.tag(),
            color.tag(),
            gender.tag(),
            Self::EXTENSION
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full path of the image inside `outfits_dir`
    pub fn resource_path(&self, outfits_dir: &Path) -> PathBuf {
        outfits_dir.join(&self.0)
    }
}

impl std::fmt::Display for OutfitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose() {
        let key = OutfitKey::compose(Style::Casual, ColorPalette::Cool, Gender::Feminine);
        assert_eq!(key.as_str(), "cas_cool_fem.jpg");

        let key = OutfitKey::compose(Style::Creative, ColorPalette::Neutral, Gender::Masculine);
        assert_eq!(key.to_string(), "creat_neut_masc.jpg");
    }

    #[test]
    fn test_every_combination_is_unique() {
        let mut keys = std::collections::HashSet::new();
        for style in Style::all() {
            for color in ColorPalette::all() {
                for gender in Gender::all() {
                    keys.insert(OutfitKey::compose(*style, *color, *gender));
                }
            }
        }
        assert_eq!(keys.len(), 18);
    }

    #[test]
    fn test_resource_path() {
        let key = OutfitKey::compose(Style::Professional, ColorPalette::Warm, Gender::Masculine);
        let path = key.resource_path(&Path::new("/srv/styler").join(OUTFITS_DIR));
        assert_eq!(path, PathBuf::from("/srv/styler/outfits/prof_warm_masc.jpg"));
    }
}

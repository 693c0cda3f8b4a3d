//! Console output formatter for quiz results

use colored::Colorize;
use std::path::Path;
use styler_domain::StyleProfile;

/// Closing line once the user declines another run
pub const FAREWELL: &str = "Thanks for playing!";

/// Formats quiz results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a resolved profile, with the image path when given
    pub fn format(profile: &StyleProfile, image_path: Option<&Path>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{}'s Outfit", profile.name)));
        output.push('\n');

        output.push_str(&Self::field("Style:", profile.style.display_name()));
        output.push_str(&Self::field("Palette:", &profile.color.to_string()));
        output.push_str(&Self::field("Fit:", &profile.gender.to_string()));
        output.push_str(&Self::field("Outfit:", profile.outfit.as_str()));
        if let Some(path) = image_path {
            output.push_str(&Self::field("Image:", &path.display().to_string()));
        }

        if profile.tied {
            output.push_str(&format!(
                "\n{}\n",
                "Your style answers were evenly split; the first one given was picked."
                    .yellow()
            ));
        }

        output
    }

    /// Format a profile as a single JSON line
    pub fn format_json(profile: &StyleProfile, image_path: &Path) -> String {
        let value = serde_json::json!({
            "profile": profile,
            "image_path": image_path,
        });
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the closing line of a session
    pub fn format_farewell(runs: usize) -> String {
        match runs {
            0 | 1 => format!("\n{}\n", FAREWELL.green().bold()),
            n => format!(
                "\n{} {}\n",
                FAREWELL.green().bold(),
                format!("({} outfits picked)", n).dimmed()
            ),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("\n{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }

    fn field(label: &str, value: &str) -> String {
        format!("{:<10}{}\n", label.cyan().bold(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use styler_domain::{AnswerTally, ChoiceCode, ColorPalette, Gender};

    fn profile(answers: &str) -> StyleProfile {
        let tally = AnswerTally::from_codes(answers.chars().map(ChoiceCode::new));
        StyleProfile::resolve("sam", Gender::Feminine, ColorPalette::Warm, tally).unwrap()
    }

    #[test]
    fn test_format_text() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(
            &profile("aab"),
            Some(Path::new("outfits/cas_warm_fem.jpg")),
        );

        assert!(text.contains("Sam's Outfit"));
        assert!(text.contains("Casual"));
        assert!(text.contains("cas_warm_fem.jpg"));
        assert!(text.contains("outfits/cas_warm_fem.jpg"));
        assert!(!text.contains("evenly split"));
    }

    #[test]
    fn test_format_text_without_image_line() {
        let text = ConsoleFormatter::format(&profile("aab"), None);

        assert!(text.contains("cas_warm_fem.jpg"));
        assert!(!text.contains("Image:"));
        assert!(!text.contains("outfits/"));
    }

    #[test]
    fn test_format_json() {
        let json =
            ConsoleFormatter::format_json(&profile("bcbb"), Path::new("outfits/prof_warm_fem.jpg"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["profile"]["name"], "Sam");
        assert_eq!(value["profile"]["style"], "prof");
        assert_eq!(value["profile"]["outfit"], "prof_warm_fem.jpg");
        assert_eq!(value["profile"]["tied"], false);
        assert_eq!(value["image_path"], "outfits/prof_warm_fem.jpg");
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_format_farewell() {
        colored::control::set_override(false);
        assert!(ConsoleFormatter::format_farewell(1).contains(FAREWELL));
        assert!(ConsoleFormatter::format_farewell(3).contains("3 outfits"));
    }
}

//! Quiz question catalogue
//!
//! The fixed wording of every question the quiz asks. Multiple-choice
//! questions carry their options as [`QuizOption`]s whose codes line up with
//! the attribute lookup tables.

mod questions;

pub use questions::{
    COLOR_QUESTION, GENDER_QUESTION, INTRO, NAME_QUESTION, RESTART_QUESTION, STYLE_QUESTIONS,
    TIEBREAKER_QUESTION, greeting, results_intro,
};

use crate::core::choice::ChoiceCode;

/// One selectable answer of a multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub code: ChoiceCode,
    pub label: &'static str,
}

impl QuizOption {
    pub const fn new(code: char, label: &'static str) -> Self {
        Self {
            code: ChoiceCode::new(code),
            label,
        }
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceQuestion {
    /// Instruction printed above the heading, if any
    pub note: Option<&'static str>,
    pub heading: &'static str,
    pub options: &'static [QuizOption],
}

impl ChoiceQuestion {
    /// Render the question as shown to the user: optional note, the
    /// heading, then one `"{code} - {label}"` line per option.
    pub fn render(&self) -> String {
        let mut text = String::new();
        if let Some(note) = self.note {
            text.push_str(note);
            text.push_str("\n\n");
        }
        text.push_str("--> ");
        text.push_str(self.heading);
        text.push('\n');
        for option in self.options {
            text.push_str(&format!("{} - {}\n", option.code, option.label));
        }
        text
    }

    /// Codes accepted by this question
    pub fn codes(&self) -> impl Iterator<Item = ChoiceCode> + '_ {
        self.options.iter().map(|o| o.code)
    }
}

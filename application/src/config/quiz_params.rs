//! Quiz parameters for session control.
//!
//! [`QuizParams`] groups the settings that shape a quiz session. They are
//! assembled once from config files and CLI flags, then turned into use case
//! inputs.

use crate::use_cases::run_session::RunSessionInput;
use crate::use_cases::take_quiz::TakeQuizInput;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use styler_domain::{InvalidInputPolicy, OUTFITS_DIR};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizParams {
    /// Directory holding the outfit images.
    pub outfits_dir: PathBuf,
    /// What to do with answers that match no option.
    pub invalid_input: InvalidInputPolicy,
    /// Offer another run after each result.
    pub allow_restart: bool,
    /// Name supplied up front; the name question is skipped when set.
    pub name: Option<String>,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            outfits_dir: PathBuf::from(OUTFITS_DIR),
            invalid_input: InvalidInputPolicy::default(),
            allow_restart: true,
            name: None,
        }
    }
}

impl QuizParams {
    // ==================== Builder Methods ====================

    pub fn with_outfits_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.outfits_dir = dir.into();
        self
    }

    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    pub fn with_allow_restart(mut self, allow: bool) -> Self {
        self.allow_restart = allow;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // ==================== Factory Methods ====================

    /// Build the input for a single quiz run.
    pub fn to_quiz_input(&self) -> TakeQuizInput {
        TakeQuizInput {
            outfits_dir: self.outfits_dir.clone(),
            invalid_input: self.invalid_input,
            name: self.name.clone(),
        }
    }

    /// Build the input for a whole session.
    pub fn to_session_input(&self) -> RunSessionInput {
        RunSessionInput {
            quiz: self.to_quiz_input(),
            allow_restart: self.allow_restart,
        }
    }
}

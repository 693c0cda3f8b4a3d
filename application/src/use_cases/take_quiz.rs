//! Take Quiz use case
//!
//! Runs one pass through the quiz: name, gender, color, the style questions
//! (plus a tie-breaker when needed), then resolves and presents the outfit.

use crate::ports::media::{MediaPresenter, PresentError};
use crate::ports::progress::{NoProgress, QuizProgressNotifier};
use crate::ports::prompt::{PromptError, PromptProvider};
use std::path::PathBuf;
use std::sync::Arc;
use styler_domain::quiz::{
    COLOR_QUESTION, GENDER_QUESTION, INTRO, NAME_QUESTION, STYLE_QUESTIONS, TIEBREAKER_QUESTION,
};
use styler_domain::{
    AnswerTally, Attribute, ChoiceQuestion, ColorPalette, DomainError, Gender,
    InvalidInputPolicy, Style, StyleProfile, capitalize,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while taking the quiz
#[derive(Error, Debug)]
pub enum TakeQuizError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    #[error("Could not present outfit: {0}")]
    Present(#[from] PresentError),
}

impl TakeQuizError {
    /// Check if this error came from an unrecognized answer
    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, TakeQuizError::Domain(e) if e.is_invalid_choice())
    }

    /// Check if the user closed the input stream
    pub fn is_input_closed(&self) -> bool {
        matches!(self, TakeQuizError::Prompt(PromptError::Closed))
    }
}

/// Input for the TakeQuiz use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeQuizInput {
    /// Directory holding the outfit images
    pub outfits_dir: PathBuf,
    /// What to do with answers that match no option
    pub invalid_input: InvalidInputPolicy,
    /// Name supplied up front; skips the name question
    pub name: Option<String>,
}

impl TakeQuizInput {
    pub fn new(outfits_dir: impl Into<PathBuf>) -> Self {
        Self {
            outfits_dir: outfits_dir.into(),
            invalid_input: InvalidInputPolicy::default(),
            name: None,
        }
    }

    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Output of one quiz run
#[derive(Debug, Clone)]
pub struct TakeQuizOutput {
    pub profile: StyleProfile,
    /// Path handed to the media presenter
    pub image_path: PathBuf,
}

/// Use case for taking the quiz once
pub struct TakeQuizUseCase<P: PromptProvider + ?Sized, M: MediaPresenter + ?Sized> {
    prompt: Arc<P>,
    presenter: Arc<M>,
}

impl<P: PromptProvider + ?Sized, M: MediaPresenter + ?Sized> TakeQuizUseCase<P, M> {
    pub fn new(prompt: Arc<P>, presenter: Arc<M>) -> Self {
        Self { prompt, presenter }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, input: &TakeQuizInput) -> Result<TakeQuizOutput, TakeQuizError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: &TakeQuizInput,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<TakeQuizOutput, TakeQuizError> {
        // Only waits for the user to press enter
        self.prompt.ask(INTRO)?;

        let name = match &input.name {
            Some(name) => capitalize(name),
            None => capitalize(&self.prompt.ask(NAME_QUESTION)?),
        };
        progress.on_greeting(&name);

        let gender: Gender = self.ask_choice(&GENDER_QUESTION, input.invalid_input, progress)?;
        let color: ColorPalette =
            self.ask_choice(&COLOR_QUESTION, input.invalid_input, progress)?;
        let tally = self.collect_style_answers(input.invalid_input, progress)?;

        let profile = StyleProfile::resolve(&name, gender, color, tally)?;
        if profile.tied {
            warn!(
                "Style answers {:?} tied; picked '{}' by answer order",
                profile.tally.codes(),
                profile.style
            );
        }
        info!("Resolved outfit {}", profile.outfit);

        progress.on_results_pending(&profile.name);

        let image_path = profile.outfit.resource_path(&input.outfits_dir);
        progress.on_outfit_ready(&profile, &image_path);
        self.presenter.display(&image_path)?;

        Ok(TakeQuizOutput {
            profile,
            image_path,
        })
    }

    /// Ask the mandatory style questions, then the tie-breaker if all
    /// answers differ.
    fn collect_style_answers(
        &self,
        policy: InvalidInputPolicy,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<AnswerTally, TakeQuizError> {
        let mut tally = AnswerTally::new();
        for question in &STYLE_QUESTIONS {
            let style: Style = self.ask_choice(question, policy, progress)?;
            tally.push(style.code());
        }

        if tally.needs_tiebreaker() {
            debug!("Style answers {:?} all differ, asking tie-breaker", tally.codes());
            progress.on_tiebreaker();
            let style: Style = self.ask_choice(&TIEBREAKER_QUESTION, policy, progress)?;
            tally.push(style.code());
        }

        Ok(tally)
    }

    /// Ask a multiple-choice question until it resolves, or fail on the
    /// first bad answer under [`InvalidInputPolicy::Abort`].
    fn ask_choice<A: Attribute>(
        &self,
        question: &ChoiceQuestion,
        policy: InvalidInputPolicy,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<A, TakeQuizError> {
        let text = question.render();
        loop {
            let raw = self.prompt.ask(&text)?;
            match A::resolve(&raw) {
                Ok(value) => return Ok(value),
                Err(e) if policy == InvalidInputPolicy::Reprompt => {
                    debug!("{}", e);
                    progress.on_invalid_answer(&e);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

//! Run Session use case
//!
//! Takes the quiz, then offers another run. Answering `y` starts over from
//! the intro; anything else ends the session.

use super::take_quiz::{TakeQuizError, TakeQuizInput, TakeQuizUseCase};
use crate::ports::media::MediaPresenter;
use crate::ports::progress::{NoProgress, QuizProgressNotifier};
use crate::ports::prompt::PromptProvider;
use std::sync::Arc;
use styler_domain::StyleProfile;
use styler_domain::quiz::RESTART_QUESTION;
use tracing::info;

/// Answer that starts another run
const RESTART_ANSWER: &str = "y";

/// Input for the RunSession use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSessionInput {
    pub quiz: TakeQuizInput,
    /// Ask the restart question after each result
    pub allow_restart: bool,
}

impl RunSessionInput {
    pub fn new(quiz: TakeQuizInput) -> Self {
        Self {
            quiz,
            allow_restart: true,
        }
    }

    pub fn once(mut self) -> Self {
        self.allow_restart = false;
        self
    }
}

/// Output of a whole session
#[derive(Debug, Clone, Default)]
pub struct RunSessionOutput {
    /// One profile per completed run, in order
    pub profiles: Vec<StyleProfile>,
}

/// Use case for a quiz session with restarts
pub struct RunSessionUseCase<P: PromptProvider + ?Sized, M: MediaPresenter + ?Sized> {
    prompt: Arc<P>,
    quiz: TakeQuizUseCase<P, M>,
}

impl<P: PromptProvider + ?Sized, M: MediaPresenter + ?Sized> RunSessionUseCase<P, M> {
    pub fn new(prompt: Arc<P>, presenter: Arc<M>) -> Self {
        Self {
            quiz: TakeQuizUseCase::new(Arc::clone(&prompt), presenter),
            prompt,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, input: &RunSessionInput) -> Result<RunSessionOutput, TakeQuizError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: &RunSessionInput,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<RunSessionOutput, TakeQuizError> {
        let mut output = RunSessionOutput::default();

        loop {
            let run = output.profiles.len() + 1;
            info!("Starting quiz run {}", run);
            progress.on_quiz_start(run);

            let result = self.quiz.execute_with_progress(&input.quiz, progress)?;
            output.profiles.push(result.profile);

            if !input.allow_restart || !self.wants_restart()? {
                break;
            }
        }

        progress.on_session_end(&output.profiles);
        Ok(output)
    }

    fn wants_restart(&self) -> Result<bool, TakeQuizError> {
        let answer = self.prompt.ask(RESTART_QUESTION)?;
        Ok(answer.trim() == RESTART_ANSWER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{CountingProgress, RecordingPresenter, ScriptedPrompt};
    use styler_domain::InvalidInputPolicy;

    const SAM_RUN: [&str; 8] = ["", "sam", "f", "a", "a", "b", "c", "b"];
    const ALEX_RUN: [&str; 7] = ["", "alex", "m", "c", "c", "c", "a"];

    fn session(
        answers: &[&str],
    ) -> (
        RunSessionUseCase<ScriptedPrompt, RecordingPresenter>,
        Arc<ScriptedPrompt>,
        Arc<RecordingPresenter>,
    ) {
        let prompt = Arc::new(ScriptedPrompt::new(answers));
        let presenter = Arc::new(RecordingPresenter::default());
        let use_case = RunSessionUseCase::new(Arc::clone(&prompt), Arc::clone(&presenter));
        (use_case, prompt, presenter)
    }

    #[test]
    fn test_single_run_then_decline() {
        let mut answers = SAM_RUN.to_vec();
        answers.push("n");
        let (use_case, prompt, presenter) = session(&answers);

        let output = use_case
            .execute(&RunSessionInput::new(TakeQuizInput::new("outfits")))
            .unwrap();

        assert_eq!(output.profiles.len(), 1);
        assert_eq!(output.profiles[0].outfit.as_str(), "prof_cool_fem.jpg");
        assert_eq!(presenter.shown().len(), 1);
        assert_eq!(prompt.asked_containing("take the quiz again"), 1);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn test_restart_runs_whole_quiz_again() {
        let mut answers = SAM_RUN.to_vec();
        answers.push("y");
        answers.extend(ALEX_RUN);
        answers.push("no thanks");
        let (use_case, prompt, presenter) = session(&answers);
        let progress = CountingProgress::default();

        let output = use_case
            .execute_with_progress(&RunSessionInput::new(TakeQuizInput::new("outfits")), &progress)
            .unwrap();

        let keys: Vec<_> = output.profiles.iter().map(|p| p.outfit.as_str()).collect();
        assert_eq!(keys, vec!["prof_cool_fem.jpg", "creat_neut_masc.jpg"]);
        assert_eq!(presenter.shown().len(), 2);
        assert_eq!(prompt.asked_containing("Welcome to the Smart Styler"), 2);
        assert_eq!(progress.count("quiz_start"), 2);
        assert_eq!(progress.count("session_end"), 1);
    }

    #[test]
    fn test_only_lowercase_y_restarts() {
        for decline in ["Y", "yes", "", "n"] {
            let mut answers = SAM_RUN.to_vec();
            answers.push(decline);
            let (use_case, _, _) = session(&answers);

            let output = use_case
                .execute(&RunSessionInput::new(TakeQuizInput::new("outfits")))
                .unwrap();
            assert_eq!(output.profiles.len(), 1, "{decline:?}");
        }
    }

    #[test]
    fn test_once_skips_restart_question() {
        let (use_case, prompt, _) = session(&SAM_RUN);

        let output = use_case
            .execute(&RunSessionInput::new(TakeQuizInput::new("outfits")).once())
            .unwrap();

        assert_eq!(output.profiles.len(), 1);
        assert_eq!(prompt.asked_containing("take the quiz again"), 0);
    }

    #[test]
    fn test_many_restarts_stay_iterative() {
        let mut answers = Vec::new();
        for _ in 0..200 {
            answers.extend(ALEX_RUN);
            answers.push("y");
        }
        answers.pop();
        answers.push("n");
        let (use_case, _, _) = session(&answers);

        let output = use_case
            .execute(&RunSessionInput::new(TakeQuizInput::new("outfits")))
            .unwrap();
        assert_eq!(output.profiles.len(), 200);
    }

    #[test]
    fn test_invalid_choice_aborts_session() {
        let mut answers = SAM_RUN.to_vec();
        answers.push("y");
        answers.extend(["", "alex", "q"]);
        let (use_case, _, _) = session(&answers);
        let input = RunSessionInput::new(
            TakeQuizInput::new("outfits").with_invalid_input(InvalidInputPolicy::Abort),
        );

        let err = use_case.execute(&input).unwrap_err();
        assert!(err.is_invalid_choice());
    }

    #[test]
    fn test_closed_input_at_restart_question() {
        let (use_case, _, _) = session(&SAM_RUN);
        let err = use_case
            .execute(&RunSessionInput::new(TakeQuizInput::new("outfits")))
            .unwrap_err();
        assert!(err.is_input_closed());
    }
}

//! Progress notification port
//!
//! Defines the callbacks the quiz fires while it runs. Implementations live
//! in the presentation layer and decide what the user sees between
//! questions (greetings, the results countdown, the final outfit).

use std::path::Path;
use styler_domain::{DomainError, StyleProfile};

/// Callback for progress updates during a quiz session
pub trait QuizProgressNotifier: Send + Sync {
    /// Called before each quiz run; `run` starts at 1
    fn on_quiz_start(&self, _run: usize) {}

    /// Called once the user's name is known
    fn on_greeting(&self, _name: &str) {}

    /// Called when an answer was rejected and the question will be asked again
    fn on_invalid_answer(&self, _error: &DomainError) {}

    /// Called when the three style answers all differ
    fn on_tiebreaker(&self) {}

    /// Called after the last answer, before the outfit is revealed
    fn on_results_pending(&self, _name: &str) {}

    /// Called with the resolved profile and the image path about to be shown
    fn on_outfit_ready(&self, _profile: &StyleProfile, _image_path: &Path) {}

    /// Called when the user declines another run
    fn on_session_end(&self, _profiles: &[StyleProfile]) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QuizProgressNotifier for NoProgress {}

//! Application layer for smart-styler
//!
//! This crate contains the quiz use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizParams;
pub use ports::{
    media::{MediaPresenter, NoDisplay, PresentError},
    progress::{NoProgress, QuizProgressNotifier},
    prompt::{PromptError, PromptProvider},
};
pub use use_cases::run_session::{RunSessionInput, RunSessionOutput, RunSessionUseCase};
pub use use_cases::take_quiz::{TakeQuizError, TakeQuizInput, TakeQuizOutput, TakeQuizUseCase};

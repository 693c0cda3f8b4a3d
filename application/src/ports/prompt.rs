//! Prompt provider port
//!
//! The quiz never reads the terminal directly. Every question goes through
//! a [`PromptProvider`], which shows the question text and returns whatever
//! the user typed. Validating the answer is the caller's job.

use thiserror::Error;

/// Errors raised while asking a question.
///
/// These are failures of the input channel, not unrecognized answers.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The input stream ended (e.g. Ctrl+D or a closed pipe)
    #[error("Input closed before the question was answered")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for asking the user a question.
///
/// Implementations block until an answer is available.
///
/// # Implementations
///
/// - **Console**: `ConsolePrompt` in the presentation layer
pub trait PromptProvider: Send + Sync {
    /// Show `question` and return the raw answer, line ending removed.
    fn ask(&self, question: &str) -> Result<String, PromptError>;
}

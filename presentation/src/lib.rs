//! Presentation layer for smart-styler
//!
//! This crate contains the CLI definition, the console prompt adapter,
//! progress reporting, and result formatting.

pub mod cli;
pub mod console;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use console::prompt::ConsolePrompt;
pub use output::console::ConsoleFormatter;
pub use output::path_printer::PathPrinter;
pub use progress::reporter::ProgressReporter;

//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use styler_domain::InvalidInputPolicy;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Friendly console message
    Text,
    /// One JSON object per completed quiz
    Json,
}

impl From<OutputFormat> for styler_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => styler_domain::OutputFormat::Text,
            OutputFormat::Json => styler_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for smart-styler
#[derive(Parser, Debug)]
#[command(name = "smart-styler")]
#[command(author, version, about = "Smart Styler - picks an outfit based on your personality")]
#[command(long_about = r#"
Smart Styler asks a few multiple-choice questions and picks an outfit for you.

The quiz has four parts:
1. Gender preference (f/m)
2. Color palette (a/b/c)
3. Three style questions, plus a tie-breaker if all three answers differ
4. The outfit reveal: outfits/<style>_<color>_<gender>.jpg

Configuration files are loaded from (in priority order):
1. STYLER_* environment variables
2. --config <path>     Explicit config file
3. ./styler.toml       Project-level config
4. ~/.config/smart-styler/config.toml   Global config

Example:
  smart-styler
  smart-styler --name Sam --once --no-display
  smart-styler --strict -o json --outfits-dir ./assets/outfits
"#)]
pub struct Cli {
    /// Your name (skips the name question)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output format for the result
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip the results countdown
    #[arg(short, long)]
    pub quiet: bool,

    /// Stop at the first unrecognized answer instead of asking again
    #[arg(long, conflicts_with = "invalid_input")]
    pub strict: bool,

    /// What to do with unrecognized answers: reprompt (retry) or abort (strict)
    #[arg(long, value_name = "POLICY")]
    pub invalid_input: Option<InvalidInputPolicy>,

    /// Directory holding the outfit images
    #[arg(long, value_name = "DIR")]
    pub outfits_dir: Option<PathBuf>,

    /// Image viewer command (defaults to the platform opener)
    #[arg(long, value_name = "COMMAND")]
    pub viewer: Option<String>,

    /// Print the image path instead of opening a viewer
    #[arg(long)]
    pub no_display: bool,

    /// Take the quiz once without offering a restart
    #[arg(long)]
    pub once: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

//! Configuration file loading for smart-styler
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STYLER_*` environment variables (e.g. `STYLER_QUIZ__INVALID_INPUT=abort`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./styler.toml` or `./.styler.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/smart-styler/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDisplayConfig, FileOutputConfig, FilePacingConfig,
    FileQuizConfig,
};
pub use loader::ConfigLoader;

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use styler_application::QuizParams;
use styler_domain::{InvalidInputPolicy, OutputFormat};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("quiz.outfits_dir cannot be empty")]
    EmptyOutfitsDir,

    #[error("display.viewer cannot be empty")]
    EmptyViewer,
}

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// "reprompt" or "abort"
    pub invalid_input: InvalidInputPolicy,
    /// Directory holding the outfit images (relative to the working directory)
    pub outfits_dir: Option<PathBuf>,
}

/// Raw display configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Open the outfit image in a viewer
    pub enabled: bool,
    /// Viewer command to use instead of the platform default
    pub viewer: Option<String>,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            viewer: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw pacing configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePacingConfig {
    /// Play the "compiling answers" countdown before revealing the outfit
    pub enabled: bool,
}

impl Default for FilePacingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub quiz: FileQuizConfig,
    pub display: FileDisplayConfig,
    pub output: FileOutputConfig,
    pub pacing: FilePacingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(dir) = &self.quiz.outfits_dir
            && dir.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyOutfitsDir);
        }

        if let Some(viewer) = &self.display.viewer
            && viewer.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyViewer);
        }

        Ok(())
    }

    /// Build quiz parameters from the file settings
    pub fn to_quiz_params(&self) -> QuizParams {
        let params = QuizParams::default().with_invalid_input(self.quiz.invalid_input);
        match &self.quiz.outfits_dir {
            Some(dir) => params.with_outfits_dir(dir.clone()),
            None => params,
        }
    }
}

//! Infrastructure layer for smart-styler
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod media;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDisplayConfig, FileOutputConfig,
    FilePacingConfig, FileQuizConfig,
};
pub use media::SystemImageViewer;

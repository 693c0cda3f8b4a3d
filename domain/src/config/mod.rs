//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod invalid_input;
mod output_format;

pub use invalid_input::InvalidInputPolicy;
pub use output_format::OutputFormat;

//! Terminal input adapters

pub mod prompt;

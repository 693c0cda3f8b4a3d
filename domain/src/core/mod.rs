//! Core domain concepts shared across all subdomains.
//!
//! - [`choice::ChoiceCode`]: a single-letter answer token
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: small text helpers for user-provided answers

pub mod choice;
pub mod error;
pub mod string;

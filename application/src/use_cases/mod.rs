//! Use cases (application services)
//!
//! - [`take_quiz`]: one pass through the questions, ending with an outfit
//! - [`run_session`]: repeated quiz runs until the user declines a restart

pub mod run_session;
pub mod take_quiz;

#[cfg(test)]
pub(crate) mod testing;

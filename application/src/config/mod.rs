//! Application-level configuration.
//!
//! - [`QuizParams`]: session control (outfits directory, invalid input
//!   policy, restart prompt)

pub mod quiz_params;

pub use quiz_params::QuizParams;

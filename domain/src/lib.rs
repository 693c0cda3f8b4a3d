//! Domain layer for smart-styler
//!
//! This crate contains the answer-resolution logic, attribute lookup tables,
//! and the quiz question catalogue. It has no I/O and no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Attributes
//!
//! Every quiz answer is a single-letter [`ChoiceCode`] that maps through a
//! fixed table onto an attribute value:
//!
//! - [`Gender`]: `f` → `fem`, `m` → `masc`
//! - [`ColorPalette`]: `a` → `cool`, `b` → `warm`, `c` → `neut`
//! - [`Style`]: `a` → `cas`, `b` → `prof`, `c` → `creat`
//!
//! ## Outfit resolution
//!
//! Style answers are collected into an [`AnswerTally`]; the plurality code
//! becomes the style, and the three attributes compose an [`OutfitKey`]
//! such as `prof_cool_fem.jpg`.

pub mod attribute;
pub mod config;
pub mod core;
pub mod outfit;
pub mod quiz;

// Re-export commonly used types
pub use attribute::{Attribute, AttributeKind, ColorPalette, Gender, Style};
pub use config::{InvalidInputPolicy, OutputFormat};
pub use core::{choice::ChoiceCode, error::DomainError, string::capitalize};
pub use outfit::{
    key::{OUTFITS_DIR, OutfitKey},
    profile::StyleProfile,
    resolver::{
        StyleResolution, compose_outfit_key, has_duplicates, resolve_color, resolve_gender,
        resolve_style, resolve_style_detailed,
    },
    tally::{AnswerTally, Plurality},
};
pub use quiz::{ChoiceQuestion, QuizOption};

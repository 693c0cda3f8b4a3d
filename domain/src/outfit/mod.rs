//! Outfit resolution
//!
//! The pure core of the quiz: tallying style answers, resolving the
//! plurality style, and composing the outfit filename.
//!
//! ```text
//! style answers ──▶ AnswerTally ──▶ Plurality ──▶ Style ─┐
//! color answer  ──────────────────────────▶ ColorPalette ┼──▶ OutfitKey
//! gender answer ────────────────────────────────▶ Gender ┘
//! ```

pub mod key;
pub mod profile;
pub mod resolver;
pub mod tally;

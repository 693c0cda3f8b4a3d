//! Answer tally for the style questions

use super::resolver::has_duplicates;
use crate::core::choice::ChoiceCode;
use serde::{Deserialize, Serialize};

/// The most frequent code in a tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plurality {
    /// Winning code (first encountered among equal counts)
    pub code: ChoiceCode,
    /// Whether another code reached the same count
    pub tied: bool,
}

/// Ordered style answers collected during one quiz run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerTally {
    codes: Vec<ChoiceCode>,
}

impl AnswerTally {
    /// Number of style questions that are always asked
    pub const MANDATORY_ANSWERS: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes(codes: impl IntoIterator<Item = ChoiceCode>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    pub fn push(&mut self, code: ChoiceCode) {
        self.codes.push(code);
    }

    pub fn codes(&self) -> &[ChoiceCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether the extra disambiguating question must be asked.
    ///
    /// True only once all mandatory answers are in and none of them repeat.
    pub fn needs_tiebreaker(&self) -> bool {
        self.codes.len() == Self::MANDATORY_ANSWERS && !has_duplicates(&self.codes)
    }

    fn count_of(&self, code: ChoiceCode) -> usize {
        self.codes.iter().filter(|c| **c == code).count()
    }

    /// Most frequent code, scanning in answer order.
    ///
    /// Among codes with equal counts the first one given wins; `tied`
    /// records that this happened.
    pub fn plurality(&self) -> Option<Plurality> {
        let mut best: Option<(ChoiceCode, usize)> = None;
        for code in &self.codes {
            let count = self.count_of(*code);
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((*code, count));
            }
        }

        best.map(|(code, count)| {
            let tied = self
                .codes
                .iter()
                .any(|other| *other != code && self.count_of(*other) == count);
            Plurality { code, tied }
        })
    }
}

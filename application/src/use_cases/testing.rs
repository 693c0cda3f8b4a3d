//! Scripted port doubles shared by the use case tests.

use crate::ports::media::{MediaPresenter, PresentError};
use crate::ports::progress::QuizProgressNotifier;
use crate::ports::prompt::{PromptError, PromptProvider};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use styler_domain::{DomainError, StyleProfile};

/// Answers questions from a fixed script, recording every question asked.
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn asked_containing(&self, needle: &str) -> usize {
        self.asked().iter().filter(|q| q.contains(needle)).count()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl PromptProvider for ScriptedPrompt {
    fn ask(&self, question: &str) -> Result<String, PromptError> {
        self.asked.lock().unwrap().push(question.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(PromptError::Closed)
    }
}

/// Records displayed paths; optionally fails every display.
#[derive(Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<PathBuf>>,
    fail: bool,
}

impl RecordingPresenter {
    pub fn failing() -> Self {
        Self {
            shown: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn shown(&self) -> Vec<PathBuf> {
        self.shown.lock().unwrap().clone()
    }
}

impl MediaPresenter for RecordingPresenter {
    fn display(&self, path: &Path) -> Result<(), PresentError> {
        if self.fail {
            return Err(PresentError::NotFound(path.to_path_buf()));
        }
        self.shown.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Counts progress callbacks.
#[derive(Default)]
pub struct CountingProgress {
    pub events: Mutex<Vec<String>>,
}

impl CountingProgress {
    pub fn count(&self, event: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.as_str() == event)
            .count()
    }

    fn record(&self, event: &str) {
        self.events.lock().unwrap().push(event.to_string());
    }
}

impl QuizProgressNotifier for CountingProgress {
    fn on_quiz_start(&self, _run: usize) {
        self.record("quiz_start");
    }

    fn on_greeting(&self, _name: &str) {
        self.record("greeting");
    }

    fn on_invalid_answer(&self, _error: &DomainError) {
        self.record("invalid_answer");
    }

    fn on_tiebreaker(&self) {
        self.record("tiebreaker");
    }

    fn on_results_pending(&self, _name: &str) {
        self.record("results_pending");
    }

    fn on_outfit_ready(&self, _profile: &StyleProfile, _image_path: &Path) {
        self.record("outfit_ready");
    }

    fn on_session_end(&self, _profiles: &[StyleProfile]) {
        self.record("session_end");
    }
}

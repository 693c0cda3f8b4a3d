//! Progress reporting for quiz sessions

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::thread;
use std::time::Duration;
use styler_application::QuizProgressNotifier;
use styler_domain::quiz::{greeting, results_intro};
use styler_domain::{DomainError, OutputFormat, StyleProfile};

/// Messages shown while the outfit is being "generated"
pub const PACING_STEPS: [&str; 4] = [
    "Compiling answers . . .",
    "Generating outfit . . .",
    "Having a snack . . .",
    "Success!",
];

const INITIAL_DELAY: Duration = Duration::from_millis(1500);
const STEP_DELAY: Duration = Duration::from_millis(750);

/// Reports quiz progress on the console with a results countdown spinner
pub struct ProgressReporter {
    format: OutputFormat,
    pacing: bool,
    /// Include the image path in text results
    image_line: bool,
    initial_delay: Duration,
    step_delay: Duration,
}

impl ProgressReporter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pacing: true,
            image_line: true,
            initial_delay: INITIAL_DELAY,
            step_delay: STEP_DELAY,
        }
    }

    /// Enable or disable the results countdown
    pub fn with_pacing(mut self, pacing: bool) -> Self {
        self.pacing = pacing;
        self
    }

    /// Leave the image path out of text results when a presenter prints it
    pub fn with_image_line(mut self, show: bool) -> Self {
        self.image_line = show;
        self
    }

    pub fn with_delays(mut self, initial: Duration, step: Duration) -> Self {
        self.initial_delay = initial;
        self.step_delay = step;
        self
    }

    pub fn pacing(&self) -> bool {
        self.pacing
    }

    /// Keeps stdout as one JSON object per line
    fn farewell_on_stderr(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn play_countdown(&self) {
        thread::sleep(self.initial_delay);

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.enable_steady_tick(Duration::from_millis(100));

        let last = PACING_STEPS.len() - 1;
        for (i, step) in PACING_STEPS.iter().enumerate() {
            if i == last {
                pb.finish_with_message(step.green().bold().to_string());
            } else {
                pb.set_message(step.to_string());
            }
            thread::sleep(self.step_delay);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

impl QuizProgressNotifier for ProgressReporter {
    fn on_quiz_start(&self, run: usize) {
        if run > 1 {
            println!("\n{} {}", "->".cyan(), format!("Round {}", run).bold());
        }
    }

    fn on_greeting(&self, name: &str) {
        println!("{}\n", greeting(name));
    }

    fn on_invalid_answer(&self, error: &DomainError) {
        println!("{} {}. Please try again.\n", "!".yellow().bold(), error);
    }

    fn on_tiebreaker(&self) {
        println!("{}\n", "One more question to settle it...".dimmed());
    }

    fn on_results_pending(&self, name: &str) {
        println!("{}", results_intro(name));
        if self.pacing {
            self.play_countdown();
        }
    }

    fn on_outfit_ready(&self, profile: &StyleProfile, image_path: &Path) {
        match self.format {
            OutputFormat::Text => {
                let path = self.image_line.then_some(image_path);
                println!("{}", ConsoleFormatter::format(profile, path));
            }
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(profile, image_path)),
        }
    }

    fn on_session_end(&self, profiles: &[StyleProfile]) {
        let farewell = ConsoleFormatter::format_farewell(profiles.len());
        if self.farewell_on_stderr() {
            eprint!("{}", farewell);
        } else {
            print!("{}", farewell);
        }
    }
}

//! CLI entrypoint for Smart Styler
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::Arc;
use styler_application::{MediaPresenter, QuizParams, RunSessionUseCase};
use styler_domain::{InvalidInputPolicy, OutputFormat};
use styler_infrastructure::{ConfigLoader, FileConfig, SystemImageViewer};
use styler_presentation::{Cli, ConsolePrompt, PathPrinter, ProgressReporter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Smart Styler");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let params = build_params(&cli, &config, &cwd);
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let display = choose_display(&cli, &config);
    let progress = ProgressReporter::new(format)
        .with_pacing(config.pacing.enabled && !cli.quiet)
        .with_image_line(!display.prints_path());
    let prompt = Arc::new(ConsolePrompt::stdio());
    let presenter = display.into_presenter(format);

    let use_case = RunSessionUseCase::new(prompt, presenter);
    match use_case.execute_with_progress(&params.to_session_input(), &progress) {
        Ok(output) => {
            info!("Session finished after {} run(s)", output.profiles.len());
            Ok(())
        }
        Err(e) if e.is_input_closed() => {
            info!("Input closed, ending session");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Merge file settings with CLI overrides
fn build_params(cli: &Cli, config: &FileConfig, cwd: &Path) -> QuizParams {
    let mut params = config.to_quiz_params().with_allow_restart(!cli.once);

    if cli.strict {
        params = params.with_invalid_input(InvalidInputPolicy::Abort);
    } else if let Some(policy) = cli.invalid_input {
        params = params.with_invalid_input(policy);
    }
    if let Some(name) = &cli.name {
        params = params.with_name(name.clone());
    }
    if let Some(dir) = &cli.outfits_dir {
        params = params.with_outfits_dir(dir.clone());
    }

    if params.outfits_dir.is_relative() {
        params.outfits_dir = cwd.join(&params.outfits_dir);
    }

    params
}

/// How the outfit image reaches the user
enum ImageDisplay {
    Viewer(SystemImageViewer),
    PrintPath { check_exists: bool },
}

impl ImageDisplay {
    /// The presenter prints the path itself, so the text result omits it
    fn prints_path(&self) -> bool {
        matches!(self, ImageDisplay::PrintPath { .. })
    }

    fn into_presenter(self, format: OutputFormat) -> Arc<dyn MediaPresenter> {
        match self {
            ImageDisplay::Viewer(viewer) => Arc::new(viewer),
            // JSON mode keeps stdout for result objects
            ImageDisplay::PrintPath { check_exists } => match format {
                OutputFormat::Text => {
                    Arc::new(PathPrinter::stdout().with_check_exists(check_exists))
                }
                OutputFormat::Json => {
                    Arc::new(PathPrinter::new(io::stderr()).with_check_exists(check_exists))
                }
            },
        }
    }
}

/// Viewer command from the CLI, then the config file, then platform defaults
fn configured_viewer(cli: &Cli, config: &FileConfig) -> SystemImageViewer {
    match cli.viewer.as_ref().or(config.display.viewer.as_ref()) {
        Some(command) => SystemImageViewer::with_viewer(command.clone()),
        None => SystemImageViewer::new(),
    }
}

/// Pick how the outfit image is shown
fn choose_display(cli: &Cli, config: &FileConfig) -> ImageDisplay {
    if cli.no_display || !config.display.enabled {
        return ImageDisplay::PrintPath {
            check_exists: false,
        };
    }

    let viewer = configured_viewer(cli, config);
    if let Err(e) = viewer.locate_viewer() {
        warn!("{}; printing image paths instead", e);
        return ImageDisplay::PrintPath { check_exists: true };
    }

    ImageDisplay::Viewer(viewer)
}

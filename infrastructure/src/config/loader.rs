//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["styler.toml", ".styler.toml"];

/// Prefix for environment overrides
const ENV_PREFIX: &str = "STYLER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `STYLER_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./styler.toml` or `./.styler.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/smart-styler/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut files = Vec::new();
        if let Some(global_path) = Self::global_config_path() {
            files.push(global_path);
        }
        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }

        let figment = Self::file_figment(&files, config_path.map(PathBuf::as_path))?
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load configuration from the given files only, later files winning.
    ///
    /// Missing optional files are skipped; a missing explicit file is an error.
    pub fn load_from(
        files: &[PathBuf],
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        Self::file_figment(files, explicit)?
            .extract()
            .map_err(Box::new)
    }

    fn file_figment(
        files: &[PathBuf],
        explicit: Option<&Path>,
    ) -> Result<Figment, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in files {
            if path.exists() {
                debug!("Loading config from {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        // Explicit path is highest priority for files and must exist
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            debug!("Loading explicit config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/smart-styler/config.toml if set,
    /// otherwise falls back to ~/.config/smart-styler/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("smart-styler").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [  ENV  ] Environment: {}*", ENV_PREFIX);

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./styler.toml or ./.styler.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

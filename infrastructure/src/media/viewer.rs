//! Opens outfit images in an external viewer.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::Mutex;
use styler_application::{MediaPresenter, PresentError};
use tracing::{debug, info, warn};

/// Viewer commands tried in order when none is configured
#[cfg(target_os = "macos")]
const DEFAULT_VIEWERS: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const DEFAULT_VIEWERS: &[&str] = &["explorer"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_VIEWERS: &[&str] = &["xdg-open", "eog", "feh", "display"];

/// Media presenter that launches a system image viewer.
///
/// The viewer is started in the background with its output discarded; the
/// quiz does not wait for the window to close. Exited viewers are reaped on
/// the next display and when the presenter is dropped.
pub struct SystemImageViewer {
    viewers: Vec<String>,
    children: Mutex<Vec<Child>>,
}

impl SystemImageViewer {
    /// Use the platform default viewers
    pub fn new() -> Self {
        Self::from_viewers(DEFAULT_VIEWERS.iter().map(|v| v.to_string()).collect())
    }

    /// Use only the given viewer command
    pub fn with_viewer(viewer: impl Into<String>) -> Self {
        Self::from_viewers(vec![viewer.into()])
    }

    fn from_viewers(viewers: Vec<String>) -> Self {
        Self {
            viewers,
            children: Mutex::new(Vec::new()),
        }
    }

    /// Viewer commands this presenter will try
    pub fn viewers(&self) -> &[String] {
        &self.viewers
    }

    /// Find the first viewer present on `PATH`
    pub fn locate_viewer(&self) -> Result<PathBuf, PresentError> {
        self.viewers
            .iter()
            .find_map(|viewer| which::which(viewer).ok())
            .ok_or_else(|| PresentError::NoViewer(self.viewers.join(", ")))
    }

    /// Collect viewers that have exited; returns how many are still running
    pub fn reap(&self) -> usize {
        let Ok(mut children) = self.children.lock() else {
            return 0;
        };
        children.retain_mut(|child| match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                debug!("Viewer {} exited with {}", child.id(), status);
                false
            }
            Err(e) => {
                warn!("Failed to check viewer {}: {}", child.id(), e);
                false
            }
        });
        children.len()
    }
}

impl Drop for SystemImageViewer {
    fn drop(&mut self) {
        let running = self.reap();
        if running > 0 {
            debug!("Leaving {} viewer(s) running", running);
        }
    }
}

impl Default for SystemImageViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaPresenter for SystemImageViewer {
    fn display(&self, path: &Path) -> Result<(), PresentError> {
        if !path.is_file() {
            return Err(PresentError::NotFound(path.to_path_buf()));
        }

        let viewer = self.locate_viewer()?;
        self.reap();
        debug!("Opening {} with {}", path.display(), viewer.display());

        let child = Command::new(&viewer)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PresentError::Launch {
                viewer: viewer.display().to_string(),
                source,
            })?;
        if let Ok(mut children) = self.children.lock() {
            children.push(child);
        }

        info!("Displayed {}", path.display());
        Ok(())
    }
}

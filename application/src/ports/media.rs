//! Media presenter port
//!
//! Once an outfit is chosen, the resolved image path is handed to a
//! [`MediaPresenter`]. The quiz does not care how the image is shown.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while presenting an outfit image
#[derive(Error, Debug)]
pub enum PresentError {
    #[error("Outfit image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No image viewer available (tried: {0})")]
    NoViewer(String),

    #[error("Failed to launch image viewer '{viewer}': {source}")]
    Launch {
        viewer: String,
        #[source]
        source: std::io::Error,
    },
}

/// Port for displaying an outfit image.
///
/// # Implementations
///
/// - **System viewer**: `SystemImageViewer` in the infrastructure layer
/// - **Path printer**: `PathPrinter` in the presentation layer
/// - **No-op**: [`NoDisplay`]
pub trait MediaPresenter: Send + Sync {
    /// Display the image at `path`.
    fn display(&self, path: &Path) -> Result<(), PresentError>;
}

/// Presenter that shows nothing
pub struct NoDisplay;

impl MediaPresenter for NoDisplay {
    fn display(&self, _path: &Path) -> Result<(), PresentError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_display_always_succeeds() {
        assert!(NoDisplay.display(Path::new("/does/not/exist.jpg")).is_ok());
    }

    #[test]
    fn test_not_found_display() {
        let err = PresentError::NotFound(PathBuf::from("outfits/cas_cool_fem.jpg"));
        assert_eq!(
            err.to_string(),
            "Outfit image not found: outfits/cas_cool_fem.jpg"
        );
    }
}

//! Media presenter that prints the image path instead of opening it

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use styler_application::{MediaPresenter, PresentError};

/// Writes the outfit image path to a sink, one per line.
///
/// Used with `--no-display` and when no graphical viewer is available.
pub struct PathPrinter<W = io::Stdout> {
    out: Mutex<W>,
    /// Require the image to exist before printing it
    check_exists: bool,
}

impl PathPrinter {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PathPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            check_exists: false,
        }
    }

    pub fn with_check_exists(mut self, check: bool) -> Self {
        self.check_exists = check;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> MediaPresenter for PathPrinter<W> {
    fn display(&self, path: &Path) -> Result<(), PresentError> {
        if self.check_exists && !path.is_file() {
            return Err(PresentError::NotFound(path.to_path_buf()));
        }

        let mut out = self.out.lock().map_err(|_| PresentError::Launch {
            viewer: "path printer".to_string(),
            source: io::Error::other("output lock poisoned"),
        })?;

        writeln!(out, "{}", path.display())
            .and_then(|_| out.flush())
            .map_err(|source| PresentError::Launch {
                viewer: "path printer".to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_path() {
        let printer = PathPrinter::new(Vec::new());
        printer
            .display(Path::new("outfits/creat_neut_masc.jpg"))
            .unwrap();

        let written = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(written, "outfits/creat_neut_masc.jpg\n");
    }

    #[test]
    fn test_missing_file_with_check() {
        let printer = PathPrinter::new(Vec::new()).with_check_exists(true);
        let err = printer
            .display(Path::new("/nonexistent/outfits/cas_cool_fem.jpg"))
            .unwrap_err();
        assert!(matches!(err, PresentError::NotFound(_)));
    }
}

//! Media presenter adapters.
//!
//! Provides [`SystemImageViewer`], which opens outfit images with the
//! platform's image viewer and implements the
//! [`MediaPresenter`](styler_application::MediaPresenter) port.

mod viewer;

pub use viewer::SystemImageViewer;

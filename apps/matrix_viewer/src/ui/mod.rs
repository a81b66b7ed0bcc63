//! UI layer: app shell, scene building, and the egui and SVG backends.

pub mod app;
pub mod layout;
pub mod painter;
pub mod scene;
pub mod svg;

pub use app::{MatrixViewerApp, StartupConfig, DEFAULT_ENDPOINT};

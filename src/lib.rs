//! Lissajous figure generator.
//!
//! The core is [`LissajousGenerator`], which samples `(sin(a·t), sin(b·t))`
//! over a configurable range into a [`LissajousFigure`]. Around it sit the
//! pieces of the desktop tool built on egui/eframe:
//! - `palette`: display-name to color mapping persisted as JSON
//! - `settings`: per-figure settings parsed from the control panel
//! - `export`: rasterizing a figure to PNG/JPEG
//! - `config`: top-level application configuration
//! - `app`: the window and its [`run_lissajous`] entry point

mod app;

pub mod config;
pub mod export;
pub mod generator;
pub mod palette;
pub mod settings;

pub use app::{run_lissajous, LissajousApp, PlotError};
pub use config::LissajousConfig;
pub use generator::{GenerateError, LissajousFigure, LissajousGenerator, SamplingConfig};
pub use palette::ColorPalette;
pub use settings::FigureSettings;

//! Top-level configuration of the Lissajous application.

use std::path::PathBuf;

use crate::generator::SamplingConfig;
use crate::settings::{FigureSettings, LINE_WIDTHS};

/// Crate version, shown in the window title.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration consumed by [`run_lissajous`](crate::run_lissajous).
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `sampling`       | Parameter range and resolution for every generated figure |
/// | `initial`        | Figure drawn on start-up; `None` derives defaults from the palette |
/// | `palette_path`   | Palette JSON location; `None` uses [`default_palette_path`](crate::palette::default_palette_path) |
/// | `line_widths`    | Choices offered in the width selector |
/// | `export_size`    | Edge length in pixels of exported images |
pub struct LissajousConfig {
    /// Native window title. `None` uses `"Lissajous Figure Generator v<version>"`.
    pub title: Option<String>,
    pub sampling: SamplingConfig,
    pub initial: Option<FigureSettings>,
    pub palette_path: Option<PathBuf>,
    pub line_widths: Vec<f32>,
    pub export_size: u32,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for LissajousConfig {
    fn default() -> Self {
        Self {
            title: None,
            sampling: SamplingConfig::default(),
            initial: None,
            palette_path: None,
            line_widths: LINE_WIDTHS.to_vec(),
            export_size: 400,
            native_options: None,
        }
    }
}

impl LissajousConfig {
    pub fn window_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Lissajous Figure Generator v{VERSION}"))
    }
}

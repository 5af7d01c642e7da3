//! Standalone application window for the Lissajous generator.
//!
//! [`LissajousApp`] implements [`eframe::App`]: a left control panel with the
//! frequency fields, color and width selectors and the Plot / Save buttons,
//! and a central plot showing the current figure.

use std::path::Path;

use egui::Color32;
use egui_plot::{Line, Plot, PlotPoints};
use thiserror::Error;

use crate::config::LissajousConfig;
use crate::export::{self, ExportError, RenderStyle};
use crate::generator::{GenerateError, LissajousFigure, LissajousGenerator};
use crate::palette::{ColorPalette, PaletteError};
use crate::settings::{format_width, FigureSettings, SettingsError};

/// Why a Plot request was rejected.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Lissajous figure window state.
pub struct LissajousApp {
    pub generator: LissajousGenerator,
    pub palette: ColorPalette,
    /// Settings of the figure currently shown.
    pub settings: FigureSettings,
    pub figure: Option<LissajousFigure>,
    pub line_color: Color32,

    // ── Control panel buffers ────────────────────────────────────────────────
    pub freq_x_text: String,
    pub freq_y_text: String,
    pub color_choice: String,
    pub width_choice: String,
    pub line_widths: Vec<f32>,

    pub export_size: u32,
    /// Message from the last failed action, shown under the buttons.
    pub last_error: Option<String>,
}

impl LissajousApp {
    /// Build the app and draw the initial figure.
    pub fn new(cfg: &LissajousConfig, palette: ColorPalette) -> Self {
        let settings = cfg
            .initial
            .clone()
            .unwrap_or_else(|| FigureSettings::default_for(&palette));
        let mut app = Self {
            generator: LissajousGenerator::with_config(cfg.sampling),
            freq_x_text: settings.freq_x.to_string(),
            freq_y_text: settings.freq_y.to_string(),
            color_choice: settings.color.clone(),
            width_choice: format_width(settings.width),
            line_widths: cfg.line_widths.clone(),
            palette,
            settings: settings.clone(),
            figure: None,
            line_color: Color32::from_rgb(25, 25, 112),
            export_size: cfg.export_size,
            last_error: None,
        };
        if let Err(e) = app.plot(settings) {
            eprintln!("Failed to draw initial figure: {e}");
            app.last_error = Some(e.to_string());
        }
        app
    }

    /// Regenerate the figure from the control panel values.
    ///
    /// On failure the previous figure stays on screen and the error is kept
    /// in [`last_error`](Self::last_error).
    pub fn plot_clicked(&mut self) {
        let parsed = FigureSettings::parse(
            &self.freq_x_text,
            &self.freq_y_text,
            &self.color_choice,
            &self.width_choice,
            &self.palette,
        );
        match parsed.map_err(PlotError::from).and_then(|s| self.plot(s)) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                eprintln!("Failed to plot figure: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Generate and show the figure for `settings`.
    pub fn plot(&mut self, settings: FigureSettings) -> Result<(), PlotError> {
        let color = self.palette.resolve(&settings.color)?;
        let figure = self.generator.generate(settings.freq_x, settings.freq_y)?;
        self.line_color = color;
        self.figure = Some(figure);
        self.settings = settings;
        Ok(())
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            color: self.line_color,
            width: self.settings.width,
            size: self.export_size,
            ..RenderStyle::default()
        }
    }

    /// Write the current figure to `path`.
    ///
    /// Fails with [`ExportError::NoFigure`] when nothing has been plotted.
    pub fn save_to(&self, path: &Path) -> Result<(), ExportError> {
        let figure = self.figure.as_ref().ok_or(ExportError::NoFigure)?;
        export::save_figure(path, figure, &self.render_style())
    }

    /// Ask for a destination and save the current figure there.
    fn save_clicked(&mut self) {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(std::path::PathBuf::from);
        let mut dlg = rfd::FileDialog::new()
            .set_title("Save image")
            .set_file_name(export::default_file_name(&self.settings))
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .add_filter("All Files", &["*"]);
        if let Some(dir) = home {
            dlg = dlg.set_directory(dir);
        }
        let Some(path) = dlg.save_file() else {
            return;
        };
        match self.save_to(&path) {
            Ok(()) => {
                eprintln!("Saved figure to {:?}", path);
                self.last_error = None;
            }
            Err(e) => {
                eprintln!("Failed to save figure: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Figure");
        egui::Grid::new("figure_settings")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Frequency X");
                ui.text_edit_singleline(&mut self.freq_x_text);
                ui.end_row();

                ui.label("Frequency Y");
                ui.text_edit_singleline(&mut self.freq_y_text);
                ui.end_row();

                ui.label("Color");
                egui::ComboBox::from_id_salt("line_color")
                    .selected_text(self.color_choice.clone())
                    .show_ui(ui, |ui| {
                        for name in self.palette.names() {
                            ui.selectable_value(&mut self.color_choice, name.to_string(), name);
                        }
                    });
                ui.end_row();

                ui.label("Line width");
                egui::ComboBox::from_id_salt("line_width")
                    .selected_text(self.width_choice.clone())
                    .show_ui(ui, |ui| {
                        for w in &self.line_widths {
                            let label = format_width(*w);
                            ui.selectable_value(&mut self.width_choice, label.clone(), label);
                        }
                    });
                ui.end_row();
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Plot", egui_phosphor::regular::ARROWS_CLOCKWISE))
                .on_hover_text("Redraw with the settings above")
                .clicked()
            {
                self.plot_clicked();
            }
            if ui
                .button(format!("{} Save", egui_phosphor::regular::FLOPPY_DISK))
                .on_hover_text("Export the figure as an image")
                .clicked()
            {
                self.save_clicked();
            }
        });

        if let Some(err) = &self.last_error {
            ui.colored_label(Color32::RED, err);
        }
    }

    fn plot_ui(&self, ui: &mut egui::Ui) {
        let line = self.figure.as_ref().map(|f| {
            Line::new("lissajous", PlotPoints::from(f.points()))
                .color(self.line_color)
                .width(self.settings.width)
        });
        Plot::new("lissajous_plot")
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                if let Some(line) = line {
                    plot_ui.line(line);
                }
            });
    }
}

impl eframe::App for LissajousApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| self.controls_ui(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.plot_ui(ui));
    }
}

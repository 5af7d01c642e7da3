//! Raster export of a figure.
//!
//! The curve is stroked onto a square [`tiny_skia::Pixmap`] and handed to the
//! `image` crate, which picks the encoder from the file extension.

use std::path::Path;

use egui::Color32;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use thiserror::Error;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::generator::LissajousFigure;
use crate::settings::FigureSettings;

/// Fraction of the canvas left empty on each side.
const MARGIN_FRACTION: f32 = 0.05;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no figure to export")]
    NoFigure,
    #[error("canvas size {0} is not drawable")]
    InvalidSize(u32),
    #[error("unsupported image format for {0:?}")]
    UnsupportedFormat(std::path::PathBuf),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// How a figure is rasterized.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub color: Color32,
    pub width: f32,
    /// Edge length of the square canvas in pixels.
    pub size: u32,
    pub background: Color32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(25, 25, 112),
            width: 1.0,
            size: 400,
            background: Color32::WHITE,
        }
    }
}

/// Rasterize `figure` into an RGBA image.
pub fn render_figure(figure: &LissajousFigure, style: &RenderStyle) -> Result<RgbaImage, ExportError> {
    let size = style.size;
    let mut pixmap = Pixmap::new(size, size).ok_or(ExportError::InvalidSize(size))?;
    let bg = style.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.r(), bg.g(), bg.b(), bg.a()));

    let mut paint = Paint::default();
    let c = style.color.to_srgba_unmultiplied();
    paint.set_color_rgba8(c[0], c[1], c[2], c[3]);
    paint.anti_alias = true;

    if let Some(bounds) = figure.bounds() {
        let map = CanvasMapping::new(bounds, size as f32);
        let mut pb = PathBuilder::new();
        let mut pen_down = false;
        let mut segments = 0usize;
        let mut last = None;
        for [x, y] in figure.points() {
            if !(x.is_finite() && y.is_finite()) {
                pen_down = false;
                continue;
            }
            let (px, py) = map.apply(x, y);
            if pen_down {
                pb.line_to(px, py);
                segments += 1;
            } else {
                pb.move_to(px, py);
                pen_down = true;
            }
            last = Some((px, py));
        }

        if segments > 0 {
            if let Some(path) = pb.finish() {
                let stroke = Stroke {
                    width: style.width,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        } else if let Some((px, py)) = last {
            // Lone sample: draw it as a dot of the line width.
            if let Some(dot) = PathBuilder::from_circle(px, py, (style.width / 2.0).max(0.5)) {
                pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    }

    let mut out = RgbaImage::new(size, size);
    for (i, p) in pixmap.pixels().iter().enumerate() {
        let p = p.demultiply();
        let (x, y) = (i as u32 % size, i as u32 / size);
        out.put_pixel(x, y, Rgba([p.red(), p.green(), p.blue(), p.alpha()]));
    }
    Ok(out)
}

/// Render `figure` and write it to `path`, format chosen by the extension.
pub fn save_figure(path: &Path, figure: &LissajousFigure, style: &RenderStyle) -> Result<(), ExportError> {
    let format =
        ImageFormat::from_path(path).map_err(|_| ExportError::UnsupportedFormat(path.to_path_buf()))?;
    let img = DynamicImage::ImageRgba8(render_figure(figure, style)?);
    match format {
        // JPEG has no alpha channel.
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(path, format)?,
        _ => img.save_with_format(path, format)?,
    }
    Ok(())
}

/// Suggested file name for the save dialog.
pub fn default_file_name(settings: &FigureSettings) -> String {
    format!(
        "lissajous_{}x{}_{}.png",
        settings.freq_x,
        settings.freq_y,
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    )
}

// Data space to pixel space, y pointing up, aspect ratio preserved.
struct CanvasMapping {
    center: [f64; 2],
    scale: f64,
    half: f64,
}

impl CanvasMapping {
    fn new((min, max): ([f64; 2], [f64; 2]), size: f32) -> Self {
        let span = (max[0] - min[0]).max(max[1] - min[1]);
        let span = if span > 0.0 { span } else { 2.0 };
        let drawable = size as f64 * (1.0 - 2.0 * MARGIN_FRACTION as f64);
        Self {
            center: [(min[0] + max[0]) / 2.0, (min[1] + max[1]) / 2.0],
            scale: drawable / span,
            half: size as f64 / 2.0,
        }
    }

    fn apply(&self, x: f64, y: f64) -> (f32, f32) {
        (
            (self.half + (x - self.center[0]) * self.scale) as f32,
            (self.half - (y - self.center[1]) * self.scale) as f32,
        )
    }
}

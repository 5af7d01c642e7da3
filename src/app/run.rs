//! Top-level entry point for running the Lissajous generator as a native window.

use eframe::egui;

use crate::config::LissajousConfig;
use crate::palette::{default_palette_path, ColorPalette};

use super::lissajous_app::LissajousApp;

/// Launch the Lissajous generator in a native window.
///
/// Loads the color palette (creating the file with defaults if it is
/// missing), draws the initial figure and enters the eframe event loop.
/// Blocks until the window is closed.
pub fn run_lissajous(mut cfg: LissajousConfig) -> eframe::Result<()> {
    let palette_path = cfg.palette_path.clone().unwrap_or_else(default_palette_path);
    let palette = match ColorPalette::load_or_create(&palette_path) {
        Ok(p) if !p.is_empty() => p,
        Ok(_) => {
            eprintln!("Palette {:?} is empty, using built-in colors", palette_path);
            ColorPalette::default()
        }
        Err(e) => {
            eprintln!("Failed to load palette: {e}; using built-in colors");
            ColorPalette::default()
        }
    };
    let app = LissajousApp::new(&cfg, palette);

    let title = cfg.window_title();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = app_icon() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(640.0, 440.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Window icon, embedded at build time.
const ICON_SVG: &[u8] = include_bytes!("../../icon.svg");

/// Rasterize [`ICON_SVG`] at its natural size.
fn app_icon() -> Option<egui::IconData> {
    let tree = usvg::Tree::from_data(ICON_SVG, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    Some(egui::IconData {
        width: pixmap.width(),
        height: pixmap.height(),
        rgba: pixmap.take(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_rasterizes() {
        let icon = app_icon().unwrap();
        assert!(icon.width > 0 && icon.height > 0);
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
        assert!(icon.rgba.chunks(4).any(|px| px[3] > 0));
    }
}

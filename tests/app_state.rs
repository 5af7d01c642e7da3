use egui::Color32;
use lissajous::export::ExportError;
use lissajous::palette::ColorPalette;
use lissajous::{LissajousApp, LissajousConfig, SamplingConfig};

#[test]
fn initial_figure_uses_default_settings() {
    let app = LissajousApp::new(&LissajousConfig::default(), ColorPalette::default());
    let fig = app.figure.as_ref().unwrap();
    assert_eq!(fig.len(), 100);
    assert_eq!(app.freq_x_text, "3");
    assert_eq!(app.freq_y_text, "2");
    assert_eq!(app.color_choice, "Blue");
    assert_eq!(app.width_choice, "1");
    assert_eq!(app.line_color, Color32::from_rgb(25, 25, 112));
    assert!(app.last_error.is_none());
}

#[test]
fn plot_click_applies_new_values() {
    let mut app = LissajousApp::new(&LissajousConfig::default(), ColorPalette::default());
    app.freq_x_text = "5".to_string();
    app.freq_y_text = "4".to_string();
    app.color_choice = "Red".to_string();
    app.width_choice = "3".to_string();
    app.plot_clicked();

    assert!(app.last_error.is_none());
    assert_eq!(app.settings.freq_x, 5.0);
    assert_eq!(app.settings.width, 3.0);
    assert_eq!(app.line_color, Color32::from_rgb(220, 20, 60));
    let fig = app.figure.as_ref().unwrap();
    let expected = app.generator.generate(5.0, 4.0).unwrap();
    assert_eq!(fig, &expected);
}

#[test]
fn bad_input_keeps_previous_figure() {
    let mut app = LissajousApp::new(&LissajousConfig::default(), ColorPalette::default());
    let before = app.figure.clone();
    app.freq_x_text = "abc".to_string();
    app.plot_clicked();
    assert!(app.last_error.is_some());
    assert_eq!(app.figure, before);
    assert_eq!(app.settings.freq_x, 3.0);

    app.freq_x_text = "3".to_string();
    app.plot_clicked();
    assert!(app.last_error.is_none());
}

#[test]
fn zero_resolution_reports_error_at_startup() {
    let cfg = LissajousConfig {
        sampling: SamplingConfig::new(0.0, 1.0, 0),
        ..LissajousConfig::default()
    };
    let app = LissajousApp::new(&cfg, ColorPalette::default());
    assert!(app.figure.is_none());
    assert!(app.last_error.is_some());
}

#[test]
fn save_writes_current_figure() {
    let dir = std::env::temp_dir().join(format!("lissajous_app_save_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let app = LissajousApp::new(
        &LissajousConfig {
            export_size: 64,
            ..LissajousConfig::default()
        },
        ColorPalette::default(),
    );
    let path = dir.join("out.png");
    app.save_to(&path).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (64, 64));
}

#[test]
fn save_without_figure_is_an_error() {
    let dir = std::env::temp_dir().join(format!("lissajous_app_nofig_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let cfg = LissajousConfig {
        sampling: SamplingConfig::new(0.0, 1.0, 0),
        ..LissajousConfig::default()
    };
    let app = LissajousApp::new(&cfg, ColorPalette::default());
    let path = dir.join("empty.png");
    let _ = std::fs::remove_file(&path);

    let err = app.save_to(&path).unwrap_err();
    assert!(matches!(err, ExportError::NoFigure));
    assert_eq!(err.to_string(), "no figure to export");
    assert!(!path.exists());
}

#[test]
fn window_title_carries_version() {
    let title = LissajousConfig::default().window_title();
    assert!(title.ends_with(env!("CARGO_PKG_VERSION")));
}

use egui::Color32;
use lissajous::palette::*;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lissajous_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn default_palette_entries() {
    let p = ColorPalette::default();
    let names: Vec<&str> = p.names().collect();
    assert_eq!(names, vec!["Red", "Green", "Yellow", "Blue"]);
    assert_eq!(p.value("Red"), Some("crimson"));
    assert_eq!(p.value("Blue"), Some("midnightblue"));
    assert_eq!(p.resolve("Yellow").unwrap(), Color32::from_rgb(255, 215, 0));
}

#[test]
fn unknown_name_is_an_error() {
    let p = ColorPalette::default();
    assert!(matches!(p.resolve("Mauve"), Err(PaletteError::UnknownName(_))));
}

#[test]
fn json_is_a_flat_object() {
    let p = ColorPalette::from_entries([("Pink", "#ff69b4")]);
    let json = p.to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["Pink"], "#ff69b4");
    assert_eq!(ColorPalette::from_json(&json).unwrap(), p);
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = scratch_dir("palette_create");
    let path = dir.join("palette.json");
    let p = ColorPalette::load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(p, ColorPalette::default());
}

#[test]
fn existing_file_is_loaded_untouched() {
    let dir = scratch_dir("palette_existing");
    let path = dir.join("palette.json");
    std::fs::write(&path, r##"{"Красный": "crimson", "Teal": "#008080"}"##).unwrap();
    let p = ColorPalette::load_or_create(&path).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.resolve("Красный").unwrap(), Color32::from_rgb(220, 20, 60));
    assert_eq!(p.resolve("Teal").unwrap(), Color32::from_rgb(0, 128, 128));
}

#[test]
fn malformed_file_is_a_json_error() {
    let dir = scratch_dir("palette_bad");
    let path = dir.join("palette.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        ColorPalette::load_or_create(&path),
        Err(PaletteError::Json(_))
    ));
}

#[test]
fn bad_color_value_surfaces_on_resolve() {
    let p = ColorPalette::from_entries([("Odd", "chartreuse-ish")]);
    assert!(matches!(p.resolve("Odd"), Err(PaletteError::InvalidColor(_))));
}

#[test]
fn file_order_is_kept() {
    let json = r##"{"Zinc": "#7f7f7f", "Amber": "#ffbf00", "Mint": "#98ff98"}"##;
    let p = ColorPalette::from_json(json).unwrap();
    let names: Vec<&str> = p.names().collect();
    assert_eq!(names, vec!["Zinc", "Amber", "Mint"]);

    let written = p.to_json().unwrap();
    let zinc = written.find("Zinc").unwrap();
    let amber = written.find("Amber").unwrap();
    let mint = written.find("Mint").unwrap();
    assert!(zinc < amber && amber < mint);
}

#[test]
fn created_file_lists_defaults_in_order() {
    let dir = scratch_dir("palette_order");
    let path = dir.join("palette.json");
    ColorPalette::load_or_create(&path).unwrap();
    let txt = std::fs::read_to_string(&path).unwrap();
    let pos: Vec<usize> = ["Red", "Green", "Yellow", "Blue"]
        .iter()
        .map(|n| txt.find(n).unwrap())
        .collect();
    assert!(pos.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn plotting_color_notations_resolve() {
    let p = ColorPalette::from_entries([
        ("Violet", "darkviolet"),
        ("Coral", "coral"),
        ("Short", "#f00"),
        ("Letter", "b"),
        ("Gray", "0.25"),
    ]);
    for name in ["Violet", "Coral", "Short", "Letter", "Gray"] {
        assert!(p.resolve(name).is_ok(), "{name} should resolve");
    }
    assert_eq!(p.resolve("Short").unwrap(), Color32::from_rgb(255, 0, 0));
    assert_eq!(p.resolve("Letter").unwrap(), Color32::from_rgb(0, 0, 255));
}

use lissajous::palette::ColorPalette;
use lissajous::settings::*;

#[test]
fn defaults_match_initial_figure() {
    let s = FigureSettings::default();
    assert_eq!(s.freq_x, 3.0);
    assert_eq!(s.freq_y, 2.0);
    assert_eq!(s.color, "Blue");
    assert_eq!(s.width, 1.0);
}

#[test]
fn defaults_follow_palette_names() {
    let palette = ColorPalette::from_entries([("Синий", "midnightblue"), ("Жёлтый", "gold")]);
    assert_eq!(FigureSettings::default_for(&palette).color, "Синий");

    let palette = ColorPalette::from_entries([("Only", "gold")]);
    assert_eq!(FigureSettings::default_for(&palette).color, "Only");
}

#[test]
fn parses_control_values() {
    let palette = ColorPalette::default();
    let s = FigureSettings::parse(" 5 ", "4.5", "Red", "3", &palette).unwrap();
    assert_eq!(
        s,
        FigureSettings {
            freq_x: 5.0,
            freq_y: 4.5,
            color: "Red".to_string(),
            width: 3.0
        }
    );
}

#[test]
fn rejects_bad_values() {
    let palette = ColorPalette::default();
    assert_eq!(
        FigureSettings::parse("three", "2", "Red", "1", &palette),
        Err(SettingsError::InvalidFrequency("three".to_string()))
    );
    assert_eq!(
        FigureSettings::parse("3", "", "Red", "1", &palette),
        Err(SettingsError::InvalidFrequency(String::new()))
    );
    assert_eq!(
        FigureSettings::parse("3", "2", "Mauve", "1", &palette),
        Err(SettingsError::UnknownColor("Mauve".to_string()))
    );
    assert_eq!(
        FigureSettings::parse("3", "2", "Red", "0", &palette),
        Err(SettingsError::InvalidWidth("0".to_string()))
    );
}

#[test]
fn width_labels() {
    assert_eq!(format_width(2.0), "2");
    assert_eq!(format_width(2.5), "2.5");
    assert_eq!(parse_width(&format_width(4.0)).unwrap(), 4.0);
}

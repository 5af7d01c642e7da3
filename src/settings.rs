//! Per-figure drawing settings and their parsing from the control panel text.

use thiserror::Error;

use crate::palette::ColorPalette;

/// Line widths offered in the width selector.
pub const LINE_WIDTHS: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("frequency '{0}' is not a number")]
    InvalidFrequency(String),
    #[error("color '{0}' is not in the palette")]
    UnknownColor(String),
    #[error("line width '{0}' must be a positive number")]
    InvalidWidth(String),
}

/// What to draw: the frequency pair plus the line look.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSettings {
    pub freq_x: f64,
    pub freq_y: f64,
    /// Palette display name.
    pub color: String,
    pub width: f32,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            freq_x: 3.0,
            freq_y: 2.0,
            color: "Blue".to_string(),
            width: 1.0,
        }
    }
}

impl FigureSettings {
    /// Defaults adjusted to `palette`: keeps the default color name if the
    /// palette has it, otherwise the entry mapped to `midnightblue`, otherwise
    /// the first entry.
    pub fn default_for(palette: &ColorPalette) -> Self {
        let mut s = Self::default();
        if !palette.contains(&s.color) {
            if let Some(name) = palette
                .name_for_value("midnightblue")
                .or_else(|| palette.names().next())
            {
                s.color = name.to_string();
            }
        }
        s
    }

    /// Build settings from the raw control values.
    pub fn parse(
        freq_x: &str,
        freq_y: &str,
        color: &str,
        width: &str,
        palette: &ColorPalette,
    ) -> Result<Self, SettingsError> {
        let freq_x = parse_frequency(freq_x)?;
        let freq_y = parse_frequency(freq_y)?;
        if !palette.contains(color) {
            return Err(SettingsError::UnknownColor(color.to_string()));
        }
        let width = parse_width(width)?;
        Ok(Self {
            freq_x,
            freq_y,
            color: color.to_string(),
            width,
        })
    }
}

pub fn parse_frequency(text: &str) -> Result<f64, SettingsError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| SettingsError::InvalidFrequency(text.to_string()))
}

pub fn parse_width(text: &str) -> Result<f32, SettingsError> {
    match text.trim().parse::<f32>() {
        Ok(w) if w.is_finite() && w > 0.0 => Ok(w),
        _ => Err(SettingsError::InvalidWidth(text.to_string())),
    }
}

/// Text shown for a width in the selector (`1`, `2.5`).
pub fn format_width(width: f32) -> String {
    if width.fract() == 0.0 {
        format!("{}", width as i64)
    } else {
        format!("{width}")
    }
}

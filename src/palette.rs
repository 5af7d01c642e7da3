//! Color palette: display names shown in the UI mapped to color values.
//!
//! The palette is persisted as a flat JSON object (`{"Red": "crimson", ...}`)
//! whose key order is the order shown in the color selector. Values use the
//! usual plotting color notation: CSS4 names, single-letter base colors
//! (`r`, `k`, ...), `tab:` Tableau names, hex (`#rgb`, `#rgba`, `#rrggbb`,
//! `#rrggbbaa`) and gray levels (`"0.5"`). They are resolved to [`Color32`]
//! only when a figure is drawn.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use egui::Color32;
use once_cell::sync::Lazy;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Environment variable that overrides the palette file location.
pub const PALETTE_PATH_ENV: &str = "LISSAJOUS_PALETTE";
/// File name used when no override is given.
pub const PALETTE_FILE_NAME: &str = "palette.json";

// CSS4 named colors.
const CSS4_COLORS: [(&str, [u8; 3]); 148] = [
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

// Single-letter base colors and the Tableau palette, as plotting tools name them.
const BASE_COLORS: [(&str, [u8; 3]); 8] = [
    ("b", [0, 0, 255]),
    ("g", [0, 128, 0]),
    ("r", [255, 0, 0]),
    ("c", [0, 191, 191]),
    ("m", [191, 0, 191]),
    ("y", [191, 191, 0]),
    ("k", [0, 0, 0]),
    ("w", [255, 255, 255]),
];

const TABLEAU_COLORS: [(&str, [u8; 3]); 11] = [
    ("tab:blue", [31, 119, 180]),
    ("tab:orange", [255, 127, 14]),
    ("tab:green", [44, 160, 44]),
    ("tab:red", [214, 39, 40]),
    ("tab:purple", [148, 103, 189]),
    ("tab:brown", [140, 86, 75]),
    ("tab:pink", [227, 119, 194]),
    ("tab:gray", [127, 127, 127]),
    ("tab:grey", [127, 127, 127]),
    ("tab:olive", [188, 189, 34]),
    ("tab:cyan", [23, 190, 207]),
];

static NAMED_COLORS: Lazy<HashMap<&'static str, Color32>> = Lazy::new(|| {
    CSS4_COLORS
        .iter()
        .chain(BASE_COLORS.iter())
        .chain(TABLEAU_COLORS.iter())
        .map(|&(name, [r, g, b])| (name, Color32::from_rgb(r, g, b)))
        .collect()
});

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("palette JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown color name '{0}'")]
    UnknownName(String),
    #[error("unrecognized color value '{0}'")]
    InvalidColor(String),
}

/// Display name to color value mapping, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    entries: Vec<(String, String)>,
}

impl Serialize for ColorPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, v)| (n, v)))
    }
}

impl<'de> Deserialize<'de> for ColorPalette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PaletteVisitor;

        impl<'de> Visitor<'de> for PaletteVisitor {
            type Value = ColorPalette;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping display names to color values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut palette = ColorPalette::empty();
                while let Some((name, value)) = map.next_entry::<String, String>()? {
                    palette.insert(name, value);
                }
                Ok(palette)
            }
        }

        deserializer.deserialize_map(PaletteVisitor)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::from_entries([
            ("Red", "crimson"),
            ("Green", "green"),
            ("Yellow", "gold"),
            ("Blue", "midnightblue"),
        ])
    }
}

impl ColorPalette {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries<N, V>(entries: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut palette = Self::empty();
        for (n, v) in entries {
            palette.insert(n.into(), v.into());
        }
        palette
    }

    /// Add an entry at the end, or replace the value of an existing name in place.
    pub fn insert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Display names in UI order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Raw color value stored under `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// First display name whose value is `value` (case-insensitive).
    pub fn name_for_value(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, v)| v.eq_ignore_ascii_case(value))
            .map(|(n, _)| n.as_str())
    }

    /// Resolve a display name all the way to a drawable color.
    pub fn resolve(&self, name: &str) -> Result<Color32, PaletteError> {
        let value = self
            .value(name)
            .ok_or_else(|| PaletteError::UnknownName(name.to_string()))?;
        parse_color(value)
    }

    pub fn to_json(&self) -> Result<String, PaletteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the palette at `path`, writing the default palette there first if
    /// the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, PaletteError> {
        if !path.exists() {
            let json = Self::default().to_json()?;
            std::fs::write(path, json).map_err(|source| PaletteError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let txt = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&txt)
    }
}

/// Where the palette file lives: `$LISSAJOUS_PALETTE`, else beside the
/// executable, else the working directory.
pub fn default_palette_path() -> PathBuf {
    if let Some(p) = std::env::var_os(PALETTE_PATH_ENV) {
        return PathBuf::from(p);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(PALETTE_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(PALETTE_FILE_NAME))
}

/// Parse a palette value into a color.
///
/// Accepts a named color (CSS4, `tab:` or a single base letter), a hex string
/// with 3, 4, 6 or 8 digits, or a gray level between `"0"` and `"1"`.
pub fn parse_color(value: &str) -> Result<Color32, PaletteError> {
    let v = value.trim();
    let invalid = || PaletteError::InvalidColor(value.to_string());
    if let Some(hex) = v.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }
    if let Some(c) = NAMED_COLORS.get(v) {
        return Ok(*c);
    }
    // Base letters are case-sensitive; longer names are not.
    if v.len() > 1 {
        if let Some(c) = NAMED_COLORS.get(v.to_ascii_lowercase().as_str()) {
            return Ok(*c);
        }
    }
    match v.parse::<f32>() {
        Ok(level) if (0.0..=1.0).contains(&level) => {
            let l = (level * 255.0).round() as u8;
            Ok(Color32::from_rgb(l, l, l))
        }
        _ => Err(invalid()),
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digits: Vec<u8> = match hex.len() {
        // #rgb / #rgba: each digit doubled.
        3 | 4 => hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
            .collect::<Option<_>>()?,
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };
    let a = digits.get(3).copied().unwrap_or(255);
    Some(Color32::from_rgba_unmultiplied(digits[0], digits[1], digits[2], a))
}

// src/services/colors.rs
use crate::models::{ColorSuggestion, ColorType, Rgb, RoomType, SurfacePlacement};
use crate::services::catalog::{color_palette, PaletteEntry};
use crate::services::random::RandomSource;

/// Decodes `#RRGGBB` (the `#` is optional, digits are case-insensitive).
/// Anything else decodes to black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgb { r: 0, g: 0, b: 0 };
    }
    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).unwrap_or(0);
    Rgb {
        r: channel(0..2),
        g: channel(2..4),
        b: channel(4..6),
    }
}

/// Perceived brightness on a 0-255 scale.
pub fn brightness(rgb: Rgb) -> f64 {
    0.299 * rgb.r as f64 + 0.587 * rgb.g as f64 + 0.114 * rgb.b as f64
}

pub fn mood_for(rgb: Rgb) -> Vec<String> {
    let words: [&str; 3] = match brightness(rgb) {
        b if b > 200.0 => ["Bright", "Energetic", "Clean"],
        b if b > 128.0 => ["Balanced", "Comfortable", "Versatile"],
        _ => ["Cozy", "Sophisticated", "Intimate"],
    };
    words.iter().map(|w| w.to_string()).collect()
}

fn surfaces_for(color_type: ColorType) -> Vec<String> {
    let surfaces: &[&str] = match color_type {
        ColorType::Wall => &["north_wall", "east_wall"],
        ColorType::Accent => &["accent_wall"],
        ColorType::Furniture => &["sofa", "chairs"],
        ColorType::Textile => &["curtains", "cushions", "rugs"],
        ColorType::Floor => &["floor"],
    };
    surfaces.iter().map(|s| s.to_string()).collect()
}

fn suggestion_from(entry: &PaletteEntry, index: usize, confidence: f64) -> ColorSuggestion {
    let rgb = hex_to_rgb(entry.hex);
    ColorSuggestion {
        id: format!("color_{}", index + 1),
        name: entry.name.to_string(),
        hex: entry.hex.to_string(),
        rgb,
        color_type: entry.color_type,
        area: entry.area.to_string(),
        confidence,
        mood: mood_for(rgb),
        position_3d: SurfacePlacement {
            surfaces: surfaces_for(entry.color_type),
        },
    }
}

/// Palette for the room type, at most `count` entries, each with a confidence
/// in `[80, 100)`.
pub fn generate_colors(
    room_type: RoomType,
    count: usize,
    random: &dyn RandomSource,
) -> Vec<ColorSuggestion> {
    color_palette(room_type)
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, entry)| suggestion_from(entry, index, 80.0 + random.next_f64() * 20.0))
        .collect()
}

// File: crates/grid-render-skia/src/color.rs
// Summary: Color-name and hex parsing for pen colors.

use grid_core::SurfaceError;
use skia_safe as skia;

// Tk color values, so "gray" matches what turtle-style callers expect.
const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0x00, 0x00, 0x00)),
    ("white", (0xff, 0xff, 0xff)),
    ("gray", (0xbe, 0xbe, 0xbe)),
    ("grey", (0xbe, 0xbe, 0xbe)),
    ("lightgray", (0xd3, 0xd3, 0xd3)),
    ("lightgrey", (0xd3, 0xd3, 0xd3)),
    ("darkgray", (0xa9, 0xa9, 0xa9)),
    ("darkgrey", (0xa9, 0xa9, 0xa9)),
    ("dimgray", (0x69, 0x69, 0x69)),
    ("dimgrey", (0x69, 0x69, 0x69)),
    ("silver", (0xc0, 0xc0, 0xc0)),
    ("red", (0xff, 0x00, 0x00)),
    ("darkred", (0x8b, 0x00, 0x00)),
    ("green", (0x00, 0xff, 0x00)),
    ("darkgreen", (0x00, 0x64, 0x00)),
    ("blue", (0x00, 0x00, 0xff)),
    ("navy", (0x00, 0x00, 0x80)),
    ("lightblue", (0xad, 0xd8, 0xe6)),
    ("skyblue", (0x87, 0xce, 0xeb)),
    ("yellow", (0xff, 0xff, 0x00)),
    ("orange", (0xff, 0xa5, 0x00)),
    ("cyan", (0x00, 0xff, 0xff)),
    ("magenta", (0xff, 0x00, 0xff)),
    ("purple", (0xa0, 0x20, 0xf0)),
    ("brown", (0xa5, 0x2a, 0x2a)),
    ("pink", (0xff, 0xc0, 0xcb)),
];

/// Parse a color name (case and spaces ignored) or `#rgb` / `#rrggbb`.
pub fn parse_color(name: &str) -> Result<skia::Color, SurfaceError> {
    let key: String = name.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_lowercase();
    if let Some(hex) = key.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| SurfaceError::InvalidColor(name.to_string()));
    }
    NAMED
        .iter()
        .find(|(n, _)| *n == key)
        .map(|&(_, (r, g, b))| skia::Color::from_rgb(r, g, b))
        .ok_or_else(|| SurfaceError::InvalidColor(name.to_string()))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1])? * 17;
            let g = channel(&hex[1..2])? * 17;
            let b = channel(&hex[2..3])? * 17;
            Some(skia::Color::from_rgb(r, g, b))
        }
        6 => Some(skia::Color::from_rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

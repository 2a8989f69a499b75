// File: crates/grid-core/src/config.rs
// Summary: Grid styling/stepping options with defaults, and their normalized per-render form.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{GridError, Result};

/// Default spacing of major gridlines.
pub const DEFAULT_MAJOR_STEP: i32 = 100;
/// Default label font size.
pub const DEFAULT_FONT_SIZE: u32 = 14;
/// Default diameter of the scale marker dots.
pub const DEFAULT_POINT_SIZE: u32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    #[serde(rename = "bold italic")]
    BoldItalic,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::BoldItalic => "bold italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontStyle {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let norm = s.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_lowercase();
        match norm.as_str() {
            "normal" => Ok(FontStyle::Normal),
            "bold" => Ok(FontStyle::Bold),
            "italic" => Ok(FontStyle::Italic),
            "bold italic" | "italic bold" => Ok(FontStyle::BoldItalic),
            _ => Err(GridError::Config(format!("unknown font style '{s}'"))),
        }
    }
}

/// Font used for scale labels. `family = None` leaves the choice to the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSpec {
    pub family: Option<String>,
    pub size: u32,
    pub style: FontStyle,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self { family: None, size: DEFAULT_FONT_SIZE, style: FontStyle::Normal }
    }
}

/// All options recognized by the grid renderer.
///
/// Every field is optional in serialized form; missing fields take the
/// values of [`GridConfig::default`]:
///
/// | field | default |
/// |---|---|
/// | `major_line_step` | 100 |
/// | `minor_line_step` | 0 (disabled) |
/// | `major_line_color` / `minor_line_color` | `"black"` / `"gray"` |
/// | `major_line_width` / `minor_line_width` | 1 / 1 |
/// | `use_scale` | true |
/// | `scale_step` | unset, follows `major_line_step` |
/// | `font_color` / `font_family` / `font_size` / `font_style` | `"black"` / system / 14 / normal |
/// | `scale_points_size` | 5 |
///
/// A step `<= 0` disables its tier. Nothing here is ever rejected.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub major_line_step: i32,
    pub minor_line_step: i32,
    pub major_line_color: String,
    pub minor_line_color: String,
    pub major_line_width: u32,
    pub minor_line_width: u32,
    pub use_scale: bool,
    pub scale_step: Option<i32>,
    pub font_color: String,
    pub font_family: Option<String>,
    pub font_size: u32,
    pub font_style: FontStyle,
    pub scale_points_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            major_line_step: DEFAULT_MAJOR_STEP,
            minor_line_step: 0,
            major_line_color: "black".to_string(),
            minor_line_color: "gray".to_string(),
            major_line_width: 1,
            minor_line_width: 1,
            use_scale: true,
            scale_step: None,
            font_color: "black".to_string(),
            font_family: None,
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::Normal,
            scale_points_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| GridError::Config(e.to_string()))
    }

    pub fn with_major_step(mut self, step: i32) -> Self {
        self.major_line_step = step;
        self
    }

    pub fn with_minor_step(mut self, step: i32) -> Self {
        self.minor_line_step = step;
        self
    }

    pub fn with_major_style(mut self, color: impl Into<String>, width: u32) -> Self {
        self.major_line_color = color.into();
        self.major_line_width = width;
        self
    }

    pub fn with_minor_style(mut self, color: impl Into<String>, width: u32) -> Self {
        self.minor_line_color = color.into();
        self.minor_line_width = width;
        self
    }

    pub fn with_scale(mut self, use_scale: bool) -> Self {
        self.use_scale = use_scale;
        self
    }

    pub fn with_scale_step(mut self, step: i32) -> Self {
        self.scale_step = Some(step);
        self
    }

    pub fn with_font(mut self, color: impl Into<String>, font: FontSpec) -> Self {
        self.font_color = color.into();
        self.font_family = font.family;
        self.font_size = font.size;
        self.font_style = font.style;
        self
    }

    pub fn with_points_size(mut self, size: u32) -> Self {
        self.scale_points_size = size;
        self
    }

    pub fn font(&self) -> FontSpec {
        FontSpec {
            family: self.font_family.clone(),
            size: self.font_size,
            style: self.font_style,
        }
    }

    /// Step used for scale labels once the major-step fallback is applied.
    pub fn effective_scale_step(&self) -> i32 {
        self.scale_step.unwrap_or(self.major_line_step)
    }

    /// Normalize into the form the geometry works from: disabled tiers become `None`.
    pub fn resolve(&self) -> ResolvedConfig {
        let tier = |step: i32, color: &str, width: u32| {
            (step > 0).then(|| LineTier { step, color: color.to_string(), width })
        };
        let scale_step = self.effective_scale_step();
        ResolvedConfig {
            minor: tier(self.minor_line_step, &self.minor_line_color, self.minor_line_width),
            major: tier(self.major_line_step, &self.major_line_color, self.major_line_width),
            scale: (self.use_scale && scale_step > 0).then(|| ScaleTier {
                step: scale_step,
                color: self.font_color.clone(),
                font: self.font(),
                point_size: self.scale_points_size,
            }),
        }
    }
}

/// One enabled tier of gridlines. `step` is always positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTier {
    pub step: i32,
    pub color: String,
    pub width: u32,
}

/// Enabled scale labelling. `step` is always positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaleTier {
    pub step: i32,
    pub color: String,
    pub font: FontSpec,
    pub point_size: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub minor: Option<LineTier>,
    pub major: Option<LineTier>,
    pub scale: Option<ScaleTier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let c = GridConfig::default();
        assert_eq!(c.major_line_step, 100);
        assert_eq!(c.minor_line_step, 0);
        assert_eq!(c.major_line_color, "black");
        assert_eq!(c.minor_line_color, "gray");
        assert_eq!((c.major_line_width, c.minor_line_width), (1, 1));
        assert!(c.use_scale);
        assert_eq!(c.scale_step, None);
        assert_eq!(c.font_color, "black");
        assert_eq!(c.font(), FontSpec::default());
        assert_eq!(c.scale_points_size, 5);
    }

    #[test]
    fn scale_step_follows_major_when_unset() {
        let r = GridConfig::new().with_major_step(50).resolve();
        assert_eq!(r.scale.map(|s| s.step), Some(50));

        let r = GridConfig::new().with_major_step(50).with_scale_step(20).resolve();
        assert_eq!(r.scale.map(|s| s.step), Some(20));
    }

    #[test]
    fn non_positive_steps_disable_tiers() {
        let r = GridConfig::new().with_major_step(0).with_minor_step(-5).resolve();
        assert!(r.minor.is_none());
        assert!(r.major.is_none());
        // scale inherits the disabled major step
        assert!(r.scale.is_none());

        let r = GridConfig::new().with_major_step(-1).with_scale_step(25).resolve();
        assert!(r.major.is_none());
        assert_eq!(r.scale.map(|s| s.step), Some(25));
    }

    #[test]
    fn scale_off_drops_scale_tier() {
        let r = GridConfig::new().with_scale(false).resolve();
        assert!(r.scale.is_none());
        assert!(r.major.is_some());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c = GridConfig::from_toml_str(
            "minor_line_step = 25\nfont_style = \"bold italic\"\nscale_step = 50\n",
        )
        .unwrap();
        assert_eq!(c.minor_line_step, 25);
        assert_eq!(c.font_style, FontStyle::BoldItalic);
        assert_eq!(c.scale_step, Some(50));
        assert_eq!(c.major_line_step, 100);
        assert_eq!(c.minor_line_color, "gray");
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = GridConfig::from_toml_str("major_line_step = \"wide\"").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    #[test]
    fn font_style_parsing() {
        assert_eq!("Bold".parse::<FontStyle>().unwrap(), FontStyle::Bold);
        assert_eq!("italic  bold".parse::<FontStyle>().unwrap(), FontStyle::BoldItalic);
        assert!("oblique".parse::<FontStyle>().is_err());
        assert_eq!(FontStyle::BoldItalic.to_string(), "bold italic");
    }
}

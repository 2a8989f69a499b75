// File: crates/grid-render-skia/src/surface.rs
// Summary: Skia CPU raster surface with a turtle-style pen and an explicit presented frame.

use anyhow::{Context, Result};
use grid_core::{FontSpec, FontStyle, Pen, Surface, SurfaceError, SurfaceExtent};
use skia_safe as skia;

use crate::color::parse_color;

struct PenState {
    pos: (i32, i32),
    down: bool,
    color: skia::Color,
    width: u32,
    visible: bool,
}

impl Default for PenState {
    fn default() -> Self {
        Self { pos: (0, 0), down: true, color: skia::Color::BLACK, width: 1, visible: true }
    }
}

/// Raster surface with the origin at its center and y pointing up.
///
/// Drawing goes to a back buffer. With automatic refresh on (the default)
/// every call is presented immediately; while suspended through
/// `set_batched_refresh(false)` only [`Surface::refresh`] updates the
/// presented frame.
pub struct SkiaSurface {
    raster: skia::Surface,
    width: i32,
    height: i32,
    presented: skia::Image,
    frames: usize,
    auto_refresh: bool,
    pen: PenState,
    fonts: skia::FontMgr,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_background(width, height, skia::Color::WHITE)
    }

    pub fn with_background(width: i32, height: i32, background: skia::Color) -> Result<Self> {
        if width <= 0 || height <= 0 {
            anyhow::bail!("surface size must be positive, got {width}x{height}");
        }
        let mut raster = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        raster.canvas().clear(background);
        let presented = raster.image_snapshot();
        log::debug!("created {width}x{height} raster surface");
        Ok(Self {
            raster,
            width,
            height,
            presented,
            frames: 1,
            auto_refresh: true,
            pen: PenState::default(),
            fonts: skia::FontMgr::default(),
        })
    }

    /// Number of frames presented so far, including the initial blank one.
    pub fn frames_presented(&self) -> usize {
        self.frames
    }

    pub fn is_pen_visible(&self) -> bool {
        self.pen.visible
    }

    /// Encode the presented frame as PNG.
    pub fn presented_png_bytes(&self) -> Result<Vec<u8>> {
        #[allow(deprecated)]
        let data = self
            .presented
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.presented_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }

    fn to_device(&self, (x, y): (i32, i32)) -> skia::Point {
        skia::Point::new(self.width as f32 / 2.0 + x as f32, self.height as f32 / 2.0 - y as f32)
    }

    fn paint(&self, style: skia::paint::Style) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(style);
        paint.set_color(self.pen.color);
        paint.set_stroke_width(self.pen.width as f32);
        paint
    }

    fn font(&self, spec: &FontSpec) -> skia::Font {
        let style = match spec.style {
            FontStyle::Normal => skia::FontStyle::normal(),
            FontStyle::Bold => skia::FontStyle::bold(),
            FontStyle::Italic => skia::FontStyle::italic(),
            FontStyle::BoldItalic => skia::FontStyle::bold_italic(),
        };
        let size = spec.size.max(1) as f32;
        let typeface = spec
            .family
            .as_deref()
            .and_then(|family| self.fonts.match_family_style(family, style))
            .or_else(|| self.fonts.legacy_make_typeface(None::<&str>, style));
        match typeface {
            Some(tf) => skia::Font::from_typeface(tf, size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }

    fn present(&mut self) {
        self.presented = self.raster.image_snapshot();
        self.frames += 1;
    }

    fn drew(&mut self) {
        if self.auto_refresh {
            self.present();
        }
    }
}

impl Pen for SkiaSurface {
    fn set_color(&mut self, color: &str) -> Result<(), SurfaceError> {
        self.pen.color = parse_color(color)?;
        Ok(())
    }

    fn set_line_width(&mut self, width: u32) -> Result<(), SurfaceError> {
        self.pen.width = width;
        Ok(())
    }

    fn pen_up(&mut self) -> Result<(), SurfaceError> {
        self.pen.down = false;
        Ok(())
    }

    fn pen_down(&mut self) -> Result<(), SurfaceError> {
        self.pen.down = true;
        Ok(())
    }

    fn move_to(&mut self, x: i32, y: i32) -> Result<(), SurfaceError> {
        let from = self.pen.pos;
        self.pen.pos = (x, y);
        if !self.pen.down {
            return Ok(());
        }
        let paint = self.paint(skia::paint::Style::Stroke);
        let (p0, p1) = (self.to_device(from), self.to_device((x, y)));
        self.raster.canvas().draw_line(p0, p1, &paint);
        self.drew();
        Ok(())
    }

    fn write_text(&mut self, text: &str, font: &FontSpec) -> Result<(), SurfaceError> {
        let paint = self.paint(skia::paint::Style::Fill);
        let font = self.font(font);
        // left aligned, baseline on the pen position
        let at = self.to_device(self.pen.pos);
        self.raster.canvas().draw_str(text, at, &font, &paint);
        self.drew();
        Ok(())
    }

    fn draw_point(&mut self, diameter: u32) -> Result<(), SurfaceError> {
        let paint = self.paint(skia::paint::Style::Fill);
        let at = self.to_device(self.pen.pos);
        self.raster.canvas().draw_circle(at, diameter as f32 / 2.0, &paint);
        self.drew();
        Ok(())
    }

    fn hide(&mut self) -> Result<(), SurfaceError> {
        self.pen.visible = false;
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn extent(&self) -> Result<SurfaceExtent, SurfaceError> {
        Ok(SurfaceExtent::new(self.width, self.height))
    }

    fn set_batched_refresh(&mut self, enabled: bool) -> Result<(), SurfaceError> {
        self.auto_refresh = enabled;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), SurfaceError> {
        self.present();
        Ok(())
    }
}

// File: crates/grid-core/src/render.rs
// Summary: GridRenderer: draws minor lines, major lines and scale labels onto a surface in one refresh.

use log::debug;

use crate::config::{GridConfig, LineTier, ResolvedConfig, ScaleTier};
use crate::error::Result;
use crate::geometry::{GridLayout, Line, ScaleLabel};
use crate::surface::{Pen, RefreshGuard, Surface};

/// What one render call drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub minor_lines: usize,
    pub major_lines: usize,
    pub labels: usize,
}

/// Renders a centered reference grid. Holds the normalized configuration
/// so repeated renders skip re-resolving it.
#[derive(Clone, Debug)]
pub struct GridRenderer {
    config: ResolvedConfig,
}

impl GridRenderer {
    pub fn new(config: &GridConfig) -> Self {
        Self { config: config.resolve() }
    }

    /// Draw the grid for the surface's current extent.
    ///
    /// Refresh is suspended for the whole call and flushed exactly once at
    /// the end, so the grid appears at once. Minor lines go first, major
    /// lines over them, then labels. Surface errors abort the render and are
    /// returned as-is; refresh is restored either way.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<RenderSummary> {
        let mut guard = RefreshGuard::engage(surface)?;
        let extent = guard.extent()?;
        let layout = GridLayout::compute(extent, &self.config);
        debug!(
            "grid layout for {}x{}: {} minor, {} major, {} labels",
            extent.width,
            extent.height,
            layout.minor.len(),
            layout.major.len(),
            layout.labels.len()
        );

        guard.hide()?;
        if let Some(tier) = &self.config.minor {
            draw_tier(&mut *guard, tier, &layout.minor)?;
        }
        if let Some(tier) = &self.config.major {
            draw_tier(&mut *guard, tier, &layout.major)?;
        }
        if let Some(scale) = &self.config.scale {
            draw_scale(&mut *guard, scale, &layout.labels)?;
        }
        guard.finish()?;

        let summary = RenderSummary {
            minor_lines: layout.minor.len(),
            major_lines: layout.major.len(),
            labels: layout.labels.len(),
        };
        debug!("grid rendered: {summary:?}");
        Ok(summary)
    }
}

/// Render `config` onto `surface`. Convenience for one-off draws.
pub fn render<S: Surface + ?Sized>(surface: &mut S, config: &GridConfig) -> Result<RenderSummary> {
    GridRenderer::new(config).render(surface)
}

fn draw_tier<P: Pen + ?Sized>(pen: &mut P, tier: &LineTier, lines: &[Line]) -> Result<()> {
    pen.set_line_width(tier.width)?;
    pen.set_color(&tier.color)?;
    for line in lines {
        stroke(pen, line)?;
    }
    Ok(())
}

// One pen cycle per line: up, start, down, end.
fn stroke<P: Pen + ?Sized>(pen: &mut P, line: &Line) -> Result<()> {
    pen.pen_up()?;
    pen.move_to(line.from.0, line.from.1)?;
    pen.pen_down()?;
    pen.move_to(line.to.0, line.to.1)?;
    Ok(())
}

fn draw_scale<P: Pen + ?Sized>(pen: &mut P, scale: &ScaleTier, labels: &[ScaleLabel]) -> Result<()> {
    pen.set_color(&scale.color)?;
    for label in labels {
        let (x, y) = label.anchor();
        pen.pen_up()?;
        pen.move_to(x, y)?;
        pen.pen_down()?;
        pen.write_text(&label.text, &scale.font)?;
        if scale.point_size > 0 {
            pen.draw_point(scale.point_size)?;
        }
    }
    Ok(())
}

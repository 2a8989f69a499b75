// File: crates/grid-core/src/geometry.rs
// Summary: Centered grid geometry: half-extents, stepped line offsets and the per-render layout plan.

use crate::config::{ResolvedConfig, ScaleTier};

/// Offset of a gridline along one axis, in surface units from the center.
pub type LinePosition = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Surface size as reported by the drawing surface at render time.
/// Contract: no validation; non-positive dimensions mean "nothing on that axis".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceExtent {
    pub width: i32,
    pub height: i32,
}

impl SurfaceExtent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// `floor(width / 2)`, or `None` when the width is not positive.
    pub const fn half_width(&self) -> Option<i32> {
        half(self.width)
    }

    /// `floor(height / 2)`, or `None` when the height is not positive.
    pub const fn half_height(&self) -> Option<i32> {
        half(self.height)
    }
}

// Odd sizes are floored, never rounded up: 801 -> 400.
const fn half(len: i32) -> Option<i32> {
    if len > 0 { Some(len / 2) } else { None }
}

/// Every multiple of `step` in `[-half, half)`, ascending. The low edge is
/// included when `step` divides `half`, the high edge never is.
pub fn line_offsets(step: i32, half: Option<i32>) -> Vec<LinePosition> {
    let Some(h) = half else { return Vec::new() };
    if step <= 0 || h <= 0 {
        return Vec::new();
    }
    let lo = h / step;
    let hi = (h - 1) / step;
    (-lo..=hi).map(|k| k * step).collect()
}

/// A straight stroke between two surface points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaleLabel {
    pub position: LinePosition,
    pub axis: Axis,
    pub text: String,
}

impl ScaleLabel {
    pub fn new(position: LinePosition, axis: Axis) -> Self {
        Self { position, axis, text: position.to_string() }
    }

    /// Where the label is written: on the X axis for X labels, on the Y axis otherwise.
    pub fn anchor(&self) -> (i32, i32) {
        match self.axis {
            Axis::X => (self.position, 0),
            Axis::Y => (0, self.position),
        }
    }
}

/// Lines for one tier: verticals (stepped along X) first, then horizontals.
/// Each spans the full half-extent of the other axis.
pub fn tier_lines(step: i32, extent: SurfaceExtent) -> Vec<Line> {
    let hw = extent.half_width();
    let hh = extent.half_height();
    let span_x = hw.unwrap_or(0);
    let span_y = hh.unwrap_or(0);

    let verticals = line_offsets(step, hw)
        .into_iter()
        .map(|x| Line { from: (x, -span_y), to: (x, span_y) });
    let horizontals = line_offsets(step, hh)
        .into_iter()
        .map(|y| Line { from: (-span_x, y), to: (span_x, y) });
    verticals.chain(horizontals).collect()
}

/// Labels along X, then along Y. Each axis labels its own origin.
pub fn scale_labels(step: i32, extent: SurfaceExtent) -> Vec<ScaleLabel> {
    let xs = line_offsets(step, extent.half_width())
        .into_iter()
        .map(|x| ScaleLabel::new(x, Axis::X));
    let ys = line_offsets(step, extent.half_height())
        .into_iter()
        .map(|y| ScaleLabel::new(y, Axis::Y));
    xs.chain(ys).collect()
}

/// Everything one render call draws, in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub minor: Vec<Line>,
    pub major: Vec<Line>,
    pub labels: Vec<ScaleLabel>,
}

impl GridLayout {
    pub fn compute(extent: SurfaceExtent, config: &ResolvedConfig) -> Self {
        let lines = |tier: Option<i32>| tier.map(|step| tier_lines(step, extent)).unwrap_or_default();
        Self {
            minor: lines(config.minor.as_ref().map(|t| t.step)),
            major: lines(config.major.as_ref().map(|t| t.step)),
            labels: config
                .scale
                .as_ref()
                .map(|s: &ScaleTier| scale_labels(s.step, extent))
                .unwrap_or_default(),
        }
    }
}

// File: crates/grid-core/src/surface.rs
// Summary: Drawing-surface contract (pen + surface traits) and the scoped refresh-suspension guard.

use std::ops::{Deref, DerefMut};

use crate::config::FontSpec;
use crate::error::SurfaceError;

/// Turtle-style pen. Coordinates are surface units with the origin at the
/// center of the surface and y growing upward.
pub trait Pen {
    fn set_color(&mut self, color: &str) -> Result<(), SurfaceError>;
    fn set_line_width(&mut self, width: u32) -> Result<(), SurfaceError>;
    fn pen_up(&mut self) -> Result<(), SurfaceError>;
    fn pen_down(&mut self) -> Result<(), SurfaceError>;
    /// Move the pen; strokes a line from the previous position when the pen is down.
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), SurfaceError>;
    /// Write `text` at the current position.
    fn write_text(&mut self, text: &str, font: &FontSpec) -> Result<(), SurfaceError>;
    /// Filled dot of the given diameter at the current position.
    fn draw_point(&mut self, diameter: u32) -> Result<(), SurfaceError>;
    /// Hide the pen indicator.
    fn hide(&mut self) -> Result<(), SurfaceError>;
}

/// A drawing surface with a single pen.
pub trait Surface: Pen {
    fn extent(&self) -> Result<crate::geometry::SurfaceExtent, SurfaceError>;
    /// `false` suspends automatic refresh so commands accumulate until
    /// [`Surface::refresh`]; `true` restores it.
    fn set_batched_refresh(&mut self, enabled: bool) -> Result<(), SurfaceError>;
    fn refresh(&mut self) -> Result<(), SurfaceError>;
}

/// Holds a surface with automatic refresh suspended.
///
/// [`RefreshGuard::finish`] flushes once and restores refresh. A guard dropped
/// without finishing (error or panic mid-draw) still restores refresh, so the
/// surface is never left suspended.
pub struct RefreshGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    finished: bool,
}

impl<'a, S: Surface + ?Sized> RefreshGuard<'a, S> {
    pub fn engage(surface: &'a mut S) -> Result<Self, SurfaceError> {
        surface.set_batched_refresh(false)?;
        Ok(Self { surface, finished: false })
    }

    pub fn finish(mut self) -> Result<(), SurfaceError> {
        self.surface.refresh()?;
        self.finished = true;
        self.surface.set_batched_refresh(true)
    }
}

impl<S: Surface + ?Sized> Deref for RefreshGuard<'_, S> {
    type Target = S;
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for RefreshGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for RefreshGuard<'_, S> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(e) = self.surface.set_batched_refresh(true) {
            log::warn!("could not restore surface refresh after aborted render: {e}");
        }
    }
}

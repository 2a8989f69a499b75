// File: crates/grid-core/src/recording.rs
// Summary: In-memory surface that records every call, for tests and headless inspection.

use crate::config::FontSpec;
use crate::error::SurfaceError;
use crate::geometry::SurfaceExtent;
use crate::surface::{Pen, Surface};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SetBatchedRefresh(bool),
    Refresh,
    Hide,
    SetColor(String),
    SetLineWidth(u32),
    PenUp,
    PenDown,
    MoveTo(i32, i32),
    WriteText { text: String, font: FontSpec },
    DrawPoint(u32),
}

/// Fake surface of a fixed extent. Pen calls can be made to fail from the
/// n-th one onward with [`RecordingSurface::fail_after`]; refresh control
/// never fails so its release stays observable.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    extent: SurfaceExtent,
    commands: Vec<Command>,
    offline: bool,
    fail_after: Option<usize>,
    pen_calls: usize,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            extent: SurfaceExtent::new(width, height),
            commands: Vec::new(),
            offline: false,
            fail_after: None,
            pen_calls: 0,
        }
    }

    /// A surface whose extent query fails.
    pub fn offline() -> Self {
        Self { offline: true, ..Self::new(0, 0) }
    }

    /// Let `n` pen calls succeed, then fail every following one.
    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn moves(&self) -> Vec<(i32, i32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::MoveTo(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::WriteText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.pen_calls = 0;
    }

    fn pen(&mut self, cmd: Command) -> Result<(), SurfaceError> {
        if self.fail_after.is_some_and(|n| self.pen_calls >= n) {
            return Err(SurfaceError::Unavailable("recording surface closed".into()));
        }
        self.pen_calls += 1;
        self.commands.push(cmd);
        Ok(())
    }
}

impl Pen for RecordingSurface {
    fn set_color(&mut self, color: &str) -> Result<(), SurfaceError> {
        self.pen(Command::SetColor(color.to_string()))
    }
    fn set_line_width(&mut self, width: u32) -> Result<(), SurfaceError> {
        self.pen(Command::SetLineWidth(width))
    }
    fn pen_up(&mut self) -> Result<(), SurfaceError> {
        self.pen(Command::PenUp)
    }
    fn pen_down(&mut self) -> Result<(), SurfaceError> {
        self.pen(Command::PenDown)
    }
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), SurfaceError> {
        self.pen(Command::MoveTo(x, y))
    }
    fn write_text(&mut self, text: &str, font: &FontSpec) -> Result<(), SurfaceError> {
        self.pen(Command::WriteText { text: text.to_string(), font: font.clone() })
    }
    fn draw_point(&mut self, diameter: u32) -> Result<(), SurfaceError> {
        self.pen(Command::DrawPoint(diameter))
    }
    fn hide(&mut self) -> Result<(), SurfaceError> {
        self.pen(Command::Hide)
    }
}

impl Surface for RecordingSurface {
    fn extent(&self) -> Result<SurfaceExtent, SurfaceError> {
        if self.offline {
            return Err(SurfaceError::Unavailable("no display".into()));
        }
        Ok(self.extent)
    }
    fn set_batched_refresh(&mut self, enabled: bool) -> Result<(), SurfaceError> {
        self.commands.push(Command::SetBatchedRefresh(enabled));
        Ok(())
    }
    fn refresh(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(Command::Refresh);
        Ok(())
    }
}

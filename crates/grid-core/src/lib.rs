// File: crates/grid-core/src/lib.rs
// Summary: Core library entry point; exports the grid renderer, its configuration and the surface contract.

pub mod config;
pub mod error;
pub mod geometry;
pub mod recording;
pub mod render;
pub mod surface;

pub use config::{FontSpec, FontStyle, GridConfig, ResolvedConfig};
pub use error::{GridError, Result, SurfaceError};
pub use geometry::{Axis, GridLayout, Line, LinePosition, ScaleLabel, SurfaceExtent};
pub use recording::{Command, RecordingSurface};
pub use render::{render, GridRenderer, RenderSummary};
pub use surface::{Pen, RefreshGuard, Surface};

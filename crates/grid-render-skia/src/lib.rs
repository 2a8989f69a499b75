// File: crates/grid-render-skia/src/lib.rs
// Summary: Skia renderer crate; a raster drawing surface for the grid renderer plus PNG output.

pub mod color;
pub mod surface;

pub use color::parse_color;
pub use surface::SkiaSurface;

// File: crates/grid-render-skia/tests/png.rs
// Purpose: Render grids onto the Skia surface and check the presented PNG pixels.

use grid_core::{render, GridConfig, GridError, Pen, Surface, SurfaceError};
use grid_render_skia::SkiaSurface;

fn decode(surface: &SkiaSurface) -> image::RgbaImage {
    let bytes = surface.presented_png_bytes().expect("encode png");
    image::load_from_memory(&bytes).expect("decode png").to_rgba8()
}

fn red(img: &image::RgbaImage, x: u32, y: u32) -> u8 {
    img.get_pixel(x, y).0[0]
}

#[test]
fn center_line_is_drawn_and_cells_stay_clear() {
    let mut s = SkiaSurface::new(200, 200).unwrap();
    render(&mut s, &GridConfig::default().with_scale(false)).expect("render");
    let img = decode(&s);
    assert_eq!((img.width(), img.height()), (200, 200));

    // x = 0 maps to column 100; the hairline straddles columns 99 and 100
    let on_line = red(&img, 99, 150).min(red(&img, 100, 150));
    assert!(on_line < 200, "expected a dark vertical line, got {on_line}");
    assert_eq!(red(&img, 150, 150), 255);
    assert_eq!(red(&img, 50, 50), 255);
    assert!(!s.is_pen_visible());
}

#[test]
fn render_presents_exactly_one_frame() {
    let mut s = SkiaSurface::new(320, 240).unwrap();
    assert_eq!(s.frames_presented(), 1);
    render(&mut s, &GridConfig::default().with_minor_step(10)).unwrap();
    assert_eq!(s.frames_presented(), 2);
}

#[test]
fn suspended_drawing_waits_for_refresh() {
    let mut s = SkiaSurface::new(200, 200).unwrap();
    s.set_batched_refresh(false).unwrap();
    s.pen_up().unwrap();
    s.move_to(0, -50).unwrap();
    s.pen_down().unwrap();
    s.move_to(0, 50).unwrap();

    let before = decode(&s);
    assert_eq!(red(&before, 99, 100).min(red(&before, 100, 100)), 255);

    s.refresh().unwrap();
    let after = decode(&s);
    assert!(red(&after, 99, 100).min(red(&after, 100, 100)) < 200);
}

#[test]
fn markers_follow_point_size() {
    let cfg = GridConfig::default().with_scale_step(50);
    let mut with = SkiaSurface::new(200, 200).unwrap();
    render(&mut with, &cfg).unwrap();
    let mut without = SkiaSurface::new(200, 200).unwrap();
    render(&mut without, &cfg.clone().with_points_size(0)).unwrap();

    // marker at (50, 0) -> device (150, 100), just below the x axis line
    assert!(red(&decode(&with), 150, 101) < 80);
    assert!(red(&decode(&without), 150, 101) > 200);
}

#[test]
fn unknown_color_aborts_render() {
    let mut s = SkiaSurface::new(100, 100).unwrap();
    let cfg = GridConfig::default().with_major_style("notacolor", 1);
    let err = render(&mut s, &cfg).unwrap_err();
    assert!(matches!(err, GridError::Surface(SurfaceError::InvalidColor(_))));
}

#[test]
fn rejects_empty_surface() {
    assert!(SkiaSurface::new(0, 100).is_err());
    assert!(SkiaSurface::new(100, -1).is_err());
}

#[test]
fn writes_png_file() {
    let mut s = SkiaSurface::new(801, 601).unwrap();
    render(&mut s, &GridConfig::default().with_minor_step(25)).unwrap();

    let out = std::path::PathBuf::from("target/test_out/grid_801x601.png");
    s.write_png(&out).expect("write png");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

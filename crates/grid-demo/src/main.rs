// File: crates/grid-demo/src/main.rs
// Summary: Renders a centered reference grid onto a Skia raster surface and writes it as PNG.
// Usage: grid-demo [WIDTH HEIGHT] [CONFIG.toml] [OUT.png]

use anyhow::{Context, Result};
use grid_core::{GridConfig, GridRenderer};
use grid_render_skia::SkiaSurface;
use log::info;
use std::path::{Path, PathBuf};

const DEFAULT_SIZE: (i32, i32) = (800, 600);

struct Args {
    width: i32,
    height: i32,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GridConfig::default(),
    };

    let mut surface = SkiaSurface::new(args.width, args.height)?;
    let summary = GridRenderer::new(&config).render(&mut surface)?;
    info!(
        "drew {} minor lines, {} major lines, {} labels",
        summary.minor_lines, summary.major_lines, summary.labels
    );

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("target/out/grid_{}x{}.png", args.width, args.height)));
    surface.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut dims = Vec::new();
    let mut config = None;
    let mut out = None;
    for arg in raw {
        if let Ok(n) = arg.parse::<i32>() {
            dims.push(n);
        } else if arg.ends_with(".toml") {
            config = Some(PathBuf::from(arg));
        } else {
            out = Some(PathBuf::from(arg));
        }
    }
    let (width, height) = match dims.as_slice() {
        [] => DEFAULT_SIZE,
        [w, h] => (*w, *h),
        _ => anyhow::bail!("expected WIDTH and HEIGHT together, got {} number(s)", dims.len()),
    };
    Ok(Args { width, height, config, out })
}

fn load_config(path: &Path) -> Result<GridConfig> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    let config = GridConfig::from_toml_str(&src)
        .with_context(|| format!("invalid config '{}'", path.display()))?;
    info!("loaded grid config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_without_arguments() {
        let a = args(&[]).unwrap();
        assert_eq!((a.width, a.height), DEFAULT_SIZE);
        assert!(a.config.is_none() && a.out.is_none());
    }

    #[test]
    fn size_config_and_output() {
        let a = args(&["1024", "768", "grid.toml", "out/g.png"]).unwrap();
        assert_eq!((a.width, a.height), (1024, 768));
        assert_eq!(a.config, Some(PathBuf::from("grid.toml")));
        assert_eq!(a.out, Some(PathBuf::from("out/g.png")));
    }

    #[test]
    fn lone_dimension_is_rejected() {
        assert!(args(&["640"]).is_err());
    }
}

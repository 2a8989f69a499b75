use grid_core::geometry::line_offsets;
use grid_core::{GridConfig, GridRenderer, RecordingSurface, Result};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_recording");
    for &(w, h) in &[(800i32, 600i32), (3840, 2160)] {
        let renderer = GridRenderer::new(&GridConfig::default().with_minor_step(10).with_scale_step(50));
        group.bench_function(format!("{w}x{h}"), |b| {
            let mut surface = RecordingSurface::new(w, h);
            b.iter(|| -> Result<()> {
                surface.clear();
                let summary = renderer.render(&mut surface)?;
                black_box(summary);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_offsets");
    for &step in &[1i32, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(step), &step, |b, &s| {
            b.iter(|| black_box(line_offsets(s, Some(4096))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_offsets);
criterion_main!(benches);

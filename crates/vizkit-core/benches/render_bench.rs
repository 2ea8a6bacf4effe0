use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizkit_core::config::SaveParams;
use vizkit_core::render::{heatmap, scatter};
use vizkit_core::writer;
use vizkit_core::{HeatmapRequest, LabeledMatrix, ScatterRequest, StyleConfig, StyleContext};

const DOC: &str = "
global_settings: {figure_size: [8, 5], dpi: 100}
output: {save_params: {dpi: 100}}
";

fn xy(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
    let y = x.iter().map(|v| (v * 3.0).sin() * 10.0 + v).collect();
    (x, y)
}

fn bench_render(c: &mut Criterion) {
    let config = StyleConfig::from_yaml_str(DOC).expect("bench document");
    let ctx = StyleContext::apply(&config);
    let save = SaveParams::resolve(&config);

    let mut group = c.benchmark_group("render_scatter");
    for &n in &[1_000usize, 10_000usize] {
        let (x, y) = xy(n);
        group.bench_function(format!("scatter_{n}"), |b| {
            let req = ScatterRequest::new(&x, &y, "target/bench_out/scatter.png");
            b.iter(|| -> Result<()> {
                let rendered = scatter::render(&ctx, &config, &req)?;
                black_box(rendered.figure.ink_bounds());
                Ok(())
            });
        });
    }
    group.finish();

    let labels: Vec<String> = (0..12).map(|i| format!("m{i}")).collect();
    let values = (0..12).map(|r| (0..12).map(|c| ((r * c) as f64 * 0.13).cos()).collect()).collect();
    let matrix = LabeledMatrix::new(labels.clone(), labels, values).expect("square matrix");
    c.bench_function("heatmap_12x12_save_png", |b| {
        let req = HeatmapRequest::new(&matrix, "target/bench_out/heatmap.png");
        b.iter(|| -> Result<()> {
            let mut rendered = heatmap::render(&ctx, &config, &req)?;
            black_box(writer::save(&mut rendered.figure, &req.output, &save)?);
            Ok(())
        });
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

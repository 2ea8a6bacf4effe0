// File: crates/vizkit-demo/src/main.rs
// Summary: Demo renders styled scatter, box, heatmap and histogram charts from synthetic data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use vizkit_core::{
    init_default_tracing, BoxRequest, DataTable, HeatmapRequest, HistogramRequest, LabeledMatrix, SavedChart,
    ScatterRequest, VisualizationManager, DEFAULT_CONFIG_PATH,
};

const STRATEGIES: [&str; 3] = ["no_template", "full_template", "mask_all_cdr"];

fn main() -> Result<()> {
    let _ = init_default_tracing();

    // vizkit-demo [config.yaml] [out_dir] [table.csv]
    let mut args = std::env::args().skip(1);
    let config = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    let csv = args.next();

    let manager = VisualizationManager::new(&config);
    info!(config = %config, out = %out_dir.display(), theme = manager.style().theme.name, "rendering demo charts");

    let samples = Samples::generate(180);

    // 1) Grouped scatter with trend line
    let scatter = ScatterRequest::new(&samples.x, &samples.y, out_dir.join("scatter.png"))
        .groups(&samples.groups)
        .group_names(&samples.names)
        .title("Identity vs. Coverage")
        .x_label("Coverage")
        .y_label("Identity");
    report(manager.create_scatter(&scatter).context("scatter chart")?);

    // 2) Box plot from a CSV table, or from the synthetic samples
    let table = match &csv {
        Some(path) => DataTable::from_csv(path).with_context(|| format!("failed to load CSV '{path}'"))?,
        None => samples.table(),
    };
    let boxes = BoxRequest::new(&table, "strategy", "score", out_dir.join("box.png")).title("Score by Strategy");
    report(manager.create_box(&boxes).context("box chart")?);

    // 3) Correlation heatmap of the synthetic measures
    let matrix = samples.correlations()?;
    let heatmap = HeatmapRequest::new(&matrix, out_dir.join("heatmap.png")).title("Measure Correlation");
    report(manager.create_heatmap(&heatmap).context("heatmap")?);

    // 4) Grouped histogram
    let hist = HistogramRequest::new(&samples.y, out_dir.join("histogram.png"))
        .groups(&samples.groups)
        .group_names(&samples.names)
        .x_label("Identity");
    report(manager.create_histogram(&hist).context("histogram")?);

    Ok(())
}

fn report(saved: SavedChart) {
    let counts: Vec<String> = saved.series.iter().map(|s| format!("{}={}", s.label, s.count)).collect();
    println!("Wrote {} ({}x{}) [{}]", saved.path().display(), saved.width, saved.height, counts.join(", "));
    if let Some(t) = saved.trend {
        println!("  trend: y = {:.3}x + {:.3}", t.slope, t.intercept);
    }
}

/// Deterministic pseudo-random measurements, three strategies interleaved.
struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    groups: Vec<String>,
    names: Vec<String>,
}

impl Samples {
    fn generate(n: usize) -> Self {
        let mut rng = Lcg(0x5eed_1234);
        let mut s = Samples {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            groups: Vec::with_capacity(n),
            names: STRATEGIES.iter().map(|s| s.to_string()).collect(),
        };
        for i in 0..n {
            let g = i % STRATEGIES.len();
            let x = rng.next_f64() * 0.8 + 0.1;
            let y = 0.3 + 0.5 * x + 0.08 * g as f64 + (rng.next_f64() - 0.5) * 0.15;
            s.x.push(x);
            s.y.push(y);
            s.z.push(1.0 - y + (rng.next_f64() - 0.5) * 0.3);
            s.groups.push(STRATEGIES[g].to_string());
        }
        s
    }

    fn table(&self) -> DataTable {
        DataTable::new().with_text("strategy", self.groups.iter().cloned()).with_numbers("score", self.y.clone())
    }

    fn correlations(&self) -> Result<LabeledMatrix> {
        let cols = [("coverage", &self.x), ("identity", &self.y), ("divergence", &self.z)];
        let labels: Vec<String> = cols.iter().map(|(n, _)| n.to_string()).collect();
        let values = cols.iter().map(|(_, a)| cols.iter().map(|(_, b)| pearson(a, b)).collect()).collect();
        Ok(LabeledMatrix::new(labels.clone(), labels, values)?)
    }
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let (ma, mb) = (a.iter().sum::<f64>() / n, b.iter().sum::<f64>() / n);
    let (mut sab, mut saa, mut sbb) = (0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b) {
        sab += (x - ma) * (y - mb);
        saa += (x - ma).powi(2);
        sbb += (y - mb).powi(2);
    }
    sab / (saa * sbb).sqrt()
}

struct Lcg(u64);

impl Lcg {
    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

// File: crates/vizkit-core/tests/quick.rs
// Purpose: One-shot helpers fall back to the built-in style and honor request options.

use vizkit_core::{
    load_visualization_style, quick_histogram, quick_scatter, HistogramRequest, ScatterRequest, StyleConfig,
    DEFAULT_CONFIG_PATH,
};

#[test]
fn load_visualization_style_falls_back() {
    // Tests run from the crate directory, where no style document exists.
    assert!(!std::path::Path::new(DEFAULT_CONFIG_PATH).exists());
    let manager = load_visualization_style(DEFAULT_CONFIG_PATH);
    assert_eq!(manager.config(), &StyleConfig::default());
    assert_eq!(manager.style().dpi, 300.0);
}

#[test]
fn quick_histogram_uses_default_style() {
    let data: Vec<f64> = (0..50).map(|i| ((i * 37) % 23) as f64).collect();
    let saved = quick_histogram(&HistogramRequest::new(&data, "target/test_out/quick/histogram.png")).expect("render");
    assert_eq!(saved.total_count(), 50);
    // 10x8 in at 300 dpi before the tight crop
    assert!(saved.width <= 3000 && saved.height <= 2400);
    assert!(saved.width > 1000);
}

#[test]
fn quick_scatter_takes_grouping_and_trend_options() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 2.5, 4.0];
    let groups: Vec<String> = ["a", "b", "a", "b"].iter().map(|s| s.to_string()).collect();
    let names: Vec<String> = vec!["a".into(), "b".into()];
    let req = ScatterRequest::new(&x, &y, "target/test_out/quick/scatter.png")
        .groups(&groups)
        .group_names(&names)
        .trend_line(false)
        .title("Quick");
    let saved = quick_scatter(&req).expect("render");
    assert!(saved.trend.is_none());
    assert_eq!(saved.series.len(), 2);
    assert_eq!(saved.total_count(), 4);
}

// File: crates/vizkit-core/tests/charts.rs
// Purpose: Box, heatmap and histogram rendering, partial documents and output handling.

use std::path::Path;

use image::RgbaImage;
use vizkit_core::render::histogram;
use vizkit_core::{
    BoxRequest, DataTable, HeatmapRequest, HistogramRequest, LabeledMatrix, ScatterRequest, StyleConfig,
    VisualizationManager, VizError,
};

const SMALL: &str = "
global_settings: {figure_size: [4, 3], dpi: 50}
chart_types: {correlation_heatmap: {figure_size: [4, 3]}}
output: {save_params: {dpi: 50}}
";

fn manager_with(yaml: &str) -> VisualizationManager {
    VisualizationManager::from_config(StyleConfig::from_yaml_str(yaml).expect("test document"))
}

// Opaque boxes on a 4x3 in figure written 1:1 at 100 dpi.
const BOX_PIXELS: &str = "
global_settings: {figure_size: [4, 3], dpi: 100}
box_plot: {patch_alpha: 1.0, notch: true}
colors: {strategy_colors: {no_template: '#2E8B57'}}
output: {save_params: {dpi: 100, bbox_inches: standard}}
";

fn pixels_of(img: &RgbaImage, rgb: [u8; 3]) -> usize {
    img.pixels().filter(|p| p[0] == rgb[0] && p[1] == rgb[1] && p[2] == rgb[2] && p[3] == 255).count()
}

/// Per-row count of pixels with exactly `rgb`, keeping rows at least a
/// quarter as wide as the widest one.
fn row_widths(img: &RgbaImage, rgb: [u8; 3]) -> Vec<usize> {
    let rows: Vec<usize> = (0..img.height())
        .map(|y| (0..img.width()).filter(|&x| img.get_pixel(x, y).0 == [rgb[0], rgb[1], rgb[2], 255]).count())
        .collect();
    let widest = rows.iter().copied().max().unwrap_or(0);
    rows.into_iter().filter(|&n| n > 0 && n * 4 >= widest).collect()
}

fn single_box(notch: bool, out: &str) -> RgbaImage {
    let scores: Vec<f64> = (0..=100).map(f64::from).collect();
    let table = DataTable::new()
        .with_text("strategy", vec!["unlisted".to_string(); scores.len()])
        .with_numbers("score", scores);
    let m = manager_with(&BOX_PIXELS.replace("notch: true", &format!("notch: {notch}")));
    m.create_box(&BoxRequest::new(&table, "strategy", "score", out)).expect("render");
    image::open(out).expect("decode").to_rgba8()
}

fn strategies() -> DataTable {
    let csv = "\
strategy,score
full_template,0.61
no_template,0.42
full_template,0.66
mask_all_cdr,0.30
no_template,0.47
full_template,0.58
no_template,0.95
mask_all_cdr,0.35
unlisted,0.50
";
    DataTable::from_reader(csv.as_bytes()).expect("parse csv")
}

fn matrix() -> LabeledMatrix {
    let labels: Vec<String> = ["alpha", "beta", "gamma"].iter().map(|s| s.to_string()).collect();
    LabeledMatrix::new(
        labels.clone(),
        labels,
        vec![vec![1.0, -0.4, 0.25], vec![-0.4, 1.0, f64::NAN], vec![0.25, f64::NAN, 1.0]],
    )
    .expect("square matrix")
}

#[test]
fn box_plot_one_box_per_category_in_first_seen_order() {
    let table = strategies();
    let req = BoxRequest::new(&table, "strategy", "score", "target/test_out/charts/box.png").title("Scores");
    let saved = manager_with(SMALL).create_box(&req).expect("render");

    let labels: Vec<_> = saved.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Full Template", "No Template", "Mask All Cdr", "Unlisted"]);
    assert_eq!(saved.total_count(), 9);
    assert!(Path::new("target/test_out/charts/box.png").exists());
}

#[test]
fn box_plot_reports_bad_columns() {
    let table = strategies();
    let m = manager_with(SMALL);
    let missing = BoxRequest::new(&table, "strategy", "nope", "target/test_out/charts/never.png");
    assert!(matches!(m.create_box(&missing), Err(VizError::MissingColumn(_))));
    let textual = BoxRequest::new(&table, "score", "strategy", "target/test_out/charts/never.png");
    assert!(matches!(m.create_box(&textual), Err(VizError::ColumnType { .. })));
}

#[test]
fn heatmap_renders_matrix_with_blank_cells() {
    let m = matrix();
    let saved = manager_with(SMALL)
        .create_heatmap(&HeatmapRequest::new(&m, "target/test_out/charts/heatmap.png").title("Correlation"))
        .expect("render");
    assert_eq!(saved.series.len(), 3);
    assert_eq!(saved.series[1].count, 2);
    assert!(saved.width > 0 && saved.height > 0);
}

#[test]
fn heatmap_rejects_unknown_colormap_and_format() {
    let m = matrix();
    let cmap = manager_with(&format!("{SMALL}colors: {{heatmap_colormap: rainbowish}}"));
    let req = HeatmapRequest::new(&m, "target/test_out/charts/never.png");
    assert!(matches!(cmap.create_heatmap(&req), Err(VizError::UnknownColormap(_))));

    let fmt = manager_with(&format!("{SMALL}heatmap: {{fmt: '%d'}}"));
    assert!(matches!(fmt.create_heatmap(&req), Err(VizError::InvalidNumberFormat(_))));
}

#[test]
fn histogram_groups_and_counts() {
    let data: Vec<f64> = (0..60).map(|i| (i as f64 * 0.37).sin() * 3.0 + (i % 3) as f64).collect();
    let groups: Vec<String> = (0..60).map(|i| if i % 2 == 0 { "no_template" } else { "full_template" }.to_string()).collect();
    let group_names = vec!["no_template".to_string(), "full_template".to_string(), "absent".to_string()];
    let req = HistogramRequest::new(&data, "target/test_out/charts/histogram.png")
        .groups(&groups)
        .group_names(&group_names);
    let saved = manager_with(SMALL).create_histogram(&req).expect("render");

    assert_eq!(saved.series[0].count, 30);
    assert_eq!(saved.series[1].count, 30);
    assert_eq!(saved.series[2].count, 0);
}

#[test]
fn histogram_names_without_groups_is_an_error() {
    let data = [1.0, 2.0];
    let names = vec!["a".to_string()];
    let req = HistogramRequest::new(&data, "target/test_out/charts/never.png").group_names(&names);
    assert!(matches!(manager_with(SMALL).create_histogram(&req), Err(VizError::IncompleteGrouping)));
}

#[test]
fn histogram_group_labels_must_match_data_length() {
    let data = [1.0, 2.0, 2.5, 3.0, 3.5, 4.0];
    let groups = vec!["a".to_string(), "b".to_string()];
    let req = HistogramRequest::new(&data, "target/test_out/charts/never.png").groups(&groups).group_names(&groups);
    let err = manager_with(SMALL).create_histogram(&req).unwrap_err();
    assert!(matches!(err, VizError::LengthMismatch { what: "groups", got: 2, expected: 6 }));
}

#[test]
fn global_settings_only_document_renders_every_kind() {
    let m = manager_with("global_settings: {figure_size: [3, 2], dpi: 40}");
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [1.0, 3.0, 2.0, 5.0];
    let table = strategies();
    let matrix = matrix();

    m.create_scatter(&ScatterRequest::new(&x, &y, "target/test_out/partial/scatter.png")).expect("scatter");
    m.create_box(&BoxRequest::new(&table, "strategy", "score", "target/test_out/partial/box.png")).expect("box");
    m.create_heatmap(&HeatmapRequest::new(&matrix, "target/test_out/partial/heatmap.png")).expect("heatmap");
    m.create_histogram(&HistogramRequest::new(&y, "target/test_out/partial/hist.png")).expect("histogram");
}

#[test]
fn missing_parent_directories_are_created() {
    let root = Path::new("target/test_out/nested_out");
    let _ = std::fs::remove_dir_all(root);
    let out = root.join("deeper/still/hist.png");
    let data = [1.0, 2.0, 2.5, 3.0];
    let saved = manager_with(SMALL).create_histogram(&HistogramRequest::new(&data, &out)).expect("render");
    assert!(out.exists());
    let decoded = image::open(&out).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (saved.width, saved.height));
}

#[test]
fn standard_bbox_keeps_full_figure() {
    let m = manager_with(
        "global_settings: {figure_size: [4, 3], dpi: 50}\n\
         output: {save_params: {dpi: 50, bbox_inches: standard, transparent: true}}",
    );
    let data = [1.0, 2.0, 2.5, 3.0];
    let saved = m.create_histogram(&HistogramRequest::new(&data, "target/test_out/charts/standard.png")).expect("render");
    assert_eq!((saved.width, saved.height), (200, 150));

    let img = image::open("target/test_out/charts/standard.png").expect("decode").to_rgba8();
    // the figure corner is outside every drawn element
    assert_eq!(img.get_pixel(0, 0)[3], 0);
}

#[test]
fn unlisted_box_category_is_neutral_gray() {
    let scores: Vec<f64> = (0..80).map(|i| f64::from(i % 40)).collect();
    let strategy = (0..80).map(|i| if i < 40 { "no_template" } else { "unlisted" });
    let table = DataTable::new().with_text("strategy", strategy).with_numbers("score", scores);
    let out = "target/test_out/charts/box_colors.png";
    let m = manager_with(&BOX_PIXELS.replace("notch: true", "notch: false"));
    m.create_box(&BoxRequest::new(&table, "strategy", "score", out)).expect("render");

    let img = image::open(out).expect("decode").to_rgba8();
    assert!(pixels_of(&img, [0x2E, 0x8B, 0x57]) > 1500, "listed category keeps its color");
    assert!(pixels_of(&img, [0x33, 0x33, 0x33]) > 1500, "unlisted category falls back to #333333");
}

#[test]
fn notch_toggles_box_outline() {
    let notched = row_widths(&single_box(true, "target/test_out/charts/box_notched.png"), [0x33, 0x33, 0x33]);
    let plain = row_widths(&single_box(false, "target/test_out/charts/box_plain.png"), [0x33, 0x33, 0x33]);

    let widest = *plain.iter().max().expect("face rows");
    // a plain box is a rectangle: every face row spans the full width
    assert!(plain.iter().all(|&w| w + 2 >= widest), "{plain:?}");
    let widest = *notched.iter().max().expect("face rows");
    // near the median the notch narrows the face toward half width
    let pinched = notched.iter().filter(|&&w| w * 10 < widest * 8).count();
    assert!(pinched >= 3, "{notched:?}");
}

#[test]
fn jpeg_output_decodes() {
    let out = "target/test_out/charts/histogram.jpg";
    let data = [1.0, 2.0, 2.0, 3.5, 4.0];
    let saved = manager_with(SMALL).create_histogram(&HistogramRequest::new(&data, out)).expect("render");

    let bytes = std::fs::read(out).expect("read jpeg");
    assert_eq!(image::guess_format(&bytes).expect("known format"), image::ImageFormat::Jpeg);
    let decoded = image::load_from_memory(&bytes).expect("decode jpeg");
    assert_eq!((decoded.width(), decoded.height()), (saved.width, saved.height));
}

#[test]
fn figures_rasterize_at_the_save_dpi() {
    let m = manager_with(
        "global_settings: {figure_size: [4, 3], dpi: 20}\n\
         output: {save_params: {dpi: 100, bbox_inches: standard}}",
    );
    let data = [1.0, 2.0, 2.5, 3.0];
    let req = HistogramRequest::new(&data, "target/test_out/charts/save_dpi.png");
    let rendered = histogram::render(m.style(), m.config(), &req).expect("render");
    assert_eq!(rendered.figure.dpi(), 100.0);

    let saved = m.create_histogram(&req).expect("save");
    assert_eq!((saved.width, saved.height), (400, 300));
}

// File: crates/vizkit-core/tests/snapshot.rs
// Purpose: Golden snapshot of a small grouped scatter chart (bless with UPDATE_SNAPSHOTS=1).

use vizkit_core::{ScatterRequest, StyleConfig, VisualizationManager};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions(), "Size differs: {}", path.display());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

#[test]
fn golden_grouped_scatter() {
    let cfg = StyleConfig::from_yaml_str(
        "global_settings: {figure_size: [4, 3], dpi: 60}\noutput: {save_params: {dpi: 60, bbox_inches: standard}}",
    )
    .expect("test document");
    let manager = VisualizationManager::from_config(cfg);

    let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| v * 0.8 + if *v as i64 % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let groups: Vec<String> = (0..12).map(|i| if i < 6 { "no_template" } else { "full_template" }.to_string()).collect();
    let names = vec!["no_template".to_string(), "full_template".to_string()];

    let out = std::path::Path::new("target/test_out/snapshot/grouped_scatter.png");
    let req = ScatterRequest::new(&x, &y, out).groups(&groups).group_names(&names);
    manager.create_scatter(&req).expect("render");

    let bytes = std::fs::read(out).expect("read output");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let golden = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/grouped_scatter.png");
    write_or_compare(&golden, &bytes);
}

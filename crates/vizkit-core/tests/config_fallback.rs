// File: crates/vizkit-core/tests/config_fallback.rs
// Purpose: Style document loading, whole-document fallback and theme resolution.

use std::path::PathBuf;

use vizkit_core::config::{GlobalSettings, ScatterParams};
use vizkit_core::{StyleConfig, StyleContext, VisualizationManager, VizError};

fn write_doc(name: &str, text: &str) -> PathBuf {
    let path = PathBuf::from("target/test_out/config").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn valid_document_loads_as_written() {
    let text = "global_settings: {dpi: 72, style: darkgrid}\nscatter_plot: {marker_size: 10}\n";
    let path = write_doc("valid.yaml", text);
    let loaded = StyleConfig::load(&path);
    assert_eq!(loaded, StyleConfig::from_yaml_str(text).unwrap());
    // no merge with the defaults: the font section stays absent
    assert!(loaded.lookup(&["font_sizes"]).is_none());
    assert_eq!(ScatterParams::resolve(&loaded).marker_size, 10.0);
}

#[test]
fn broken_document_yields_exact_default() {
    let path = write_doc("broken.yaml", "global_settings: [unclosed\n");
    assert_eq!(StyleConfig::load(&path), StyleConfig::default());
    assert!(matches!(StyleConfig::try_load(&path), Err(VizError::ConfigParse(_))));
}

#[test]
fn missing_and_scalar_documents_fall_back() {
    assert_eq!(StyleConfig::load("target/test_out/config/does_not_exist.yaml"), StyleConfig::default());
    let scalar = write_doc("scalar.yaml", "just a string\n");
    assert_eq!(StyleConfig::load(&scalar), StyleConfig::default());
    let empty = write_doc("empty.yaml", "");
    assert_eq!(StyleConfig::load(&empty), StyleConfig::default());
}

#[test]
fn default_document_resolves_global_settings() {
    let global = GlobalSettings::resolve(&StyleConfig::default());
    assert_eq!(global, GlobalSettings::default());
    let manager = VisualizationManager::default();
    assert_eq!(manager.colors().get("full_template"), Some("#4682B4"));
    assert_eq!(manager.colors().entries().len(), 3);
}

#[test]
fn style_context_reads_fonts_and_theme() {
    let cfg = StyleConfig::from_yaml_str(
        "global_settings: {style: ticks, font_family: Arial}\nfont_sizes: {title: 20, tick_label: 9}",
    )
    .unwrap();
    let ctx = StyleContext::apply(&cfg);
    assert_eq!(ctx.theme.name, "ticks");
    assert_eq!(ctx.font_family, "Arial");
    assert_eq!(ctx.fonts.title, 20.0);
    assert_eq!(ctx.base_font_size, 9.0);
    assert_eq!(ctx.fonts.legend, 12.0);
    assert!(!ctx.unicode_minus);
}

#[test]
fn unknown_theme_falls_back_to_whitegrid() {
    let cfg = StyleConfig::from_yaml_str("global_settings: {style: neon}").unwrap();
    assert_eq!(StyleContext::apply(&cfg).theme.name, "whitegrid");
}

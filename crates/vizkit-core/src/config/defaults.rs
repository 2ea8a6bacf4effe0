// File: crates/vizkit-core/src/config/defaults.rs
// Summary: Built-in style document used when no user document can be loaded.

use std::sync::OnceLock;

use serde_yaml::Value;

/// Path a manager reads when the caller does not name one.
pub const DEFAULT_CONFIG_PATH: &str = "config/visualization_style.yaml";

/// The fallback document. It deliberately covers only the global, font and
/// color sections; every other section resolves through per-key defaults.
pub const DEFAULT_STYLE_YAML: &str = r##"
global_settings:
  style: whitegrid
  font_family: DejaVu Sans
  figure_size: [10, 8]
  dpi: 300
  alpha: 0.7
  grid_alpha: 0.3
font_sizes:
  title: 16
  axis_label: 14
  tick_label: 12
  legend: 12
colors:
  strategy_colors:
    no_template: "#2E8B57"
    full_template: "#4682B4"
    mask_all_cdr: "#CD853F"
  trend_line: "#FF6347"
"##;

pub(crate) fn default_document() -> &'static Value {
    static DOCUMENT: OnceLock<Value> = OnceLock::new();
    DOCUMENT.get_or_init(|| {
        serde_yaml::from_str(DEFAULT_STYLE_YAML).expect("built-in style document is valid YAML")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_a_mapping_with_three_sections() {
        let doc = default_document();
        let map = doc.as_mapping().expect("mapping root");
        assert_eq!(map.len(), 3);
        assert_eq!(doc["global_settings"]["dpi"].as_u64(), Some(300));
        assert_eq!(doc["colors"]["trend_line"].as_str(), Some("#FF6347"));
    }
}

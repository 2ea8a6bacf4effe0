// File: crates/vizkit-core/src/error.rs
// Summary: Error type shared by renderers, data inputs and the artifact writer.

use std::path::PathBuf;

use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to read style config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse style config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("style config root must be a mapping")]
    ConfigNotMapping,

    #[error("`groups` and `group_names` must be supplied together")]
    IncompleteGrouping,

    #[error("length mismatch: {what} has {got} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("column '{column}' is not {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    #[error("trend fit needs at least two points with distinct x values (got {points} points)")]
    DegenerateFit { points: usize },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("unknown colormap '{0}'")]
    UnknownColormap(String),

    #[error("unsupported number format '{0}'")]
    InvalidNumberFormat(String),

    #[error("unsupported output format for {0}")]
    UnsupportedFormat(PathBuf),

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode image for {0}")]
    Encode(PathBuf),

    #[error("failed to read data: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

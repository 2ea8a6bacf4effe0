// File: crates/vizkit-core/src/data.rs
// Summary: Chart inputs: named-column tables, labeled matrices and group partitions.

use std::io::Read;
use std::path::Path;

use crate::error::{VizError, VizResult};

#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Text(Vec<String>),
    Number(Vec<f64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Number(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells as display strings; numbers use their shortest round-trip form.
    pub fn to_text(&self) -> Vec<String> {
        match self {
            Column::Text(v) => v.clone(),
            Column::Number(v) => v.iter().map(|x| x.to_string()).collect(),
        }
    }
}

/// Column-oriented table with named columns, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<(String, Column)>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a column.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = column,
            None => self.columns.push((name, column)),
        }
        self
    }

    pub fn with_text(self, name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.with_column(name, Column::Text(values.into_iter().map(Into::into).collect()))
    }

    pub fn with_numbers(self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.with_column(name, Column::Number(values.into()))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn column(&self, name: &str) -> VizResult<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| VizError::MissingColumn(name.to_owned()))
    }

    pub fn numbers(&self, name: &str) -> VizResult<&[f64]> {
        match self.column(name)? {
            Column::Number(v) => Ok(v),
            Column::Text(_) => Err(VizError::ColumnType { column: name.to_owned(), expected: "numeric" }),
        }
    }

    /// Rows of the table (length of the longest column).
    pub fn len(&self) -> usize {
        self.columns.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_csv(path: impl AsRef<Path>) -> VizResult<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Read a headed CSV. A column whose non-empty cells all parse as numbers
    /// becomes numeric (empty cells as NaN); anything else stays text.
    pub fn from_reader(reader: impl Read) -> VizResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for rec in rdr.records() {
            let rec = rec?;
            for (i, col) in cells.iter_mut().enumerate() {
                col.push(rec.get(i).unwrap_or_default().to_owned());
            }
        }

        let mut table = Self::new();
        for (name, raw) in headers.into_iter().zip(cells) {
            table = table.with_column(name, infer_column(raw));
        }
        Ok(table)
    }
}

fn infer_column(raw: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = raw
        .iter()
        .map(|s| if s.is_empty() { Some(f64::NAN) } else { s.parse::<f64>().ok() })
        .collect();
    match parsed {
        Some(values) if raw.iter().any(|s| !s.is_empty()) => Column::Number(values),
        _ => Column::Text(raw),
    }
}

/// Rectangular matrix with row and column labels; rendered as-is by heatmaps.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledMatrix {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl LabeledMatrix {
    /// Contract: `values` has one row per row label and every row has one
    /// value per column label.
    pub fn new(row_labels: Vec<String>, col_labels: Vec<String>, values: Vec<Vec<f64>>) -> VizResult<Self> {
        if values.len() != row_labels.len() {
            return Err(VizError::InvalidMatrix(format!(
                "{} rows of values for {} row labels",
                values.len(),
                row_labels.len()
            )));
        }
        if let Some((i, row)) = values.iter().enumerate().find(|(_, r)| r.len() != col_labels.len()) {
            return Err(VizError::InvalidMatrix(format!(
                "row {i} has {} values for {} column labels",
                row.len(),
                col_labels.len()
            )));
        }
        Ok(Self { row_labels, col_labels, values })
    }

    /// Numeric columns of `table` become matrix columns; rows are labeled by
    /// `index_column` when given, otherwise by position.
    pub fn from_table(table: &DataTable, index_column: Option<&str>) -> VizResult<Self> {
        let rows = table.len();
        let row_labels = match index_column {
            Some(name) => table.column(name)?.to_text(),
            None => (0..rows).map(|i| i.to_string()).collect(),
        };
        let numeric: Vec<(&str, &[f64])> = table
            .columns
            .iter()
            .filter(|(n, _)| Some(n.as_str()) != index_column)
            .filter_map(|(n, c)| match c {
                Column::Number(v) => Some((n.as_str(), v.as_slice())),
                Column::Text(_) => None,
            })
            .collect();
        let col_labels = numeric.iter().map(|(n, _)| (*n).to_owned()).collect();
        let values = (0..rows)
            .map(|r| numeric.iter().map(|(_, v)| v.get(r).copied().unwrap_or(f64::NAN)).collect())
            .collect();
        Self::new(row_labels, col_labels, values)
    }

    /// CSV whose first column holds the row labels.
    pub fn from_csv(path: impl AsRef<Path>) -> VizResult<Self> {
        let table = DataTable::from_csv(path)?;
        let index = table.column_names().next().map(str::to_owned);
        Self::from_table(&table, index.as_deref())
    }

    pub fn row_labels(&self) -> &[String] { &self.row_labels }
    pub fn col_labels(&self) -> &[String] { &self.col_labels }
    pub fn rows(&self) -> usize { self.row_labels.len() }
    pub fn cols(&self) -> usize { self.col_labels.len() }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flatten().copied()
    }
}

/// One named subset of the data rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Group<'a> {
    pub name: &'a str,
    pub indices: Vec<usize>,
}

/// Rows split by equality against each group name, in the given name order.
///
/// Names that match nothing produce an empty group; rows whose label matches
/// no name are left out.
pub fn partition<'a, S: AsRef<str>>(groups: &[S], names: &'a [S]) -> Vec<Group<'a>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let indices = groups
                .iter()
                .enumerate()
                .filter(|(_, g)| g.as_ref() == name)
                .map(|(i, _)| i)
                .collect();
            Group { name, indices }
        })
        .collect()
}

/// Resolve the optional grouping pair of a request. Both or neither, and
/// `groups` carries one label per data row.
pub fn resolve_grouping<'a, S: AsRef<str>>(
    groups: Option<&'a [S]>,
    names: Option<&'a [S]>,
    rows: usize,
) -> VizResult<Option<Vec<Group<'a>>>> {
    match (groups, names) {
        (Some(groups), Some(_)) if groups.len() != rows => {
            Err(VizError::LengthMismatch { what: "groups", got: groups.len(), expected: rows })
        }
        (Some(groups), Some(names)) => Ok(Some(partition(groups, names))),
        (None, None) => Ok(None),
        _ => Err(VizError::IncompleteGrouping),
    }
}

/// Gather `values[i]` for every index, failing on an index past the end.
pub fn select(values: &[f64], indices: &[usize], what: &'static str) -> VizResult<Vec<f64>> {
    indices
        .iter()
        .map(|&i| {
            values.get(i).copied().ok_or(VizError::LengthMismatch { what, got: values.len(), expected: i + 1 })
        })
        .collect()
}

/// Display form of a group or category key: `_` becomes a space and every
/// word is title-cased. Only used for labels; masking uses the raw key.
pub fn display_label(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_cased = false;
    for ch in key.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if ch.is_alphabetic() {
            if prev_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(ch);
            prev_cased = false;
        }
    }
    out
}

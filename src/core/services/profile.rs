//! CSV summary
//!
//! Counts rows and columns, missing values per column, and a coarse value
//! kind. Values are never validated or coerced.

use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use thiserror::Error;

use super::naming::standardize_columns;

/// Errors raised while reading a CSV for profiling
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Input is not readable as CSV
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Input has no header row
    #[error("csv has no header row")]
    NoHeader,
}

/// Coarse kind of the non-missing values in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Every value parses as an integer
    Integer,
    /// Every value parses as a number
    Float,
    /// Every value is `true` or `false`
    Boolean,
    /// Anything else
    Text,
    /// No non-missing values
    Empty,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::Empty => "empty",
        };
        f.pad(s)
    }
}

/// Summary of one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    /// Header as written in the file
    pub name: String,
    /// Standardized header
    pub standardized: String,
    /// Number of empty or absent values
    pub missing: usize,
    /// Missing values as a percentage of rows
    pub missing_pct: f64,
    /// Inferred value kind
    pub kind: ColumnKind,
}

/// Summary of a CSV file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetProfile {
    /// Number of data rows (header excluded)
    pub rows: usize,
    /// Per-column summaries in header order
    pub columns: Vec<ColumnProfile>,
}

#[derive(Debug, Clone, Copy)]
struct KindTracker {
    present: usize,
    integer: bool,
    float: bool,
    boolean: bool,
}

impl KindTracker {
    const fn new() -> Self {
        Self {
            present: 0,
            integer: true,
            float: true,
            boolean: true,
        }
    }

    fn observe(&mut self, value: &str) {
        self.present += 1;
        if self.integer && value.parse::<i64>().is_err() {
            self.integer = false;
        }
        if self.float && value.parse::<f64>().is_err() {
            self.float = false;
        }
        if self.boolean && !value.eq_ignore_ascii_case("true") && !value.eq_ignore_ascii_case("false")
        {
            self.boolean = false;
        }
    }

    const fn kind(self) -> ColumnKind {
        if self.present == 0 {
            ColumnKind::Empty
        } else if self.integer {
            ColumnKind::Integer
        } else if self.float {
            ColumnKind::Float
        } else if self.boolean {
            ColumnKind::Boolean
        } else {
            ColumnKind::Text
        }
    }
}

/// Profile CSV data from any reader
///
/// Rows shorter than the header count their absent fields as missing; extra
/// fields are ignored.
///
/// # Errors
///
/// Returns `ProfileError::NoHeader` for empty input, or a CSV read error.
pub fn profile_csv<R: Read>(reader: R) -> Result<DatasetProfile, ProfileError> {
    let mut csv = ReaderBuilder::new().flexible(true).trim(Trim::All).from_reader(reader);

    let headers: Vec<String> = csv.headers()?.iter().map(String::from).collect();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(ProfileError::NoHeader);
    }

    let mut missing = vec![0usize; headers.len()];
    let mut kinds = vec![KindTracker::new(); headers.len()];
    let mut rows = 0usize;

    for record in csv.records() {
        let record = record?;
        rows += 1;
        for (i, (miss, kind)) in missing.iter_mut().zip(kinds.iter_mut()).enumerate() {
            match record.get(i) {
                Some(value) if !value.is_empty() => kind.observe(value),
                _ => *miss += 1,
            }
        }
    }

    let standardized = standardize_columns(&headers);
    let columns = headers
        .into_iter()
        .zip(standardized)
        .zip(missing.into_iter().zip(kinds))
        .map(|((name, standardized), (missing, kind))| ColumnProfile {
            name,
            standardized,
            missing,
            missing_pct: percentage(missing, rows),
            kind: kind.kind(),
        })
        .collect();

    Ok(DatasetProfile { rows, columns })
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { part as f64 / total as f64 * 100.0 }
}

impl DatasetProfile {
    /// Columns with at least one missing value, most missing first
    #[must_use]
    pub fn columns_with_missing(&self) -> Vec<&ColumnProfile> {
        let mut cols: Vec<_> = self.columns.iter().filter(|c| c.missing > 0).collect();
        cols.sort_by(|a, b| b.missing.cmp(&a.missing).then_with(|| a.name.cmp(&b.name)));
        cols
    }

    /// Plain-text summary report
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = vec![
            "=== DATASET SUMMARY ===".to_string(),
            format!("Number of rows: {}", self.rows),
            format!("Number of columns: {}", self.columns.len()),
            String::new(),
            "=== COLUMNS ===".to_string(),
        ];

        for col in &self.columns {
            let renamed = if col.name == col.standardized {
                String::new()
            } else {
                format!(" -> {}", col.standardized)
            };
            out.push(format!("{:30} {:8}{}", col.name, col.kind, renamed));
        }

        let with_missing = self.columns_with_missing();
        out.push(String::new());
        out.push("=== MISSING VALUES ===".to_string());
        if with_missing.is_empty() {
            out.push("none".to_string());
        }
        for col in with_missing {
            out.push(format!("{:30} {:>6} ({:.1}%)", col.name, col.missing, col.missing_pct));
        }

        out.join("\n")
    }
}

//! Ideal sequence table loading and caching
//!
//! The ideal ±1 sequences are flat numeric text tables, one file per
//! supported order. Two on-disk conventions exist in the field (whitespace
//! rows vs. comma-delimited with transposed flattening), so the delimiter and
//! flattening order are per-file settings rather than hard-coded. The shipped
//! tables are embedded at compile time so that default resolution is relative
//! to the installed crate, never to the process working directory; a
//! directory-backed store supports externally supplied tables.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::debug;
use once_cell::sync::Lazy;

use crate::error::ReferenceError;
use crate::order::SequenceOrder;

/// Column delimiter of a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Whitespace,
    Comma,
}

/// Flattening order applied when collapsing a rectangular table to one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    RowMajor,
    ColumnMajor,
}

/// On-disk convention of one table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub delimiter: Delimiter,
    pub layout: Layout,
}

impl TableFormat {
    /// Convention each shipped table was generated with.
    pub fn for_order(order: SequenceOrder) -> Self {
        match order {
            SequenceOrder::Order12 => TableFormat {
                delimiter: Delimiter::Comma,
                layout: Layout::RowMajor,
            },
            _ => TableFormat {
                delimiter: Delimiter::Whitespace,
                layout: Layout::RowMajor,
            },
        }
    }
}

enum TableSource {
    Embedded,
    Dir(PathBuf),
}

/// Loads and caches the ideal sequence for each supported order.
///
/// Cache entries are written once and never mutated, so a populated store is
/// safe to share across threads. Two threads racing to populate the same
/// order both parse the same bytes and insert bit-identical values.
pub struct TableStore {
    source: TableSource,
    formats: HashMap<SequenceOrder, TableFormat>,
    cache: Mutex<HashMap<SequenceOrder, Arc<[f64]>>>,
}

static DEFAULT_STORE: Lazy<TableStore> = Lazy::new(TableStore::embedded);

/// Process-wide store backed by the embedded tables.
pub fn default_store() -> &'static TableStore {
    &DEFAULT_STORE
}

impl TableStore {
    /// Store backed by the tables compiled into the crate.
    pub fn embedded() -> Self {
        TableStore {
            source: TableSource::Embedded,
            formats: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Store backed by `mlbs<order>.txt` files in `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        TableStore {
            source: TableSource::Dir(dir.into()),
            formats: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Override the on-disk convention for one order's table.
    pub fn with_format(mut self, order: SequenceOrder, format: TableFormat) -> Self {
        self.formats.insert(order, format);
        self
    }

    fn format(&self, order: SequenceOrder) -> TableFormat {
        self.formats
            .get(&order)
            .copied()
            .unwrap_or_else(|| TableFormat::for_order(order))
    }

    /// Load the ideal ±1 sequence for `order`, exactly `2^order - 1` chips.
    pub fn load(&self, order: SequenceOrder) -> Result<Arc<[f64]>, ReferenceError> {
        if let Some(seq) = self.cache.lock().unwrap().get(&order) {
            return Ok(Arc::clone(seq));
        }

        let text = self.read_raw(order)?;
        let chips: Arc<[f64]> = parse_table(&text, self.format(order), order)?.into();
        debug!(
            "loaded MLBS table for order {order}: {} chips",
            chips.len()
        );

        let mut cache = self.cache.lock().unwrap();
        let entry = cache.entry(order).or_insert(chips);
        Ok(Arc::clone(entry))
    }

    fn read_raw(&self, order: SequenceOrder) -> Result<String, ReferenceError> {
        match &self.source {
            TableSource::Embedded => Ok(embedded_table(order).to_string()),
            TableSource::Dir(dir) => {
                let path = dir.join(order.table_name());
                fs::read_to_string(&path).map_err(|source| ReferenceError::TableIo { order, source })
            }
        }
    }
}

fn embedded_table(order: SequenceOrder) -> &'static str {
    match order {
        SequenceOrder::Order9 => include_str!("../data/mlbs9.txt"),
        SequenceOrder::Order12 => include_str!("../data/mlbs12.txt"),
        SequenceOrder::Order15 => include_str!("../data/mlbs15.txt"),
    }
}

/// Parse a table file and flatten it to exactly `2^order - 1` chips.
///
/// The on-disk table may carry padding beyond the sequence length; excess
/// values are truncated after flattening, matching the convention the tables
/// were generated with.
fn parse_table(
    text: &str,
    format: TableFormat,
    order: SequenceOrder,
) -> Result<Vec<f64>, ReferenceError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = match format.delimiter {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Comma => line.split(',').map(str::trim).collect(),
        };
        let mut row = Vec::with_capacity(fields.len());
        for field in fields {
            let value: f64 = field.parse().map_err(|_| ReferenceError::TableParse {
                order,
                detail: format!("unparseable value {field:?} on line {}", line_no + 1),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    let flat = match format.layout {
        Layout::RowMajor => rows.into_iter().flatten().collect::<Vec<f64>>(),
        Layout::ColumnMajor => {
            let width = rows.first().map_or(0, Vec::len);
            if rows.iter().any(|r| r.len() != width) {
                return Err(ReferenceError::TableParse {
                    order,
                    detail: "ragged rows cannot be flattened column-major".to_string(),
                });
            }
            let mut flat = Vec::with_capacity(rows.len() * width);
            for col in 0..width {
                for row in &rows {
                    flat.push(row[col]);
                }
            }
            flat
        }
    };

    let expected = order.sequence_len();
    if flat.len() < expected {
        return Err(ReferenceError::TableTooShort {
            order,
            expected,
            actual: flat.len(),
        });
    }

    Ok(flat[..expected].to_vec())
}

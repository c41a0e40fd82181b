//! Conversion of raw rows into validated parts.

use crate::error::Result;
use crate::reader;
use crate::row::{
    normalize_row, RawRow, COL_HEIGHT, COL_MATERIAL, COL_NAME, COL_QUANTITY, COL_THICKNESS,
    COL_WIDTH,
};
use cutlist_core::{Part, DEFAULT_MATERIAL, MAX_QUANTITY};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a row was excluded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    /// A required column is absent or empty.
    Missing(String),
    /// A required column does not parse as a number.
    NotANumber(String, String),
    /// A required column is zero, negative or not finite.
    NotPositive(String, String),
    /// The quantity exceeds [`MAX_QUANTITY`].
    QuantityTooLarge(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Missing(field) => write!(f, "missing {}", field),
            RejectReason::NotANumber(field, value) => {
                write!(f, "{} '{}' is not a number", field, value)
            }
            RejectReason::NotPositive(field, value) => {
                write!(f, "{} '{}' is not a positive finite number", field, value)
            }
            RejectReason::QuantityTooLarge(value) => {
                write!(f, "{} '{}' exceeds {}", COL_QUANTITY, value, MAX_QUANTITY)
            }
        }
    }
}

/// A row that did not become a part.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RejectedRow {
    /// 1-based position among the data rows handed to the loader.
    ///
    /// The header is not counted, and neither are the blank lines the CSV
    /// reader drops, so this can trail the line number in the file.
    pub row: usize,
    /// Why it was rejected.
    pub reason: RejectReason,
}

/// Accepted parts plus the rows that were dropped.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Validated parts in canonical order.
    pub parts: Vec<Arc<Part>>,
    /// Rejected rows in input order.
    pub rejected: Vec<RejectedRow>,
}

impl Catalog {
    /// Number of rejected rows.
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Returns true if no part was accepted.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Sum of accepted quantities.
    pub fn total_quantity(&self) -> usize {
        self.parts.iter().map(|p| p.quantity()).sum()
    }
}

/// Loads part catalogs from loosely-typed tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Loads a catalog from a CSV file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        let rows = reader::read_rows_from_path(path)?;
        Ok(self.load_rows(&rows))
    }

    /// Loads a catalog from CSV text.
    pub fn load_reader<R: Read>(&self, source: R) -> Result<Catalog> {
        let rows = reader::read_rows(source)?;
        Ok(self.load_rows(&rows))
    }

    /// Validates rows into parts.
    ///
    /// Bad rows are recorded in [`Catalog::rejected`] and never abort the
    /// load. Accepted parts are sorted by thickness, height, width and name.
    /// Rows are numbered from 1 in slice order; see [`RejectedRow::row`].
    pub fn load_rows(&self, rows: &[RawRow]) -> Catalog {
        let mut catalog = Catalog::default();

        for (i, raw) in rows.iter().enumerate() {
            let row = i + 1;
            match parse_part(row, &normalize_row(raw)) {
                Ok(part) => catalog.parts.push(Arc::new(part)),
                Err(reason) => {
                    log::warn!("Skipping row {}: {}", row, reason);
                    catalog.rejected.push(RejectedRow { row, reason });
                }
            }
        }

        catalog.parts.sort_by(|a, b| {
            a.thickness()
                .total_cmp(&b.thickness())
                .then(a.height().total_cmp(&b.height()))
                .then(a.width().total_cmp(&b.width()))
                .then_with(|| a.name().cmp(b.name()))
        });

        log::info!(
            "Loaded {} parts ({} units), rejected {} rows",
            catalog.parts.len(),
            catalog.total_quantity(),
            catalog.rejected_count()
        );

        catalog
    }
}

fn parse_part(row: usize, cells: &RawRow) -> std::result::Result<Part, RejectReason> {
    let width = positive(cells, COL_WIDTH)?;
    let height = positive(cells, COL_HEIGHT)?;
    let thickness = positive(cells, COL_THICKNESS)?;

    let name = non_empty(cells, COL_NAME)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Part-{}", row));
    let material = non_empty(cells, COL_MATERIAL).unwrap_or(DEFAULT_MATERIAL);

    Ok(Part::new(name, width, height, thickness)
        .with_material(material)
        .with_quantity(quantity(cells)?)
        .with_row(row))
}

fn non_empty<'a>(cells: &'a RawRow, column: &str) -> Option<&'a str> {
    cells
        .get(column)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn positive(cells: &RawRow, column: &str) -> std::result::Result<f64, RejectReason> {
    let text = non_empty(cells, column).ok_or_else(|| RejectReason::Missing(column.to_string()))?;
    let value: f64 = text
        .parse()
        .map_err(|_| RejectReason::NotANumber(column.to_string(), text.to_string()))?;

    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RejectReason::NotPositive(column.to_string(), text.to_string()))
    }
}

fn quantity(cells: &RawRow) -> std::result::Result<usize, RejectReason> {
    let Some(text) = non_empty(cells, COL_QUANTITY) else {
        return Ok(1);
    };
    let value = match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc(),
        _ => return Ok(1),
    };

    if value > MAX_QUANTITY as f64 {
        return Err(RejectReason::QuantityTooLarge(text.to_string()));
    }
    Ok(value.max(1.0) as usize)
}

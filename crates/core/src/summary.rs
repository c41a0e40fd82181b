//! Inventory summary of the catalog.
//!
//! The summary is computed from parts, not from packing results: a part
//! that could not be placed still contributes its full quantity.

use crate::part::Part;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column headers of a summary table, in output order.
pub const SUMMARY_HEADER: [&str; 6] = [
    "Part Name",
    "Width",
    "Height",
    "Thickness",
    "Material",
    "Quantity",
];

/// Total quantity of one distinct part.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryRow {
    /// Part name.
    pub name: String,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Thickness.
    pub thickness: f64,
    /// Material.
    pub material: String,
    /// Summed quantity.
    pub quantity: usize,
}

type PartKey<'a> = (&'a str, u64, u64, u64, &'a str);

fn key(part: &Part) -> PartKey<'_> {
    (
        part.name(),
        part.width().to_bits(),
        part.height().to_bits(),
        part.thickness().to_bits(),
        part.material(),
    )
}

/// Sums quantities over parts sharing `(name, width, height, thickness, material)`.
///
/// Rows come out in ascending thickness, then in order of first appearance.
pub fn aggregate(parts: &[Arc<Part>]) -> Vec<SummaryRow> {
    let mut index: HashMap<PartKey<'_>, usize> = HashMap::new();
    let mut rows: Vec<SummaryRow> = Vec::new();

    for part in parts {
        match index.get(&key(part)) {
            Some(&i) => rows[i].quantity += part.quantity(),
            None => {
                index.insert(key(part), rows.len());
                rows.push(SummaryRow {
                    name: part.name().to_string(),
                    width: part.width(),
                    height: part.height(),
                    thickness: part.thickness(),
                    material: part.material().to_string(),
                    quantity: part.quantity(),
                });
            }
        }
    }

    // Stable: first-appearance order survives within a thickness.
    rows.sort_by(|a, b| a.thickness.total_cmp(&b.thickness));
    rows
}

/// Splits aggregated rows into one table per thickness.
///
/// Expects rows as produced by [`aggregate`] (sorted by thickness).
pub fn summary_by_thickness(rows: &[SummaryRow]) -> Vec<(f64, Vec<SummaryRow>)> {
    let mut tables: Vec<(f64, Vec<SummaryRow>)> = Vec::new();
    for row in rows {
        match tables.last_mut() {
            Some((thickness, table)) if *thickness == row.thickness => table.push(row.clone()),
            _ => tables.push((row.thickness, vec![row.clone()])),
        }
    }
    tables
}

/// Returns the total quantity across rows.
pub fn total_quantity(rows: &[SummaryRow]) -> usize {
    rows.iter().map(|r| r.quantity).sum()
}

//! Pack result representation.

use crate::part::Unit;
use crate::sheet::{Sheet, SheetBounds};
use crate::solver::Strategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics for a single sheet of a pack result.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetStats {
    /// 1-based sheet index.
    pub sheet_index: usize,
    /// Number of units placed on the sheet.
    pub piece_count: usize,
    /// Total area of units placed on the sheet.
    pub piece_area: f64,
    /// Covered fraction of the sheet (0.0 - 1.0).
    pub utilization: f64,
}

/// Result of packing one thickness group with one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Thickness of the group.
    pub thickness: f64,

    /// Strategy used.
    pub strategy: Strategy,

    /// Sheets in overflow order; indices are 1, 2, 3, ...
    pub sheets: Vec<Sheet>,

    /// Units larger than the sheet, in input order.
    pub unplaceable: Vec<Unit>,
}

impl PackResult {
    /// Creates a new empty result.
    pub fn new(thickness: f64, strategy: Strategy) -> Self {
        Self {
            thickness,
            strategy,
            sheets: Vec::new(),
            unplaceable: Vec::new(),
        }
    }

    /// Returns the number of placed units.
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(Sheet::len).sum()
    }

    /// Returns the number of units that could never fit.
    pub fn unplaceable_count(&self) -> usize {
        self.unplaceable.len()
    }

    /// Returns the number of units that went into the run.
    pub fn total_units(&self) -> usize {
        self.placed_count() + self.unplaceable_count()
    }

    /// Returns the number of sheets used.
    pub fn sheets_used(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if every unit was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaceable.is_empty()
    }

    /// Returns the total area of placed units.
    pub fn used_area(&self) -> f64 {
        self.sheets.iter().map(Sheet::used_area).sum()
    }

    /// Returns the covered fraction of all sheets used (0.0 - 1.0).
    pub fn utilization(&self, bounds: &SheetBounds) -> f64 {
        let material = bounds.area() * self.sheets.len() as f64;
        if material > 0.0 {
            self.used_area() / material
        } else {
            0.0
        }
    }

    /// Computes per-sheet statistics.
    pub fn sheet_stats(&self, bounds: &SheetBounds) -> Vec<SheetStats> {
        self.sheets
            .iter()
            .map(|sheet| SheetStats {
                sheet_index: sheet.index,
                piece_count: sheet.len(),
                piece_area: sheet.used_area(),
                utilization: sheet.utilization(bounds),
            })
            .collect()
    }

    /// Builds a compact summary of the run.
    pub fn summary(&self, bounds: &SheetBounds) -> PackSummary {
        PackSummary {
            thickness: self.thickness,
            strategy: self.strategy,
            total_units: self.total_units(),
            placed: self.placed_count(),
            unplaceable: self.unplaceable_count(),
            sheets: self.sheets_used(),
            utilization_percent: self.utilization(bounds) * 100.0,
        }
    }
}

/// Summary statistics for a pack result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Thickness of the group.
    pub thickness: f64,
    /// Strategy used.
    pub strategy: Strategy,
    /// Units that went into the run.
    pub total_units: usize,
    /// Units placed.
    pub placed: usize,
    /// Units that could never fit.
    pub unplaceable: usize,
    /// Sheets used.
    pub sheets: usize,
    /// Utilization percentage over the sheets used.
    pub utilization_percent: f64,
}

//! Placement representation for positioned units.
//!
//! Coordinates use a top-left origin with y growing downward, so `(x, y)`
//! is the corner nearest the sheet's top-left corner.

use crate::part::Unit;
use crate::sheet::SheetBounds;
use crate::solver::Strategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit fitted onto a sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The placed unit.
    pub unit: Unit,

    /// Left edge.
    pub x: f64,

    /// Top edge.
    pub y: f64,

    /// 1-based index of the sheet holding this placement.
    pub sheet_index: usize,

    /// Strategy that produced the placement.
    pub strategy: Strategy,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(unit: Unit, x: f64, y: f64, sheet_index: usize, strategy: Strategy) -> Self {
        Self {
            unit,
            x,
            y,
            sheet_index,
            strategy,
        }
    }

    /// Returns the placed width.
    pub fn width(&self) -> f64 {
        self.unit.width()
    }

    /// Returns the placed height.
    pub fn height(&self) -> f64 {
        self.unit.height()
    }

    /// Returns the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width()
    }

    /// Returns the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height()
    }

    /// Returns the covered area.
    pub fn area(&self) -> f64 {
        self.unit.area()
    }

    /// Returns true if the open rectangles intersect.
    ///
    /// Placements that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns true if the placement lies entirely on a sheet of `bounds`.
    pub fn is_within(&self, bounds: &SheetBounds) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= bounds.width()
            && self.bottom() <= bounds.height()
    }
}

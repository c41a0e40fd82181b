//! Stock sheet bounds and packed sheets.

use crate::placement::Placement;
use crate::solver::Strategy;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of one stock sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetBounds {
    width: f64,
    height: f64,
}

impl SheetBounds {
    /// Creates sheet bounds with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the sheet area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if a `width` × `height` rectangle fits on an empty sheet.
    pub fn fits(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }

    /// Validates that both dimensions are positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidConfiguration(
                "Sheet dimensions must be finite".into(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "Sheet dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// One packed stock sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// Thickness shared by every placement on the sheet.
    pub thickness: f64,

    /// Strategy that produced the sheet.
    pub strategy: Strategy,

    /// 1-based position in the run's overflow sequence.
    pub index: usize,

    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(thickness: f64, strategy: Strategy, index: usize) -> Self {
        Self {
            thickness,
            strategy,
            index,
            placements: Vec::new(),
        }
    }

    /// Returns the number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the total area covered by placed parts.
    pub fn used_area(&self) -> f64 {
        self.placements.iter().map(Placement::area).sum()
    }

    /// Returns the covered fraction of `bounds` (0.0 - 1.0).
    pub fn utilization(&self, bounds: &SheetBounds) -> f64 {
        let area = bounds.area();
        if area > 0.0 {
            self.used_area() / area
        } else {
            0.0
        }
    }

    /// Returns the deterministic output file name without extension:
    /// `layout_thickness_<thickness>_sheet_<index>_<strategy>`.
    pub fn file_stem(&self) -> String {
        format!(
            "layout_thickness_{}_sheet_{}_{}",
            self.thickness, self.index, self.strategy
        )
    }
}

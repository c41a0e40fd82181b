//! Part records and their expansion into placeable units.

use crate::{Error, Result};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Material name used when a catalog row does not specify one.
pub const DEFAULT_MATERIAL: &str = "Default";

/// Largest quantity one part may request.
pub const MAX_QUANTITY: usize = 10_000;

/// One validated catalog entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Display name.
    name: String,

    /// Extent along the sheet's x axis.
    width: f64,

    /// Extent along the sheet's y axis.
    height: f64,

    /// Material thickness; only equal thicknesses share a sheet.
    thickness: f64,

    /// Material name.
    material: String,

    /// Number of physical copies to cut.
    quantity: usize,

    /// 1-based source row number (0 when not loaded from a table).
    row: usize,
}

impl Part {
    /// Creates a part with quantity 1 and the default material.
    pub fn new(name: impl Into<String>, width: f64, height: f64, thickness: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            thickness,
            material: DEFAULT_MATERIAL.to_string(),
            quantity: 1,
            row: 0,
        }
    }

    /// Sets the material name.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the source row number.
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the thickness.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns the material name.
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Returns the source row number.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the face area of one copy.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the larger of width and height.
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Checks the catalog invariants.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidPart(format!(
                    "{} of '{}' must be a positive finite number, got {}",
                    field, self.name, value
                )));
            }
        }

        if self.quantity == 0 {
            return Err(Error::InvalidPart(format!(
                "Quantity for '{}' must be at least 1",
                self.name
            )));
        }

        if self.quantity > MAX_QUANTITY {
            return Err(Error::InvalidPart(format!(
                "Quantity {} for '{}' exceeds the limit of {}",
                self.quantity, self.name, MAX_QUANTITY
            )));
        }

        Ok(())
    }
}

/// One physical instance of a [`Part`] awaiting placement.
///
/// Units of the same part report identically but keep their own
/// `instance` index so placements stay distinguishable.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    part: Arc<Part>,
    instance: usize,
}

impl Unit {
    /// Creates the `instance`-th unit of `part`.
    pub fn new(part: Arc<Part>, instance: usize) -> Self {
        Self { part, instance }
    }

    /// Returns the source part.
    pub fn part(&self) -> &Part {
        &self.part
    }

    /// Returns the shared handle to the source part.
    pub fn part_handle(&self) -> &Arc<Part> {
        &self.part
    }

    /// Returns the 0-based instance index within the part's quantity.
    pub fn instance(&self) -> usize {
        self.instance
    }

    /// Returns the part name.
    pub fn name(&self) -> &str {
        self.part.name()
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.part.width()
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.part.height()
    }

    /// Returns the thickness.
    pub fn thickness(&self) -> f64 {
        self.part.thickness()
    }

    /// Returns the face area.
    pub fn area(&self) -> f64 {
        self.part.area()
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.instance == other.instance
            && (Arc::ptr_eq(&self.part, &other.part) || self.part == other.part)
    }
}

/// Expands parts by quantity, returning one unit per physical copy.
///
/// Part order is preserved and each part's units appear in ascending
/// instance order.
pub fn expand_units(parts: &[Arc<Part>]) -> Vec<Unit> {
    let total: usize = parts.iter().map(|p| p.quantity()).sum();
    let mut units = Vec::with_capacity(total);
    for part in parts {
        for instance in 0..part.quantity() {
            units.push(Unit::new(Arc::clone(part), instance));
        }
    }
    units
}

//! Shelf packer.

use cutlist_core::{
    Error, PackResult, Packer, Placement, Result, Sheet, SheetBounds, Strategy, Unit,
};

/// Running position inside one sheet.
///
/// `along` advances inside the current shelf (a row or a column), `across`
/// is the offset of that shelf, `shelf_depth` is the deepest unit on it.
#[derive(Debug, Default)]
struct ShelfCursor {
    along: f64,
    across: f64,
    shelf_depth: f64,
}

impl ShelfCursor {
    /// Reserves room for a unit measuring `length` along the shelf and
    /// `depth` across it, returning its `(along, across)` position.
    ///
    /// Returns `None` when the unit does not fit on this sheet even after
    /// starting a new shelf.
    fn reserve(
        &mut self,
        length: f64,
        depth: f64,
        max_length: f64,
        max_depth: f64,
        kerf: f64,
    ) -> Option<(f64, f64)> {
        if self.along + length > max_length {
            self.along = 0.0;
            self.across += self.shelf_depth + kerf;
            self.shelf_depth = 0.0;
        }

        if self.across + depth > max_depth {
            return None;
        }

        let position = (self.along, self.across);
        self.along += length + kerf;
        self.shelf_depth = self.shelf_depth.max(depth);
        Some(position)
    }
}

/// Greedy shelf packer over fixed-size sheets.
///
/// Units are placed strictly in the order given; the packer never sorts.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    bounds: SheetBounds,
    kerf: f64,
}

impl ShelfPacker {
    /// Creates a packer, rejecting bounds or kerf that cannot produce a layout.
    pub fn new(bounds: SheetBounds, kerf: f64) -> Result<Self> {
        bounds.validate()?;
        if !kerf.is_finite() || kerf < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "kerf must be a finite non-negative number, got {}",
                kerf
            )));
        }
        Ok(Self { bounds, kerf })
    }

    /// Returns the kerf.
    pub fn kerf(&self) -> f64 {
        self.kerf
    }

    fn reserve(&self, cursor: &mut ShelfCursor, unit: &Unit, strategy: Strategy) -> Option<(f64, f64)> {
        let (w, h) = (unit.width(), unit.height());
        let (sheet_w, sheet_h) = (self.bounds.width(), self.bounds.height());

        match strategy {
            Strategy::Row => cursor.reserve(w, h, sheet_w, sheet_h, self.kerf),
            Strategy::Column => cursor
                .reserve(h, w, sheet_h, sheet_w, self.kerf)
                .map(|(y, x)| (x, y)),
        }
    }

    fn shelf_packing(&self, thickness: f64, units: &[Unit], strategy: Strategy) -> PackResult {
        let mut result = PackResult::new(thickness, strategy);
        let mut sheet = Sheet::new(thickness, strategy, 1);
        let mut cursor = ShelfCursor::default();

        for unit in units {
            // Oversized units would otherwise open sheets forever.
            if !self.bounds.fits(unit.width(), unit.height()) {
                log::warn!(
                    "'{}' ({}x{}) exceeds the {}x{} sheet, skipping",
                    unit.name(),
                    unit.width(),
                    unit.height(),
                    self.bounds.width(),
                    self.bounds.height()
                );
                result.unplaceable.push(unit.clone());
                continue;
            }

            let (x, y) = loop {
                if let Some(position) = self.reserve(&mut cursor, unit, strategy) {
                    break position;
                }

                // A fresh sheet always takes a unit that passed the fit check.
                debug_assert!(!sheet.is_empty());
                let next = Sheet::new(thickness, strategy, sheet.index + 1);
                let full = std::mem::replace(&mut sheet, next);
                log::debug!(
                    "thickness {} ({}): sheet {} closed with {} parts",
                    thickness,
                    strategy,
                    full.index,
                    full.len()
                );
                result.sheets.push(full);
                cursor = ShelfCursor::default();
            };

            sheet
                .placements
                .push(Placement::new(unit.clone(), x, y, sheet.index, strategy));
        }

        if !sheet.is_empty() {
            result.sheets.push(sheet);
        }

        result
    }
}

impl Packer for ShelfPacker {
    fn bounds(&self) -> &SheetBounds {
        &self.bounds
    }

    fn pack(&self, thickness: f64, units: &[Unit], strategy: Strategy) -> PackResult {
        self.shelf_packing(thickness, units, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::{expand_units, Part};
    use std::sync::Arc;

    fn units_of(parts: Vec<Part>) -> Vec<Unit> {
        let parts: Vec<Arc<Part>> = parts.into_iter().map(Arc::new).collect();
        expand_units(&parts)
    }

    fn positions(result: &PackResult) -> Vec<(usize, f64, f64)> {
        result
            .sheets
            .iter()
            .flat_map(|s| s.placements.iter().map(|p| (p.sheet_index, p.x, p.y)))
            .collect()
    }

    #[test]
    fn test_two_parts_share_a_row() {
        let units = units_of(vec![Part::new("P", 10.0, 10.0, 0.75).with_quantity(2)]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 20.0), 0.0).unwrap();

        let result = packer.pack(0.75, &units, Strategy::Row);

        assert_eq!(result.sheets_used(), 1);
        assert_eq!(result.unplaceable_count(), 0);
        assert_eq!(positions(&result), vec![(1, 0.0, 0.0), (1, 10.0, 0.0)]);
    }

    #[test]
    fn test_oversized_parts_are_unplaceable() {
        let units = units_of(vec![Part::new("Wide", 30.0, 10.0, 0.75).with_quantity(3)]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 40.0), 0.0).unwrap();

        for strategy in Strategy::ALL {
            let result = packer.pack(0.75, &units, strategy);
            assert_eq!(result.unplaceable_count(), 3);
            assert!(result.sheets.is_empty());
        }
    }

    #[test]
    fn test_row_wraps_then_overflows() {
        let units = units_of(vec![Part::new("P", 10.0, 10.0, 0.5).with_quantity(5)]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 20.0), 0.0).unwrap();

        let result = packer.pack(0.5, &units, Strategy::Row);

        assert_eq!(
            positions(&result),
            vec![
                (1, 0.0, 0.0),
                (1, 10.0, 0.0),
                (1, 0.0, 10.0),
                (1, 10.0, 10.0),
                (2, 0.0, 0.0),
            ]
        );
        assert_eq!(result.sheets[0].index, 1);
        assert_eq!(result.sheets[1].index, 2);
    }

    #[test]
    fn test_column_fills_downward_first() {
        let units = units_of(vec![Part::new("P", 10.0, 10.0, 0.5).with_quantity(3)]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 20.0), 0.0).unwrap();

        let result = packer.pack(0.5, &units, Strategy::Column);

        assert_eq!(
            positions(&result),
            vec![(1, 0.0, 0.0), (1, 0.0, 10.0), (1, 10.0, 0.0)]
        );
        assert!(result
            .sheets
            .iter()
            .flat_map(|s| &s.placements)
            .all(|p| p.strategy == Strategy::Column));
    }

    #[test]
    fn test_column_kerf_spaces_placements() {
        let units = units_of(vec![Part::new("P", 8.0, 9.0, 0.5).with_quantity(4)]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 20.0), 1.0).unwrap();

        let result = packer.pack(0.5, &units, Strategy::Column);

        assert_eq!(
            positions(&result),
            vec![(1, 0.0, 0.0), (1, 0.0, 10.0), (1, 9.0, 0.0), (1, 9.0, 10.0)]
        );
    }

    #[test]
    fn test_column_overflows_to_next_sheet() {
        let units = units_of(vec![Part::new("P", 10.0, 10.0, 0.5).with_quantity(5)]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 20.0), 0.0).unwrap();

        let result = packer.pack(0.5, &units, Strategy::Column);

        assert_eq!(
            positions(&result),
            vec![
                (1, 0.0, 0.0),
                (1, 0.0, 10.0),
                (1, 10.0, 0.0),
                (1, 10.0, 10.0),
                (2, 0.0, 0.0),
            ]
        );
        let indices: Vec<usize> = result.sheets.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(result.sheets[1].placements[0].sheet_index, 2);
    }

    #[test]
    fn test_row_height_tracks_tallest_part() {
        let units = units_of(vec![
            Part::new("Tall", 10.0, 15.0, 0.5),
            Part::new("Short", 10.0, 5.0, 0.5),
            Part::new("Next", 10.0, 5.0, 0.5),
        ]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 40.0), 0.0).unwrap();

        let result = packer.pack(0.5, &units, Strategy::Row);

        assert_eq!(
            positions(&result),
            vec![(1, 0.0, 0.0), (1, 10.0, 0.0), (1, 0.0, 15.0)]
        );
    }

    #[test]
    fn test_kerf_spaces_placements() {
        let units = units_of(vec![Part::new("P", 9.0, 9.0, 0.5).with_quantity(4)]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 20.0), 1.0).unwrap();

        let result = packer.pack(0.5, &units, Strategy::Row);

        assert_eq!(
            positions(&result),
            vec![
                (1, 0.0, 0.0),
                (1, 10.0, 0.0),
                (1, 0.0, 10.0),
                (1, 10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_kerf_pushes_part_to_next_row() {
        let units = units_of(vec![Part::new("P", 10.0, 5.0, 0.5).with_quantity(2)]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 20.0), 0.25).unwrap();

        let result = packer.pack(0.5, &units, Strategy::Row);

        assert_eq!(positions(&result), vec![(1, 0.0, 0.0), (1, 0.0, 5.25)]);
    }

    #[test]
    fn test_oversized_unit_does_not_disturb_cursor() {
        let units = units_of(vec![
            Part::new("A", 10.0, 10.0, 0.5),
            Part::new("Huge", 10.0, 50.0, 0.5),
            Part::new("B", 10.0, 10.0, 0.5),
        ]);
        let packer = ShelfPacker::new(SheetBounds::new(20.0, 20.0), 0.0).unwrap();

        let result = packer.pack(0.5, &units, Strategy::Row);

        assert_eq!(result.unplaceable_count(), 1);
        assert_eq!(result.unplaceable[0].name(), "Huge");
        assert_eq!(positions(&result), vec![(1, 0.0, 0.0), (1, 10.0, 0.0)]);
    }

    #[test]
    fn test_exact_fit_part() {
        let units = units_of(vec![Part::new("Full", 48.0, 96.0, 0.75).with_quantity(2)]);
        let packer = ShelfPacker::new(SheetBounds::new(48.0, 96.0), 0.125).unwrap();

        let result = packer.pack(0.75, &units, Strategy::Row);

        assert_eq!(result.sheets_used(), 2);
        assert_eq!(positions(&result), vec![(1, 0.0, 0.0), (2, 0.0, 0.0)]);
    }

    #[test]
    fn test_empty_input() {
        let packer = ShelfPacker::new(SheetBounds::new(48.0, 96.0), 0.0).unwrap();
        let result = packer.pack(0.75, &[], Strategy::Row);
        assert!(result.sheets.is_empty());
        assert_eq!(result.unplaceable_count(), 0);
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        assert!(ShelfPacker::new(SheetBounds::new(0.0, 96.0), 0.0).is_err());
        assert!(ShelfPacker::new(SheetBounds::new(48.0, 96.0), -0.1).is_err());
        assert!(ShelfPacker::new(SheetBounds::new(48.0, 96.0), f64::NAN).is_err());
    }
}

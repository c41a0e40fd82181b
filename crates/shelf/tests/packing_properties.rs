//! Layout invariants of the shelf packer and planner.
//!
//! Randomized inputs use fixed seeds so failures are reproducible.

use cutlist_core::{
    expand_units, Config, PackResult, Packer, Part, SheetBounds, Strategy, StrategySelection,
    UnitOrder,
};
use cutlist_shelf::{CutPlanner, ShelfPacker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const THICKNESSES: [f64; 3] = [0.25, 0.5, 0.75];

fn random_parts(seed: u64, count: usize, max_w: f64, max_h: f64) -> Vec<Arc<Part>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let width = rng.gen_range(0.5..max_w);
            let height = rng.gen_range(0.5..max_h);
            let thickness = THICKNESSES[rng.gen_range(0..THICKNESSES.len())];
            let quantity = rng.gen_range(1..5);
            Arc::new(Part::new(format!("P{}", i), width, height, thickness).with_quantity(quantity))
        })
        .collect()
}

fn assert_layout_invariants(result: &PackResult, bounds: &SheetBounds) {
    for (i, sheet) in result.sheets.iter().enumerate() {
        assert_eq!(sheet.index, i + 1, "sheet indices must be contiguous from 1");
        assert!(!sheet.is_empty(), "empty sheets must not be emitted");
        assert_eq!(sheet.strategy, result.strategy);

        for p in &sheet.placements {
            assert!(p.is_within(bounds), "{:?} leaves the sheet", (p.x, p.y));
            assert_eq!(p.sheet_index, sheet.index);
            assert_eq!(p.unit.thickness(), sheet.thickness);
        }

        for (a_idx, a) in sheet.placements.iter().enumerate() {
            for b in &sheet.placements[a_idx + 1..] {
                assert!(
                    !a.overlaps(b),
                    "overlap on sheet {}: ({}, {}) and ({}, {})",
                    sheet.index,
                    a.x,
                    a.y,
                    b.x,
                    b.y
                );
            }
        }
    }
}

#[test]
fn test_invariants_hold_for_random_catalogs() {
    let bounds = SheetBounds::new(48.0, 96.0);

    for seed in 0..20 {
        // Some parts exceed the sheet to exercise the unplaceable path.
        let parts = random_parts(seed, 30, 60.0, 100.0);
        for kerf in [0.0, 0.125] {
            let config = Config::new()
                .with_kerf(kerf)
                .with_strategies(StrategySelection::Both);
            let plan = CutPlanner::new(config).unwrap().plan(&parts).unwrap();

            for layout in &plan.layouts {
                assert_layout_invariants(layout, &bounds);
            }

            let total_units: usize = parts.iter().map(|p| p.quantity()).sum();
            for strategy in Strategy::ALL {
                let accounted: usize = plan.layouts_for(strategy).map(PackResult::total_units).sum();
                assert_eq!(accounted, total_units, "seed {} {}", seed, strategy);
            }
        }
    }
}

#[test]
fn test_conservation_per_group() {
    let parts = random_parts(7, 25, 30.0, 50.0);
    let units = expand_units(&parts);
    let packer = ShelfPacker::new(SheetBounds::new(24.0, 48.0), 0.25).unwrap();

    for strategy in Strategy::ALL {
        let result = packer.pack(0.5, &units, strategy);
        assert_eq!(
            result.placed_count() + result.unplaceable_count(),
            units.len()
        );
        for unit in &result.unplaceable {
            assert!(unit.width() > 24.0 || unit.height() > 48.0);
        }
    }
}

#[test]
fn test_planning_is_deterministic() {
    let parts = random_parts(42, 40, 40.0, 80.0);
    let config = Config::new()
        .with_kerf(0.125)
        .with_strategies(StrategySelection::Both)
        .with_order(UnitOrder::AreaDesc);

    let first = CutPlanner::new(config.clone()).unwrap().plan(&parts).unwrap();
    let second = CutPlanner::new(config).unwrap().plan(&parts).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_two_small_parts_fill_one_row() {
    let parts = vec![Arc::new(Part::new("Square", 10.0, 10.0, 0.75).with_quantity(2))];
    let plan = CutPlanner::new(Config::new().with_sheet_size(20.0, 20.0))
        .unwrap()
        .plan(&parts)
        .unwrap();

    assert_eq!(plan.layouts.len(), 1);
    let layout = &plan.layouts[0];
    assert_eq!(layout.sheets_used(), 1);
    assert_eq!(layout.unplaceable_count(), 0);

    let corners: Vec<(f64, f64)> = layout.sheets[0]
        .placements
        .iter()
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(corners, vec![(0.0, 0.0), (10.0, 0.0)]);
}

#[test]
fn test_parts_wider_than_sheet_are_all_reported() {
    let parts = vec![Arc::new(Part::new("Wide", 30.0, 10.0, 0.75).with_quantity(3))];
    let plan = CutPlanner::new(Config::new().with_sheet_size(20.0, 40.0))
        .unwrap()
        .plan(&parts)
        .unwrap();

    let layout = &plan.layouts[0];
    assert_eq!(layout.unplaceable_count(), 3);
    assert!(layout.sheets.is_empty());
    assert_eq!(plan.summary[0].quantity, 3);
}

#[test]
fn test_many_parts_overflow_onto_many_sheets() {
    let parts = vec![Arc::new(Part::new("Panel", 24.0, 48.0, 0.75).with_quantity(9))];
    let plan = CutPlanner::new(Config::new().with_strategies(StrategySelection::Both))
        .unwrap()
        .plan(&parts)
        .unwrap();

    // Four 24x48 panels per 48x96 sheet.
    assert_eq!(plan.total_sheets(Strategy::Row), 3);
    assert_eq!(plan.total_sheets(Strategy::Column), 3);
    let last = plan.layouts[0].sheets.last().unwrap();
    assert_eq!(last.index, 3);
    assert_eq!(last.len(), 1);
}

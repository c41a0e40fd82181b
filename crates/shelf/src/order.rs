//! Unit ordering applied before packing.

use cutlist_core::{Unit, UnitOrder};

/// Sorts units in place according to `order`.
///
/// Every policy is a stable sort, so ties keep the incoming (loader) order.
pub fn order_units(units: &mut [Unit], order: UnitOrder) {
    match order {
        UnitOrder::MaxDimensionDesc => units.sort_by(|a, b| {
            b.part()
                .max_dimension()
                .total_cmp(&a.part().max_dimension())
        }),
        UnitOrder::AreaDesc => units.sort_by(|a, b| b.area().total_cmp(&a.area())),
        UnitOrder::AsLoaded => {}
    }
}

//! Thickness partitioning.

use crate::part::Unit;
use crate::solver::ThicknessGrouping;

/// Units sharing one thickness, in their incoming order.
#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessGroup {
    /// Group thickness (the first thickness seen for the group).
    pub thickness: f64,
    /// Units of the group.
    pub units: Vec<Unit>,
}

impl ThicknessGroup {
    fn matches(&self, thickness: f64, grouping: ThicknessGrouping) -> bool {
        match grouping {
            ThicknessGrouping::Exact => self.thickness == thickness,
            ThicknessGrouping::Tolerance(eps) => (self.thickness - thickness).abs() <= eps,
        }
    }
}

/// Groups units by thickness.
///
/// Groups are returned in ascending thickness order; units keep their
/// incoming order within each group. With [`ThicknessGrouping::Tolerance`] a
/// unit joins the first group (in creation order) within range.
pub fn partition_by_thickness(units: Vec<Unit>, grouping: ThicknessGrouping) -> Vec<ThicknessGroup> {
    let mut groups: Vec<ThicknessGroup> = Vec::new();

    for unit in units {
        let thickness = unit.thickness();
        match groups.iter_mut().find(|g| g.matches(thickness, grouping)) {
            Some(group) => group.units.push(unit),
            None => groups.push(ThicknessGroup {
                thickness,
                units: vec![unit],
            }),
        }
    }

    groups.sort_by(|a, b| a.thickness.total_cmp(&b.thickness));
    groups
}

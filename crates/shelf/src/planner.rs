//! Batch planning: from parts to sheets and a summary.

use crate::order::order_units;
use crate::packer::ShelfPacker;
use cutlist_core::{
    aggregate, expand_units, partition_by_thickness, Config, PackResult, PackSummary, Packer,
    Part, Result, Sheet, SheetBounds, Strategy, SummaryRow, ThicknessGroup,
};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output of a planning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutPlan {
    /// Sheet bounds the plan was computed for.
    pub bounds: SheetBounds,

    /// One result per thickness and strategy, by ascending thickness and
    /// then in strategy selection order.
    pub layouts: Vec<PackResult>,

    /// Inventory summary of the input parts.
    pub summary: Vec<SummaryRow>,
}

impl CutPlan {
    /// Returns true if the plan holds no layouts.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Returns the layouts produced by `strategy`.
    pub fn layouts_for(&self, strategy: Strategy) -> impl Iterator<Item = &PackResult> {
        self.layouts.iter().filter(move |l| l.strategy == strategy)
    }

    /// Returns every sheet of the plan in layout order.
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.layouts.iter().flat_map(|l| l.sheets.iter())
    }

    /// Returns the number of sheets `strategy` needs across all thicknesses.
    pub fn total_sheets(&self, strategy: Strategy) -> usize {
        self.layouts_for(strategy).map(PackResult::sheets_used).sum()
    }

    /// Returns the number of units `strategy` could not place.
    pub fn total_unplaceable(&self, strategy: Strategy) -> usize {
        self.layouts_for(strategy)
            .map(PackResult::unplaceable_count)
            .sum()
    }

    /// Returns the strategy using the fewest sheets among those run.
    ///
    /// Ties go to [`Strategy::Row`]. Returns `None` for an empty plan.
    pub fn best_strategy(&self) -> Option<Strategy> {
        Strategy::ALL
            .into_iter()
            .filter(|s| self.layouts_for(*s).next().is_some())
            .min_by_key(|s| self.total_sheets(*s))
    }

    /// Summarizes every layout.
    pub fn summaries(&self) -> Vec<PackSummary> {
        self.layouts.iter().map(|l| l.summary(&self.bounds)).collect()
    }
}

/// Runs the full pipeline: expansion, grouping, ordering, packing and
/// summary aggregation.
#[derive(Debug, Clone)]
pub struct CutPlanner {
    config: Config,
    packer: ShelfPacker,
}

impl CutPlanner {
    /// Creates a planner, rejecting invalid configuration up front.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let packer = ShelfPacker::new(config.bounds(), config.kerf)?;
        Ok(Self { config, packer })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Plans the given parts.
    ///
    /// Thickness groups are packed in parallel; the result does not depend
    /// on scheduling.
    pub fn plan(&self, parts: &[Arc<Part>]) -> Result<CutPlan> {
        for part in parts {
            part.validate()?;
        }

        let start = Instant::now();
        let units = expand_units(parts);
        let unit_count = units.len();
        let groups = partition_by_thickness(units, self.config.grouping);
        let group_count = groups.len();

        let layouts: Vec<PackResult> = groups
            .into_par_iter()
            .map(|group| self.pack_group(group))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        let summary = aggregate(parts);

        log::info!(
            "planned {} units in {} thickness groups: {} layouts in {}ms",
            unit_count,
            group_count,
            layouts.len(),
            start.elapsed().as_millis()
        );

        Ok(CutPlan {
            bounds: *self.packer.bounds(),
            layouts,
            summary,
        })
    }

    fn pack_group(&self, group: ThicknessGroup) -> Vec<PackResult> {
        let ThicknessGroup {
            thickness,
            mut units,
        } = group;
        order_units(&mut units, self.config.order);

        self.config
            .strategies
            .strategies()
            .iter()
            .map(|&strategy| {
                let result = self.packer.pack(thickness, &units, strategy);
                log::debug!(
                    "thickness {} ({}): {} sheets, {} unplaceable",
                    thickness,
                    strategy,
                    result.sheets_used(),
                    result.unplaceable_count()
                );
                result
            })
            .collect()
    }
}

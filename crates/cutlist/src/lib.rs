//! # Cutlist
//!
//! Packs rectangular cabinet and furniture parts onto fixed-size stock
//! sheets, one material thickness at a time, and produces an inventory
//! summary of the catalog.
//!
//! ## Quick Start
//!
//! ```rust
//! use cutlist::{Config, CutPlanner, Part, StrategySelection};
//! use std::sync::Arc;
//!
//! let parts = vec![
//!     Arc::new(Part::new("Side", 12.0, 30.0, 0.75).with_quantity(2)),
//!     Arc::new(Part::new("Back", 24.0, 30.0, 0.25)),
//! ];
//!
//! let config = Config::new()
//!     .with_kerf(0.125)
//!     .with_strategies(StrategySelection::Both);
//! let plan = CutPlanner::new(config)?.plan(&parts)?;
//!
//! assert_eq!(plan.layouts.len(), 4);
//! assert_eq!(plan.summary.len(), 2);
//! # Ok::<(), cutlist::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `catalog` (default): CSV catalog loading and summary output
//! - `serde`: Serialization support

/// Core data model and pipeline stages.
pub use cutlist_core as core;

/// Shelf packer and planner.
pub use cutlist_shelf as shelf;

/// Catalog loading and reporting.
#[cfg(feature = "catalog")]
pub use cutlist_catalog as catalog;

// Re-export commonly used types at root level
pub use cutlist_core::{
    Config, Error, PackResult, Packer, Part, Placement, Result, Sheet, SheetBounds, Strategy,
    StrategySelection, SummaryRow, ThicknessGrouping, UnitOrder,
};
pub use cutlist_shelf::{CutPlan, CutPlanner, ShelfPacker};

#[cfg(feature = "catalog")]
pub use cutlist_catalog::{Catalog, CatalogLoader};

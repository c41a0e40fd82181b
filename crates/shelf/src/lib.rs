//! # Cutlist Shelf
//!
//! Shelf packing of rectangular parts onto fixed-size stock sheets.
//!
//! The packer fills one shelf at a time (a row or a column), opens the next
//! shelf when the current one runs out of length, and opens a new sheet when
//! no further shelf fits. Placement order is exactly the input order, so the
//! resulting layout can be reproduced by hand on a saw table.
//!
//! - [`ShelfPacker`]: one thickness group, one strategy
//! - [`order_units`]: caller-side sort policies
//! - [`CutPlanner`]: the whole batch, thickness groups in parallel

pub mod order;
pub mod packer;
pub mod planner;

// Re-exports
pub use order::order_units;
pub use packer::ShelfPacker;
pub use planner::{CutPlan, CutPlanner};
pub use cutlist_core::{Config, Error, PackResult, Packer, Placement, Result, Sheet, Strategy};

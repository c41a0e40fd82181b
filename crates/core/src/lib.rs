//! # Cutlist Core
//!
//! Core types and abstractions for the cutlist sheet packing engine.
//!
//! This crate provides the data model shared by the catalog loader and the
//! shelf packer, along with the pure pipeline stages that have no
//! algorithmic choices of their own.
//!
//! ## Core Components
//!
//! - **Parts and units**: `Part`, `Unit`, quantity expansion
//! - **Grouping**: thickness partitioning with exact or tolerant matching
//! - **Layout types**: `SheetBounds`, `Sheet`, `Placement`, `PackResult`
//! - **Packer trait**: common interface for packing engines
//! - **Summary**: inventory aggregation per distinct part
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod group;
pub mod part;
pub mod placement;
pub mod result;
pub mod sheet;
pub mod solver;
pub mod summary;

// Re-exports
pub use error::{Error, Result};
pub use group::{partition_by_thickness, ThicknessGroup};
pub use part::{expand_units, Part, Unit, DEFAULT_MATERIAL, MAX_QUANTITY};
pub use placement::Placement;
pub use result::{PackResult, PackSummary, SheetStats};
pub use sheet::{Sheet, SheetBounds};
pub use solver::{
    Config, Packer, Strategy, StrategySelection, ThicknessGrouping, UnitOrder,
    DEFAULT_SHEET_HEIGHT, DEFAULT_SHEET_WIDTH,
};
pub use summary::{aggregate, summary_by_thickness, total_quantity, SummaryRow, SUMMARY_HEADER};

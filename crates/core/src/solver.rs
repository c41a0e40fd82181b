//! Packer trait and planning configuration.

use crate::part::Unit;
use crate::result::PackResult;
use crate::sheet::SheetBounds;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default stock sheet width.
pub const DEFAULT_SHEET_WIDTH: f64 = 48.0;

/// Default stock sheet height.
pub const DEFAULT_SHEET_HEIGHT: f64 = 96.0;

/// Shelf orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Fill rows left to right, stack rows downward.
    #[default]
    Row,
    /// Fill columns top to bottom, stack columns rightward.
    Column,
}

impl Strategy {
    /// Both strategies, in reporting order.
    pub const ALL: [Strategy; 2] = [Strategy::Row, Strategy::Column];

    /// Returns the lowercase token used in file names and options.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Row => "row",
            Strategy::Column => "column",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "row" => Ok(Strategy::Row),
            "column" => Ok(Strategy::Column),
            other => Err(Error::UnknownToken {
                kind: "strategy",
                token: other.to_string(),
                expected: "row, column",
            }),
        }
    }
}

/// Which strategies a planning run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategySelection {
    /// Row strategy only.
    #[default]
    Row,
    /// Column strategy only.
    Column,
    /// Row, then column.
    Both,
}

impl StrategySelection {
    /// Returns the selected strategies in execution order.
    pub fn strategies(&self) -> &'static [Strategy] {
        match self {
            StrategySelection::Row => &Strategy::ALL[..1],
            StrategySelection::Column => &Strategy::ALL[1..],
            StrategySelection::Both => &Strategy::ALL,
        }
    }
}

impl From<Strategy> for StrategySelection {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Row => StrategySelection::Row,
            Strategy::Column => StrategySelection::Column,
        }
    }
}

impl fmt::Display for StrategySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySelection::Row => f.write_str("row"),
            StrategySelection::Column => f.write_str("column"),
            StrategySelection::Both => f.write_str("both"),
        }
    }
}

impl FromStr for StrategySelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "row" => Ok(StrategySelection::Row),
            "column" => Ok(StrategySelection::Column),
            "both" => Ok(StrategySelection::Both),
            other => Err(Error::UnknownToken {
                kind: "strategy",
                token: other.to_string(),
                expected: "row, column, both",
            }),
        }
    }
}

/// Order in which units are handed to the packer.
///
/// The packer itself never sorts; the planner applies this policy first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitOrder {
    /// Largest `max(width, height)` first.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "max-dimension"))]
    MaxDimensionDesc,
    /// Largest face area first.
    #[cfg_attr(feature = "serde", serde(rename = "area"))]
    AreaDesc,
    /// Catalog order as produced by the loader.
    #[cfg_attr(feature = "serde", serde(rename = "as-loaded"))]
    AsLoaded,
}

impl fmt::Display for UnitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitOrder::MaxDimensionDesc => f.write_str("max-dimension"),
            UnitOrder::AreaDesc => f.write_str("area"),
            UnitOrder::AsLoaded => f.write_str("as-loaded"),
        }
    }
}

impl FromStr for UnitOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "max-dimension" => Ok(UnitOrder::MaxDimensionDesc),
            "area" => Ok(UnitOrder::AreaDesc),
            "as-loaded" => Ok(UnitOrder::AsLoaded),
            other => Err(Error::UnknownToken {
                kind: "unit order",
                token: other.to_string(),
                expected: "max-dimension, area, as-loaded",
            }),
        }
    }
}

/// How thickness values are compared when grouping units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThicknessGrouping {
    /// Exact numeric equality. 0.749999 and 0.75 are different groups.
    #[default]
    Exact,
    /// Values within the given distance of a group's first thickness join it.
    Tolerance(f64),
}

/// Planning configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Stock sheet width.
    pub sheet_width: f64,

    /// Stock sheet height.
    pub sheet_height: f64,

    /// Blade width inserted between adjacent placements.
    pub kerf: f64,

    /// Strategies to run for every thickness group.
    pub strategies: StrategySelection,

    /// Unit ordering applied before packing.
    pub order: UnitOrder,

    /// Thickness comparison used by the partitioner.
    pub grouping: ThicknessGrouping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_width: DEFAULT_SHEET_WIDTH,
            sheet_height: DEFAULT_SHEET_HEIGHT,
            kerf: 0.0,
            strategies: StrategySelection::default(),
            order: UnitOrder::default(),
            grouping: ThicknessGrouping::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stock sheet size.
    pub fn with_sheet_size(mut self, width: f64, height: f64) -> Self {
        self.sheet_width = width;
        self.sheet_height = height;
        self
    }

    /// Sets the kerf.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Sets the strategies to run.
    pub fn with_strategies(mut self, strategies: impl Into<StrategySelection>) -> Self {
        self.strategies = strategies.into();
        self
    }

    /// Sets the unit ordering.
    pub fn with_order(mut self, order: UnitOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the thickness grouping.
    pub fn with_grouping(mut self, grouping: ThicknessGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Returns the sheet bounds.
    pub fn bounds(&self) -> SheetBounds {
        SheetBounds::new(self.sheet_width, self.sheet_height)
    }

    /// Rejects configurations that cannot produce a layout.
    pub fn validate(&self) -> Result<()> {
        self.bounds().validate()?;

        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "kerf must be a finite non-negative number, got {}",
                self.kerf
            )));
        }

        if let ThicknessGrouping::Tolerance(eps) = self.grouping {
            if !eps.is_finite() || eps < 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "thickness tolerance must be a finite non-negative number, got {}",
                    eps
                )));
            }
        }

        Ok(())
    }
}

/// Trait for sheet packing engines.
///
/// Implementations place units in the order given and must account for
/// every input unit, either as a placement or as unplaceable.
pub trait Packer {
    /// Returns the sheet bounds this packer fills.
    fn bounds(&self) -> &SheetBounds;

    /// Packs one thickness group with one strategy.
    fn pack(&self, thickness: f64, units: &[Unit], strategy: Strategy) -> PackResult;
}

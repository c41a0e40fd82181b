//! Planning configuration from file and flags.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use cutlist::{Config, StrategySelection, ThicknessGrouping, UnitOrder};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Fill horizontal rows left to right
    Row,
    /// Fill vertical columns top to bottom
    Column,
    /// Run both and compare
    Both,
}

impl From<StrategyArg> for StrategySelection {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Row => StrategySelection::Row,
            StrategyArg::Column => StrategySelection::Column,
            StrategyArg::Both => StrategySelection::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Larger of width and height, descending
    MaxDimension,
    /// Area, descending
    Area,
    /// Catalog order
    AsLoaded,
}

impl From<OrderArg> for UnitOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::MaxDimension => UnitOrder::MaxDimensionDesc,
            OrderArg::Area => UnitOrder::AreaDesc,
            OrderArg::AsLoaded => UnitOrder::AsLoaded,
        }
    }
}

/// Planning flags shared by commands that pack sheets.
#[derive(Debug, Clone, Default, Args)]
pub struct PlanSettings {
    /// JSON configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stock sheet width
    #[arg(long)]
    pub sheet_width: Option<f64>,

    /// Stock sheet height
    #[arg(long)]
    pub sheet_height: Option<f64>,

    /// Blade width between adjacent parts
    #[arg(long)]
    pub kerf: Option<f64>,

    /// Packing strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Order in which parts are placed
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Group thicknesses within this distance onto the same sheets
    #[arg(long)]
    pub thickness_tolerance: Option<f64>,
}

impl PlanSettings {
    /// Builds the validated configuration.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };

        if let Some(width) = self.sheet_width {
            config.sheet_width = width;
        }
        if let Some(height) = self.sheet_height {
            config.sheet_height = height;
        }
        if let Some(kerf) = self.kerf {
            config.kerf = kerf;
        }
        if let Some(strategy) = self.strategy {
            config.strategies = strategy.into();
        }
        if let Some(order) = self.order {
            config.order = order.into();
        }
        if let Some(eps) = self.thickness_tolerance {
            config.grouping = ThicknessGrouping::Tolerance(eps);
        }

        config.validate()?;
        tracing::debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

//! Writing and printing planning results.

use crate::render::render_sheet;
use anyhow::{Context, Result};
use cutlist::{Catalog, CutPlan, Strategy};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one SVG per sheet into `dir` and returns the created paths.
pub fn write_layouts(plan: &CutPlan, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for sheet in plan.sheets() {
        let path = dir.join(format!("{}.svg", sheet.file_stem()));
        fs::write(&path, render_sheet(sheet, &plan.bounds))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), placements = sheet.len(), "Wrote sheet");
        paths.push(path);
    }

    Ok(paths)
}

/// Saves the whole plan as pretty-printed JSON.
pub fn save_json(plan: &CutPlan, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Prints rejected rows, if any.
pub fn print_rejected(catalog: &Catalog) {
    if catalog.rejected.is_empty() {
        return;
    }

    println!("Rejected rows: {}", catalog.rejected_count());
    for rejected in &catalog.rejected {
        println!("  row {:<5} {}", rejected.row, rejected.reason);
    }
}

/// Prints the loader report for `check`.
pub fn print_catalog(catalog: &Catalog) {
    println!(
        "Accepted parts: {} ({} pieces)",
        catalog.parts.len(),
        catalog.total_quantity()
    );
    println!("{:-<72}", "");
    println!(
        "  {:<24} {:>8} {:>8} {:>8} {:<12} {:>5}",
        "Part Name", "Width", "Height", "Thick", "Material", "Qty"
    );
    for part in &catalog.parts {
        println!(
            "  {:<24} {:>8} {:>8} {:>8} {:<12} {:>5}",
            part.name(),
            part.width(),
            part.height(),
            part.thickness(),
            part.material(),
            part.quantity()
        );
    }
    print_rejected(catalog);
}

/// Prints a per-thickness, per-strategy table and the unplaceable parts.
pub fn print_plan(plan: &CutPlan) {
    if plan.is_empty() {
        println!("No parts to pack.");
        return;
    }

    println!(
        "Sheet {} x {}",
        plan.bounds.width(),
        plan.bounds.height()
    );
    println!("{:-<72}", "");
    println!(
        "  {:>9} {:<8} {:>7} {:>7} {:>12} {:>7} {:>8}",
        "Thickness", "Strategy", "Units", "Placed", "Unplaceable", "Sheets", "Util"
    );
    for summary in plan.summaries() {
        println!(
            "  {:>9} {:<8} {:>7} {:>7} {:>12} {:>7} {:>7.1}%",
            summary.thickness,
            summary.strategy,
            summary.total_units,
            summary.placed,
            summary.unplaceable,
            summary.sheets,
            summary.utilization_percent
        );
    }

    let strategies: Vec<Strategy> = Strategy::ALL
        .into_iter()
        .filter(|s| plan.layouts_for(*s).next().is_some())
        .collect();
    if strategies.len() > 1 {
        println!();
        for strategy in &strategies {
            println!(
                "  {:<8} {} sheets total",
                strategy,
                plan.total_sheets(*strategy)
            );
        }
        if let Some(best) = plan.best_strategy() {
            println!("  Fewest sheets: {}", best);
        }
    }

    for layout in plan.layouts.iter().filter(|l| !l.unplaceable.is_empty()) {
        println!();
        println!(
            "Unplaceable at thickness {} ({}):",
            layout.thickness, layout.strategy
        );
        for unit in &layout.unplaceable {
            println!("  {} ({} x {})", unit.name(), unit.width(), unit.height());
        }
    }
}

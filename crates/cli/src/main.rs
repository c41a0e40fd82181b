//! Cut-list planner CLI.

mod output;
mod render;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cutlist::catalog::{write_summary, write_summary_files};
use cutlist::core::aggregate;
use cutlist::{Catalog, CatalogLoader, CutPlanner};
use settings::PlanSettings;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "cutlist")]
#[command(about = "Pack cut-list parts onto stock sheets")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a catalog and write sheet layouts and the cut summary
    Plan {
        /// Part catalog (CSV)
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        #[command(flatten)]
        settings: PlanSettings,

        /// Write one summary file per thickness
        #[arg(long)]
        split_summary: bool,

        /// Also save the full plan as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Write the cut summary without packing
    Summary {
        /// Part catalog (CSV)
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "cut_summary.csv")]
        output: PathBuf,
    },

    /// Validate a catalog and list rejected rows
    Check {
        /// Part catalog (CSV)
        input: PathBuf,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG takes precedence over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "cutlist=info",
            2 => "cutlist=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn load_catalog(input: &Path) -> Result<Catalog> {
    CatalogLoader::new()
        .load_path(input)
        .with_context(|| format!("Failed to load catalog {}", input.display()))
}

fn run_plan(
    input: &Path,
    out_dir: &Path,
    settings: &PlanSettings,
    split_summary: bool,
    json: Option<&Path>,
) -> Result<()> {
    let config = settings.resolve()?;
    let catalog = load_catalog(input)?;
    output::print_rejected(&catalog);

    let start = Instant::now();
    let plan = CutPlanner::new(config)?.plan(&catalog.parts)?;
    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "Planning finished");

    output::print_plan(&plan);

    let layouts = output::write_layouts(&plan, out_dir)?;
    let summaries = write_summary_files(out_dir, &plan.summary, split_summary)
        .with_context(|| format!("Failed to write summary into {}", out_dir.display()))?;

    println!();
    println!("Layouts written: {} in {}", layouts.len(), out_dir.display());
    for path in &summaries {
        println!("Summary saved to: {}", path.display());
    }

    if let Some(path) = json {
        output::save_json(&plan, path)?;
        println!("Plan saved to: {}", path.display());
    }

    Ok(())
}

fn run_summary(input: &Path, out_file: &Path) -> Result<()> {
    let catalog = load_catalog(input)?;
    output::print_rejected(&catalog);

    let rows = aggregate(&catalog.parts);
    let file = File::create(out_file)
        .with_context(|| format!("Failed to create {}", out_file.display()))?;
    write_summary(file, &rows)?;

    println!("Summary saved to: {} ({} rows)", out_file.display(), rows.len());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Plan {
            input,
            output,
            settings,
            split_summary,
            json,
        } => run_plan(&input, &output, &settings, split_summary, json.as_deref())?,

        Commands::Summary { input, output } => run_summary(&input, &output)?,

        Commands::Check { input } => {
            let catalog = load_catalog(&input)?;
            output::print_catalog(&catalog);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;

    const CATALOG: &str = "\
Part Name,Width,Height,Thickness,Material,Quantity
Side,12,30,0.75,Birch,2
Back,24,30,0.25,Hardboard,1
Oops,12,,0.75,Birch,1
";

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan_flags() {
        let cli = Cli::try_parse_from([
            "cutlist",
            "-vv",
            "plan",
            "parts.csv",
            "--kerf",
            "0.125",
            "--strategy",
            "both",
            "--order",
            "as-loaded",
            "--split-summary",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Plan {
                input,
                settings,
                split_summary,
                ..
            } => {
                assert_eq!(input, PathBuf::from("parts.csv"));
                assert_eq!(settings.kerf, Some(0.125));
                assert_eq!(settings.strategy, Some(crate::settings::StrategyArg::Both));
                assert_eq!(settings.order, Some(crate::settings::OrderArg::AsLoaded));
                assert!(split_summary);
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result = Cli::try_parse_from(["cutlist", "plan", "parts.csv", "--strategy", "diagonal"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_plan_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("parts.csv");
        fs::write(&input, CATALOG).unwrap();
        let out = dir.path().join("out");
        let json = dir.path().join("plan.json");

        run_plan(&input, &out, &PlanSettings::default(), false, Some(&json)).unwrap();

        assert!(out.join("cut_summary.csv").exists());
        assert!(out.join("layout_thickness_0.25_sheet_1_row.svg").exists());
        assert!(out.join("layout_thickness_0.75_sheet_1_row.svg").exists());
        assert!(!out.join("layout_thickness_0.75_sheet_1_column.svg").exists());
        assert!(json.exists());
    }

    #[test]
    fn test_run_summary() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("parts.csv");
        fs::write(&input, CATALOG).unwrap();
        let out = dir.path().join("summary.csv");

        run_summary(&input, &out).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Side,12,30,0.75,Birch,2"));
    }

    #[test]
    fn test_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("none.csv")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load catalog"));
    }
}

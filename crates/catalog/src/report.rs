//! Summary table output.

use crate::error::Result;
use csv::Writer;
use cutlist_core::{summary_by_thickness, SummaryRow, SUMMARY_HEADER};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the consolidated summary table.
pub const SUMMARY_FILE_NAME: &str = "cut_summary.csv";

/// File name of the summary table for one thickness.
pub fn thickness_summary_file_name(thickness: f64) -> String {
    format!("cut_summary_thickness_{}.csv", thickness)
}

/// Writes summary rows as CSV with the fixed header.
pub fn write_summary<W: Write>(sink: W, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record(SUMMARY_HEADER)?;

    for row in rows {
        writer.write_record([
            row.name.clone(),
            row.width.to_string(),
            row.height.to_string(),
            row.thickness.to_string(),
            row.material.clone(),
            row.quantity.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the summary table(s) into `dir` and returns the created paths.
///
/// With `split_by_thickness` one file per thickness is written; otherwise a
/// single [`SUMMARY_FILE_NAME`]. An empty summary still produces the
/// consolidated file with only the header.
pub fn write_summary_files<P: AsRef<Path>>(
    dir: P,
    rows: &[SummaryRow],
    split_by_thickness: bool,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let tables: Vec<(PathBuf, Vec<SummaryRow>)> = if split_by_thickness && !rows.is_empty() {
        summary_by_thickness(rows)
            .into_iter()
            .map(|(thickness, group)| (dir.join(thickness_summary_file_name(thickness)), group))
            .collect()
    } else {
        vec![(dir.join(SUMMARY_FILE_NAME), rows.to_vec())]
    };

    let mut written = Vec::with_capacity(tables.len());
    for (path, group) in tables {
        write_summary(fs::File::create(&path)?, &group)?;
        log::debug!("Wrote {} summary rows to {}", group.len(), path.display());
        written.push(path);
    }

    Ok(written)
}

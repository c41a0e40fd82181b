//! # Cutlist Catalog
//!
//! Loading of part catalogs from loosely-typed tables and writing of the
//! inventory summary.
//!
//! Input rows are string-keyed cells. Headers are trimmed, a `Length`
//! column is read as `Width`, and rows whose dimensions are missing or not
//! positive numbers are rejected and reported instead of aborting the load.
//!
//! ```
//! use cutlist_catalog::CatalogLoader;
//!
//! let csv = "Part Name,Length,Height,Thickness,Quantity\nSide,12,30,0.75,2\nTop,24,,0.75,1\n";
//! let catalog = CatalogLoader::new().load_reader(csv.as_bytes()).unwrap();
//!
//! assert_eq!(catalog.parts.len(), 1);
//! assert_eq!(catalog.parts[0].width(), 12.0);
//! assert_eq!(catalog.rejected_count(), 1);
//! ```

pub mod error;
pub mod loader;
pub mod reader;
pub mod report;
pub mod row;

// Re-exports
pub use error::{CatalogError, Result};
pub use loader::{Catalog, CatalogLoader, RejectReason, RejectedRow};
pub use reader::{read_rows, read_rows_from_path};
pub use report::{
    thickness_summary_file_name, write_summary, write_summary_files, SUMMARY_FILE_NAME,
};
pub use row::{normalize_header, normalize_row, RawRow};

//! Raw catalog rows and column normalization.

use std::collections::HashMap;

/// One loosely-typed input row: column name → raw cell text.
pub type RawRow = HashMap<String, String>;

/// Column holding the part name.
pub const COL_NAME: &str = "Part Name";
/// Column holding the width.
pub const COL_WIDTH: &str = "Width";
/// Column holding the height.
pub const COL_HEIGHT: &str = "Height";
/// Column holding the thickness.
pub const COL_THICKNESS: &str = "Thickness";
/// Column holding the material.
pub const COL_MATERIAL: &str = "Material";
/// Column holding the quantity.
pub const COL_QUANTITY: &str = "Quantity";

const LENGTH_ALIAS: &str = "Length";

/// Normalizes a header: trims whitespace and renames `Length` to `Width`.
pub fn normalize_header(header: &str) -> String {
    let trimmed = header.trim();
    if trimmed.contains(LENGTH_ALIAS) {
        trimmed.replace(LENGTH_ALIAS, COL_WIDTH)
    } else {
        trimmed.to_string()
    }
}

/// Returns a row keyed by normalized headers with trimmed values.
///
/// Several raw headers can normalize to the same name. The winner is picked
/// in a fixed order: an explicit column beats a `Length` alias, a header
/// without surrounding whitespace beats a padded one, and remaining ties go
/// to the lexicographically smallest raw header.
pub fn normalize_row(row: &RawRow) -> RawRow {
    let mut cells: Vec<(&String, &String)> = row.iter().collect();
    cells.sort_by(|(a, _), (b, _)| {
        let rank = |key: &str| (key.contains(LENGTH_ALIAS), key.trim() != key);
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
    });

    let mut normalized = RawRow::with_capacity(row.len());
    for (key, value) in cells {
        normalized
            .entry(normalize_header(key))
            .or_insert_with(|| value.trim().to_string());
    }
    normalized
}

pub mod kent;
pub mod plates;
pub mod pole;
pub mod rotate;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

/// Table with the condensed preset used by every text report
pub(crate) fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format an angle in degrees for text output
pub(crate) fn deg(value: f64) -> String {
    format!("{value:.4}°")
}

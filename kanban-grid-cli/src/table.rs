//! Table helpers shared by the commands.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Create a table that wraps to the terminal width
pub fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A title cell with a collapse marker
pub fn title_cell(title: &str, collapsed: bool) -> Cell {
    if collapsed {
        Cell::new(format!("{} (collapsed)", title))
    } else {
        Cell::new(title)
    }
}

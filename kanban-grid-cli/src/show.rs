//! kanban-grid show - print column totals and the cell grid.

use anyhow::Result;
use comfy_table::Cell;
use kanban_grid::{BoardSession, ColumnStats};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::table::{new_table, title_cell};

/// Structured form of the board summary used for JSON/YAML output
#[derive(Debug, Serialize)]
pub struct BoardSummary<'a> {
    pub items: usize,
    pub orphaned: usize,
    pub columns: Vec<ColumnSummary<'a>>,
    pub swimlanes: Vec<SwimlaneSummary<'a>>,
    pub stats: ColumnStats,
}

#[derive(Debug, Serialize)]
pub struct ColumnSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub total: usize,
    pub collapsed: bool,
}

#[derive(Debug, Serialize)]
pub struct SwimlaneSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub collapsed: bool,
}

/// Summarize the visible board
pub fn summarize(session: &BoardSession) -> BoardSummary<'_> {
    let views = session.views();

    let columns = session
        .visible_columns()
        .into_iter()
        .map(|column| ColumnSummary {
            id: column.id.as_str(),
            title: &column.title,
            total: views.stats.total(&column.id),
            collapsed: column.is_collapsed,
        })
        .collect();

    let swimlanes = session
        .swimlanes()
        .iter()
        .map(|lane| SwimlaneSummary {
            id: lane.id.as_str(),
            title: &lane.title,
            collapsed: lane.is_collapsed,
        })
        .collect();

    BoardSummary {
        items: session.items().len(),
        orphaned: views.orphaned,
        columns,
        swimlanes,
        stats: views.stats,
    }
}

/// Print the board in the requested format
pub fn run_show(session: &BoardSession, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summarize(session))?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml_ng::to_string(&summarize(session))?);
        }
        OutputFormat::Table => print_tables(session),
    }
    Ok(())
}

fn print_tables(session: &BoardSession) {
    let views = session.views();
    let visible = session.visible_columns();

    let mut columns = new_table();
    columns.set_header(vec!["Column", "Items"]);
    for column in &visible {
        columns.add_row(vec![
            title_cell(&column.title, column.is_collapsed),
            Cell::new(views.stats.total(&column.id)),
        ]);
    }
    println!("{columns}");

    let mut grid = new_table();
    let mut header = vec![Cell::new("Swimlane")];
    header.extend(visible.iter().map(|c| Cell::new(&c.title)));
    grid.set_header(header);

    for lane in session.swimlanes() {
        let mut row = vec![title_cell(&lane.title, lane.is_collapsed)];
        row.extend(
            visible
                .iter()
                .map(|column| Cell::new(views.grouped.cell(&lane.id, &column.id).len())),
        );
        grid.add_row(row);
    }
    println!("{grid}");

    if views.orphaned > 0 {
        println!("{} items reference unknown columns or swimlanes", views.orphaned);
    }
}

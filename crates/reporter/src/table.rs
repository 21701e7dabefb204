use analytics::MetricsReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Renders the report as a two-column terminal table, one row per metric.
pub fn render_table(report: &MetricsReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Parameter", "Value"]);

    for (metric, value) in report.entries() {
        table.add_row(vec![
            Cell::new(metric.label()),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

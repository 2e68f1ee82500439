use crate::labels::clean_metric_name;
use crate::metrics::MetricRecord;

use super::document::{Region, html_escape};

pub const METRIC_NAME_HEADER: &str = "Metric Name";

/// Cells of a one-metric table: a header row and a single body row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// "Metric Name" followed by the raw timestamps.
    pub header: Vec<String>,
    /// The display label followed by the formatted values.
    pub body: Vec<String>,
}

impl TableView {
    #[must_use]
    pub fn from_record(record: &MetricRecord) -> Self {
        let header = std::iter::once(METRIC_NAME_HEADER.to_owned())
            .chain(record.timestamps.iter().cloned())
            .collect();
        let body = std::iter::once(clean_metric_name(&record.id))
            .chain(record.values.iter().map(f64::to_string))
            .collect();
        Self { header, body }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let header_cells: String = self
            .header
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let style = if idx == 0 {
                    " style=\"text-decoration: underline;\""
                } else {
                    ""
                };
                format!("<th scope=\"col\"{}>{}</th>", style, html_escape(cell))
            })
            .collect();

        let mut cells = self.body.iter();
        let row_header = cells
            .next()
            .map(|label| format!("<th scope=\"row\">{}</th>", html_escape(label)))
            .unwrap_or_default();
        let value_cells: String = cells
            .map(|value| format!("<td>{}</td>", html_escape(value)))
            .collect();

        format!(
            "<div class=\"table-responsive\">\n<table class=\"table\">\n<thead>\n<tr>{}</tr>\n</thead>\n<tbody>\n<tr>{}{}</tr>\n</tbody>\n</table>\n</div>",
            header_cells, row_header, value_cells
        )
    }
}

/// Appends a table for `record` to `results`. Existing children are kept.
pub fn create_table(record: &MetricRecord, results: &mut Region) {
    results.append(TableView::from_record(record).to_html());
}

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::ChartError;
use crate::labels::clean_metric_name;
use crate::metrics::MetricRecord;

use super::document::{Region, html_escape};

/// Category shown on the x axis when a metric has no samples.
pub const NO_DATA_LABEL: &str = "No Data Available";

const SURFACE_WIDTH: u32 = 960;
const SURFACE_HEIGHT: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub fill: Rgba,
    pub border: Rgba,
    pub border_width: u32,
}

impl BarStyle {
    pub const DATA: Self = Self {
        fill: Rgba {
            r: 54,
            g: 162,
            b: 235,
            a: 0.5,
        },
        border: Rgba {
            r: 54,
            g: 162,
            b: 235,
            a: 1.0,
        },
        border_width: 1,
    };

    pub const EMPTY: Self = Self {
        fill: Rgba {
            r: 255,
            g: 99,
            b: 132,
            a: 0.2,
        },
        border: Rgba {
            r: 255,
            g: 99,
            b: 132,
            a: 1.0,
        },
        border_width: 1,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTitles {
    pub x: &'static str,
    pub y: &'static str,
}

impl Default for AxisTitles {
    fn default() -> Self {
        Self {
            x: "Timestamps",
            y: "Values",
        }
    }
}

/// Everything a [`Charting`] implementation needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset_label: String,
    pub data: Vec<f64>,
    pub styling: BarStyle,
    pub axis_titles: AxisTitles,
    pub begin_at_zero: bool,
}

impl ChartConfig {
    /// Bar chart of the record's samples, or the "No Data Available"
    /// placeholder when either sequence is empty.
    #[must_use]
    pub fn for_record(record: &MetricRecord) -> Self {
        if !record.has_data() {
            return Self::placeholder(&record.label);
        }

        let aligned = record.timestamps.len().min(record.values.len());
        if !record.is_aligned() {
            debug!(
                "Metric {} has {} timestamps and {} values; charting the first {}",
                record.id,
                record.timestamps.len(),
                record.values.len(),
                aligned
            );
        }

        Self {
            kind: ChartKind::Bar,
            labels: record.timestamps.iter().take(aligned).cloned().collect(),
            dataset_label: record.label.clone(),
            data: record.values.iter().take(aligned).copied().collect(),
            styling: BarStyle::DATA,
            axis_titles: AxisTitles::default(),
            begin_at_zero: true,
        }
    }

    #[must_use]
    pub fn placeholder(dataset_label: &str) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: vec![NO_DATA_LABEL.to_owned()],
            dataset_label: dataset_label.to_owned(),
            data: vec![0.0],
            styling: BarStyle::EMPTY,
            axis_titles: AxisTitles::default(),
            begin_at_zero: true,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.styling == BarStyle::EMPTY && self.labels.len() == 1 && self.data.len() == 1
    }
}

/// A drawable surface scoped to one chart container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSurface {
    /// Document-unique id derived from the metric id.
    pub id: String,
    pub width: u32,
    pub height: u32,
    /// Markup produced by the charting implementation.
    pub content: String,
}

impl ChartSurface {
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self {
            id,
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            content: String::new(),
        }
    }
}

/// External charting capability: draws a config into a surface.
pub trait Charting: Send + Sync {
    /// Renders `config` into `surface.content`.
    ///
    /// # Errors
    ///
    /// Returns an error when the chart cannot be drawn.
    fn draw(&self, surface: &mut ChartSurface, config: &ChartConfig) -> Result<(), ChartError>;
}

/// Appends one titled chart container per record to `results`, in input order.
///
/// A chart that fails to draw is logged and replaced by an inline notice so the
/// remaining charts still render.
pub fn generate_charts<C>(records: &[MetricRecord], results: &mut Region, charting: &C)
where
    C: Charting + ?Sized,
{
    let mut issued: HashSet<String> = HashSet::new();

    for record in records {
        let title = clean_metric_name(&record.id);
        let mut surface = ChartSurface::new(surface_id(&record.id, &mut issued));
        let config = ChartConfig::for_record(record);
        if config.is_placeholder() {
            debug!("Metric {} has no samples; drawing placeholder", record.id);
        }

        let body = match charting.draw(&mut surface, &config) {
            Ok(()) => surface.content,
            Err(err) => {
                warn!("{}", err);
                "<p class=\"chart-error\">Chart unavailable</p>".to_owned()
            }
        };

        results.append(format!(
            "<div class=\"chart-container\">\n<h3>{}</h3>\n<div id=\"{}\" class=\"chart-surface\">{}</div>\n</div>",
            html_escape(&title),
            surface.id,
            body
        ));
    }
}

// Every issued id is remembered, so a suffixed id never collides with a later
// record whose own id (or sanitized id) happens to match it.
fn surface_id(metric_id: &str, issued: &mut HashSet<String>) -> String {
    let base = format!("chart-{}", sanitize_segment(metric_id));
    let mut candidate = base.clone();
    let mut suffix: usize = 1;
    while issued.contains(&candidate) {
        suffix = suffix.saturating_add(1);
        candidate = format!("{}-{}", base, suffix);
    }
    issued.insert(candidate.clone());
    candidate
}

fn sanitize_segment(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => ch,
            _ => '-',
        })
        .collect()
}

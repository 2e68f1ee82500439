//! HTML materialization of metric records.
//!
//! Rendering functions take the region they write into as an explicit
//! argument; nothing here looks up shared page state. Each renderer first
//! builds a plain view model ([`TableView`], [`ChartConfig`]) and then emits
//! markup from it.
mod chart;
mod document;
mod plotting;
mod table;
mod template;


pub use chart::{
    AxisTitles, BarStyle, ChartConfig, ChartKind, ChartSurface, Charting, NO_DATA_LABEL, Rgba,
    generate_charts,
};
pub use document::{Document, NodeId, Region, html_escape};
pub use plotting::PlottersCharting;
pub use table::{TableView, create_table};
pub use template::{PageForm, render_page};

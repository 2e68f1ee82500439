//! Fetch, clear, render: the page flow for the default load and custom submits.
mod button;


use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::client::{MetricSource, Timeframe};
use crate::error::FetchError;
use crate::view::{
    Charting, Document, NodeId, PageForm, Region, create_table, generate_charts, html_escape,
    render_page,
};

pub use button::{ButtonState, enable_button};

pub const LOADING_TEXT: &str = "loading . . .";

/// What a trigger did to the page.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Results were replaced with `metrics` tables and charts.
    Rendered { metrics: usize },
    /// The fetch failed; an error line was shown and results were kept.
    Failed(FetchError),
    /// Another request was still in flight; nothing was touched.
    Ignored,
}

impl LoadOutcome {
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

#[derive(Debug, Default)]
struct PageState {
    document: Document,
    error_line: Option<NodeId>,
}

/// Owns the host document and drives fetch-render cycles against it.
///
/// Only one request is in flight at a time; triggers that arrive while one is
/// pending are ignored. The document lock is never held across the fetch.
pub struct PageController<S, C> {
    source: S,
    charting: C,
    state: Mutex<PageState>,
    pending: AtomicBool,
}

impl<S, C> PageController<S, C>
where
    S: MetricSource,
    C: Charting,
{
    pub fn new(source: S, charting: C) -> Self {
        Self {
            source,
            charting,
            state: Mutex::new(PageState::default()),
            pending: AtomicBool::new(false),
        }
    }

    /// Page-ready path: fetch the default timeframe and render it.
    pub async fn initial_load(&self) -> LoadOutcome {
        self.load(Timeframe::Default).await
    }

    /// Submit path: the unit is lower-cased, the length is sent as typed.
    pub async fn submit_custom(&self, length: &str, unit: &str) -> LoadOutcome {
        self.load(Timeframe::custom(length, unit.to_lowercase()))
            .await
    }

    /// Returns true while a request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub async fn document(&self) -> Document {
        self.state.lock().await.document.clone()
    }

    pub async fn render(&self, form: Option<&PageForm>, generated_at: &str) -> String {
        let state = self.state.lock().await;
        render_page(&state.document, form, generated_at)
    }

    async fn load(&self, timeframe: Timeframe) -> LoadOutcome {
        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            debug!("Ignoring {:?}: a request is already in flight", timeframe);
            return LoadOutcome::Ignored;
        };

        let indicator = {
            let mut state = self.state.lock().await;
            if let Some(previous) = state.error_line.take() {
                state.document.loading.remove(previous);
            }
            state
                .document
                .loading
                .append(format!("<p>{}</p>", LOADING_TEXT))
        };

        // Rendering happens before the document lock is taken again, so a slow
        // chart never blocks readers of the page.
        let rendered = self.source.fetch(&timeframe).await.map(|data| {
            let records = &data.metric_data_results;
            let mut results = Region::default();
            for record in records {
                create_table(record, &mut results);
            }
            generate_charts(records, &mut results, &self.charting);
            (results, records.len())
        });

        let mut state = self.state.lock().await;
        state.document.loading.remove(indicator);

        match rendered {
            Err(err) => {
                warn!("Failed to load metrics: {}", err);
                let line = state.document.loading.append(format!(
                    "<p>Error: {}</p>",
                    html_escape(&err.status_label())
                ));
                state.error_line = Some(line);
                LoadOutcome::Failed(err)
            }
            Ok((results, metrics)) => {
                state.document.results = results;
                info!("Rendered {} metric series", metrics);
                LoadOutcome::Rendered { metrics }
            }
        }
    }
}

struct PendingGuard<'flag>(&'flag AtomicBool);

impl<'flag> PendingGuard<'flag> {
    fn acquire(flag: &'flag AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

use std::path::Path;
use std::sync::Arc;

use chrono::Local;
use tokio::fs;
use tracing::{error, info};

use crate::args::{Command, DashboardArgs, RenderArgs};
use crate::client::{HttpMetricSource, MetricSource};
use crate::controller::{LoadOutcome, PageController};
use crate::error::{AppError, AppResult};
use crate::server;
use crate::view::{Charting, PlottersCharting};

pub(super) async fn execute(args: DashboardArgs) -> AppResult<()> {
    let source = HttpMetricSource::new(&args.base_url, args.timeout)?;
    let controller = PageController::new(source, PlottersCharting);

    match args.command {
        Some(Command::Serve(serve)) => server::serve(Arc::new(controller), serve.listen).await,
        None => render_report(&controller, &args.render).await,
    }
}

/// Runs one fetch-render cycle and writes the page to `render.out`.
///
/// The report is written on failure too, showing the error line, and the
/// fetch error is then returned.
pub(crate) async fn render_report<S, C>(
    controller: &PageController<S, C>,
    render: &RenderArgs,
) -> AppResult<()>
where
    S: MetricSource,
    C: Charting,
{
    let outcome = match (render.timeframe_length, render.timeframe_unit.as_deref()) {
        (Some(length), Some(unit)) => controller.submit_custom(&length.to_string(), unit).await,
        _ => controller.initial_load().await,
    };

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let page = controller.render(None, &generated_at).await;

    let out = Path::new(&render.out);
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = fs::create_dir_all(parent).await
    {
        error!("Failed to create output directory '{}': {}", parent.display(), e);
        return Err(e.into());
    }
    fs::write(out, page).await?;
    info!("Wrote dashboard to {}", out.display());

    match outcome {
        LoadOutcome::Rendered { .. } | LoadOutcome::Ignored => Ok(()),
        LoadOutcome::Failed(err) => Err(AppError::fetch(err)),
    }
}

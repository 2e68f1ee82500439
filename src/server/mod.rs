//! `serve` mode: the dashboard page over a minimal HTTP/1.1 listener.
//!
//! `GET /` is the page-ready path; `GET /?timeframeLength=..&timeframeUnit=..`
//! is a custom submit. Every response is the current page.
mod http;


use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Local;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use crate::client::MetricSource;
use crate::controller::{PageController, enable_button};
use crate::error::AppResult;
use crate::view::{Charting, PageForm};

use http::{RequestError, read_http_request, write_error_response, write_html_response};

/// What a request asks the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    InitialLoad,
    Submit(PageForm),
}

/// Binds `addr` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error when the listener cannot be bound.
pub async fn serve<S, C>(controller: Arc<PageController<S, C>>, addr: SocketAddr) -> AppResult<()>
where
    S: MetricSource + 'static,
    C: Charting + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!("Serving dashboard on http://{}", listener.local_addr()?);
    serve_on(listener, controller, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", err);
        }
    })
    .await
}

async fn serve_on<S, C, F>(
    listener: TcpListener,
    controller: Arc<PageController<S, C>>,
    shutdown: F,
) -> AppResult<()>
where
    S: MetricSource + 'static,
    C: Charting + 'static,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            () = &mut shutdown => {
                info!("Shutting down dashboard server");
                return Ok(());
            }
            accepted = listener.accept() => {
                match accepted {
                    Ok((socket, peer)) => {
                        let controller = Arc::clone(&controller);
                        tokio::spawn(async move {
                            if let Err(err) = handle_connection(socket, &controller).await {
                                debug!("Connection from {} ended with error: {}", peer, err);
                            }
                        });
                    }
                    Err(err) => warn!("Failed to accept connection: {}", err),
                }
            }
        }
    }
}

async fn handle_connection<S, C>(
    mut socket: TcpStream,
    controller: &PageController<S, C>,
) -> AppResult<()>
where
    S: MetricSource,
    C: Charting,
{
    let routed = match read_http_request(&mut socket).await {
        Ok(request) => route(&request.method, &request.target),
        Err(err) => Err(err),
    };

    let form = match routed {
        Ok(Route::InitialLoad) => {
            controller.initial_load().await;
            PageForm::default()
        }
        Ok(Route::Submit(form)) => {
            if enable_button(&form.length).enabled {
                controller.submit_custom(&form.length, &form.unit).await;
            } else {
                debug!("Ignoring submit with out-of-range length '{}'", form.length);
            }
            form
        }
        Err(err) => return write_error_response(&mut socket, &err).await,
    };

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let page = controller.render(Some(&form), &generated_at).await;
    write_html_response(&mut socket, 200, &page).await
}

fn route(method: &str, target: &str) -> Result<Route, RequestError> {
    if method != "GET" {
        return Err(RequestError::new(405, "Only GET is supported"));
    }
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    if path != "/" {
        return Err(RequestError::new(404, "Not found"));
    }

    let mut length = None;
    let mut unit = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "timeframeLength" => length = Some(value.into_owned()),
            "timeframeUnit" => unit = Some(value.into_owned()),
            _ => {}
        }
    }

    match (length, unit) {
        (Some(length), Some(unit)) => Ok(Route::Submit(PageForm { length, unit })),
        _ => Ok(Route::InitialLoad),
    }
}

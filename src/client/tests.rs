use std::future::Future;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::{HttpMetricSource, MetricSource, Timeframe, TimeframeLength};
use crate::error::{AppError, AppResult, FetchError, ValidationError};

const SAMPLE_BODY: &str =
    r#"{"MetricDataResults":[{"Id":"x","Label":"X","Timestamps":["t1"],"Values":[5]}]}"#;

struct Canned {
    base_url: String,
    requests: mpsc::Receiver<String>,
}

/// Serves a single canned HTTP response and reports the request line it saw.
fn serve_once(status_line: &'static str, body: &'static str) -> AppResult<Canned> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut buffer = [0u8; 2048];
        let read = stream.read(&mut buffer).unwrap_or(0);
        let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or_default());
        let request_line = request.lines().next().unwrap_or_default().to_owned();
        drop(tx.send(request_line));

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        drop(stream.write_all(response.as_bytes()));
        drop(stream.flush());
        drop(stream.shutdown(Shutdown::Both));
    });

    Ok(Canned {
        base_url: format!("http://{}/metrics", addr),
        requests: rx,
    })
}

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

fn received(canned: &Canned) -> AppResult<String> {
    canned
        .requests
        .recv_timeout(Duration::from_secs(5))
        .map_err(|err| AppError::from(std::io::Error::other(err.to_string())))
}

#[test]
fn default_fetch_decodes_success_body() -> AppResult<()> {
    run_async_test(async {
        let canned = serve_once("200 OK", SAMPLE_BODY)?;
        let source = HttpMetricSource::new(&canned.base_url, None)?;

        let data = source.fetch_default().await?;
        let first_value = data
            .metric_data_results
            .first()
            .and_then(|record| record.values.first().copied());
        assert_eq!(first_value, Some(5.0));
        assert_eq!(received(&canned)?, "GET /metrics HTTP/1.1");
        Ok(())
    })
}

#[test]
fn custom_fetch_appends_query_parameters() -> AppResult<()> {
    run_async_test(async {
        let canned = serve_once("200 OK", SAMPLE_BODY)?;
        let source = HttpMetricSource::new(&canned.base_url, None)?;

        source.fetch_custom("10", "hours").await?;
        assert_eq!(
            received(&canned)?,
            "GET /metrics/?timeframeLength=10&timeframeUnit=hours HTTP/1.1"
        );
        Ok(())
    })
}

#[test]
fn non_success_status_is_preserved() -> AppResult<()> {
    run_async_test(async {
        let canned = serve_once("503 Service Unavailable", "{}")?;
        let source = HttpMetricSource::new(&canned.base_url, None)?;

        match source.fetch_default().await {
            Err(err) => {
                assert_eq!(err.status().map(|status| status.as_u16()), Some(503));
                assert_eq!(err.status_label(), "503");
            }
            Ok(_) => return Err(AppError::from(std::io::Error::other("expected failure"))),
        }
        Ok(())
    })
}

#[test]
fn invalid_json_body_is_a_decode_failure() -> AppResult<()> {
    run_async_test(async {
        let canned = serve_once("200 OK", "not json")?;
        let source = HttpMetricSource::new(&canned.base_url, None)?;

        let result = source.fetch_default().await;
        assert!(matches!(result, Err(FetchError::Decode { .. })));
        if let Err(err) = result {
            assert!(err.status().is_none());
            assert_eq!(err.status_label(), "unavailable");
        }
        Ok(())
    })
}

#[test]
fn refused_connection_is_a_transport_failure() -> AppResult<()> {
    run_async_test(async {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0")?;
            listener.local_addr()?
        };
        let source = HttpMetricSource::new(&format!("http://{}", addr), None)?;

        let result = source.fetch_default().await;
        assert!(matches!(result, Err(FetchError::Transport { .. })));
        Ok(())
    })
}

#[test]
fn rejects_non_http_base_url() {
    let result = HttpMetricSource::new("ftp://example.com/metrics", None);
    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::UnsupportedScheme { .. }))
    ));
    let result = HttpMetricSource::new("not a url", None);
    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::InvalidBaseUrl { .. }))
    ));
}

#[test]
fn request_url_for_each_timeframe() {
    let base = "https://example.com/testing/metrics";
    assert_eq!(Timeframe::Default.request_url(base), base);
    assert_eq!(
        Timeframe::custom("7", "days").request_url(base),
        "https://example.com/testing/metrics/?timeframeLength=7&timeframeUnit=days"
    );
    assert_eq!(
        Timeframe::custom("7", "days").request_url("https://example.com/m/"),
        "https://example.com/m/?timeframeLength=7&timeframeUnit=days"
    );
}

#[test]
fn timeframe_length_bounds() {
    assert!("0".parse::<TimeframeLength>().is_err());
    assert_eq!("1".parse::<TimeframeLength>().ok().map(TimeframeLength::get), Some(1));
    assert_eq!(" 100 ".parse::<TimeframeLength>().ok().map(TimeframeLength::get), Some(100));
    assert!(matches!(
        "101".parse::<TimeframeLength>(),
        Err(ValidationError::TimeframeLengthOutOfRange { value: 101, .. })
    ));
    assert!(matches!(
        "ten".parse::<TimeframeLength>(),
        Err(ValidationError::InvalidNumber { .. })
    ));
}

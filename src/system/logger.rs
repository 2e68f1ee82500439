use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Variable read before `RUST_LOG` when building the log filter.
pub const LOG_ENV: &str = "METRICDASH_LOG";

/// Installs the global `tracing` subscriber for a dashboard run.
///
/// Filter precedence: `METRICDASH_LOG`, then `RUST_LOG`, then `debug` with
/// `--verbose` or `info` without. A directive that fails to parse falls back
/// to `info`. Output goes to stderr.
pub fn init_logging(verbose: bool, no_color: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn log_filter(verbose: bool) -> EnvFilter {
    let directive = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok();
    filter_from(directive.as_deref(), verbose)
}

fn filter_from(directive: Option<&str>, verbose: bool) -> EnvFilter {
    match directive {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
        }
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    }
}

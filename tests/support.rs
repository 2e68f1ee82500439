use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const DEFAULT_BODY: &str = r#"{"MetricDataResults":[{"Id":"cpu_utilization","Label":"CPUUtilization","Timestamps":["2024-05-01T10:00:00Z","2024-05-01T10:05:00Z"],"Values":[12.5,40]},{"Id":"network_in","Label":"NetworkIn","Timestamps":[],"Values":[]}]}"#;

pub const CUSTOM_BODY: &str = r#"{"MetricDataResults":[{"Id":"disk_read_ops","Label":"DiskReadOps","Timestamps":["2024-05-01T00:00:00Z"],"Values":[7]}]}"#;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a canned metric endpoint for tests.
///
/// `GET /` answers with [`DEFAULT_BODY`], a query carrying `timeframeLength`
/// answers with [`CUSTOM_BODY`], and `/down` answers 503.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_metric_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 4096];
    let Ok(read) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..read]);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = if target.starts_with("/down") {
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_owned()
    } else {
        let body = if target.contains("timeframeLength=") {
            CUSTOM_BODY
        } else {
            DEFAULT_BODY
        };
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    };

    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `metricdash` binary inside `cwd` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_metricdash<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = metricdash_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "error")
        .env_remove("METRICDASH_LOG")
        .env_remove("NO_COLOR")
        .output()
        .map_err(|err| format!("run metricdash failed: {}", err))
}

fn metricdash_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_metricdash").map_or_else(
        || Err("CARGO_BIN_EXE_metricdash missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

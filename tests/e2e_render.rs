mod support;

use std::fs;

use tempfile::tempdir;

use support::{run_metricdash, spawn_metric_server};

fn failure_details(output: &std::process::Output) -> String {
    format!(
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_render_default_timeframe() -> Result<(), String> {
    let (url, _server) = spawn_metric_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_metricdash(dir.path(), ["-u", url.as_str(), "-o", "report.html"])?;
    if !output.status.success() {
        return Err(failure_details(&output));
    }

    let html = fs::read_to_string(dir.path().join("report.html"))
        .map_err(|err| format!("read report failed: {}", err))?;
    if html.matches("<table class=\"table\">").count() != 2 {
        return Err(format!("Expected two tables in report:\n{}", html));
    }
    for expected in [
        "<th scope=\"row\">Cpu Utilization</th>",
        "<th scope=\"col\">2024-05-01T10:05:00Z</th>",
        "<td>12.5</td>",
        "<h3>Network In</h3>",
        "<div class=\"chart-container\">",
    ] {
        if !html.contains(expected) {
            return Err(format!("Missing {:?} in report:\n{}", expected, html));
        }
    }
    if html.contains("loading . . .") {
        return Err("Loading indicator left in report.".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_render_custom_timeframe() -> Result<(), String> {
    let (url, _server) = spawn_metric_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_metricdash(
        dir.path(),
        [
            "-u",
            url.as_str(),
            "-o",
            "out/custom.html",
            "--timeframe-length",
            "5",
            "--timeframe-unit",
            "Days",
        ],
    )?;
    if !output.status.success() {
        return Err(failure_details(&output));
    }

    let html = fs::read_to_string(dir.path().join("out").join("custom.html"))
        .map_err(|err| format!("read report failed: {}", err))?;
    if !html.contains("<th scope=\"row\">Disk Read Ops</th>") {
        return Err(format!("Custom series missing from report:\n{}", html));
    }
    Ok(())
}

#[test]
fn e2e_render_failed_fetch_exits_non_zero() -> Result<(), String> {
    let (url, _server) = spawn_metric_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let down = format!("{}/down", url);

    let output = run_metricdash(dir.path(), ["-u", down.as_str(), "-o", "report.html"])?;
    if output.status.success() {
        return Err(format!(
            "Expected failure exit.\n{}",
            failure_details(&output)
        ));
    }

    let html = fs::read_to_string(dir.path().join("report.html"))
        .map_err(|err| format!("read report failed: {}", err))?;
    if !html.contains("<p>Error: 503</p>") {
        return Err(format!("Missing error line in report:\n{}", html));
    }
    if html.contains("<table") {
        return Err("Failed fetch should not render tables.".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_rejects_out_of_range_length() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_metricdash(
        dir.path(),
        [
            "-u",
            "http://127.0.0.1:9",
            "--timeframe-length",
            "101",
            "--timeframe-unit",
            "hours",
        ],
    )?;
    if output.status.success() {
        return Err("Expected length 101 to be rejected.".to_owned());
    }
    if dir.path().join("metrics.html").exists() {
        return Err("No report should be written for invalid arguments.".to_owned());
    }
    Ok(())
}

use crate::controller::enable_button;

use super::document::{Document, html_escape};

/// Units offered by the custom timeframe form. Sent lower-cased.
pub const TIMEFRAME_UNITS: [&str; 4] = ["Minutes", "Hours", "Days", "Weeks"];

/// Values echoed back into the custom timeframe form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageForm {
    pub length: String,
    pub unit: String,
}

/// Renders the full page around the document regions.
///
/// The timeframe form is only emitted when `form` is given, which is the case
/// when the page is served and can actually be submitted.
#[must_use]
pub fn render_page(document: &Document, form: Option<&PageForm>, generated_at: &str) -> String {
    let form_html = form.map(render_form).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Metric Dashboard</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header class="loading">
            <h1>Metric Dashboard</h1>
{loading}
        </header>
{form}
        <section id="results">
{results}
        </section>
        <footer>Generated {generated_at}</footer>
    </div>
</body>
</html>
"#,
        css = INLINE_CSS,
        loading = document.loading.inner_html(),
        form = form_html,
        results = document.results.inner_html(),
        generated_at = html_escape(generated_at),
    )
}

fn render_form(form: &PageForm) -> String {
    let button = enable_button(&form.length);
    let disabled = if button.enabled { "" } else { " disabled" };
    let options: String = TIMEFRAME_UNITS
        .iter()
        .map(|unit| {
            let selected = if unit.eq_ignore_ascii_case(&form.unit) {
                " selected"
            } else {
                ""
            };
            format!("<option value=\"{unit}\"{selected}>{unit}</option>")
        })
        .collect();

    format!(
        r#"        <form class="timeframe" method="get" action="/">
            <label for="timeframeLength">Timeframe length</label>
            <input type="number" id="timeframeLength" name="timeframeLength" min="1" max="100" value="{length}" oninput="enableButton()">
            <select id="timeframeUnit" name="timeframeUnit">{options}</select>
            <button type="submit" id="customTimeButton" class="btn {class}"{disabled}>Submit</button>
        </form>
        <script>{script}</script>"#,
        length = html_escape(&form.length),
        options = options,
        class = button.class,
        disabled = disabled,
        script = ENABLE_BUTTON_SCRIPT,
    )
}

// Client-side mirror of `enable_button` so the button reacts while typing.
const ENABLE_BUTTON_SCRIPT: &str = r##"
function enableButton() {
    const button = document.querySelector("#customTimeButton");
    const value = document.querySelector("#timeframeLength").value;
    const enabled = value !== "" && Number(value) >= 1 && Number(value) <= 100;
    button.disabled = !enabled;
    button.classList.toggle("btn-primary", enabled);
    button.classList.toggle("btn-secondary", !enabled);
}"##;

const INLINE_CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 0; color: #212529; }
.container { max-width: 1100px; margin: 0 auto; padding: 1rem; }
.table-responsive { overflow-x: auto; margin-bottom: 1rem; }
.table { border-collapse: collapse; width: 100%; }
.table th, .table td { border: 1px solid #dee2e6; padding: 0.4rem 0.6rem; white-space: nowrap; }
.chart-container { margin: 1.5rem 0; }
.chart-error { color: #b02a37; }
.btn { border: none; border-radius: 4px; padding: 0.4rem 0.9rem; color: #fff; }
.btn-primary { background: #0d6efd; cursor: pointer; }
.btn-secondary { background: #6c757d; }
footer { color: #6c757d; font-size: 0.85rem; margin-top: 2rem; }
"#;

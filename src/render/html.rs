use crate::render::figure::Figure;

/// Render a self-contained interactive chart page (figure embedded as JSON).
///
/// Important: we avoid `format!()` because the page is full of JS and CSS
/// braces that would conflict with Rust formatting.
pub fn render_chart_page(figure: &Figure) -> anyhow::Result<String> {
    let json = serde_json::to_string(figure)?; // embedded as a JS object literal

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>probeplot</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js" charset="utf-8"></script>
<style>
  html, body { height: 100%; margin: 0; }
  #chart { height: 100%; }
  #empty { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
           color: #777; padding: 24px; }
</style>
</head>
<body>
<div id="chart"></div>
<script>
// Embedded figure data (JSON object literal)
const FIG = __DATA__;

if (FIG.traces.length === 0) {
  const note = document.createElement("div");
  note.id = "empty";
  note.textContent = "No matching result files were found.";
  document.body.prepend(note);
}

const traces = FIG.traces.map((t) => {
  const trace = {
    name: t.name,
    x: t.x,
    y: t.y,
    type: "scatter",
    mode: "lines+markers",
  };
  if (t.error_y) {
    trace.error_y = { type: "data", visible: true, array: t.error_y };
  }
  return trace;
});

const layout = {
  xaxis: { title: { text: FIG.x_title }, type: FIG.x_log ? "log" : "linear" },
  yaxis: { title: { text: FIG.y_title }, type: FIG.y_log ? "log" : "linear" },
  hovermode: "x unified",
};

Plotly.newPlot("chart", traces, layout, { responsive: true });
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}

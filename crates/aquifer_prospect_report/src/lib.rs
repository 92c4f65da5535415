//! Static HTML rendering of a groundwater prospect report.

use aquifer_prospect::{report_fingerprint, ProspectReport, Verdict};
use std::io::Write;
use std::path::Path;

/// Render a static HTML report to `out_path`. Embeds the report JSON.
pub fn render_report(report: &ProspectReport, out_path: impl AsRef<Path>) -> Result<(), RenderError> {
    let html = build_html(report)?;
    let mut f = std::fs::File::create(out_path.as_ref()).map_err(RenderError::Io)?;
    f.write_all(html.as_bytes()).map_err(RenderError::Io)?;
    Ok(())
}

fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Go => "#064e3b",
        Verdict::NoGo => "#7f1d1d",
        Verdict::Caution => "#92400e",
    }
}

/// Build HTML string from a report (for testing or in-memory use).
pub fn build_html(report: &ProspectReport) -> Result<String, RenderError> {
    let json_embed = serde_json::to_string(report).map_err(RenderError::Json)?;
    let fingerprint =
        report_fingerprint(report).map_err(|e| RenderError::Fingerprint(e.to_string()))?;
    let s = &report.score;

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8"/>
<meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Groundwater prospect – {location}</title>
<style>
:root {{ font-family: system-ui, sans-serif; background: #f8fafc; color: #0f172a; }}
body {{ max-width: 720px; margin: 0 auto; padding: 1.5rem; }}
h1 {{ font-size: 1.4rem; margin-bottom: 0.5rem; }}
.card {{ background: #fff; border: 1px solid #eef2f7; border-radius: 12px; padding: 1rem; margin: 0.5rem 0; }}
.head {{ display: flex; justify-content: space-between; align-items: center; gap: 12px; }}
.place {{ font-size: 16px; font-weight: 700; }}
.muted {{ color: #64748b; font-size: 13px; }}
.verdict {{ font-weight: 800; }}
.grid {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; }}
.cell {{ background: #fafafa; padding: 10px; border-radius: 8px; }}
.value {{ font-weight: 700; }}
.mono {{ font-family: ui-monospace, monospace; font-size: 0.85em; word-break: break-all; }}
hr {{ margin: 12px 0; border: none; border-top: 1px solid #eef2f7; }}
</style>
</head>
<body>
<h1>Groundwater Prospect Report</h1>
<div class="card">
  <div class="head">
    <div>
      <div class="place">{location}</div>
      <div class="muted">Report time: {report_time}</div>
    </div>
    <div class="verdict" style="color:{verdict_color}">{verdict}</div>
  </div>
  <hr/>
  <div class="grid">
    <div class="cell"><div class="muted">Estimated depth</div><div class="value">{depth} m</div></div>
    <div class="cell"><div class="muted">Estimated yield</div><div class="value">{yield_l_hr} L/hr</div></div>
    <div class="cell"><div class="muted">Water quality note</div><div class="value">{quality}</div></div>
  </div>
  <p><span class="muted">Recommended technique:</span> <strong>{technique}</strong></p>
</div>

<div class="card">
  <div class="muted">Fingerprint (SHA-256, excludes report time)</div>
  <div class="mono">{fingerprint}</div>
  <p class="muted">Re-check with <code>aquifer-prospect verify --report &lt;file&gt;</code>.</p>
  <script type="application/json" id="prospect-report">{json_embed}</script>
</div>

<p class="muted">Placeholder analysis: estimates are derived from the location text only, not from survey data.</p>
</body>
</html>"#,
        location = escape_html(&report.location),
        report_time = escape_html(&report.report_time),
        verdict_color = verdict_color(s.verdict),
        verdict = s.verdict.as_str().to_uppercase(),
        depth = s.estimated_depth,
        yield_l_hr = s.estimated_yield,
        quality = escape_html(s.quality_note.label()),
        technique = escape_html(s.recommended_technique.label()),
        fingerprint = fingerprint,
        json_embed = escape_json_in_script(&json_embed),
    );
    Ok(html)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON unicode escapes keep the payload parseable and stop it closing the script element.
fn escape_json_in_script(s: &str) -> String {
    s.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Fingerprint(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "io: {}", e),
            RenderError::Json(e) => write!(f, "json: {}", e),
            RenderError::Fingerprint(e) => write!(f, "fingerprint: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

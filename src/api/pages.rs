//! Server-rendered pages: the template library and the form editor.
//!
//! No frontend build step — both pages are rendered with `format!` and
//! served as complete documents, the same way the install and upload pages
//! work. The editor's interactivity is a small inline script that posts the
//! field values to the fill endpoint and writes the response into the
//! preview iframe.

use axum::extract::{Path, State};
use axum::response::Html;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;
use crate::inject::escape_html;

/// Forms that need the admission date/time and location-type controls.
const BLOOD_TRANSFUSION_MARKER: &str = "29. Blood And Blood Product";

/// `GET /` — template library with client-side search.
pub async fn home(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let templates = ctx.store.list()?;
    Ok(Html(render_home_page(&templates)))
}

/// `GET /editor/:name` — field form plus live preview for one template.
pub async fn editor(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, ApiError> {
    if !ctx.store.exists(&name)? {
        return Err(ApiError::NotFound(format!("Template not found: {name}")));
    }
    Ok(Html(render_editor_page(&name)))
}

/// Percent-encode a template name for use in a URL path segment.
/// Names are file names with spaces, dots and ampersands in them.
fn encode_path_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Card title shown for a template: file name without extension or the
/// leading numeric prefix the conversion step adds.
fn display_title(name: &str) -> String {
    let base = name.strip_suffix(".html").unwrap_or(name);
    let trimmed = base.trim_start_matches(|c: char| c.is_ascii_digit());
    let trimmed = trimmed.strip_prefix('.').unwrap_or(trimmed).trim_start();
    if trimmed.is_empty() {
        base.to_string()
    } else {
        trimmed.to_string()
    }
}

fn render_home_page(templates: &[String]) -> String {
    let cards: String = templates
        .iter()
        .map(|name| {
            format!(
                r#"      <a class="card" data-name="{lower}" href="/editor/{href}">
        <div class="thumb">&#128196;</div>
        <h3>{title}</h3>
        <span class="tag">HTML Template</span>
      </a>
"#,
                lower = escape_html(&name.to_lowercase()),
                href = encode_path_segment(name),
                title = escape_html(&display_title(name)),
            )
        })
        .collect();

    let empty_state = if templates.is_empty() {
        r#"      <p class="empty">No templates found. Place form templates (*.html) in the templates directory.</p>
"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{app} — Templates Library</title>
  <style>
    * {{ box-sizing: border-box; margin: 0; padding: 0; }}
    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
      background: #f8fafc; color: #1e293b; min-height: 100vh;
    }}
    header {{
      position: sticky; top: 0; background: white; border-bottom: 1px solid #e2e8f0;
      display: flex; align-items: center; justify-content: space-between;
      padding: 14px 24px;
    }}
    header h1 {{ font-size: 20px; }}
    header h1 span {{ color: #2563eb; }}
    main {{ max-width: 1100px; margin: 0 auto; padding: 32px 24px; }}
    .intro {{ margin-bottom: 24px; }}
    .intro h2 {{ font-size: 26px; color: #0f172a; }}
    .intro p {{ color: #64748b; margin-top: 6px; font-size: 14px; }}
    #search {{
      width: 100%; max-width: 380px; margin-bottom: 24px; padding: 10px 14px;
      border: 1px solid #e2e8f0; border-radius: 10px; font-size: 14px; outline: none;
    }}
    #search:focus {{ border-color: #2563eb; }}
    .grid {{
      display: grid; gap: 20px;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    }}
    .card {{
      background: white; border: 1px solid #f1f5f9; border-radius: 14px;
      padding: 16px; text-decoration: none; color: inherit;
      transition: box-shadow 0.15s;
    }}
    .card:hover {{ box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08); }}
    .thumb {{
      display: flex; align-items: center; justify-content: center;
      aspect-ratio: 3/4; background: #f8fafc; border-radius: 10px;
      font-size: 48px; margin-bottom: 12px;
    }}
    .card h3 {{ font-size: 15px; color: #1e293b; margin-bottom: 8px; }}
    .tag {{
      font-size: 10px; text-transform: uppercase; letter-spacing: 0.08em;
      color: #64748b; background: #f1f5f9; border-radius: 999px; padding: 2px 8px;
    }}
    .empty {{ color: #64748b; padding: 40px 0; }}
  </style>
</head>
<body>
  <header>
    <h1>Hospital<span>Sync</span></h1>
    <span style="font-size:12px;color:#94a3b8;">Patient Management System</span>
  </header>
  <main>
    <div class="intro">
      <h2>Templates Library</h2>
      <p>Select a form template to start filling patient details.</p>
    </div>
    <input id="search" type="text" placeholder="Search templates..." autocomplete="off">
    <div class="grid" id="grid">
{cards}{empty_state}    </div>
  </main>
  <script>
    document.getElementById('search').addEventListener('input', function () {{
      var q = this.value.toLowerCase();
      document.querySelectorAll('#grid .card').forEach(function (card) {{
        card.style.display = card.dataset.name.indexOf(q) === -1 ? 'none' : '';
      }});
    }});
  </script>
</body>
</html>
"#,
        app = config::APP_NAME,
    )
}

fn render_editor_page(name: &str) -> String {
    let title = escape_html(name);
    // Safe JS string literal for the template name
    let name_js = serde_json::to_string(name).unwrap_or_else(|_| "\"\"".to_string());
    let is_blood_transfusion = name.contains(BLOOD_TRANSFUSION_MARKER);

    let transfusion_controls = if is_blood_transfusion {
        r#"        <label>Admission Date &amp; Time
          <input type="datetime-local" name="admissionDate">
        </label>
        <label>Location Type
          <select name="locationType">
            <option value="">—</option>
            <option>ICU</option>
            <option>Ward</option>
            <option>Room</option>
          </select>
        </label>
"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} — {app}</title>
  <style>
    * {{ box-sizing: border-box; margin: 0; padding: 0; }}
    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
      background: #f8fafc; color: #1e293b; height: 100vh;
      display: flex; flex-direction: column; overflow: hidden;
    }}
    nav {{
      display: flex; align-items: center; justify-content: space-between;
      background: white; border-bottom: 1px solid #e2e8f0; padding: 12px 24px;
    }}
    nav .name {{ font-size: 14px; font-weight: 600; max-width: 480px;
      white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }}
    nav .sub {{ font-size: 10px; color: #94a3b8; text-transform: uppercase;
      letter-spacing: 0.1em; }}
    nav a {{ color: #2563eb; text-decoration: none; font-size: 13px; margin-right: 16px; }}
    .btn {{
      border: none; border-radius: 8px; padding: 8px 16px; font-size: 13px;
      font-weight: 500; cursor: pointer; background: #2563eb; color: white;
    }}
    .split {{ display: flex; flex: 1; overflow: hidden; }}
    .preview {{
      flex: 1; background: #e2e8f0; padding: 24px; overflow: auto;
      display: flex; justify-content: center; align-items: flex-start;
    }}
    .preview iframe {{
      width: 100%; max-width: 850px; height: 1100px; border: none;
      background: white; box-shadow: 0 10px 30px rgba(15, 23, 42, 0.15);
    }}
    .panel {{
      width: 360px; background: white; border-left: 1px solid #e2e8f0;
      padding: 24px; overflow-y: auto;
    }}
    .panel h2 {{ font-size: 16px; margin-bottom: 4px; }}
    .panel p {{ font-size: 12px; color: #64748b; margin-bottom: 20px; }}
    .panel label {{
      display: block; font-size: 12px; font-weight: 600; color: #334155;
      margin-bottom: 14px;
    }}
    .panel input, .panel select {{
      display: block; width: 100%; margin-top: 4px; padding: 8px 10px;
      border: 1px solid #cbd5e1; border-radius: 8px; font-size: 13px; outline: none;
    }}
    .panel input:focus, .panel select:focus {{ border-color: #2563eb; }}
  </style>
</head>
<body>
  <nav>
    <div>
      <div class="name">{title}</div>
      <div class="sub">Patient Management System</div>
    </div>
    <div>
      <a href="/">&#8592; All templates</a>
      <button class="btn" id="print">Print / PDF</button>
    </div>
  </nav>
  <div class="split">
    <div class="preview"><iframe id="preview" title="Form Preview"></iframe></div>
    <div class="panel">
      <h2>Form Details</h2>
      <p>Enter patient information below to update the preview.</p>
      <form id="fields">
        <label>UID / Reg No <input type="text" name="uid" placeholder="e.g. 12345"></label>
        <label>IPD / Indoor No <input type="text" name="ipd" placeholder="e.g. 67890"></label>
{transfusion_controls}        <label>Patient's Name <input type="text" name="name" placeholder="Enter full name"></label>
        <label>Age/Sex <input type="text" name="age" placeholder="e.g. 45Y/M"></label>
        <label>Consultant <input type="text" name="consultant" placeholder="Doctor name"></label>
        <label>Ward / Bed No <input type="text" name="bed" placeholder="e.g. ICU-05"></label>
        <label>Diagnosis <input type="text" name="diagnosis" placeholder="Clinical diagnosis"></label>
        <label>Location <input type="text" name="location" placeholder="e.g. Emergency"></label>
        <label>Duration <input type="text" name="duration" placeholder="e.g. 2 Days"></label>
      </form>
    </div>
  </div>
  <script>
    var templateName = {name_js};
    var fillUrl = '/api/templates/' + encodeURIComponent(templateName) + '/fill';
    var form = document.getElementById('fields');
    var frame = document.getElementById('preview');
    var pending = null;

    function collect() {{
      var data = {{}};
      new FormData(form).forEach(function (value, key) {{ data[key] = value; }});
      return data;
    }}

    function refresh() {{
      // Coalesce rapid keystrokes into one request
      if (pending) clearTimeout(pending);
      pending = setTimeout(function () {{
        fetch(fillUrl, {{
          method: 'POST',
          headers: {{ 'Content-Type': 'application/json' }},
          body: JSON.stringify(collect())
        }})
          .then(function (res) {{ return res.text(); }})
          .then(function (html) {{
            var doc = frame.contentDocument;
            doc.open();
            doc.write(html);
            doc.title = templateName;
            doc.close();
          }});
      }}, 150);
    }}

    form.addEventListener('input', refresh);
    document.getElementById('print').addEventListener('click', function () {{
      if (frame.contentWindow) frame.contentWindow.print();
    }});
    refresh();
  </script>
</body>
</html>
"#,
        app = config::APP_NAME,
    )
}

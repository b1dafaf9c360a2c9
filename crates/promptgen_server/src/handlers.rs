//! HTTP handlers for the session server

use axum::{
    extract::State,
    response::{Html, Json},
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::sessions;

/// Shared server state
pub struct AppState {
    pub sessions_dir: PathBuf,
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Session log</title>
<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; }
td, th { border: 1px solid #999; padding: 0.3em 0.8em; }
</style>
</head>
<body>
<h1>Latest session</h1>
<table id="log"></table>
<script>
fetch('/data').then(r => r.json()).then(rows => {
  const table = document.getElementById('log');
  if (!rows.length) { table.outerHTML = '<p>No session data yet.</p>'; return; }
  const keys = Object.keys(rows[0]);
  table.innerHTML =
    '<tr>' + keys.map(k => '<th>' + k + '</th>').join('') + '</tr>' +
    rows.map(r => '<tr>' + keys.map(k => '<td>' + r[k] + '</td>').join('') + '</tr>').join('');
});
</script>
</body>
</html>
"#;

/// Handler for GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for GET /data
///
/// Returns the parsed contents of the most recent session CSV, or an
/// empty array when no file exists. A missing file is a valid empty
/// result, not an error.
pub async fn latest_data(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<BTreeMap<String, String>>> {
    let Some(path) = sessions::find_latest_csv(&state.sessions_dir) else {
        tracing::debug!(
            "no CSV files in {}",
            state.sessions_dir.display()
        );
        return Json(Vec::new());
    };

    match sessions::read_csv(&path) {
        Ok(records) => Json(records),
        Err(e) => {
            tracing::warn!("failed to read {}: {}", path.display(), e);
            Json(Vec::new())
        }
    }
}

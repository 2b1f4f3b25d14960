//! Template endpoints: list, fetch raw HTML, and fill with patient fields.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::inject;

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<String>,
}

/// `GET /api/templates` — names of available form templates.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<TemplateListResponse>, ApiError> {
    let templates = ctx.store.list()?;
    Ok(Json(TemplateListResponse { templates }))
}

/// `GET /api/templates/:name` — raw template HTML, as authored.
pub async fn fetch(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Html<String>, ApiError> {
    let content = ctx.store.read(&name)?;
    Ok(Html(content))
}

/// `POST /api/templates/:name/fill` — inject field values into a template.
///
/// The body is a flat JSON object of field values, keyed by the canonical
/// field keys the editor form uses. Returns the filled document with the
/// print stylesheet appended, ready for an iframe preview or print-to-PDF.
pub async fn fill(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
    Json(mut data): Json<BTreeMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let template = ctx.store.read(&name)?;

    normalize_fields(&mut data);
    let filled = inject::inject_data(&template, &data);

    tracing::debug!(template = %name, fields = data.len(), "Filled template");
    Ok(Html(filled))
}

/// Field fixups the original editor applied before injection.
fn normalize_fields(data: &mut BTreeMap<String, String>) {
    // datetime-local input → the format printed on the forms
    if let Some(raw) = data.get("admissionDate") {
        if let Some(formatted) = format_admission_datetime(raw) {
            data.insert("admissionDate".to_string(), formatted);
        }
    }

    // Blood-transfusion forms label the location by type ("ICU: 3A").
    // `locationType` is UI state, never a printed label, so it is folded
    // into `location` and removed before injection.
    if let Some(location_type) = data.remove("locationType") {
        if !location_type.is_empty() {
            if let Some(location) = data.get("location").filter(|l| !l.is_empty()) {
                let merged = format!("{location_type}: {location}");
                data.insert("location".to_string(), merged);
            }
        }
    }
}

/// Reformat a `datetime-local` value (`2026-02-01T09:30`) as the forms print
/// it: `01/02/2026  9:30 AM`. Anything unparseable passes through unchanged.
fn format_admission_datetime(raw: &str) -> Option<String> {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;

    let date = parsed.format("%d/%m/%Y");
    let minutes = parsed.format("%M");
    let hour24 = parsed.hour();
    let ampm = if hour24 >= 12 { "PM" } else { "AM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };

    Some(format!("{date}  {hour12}:{minutes} {ampm}"))
}

//! Axum route handlers for the Letter API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::letter::export::{build_print_document, missing_required_fields, RequiredField};
use crate::letter::logo::{accept_logo, LogoError, LogoUpload};
use crate::letter::models::{FormData, LetterRequest};
use crate::letter::presets::{list_presets, load_preset, LetterPreset, PresetSummary};
use crate::state::AppState;

const LOGO_FIELD: &str = "logo";

/// The server's local calendar date; stands in for the browser's "today".
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MissingFieldEntry {
    pub field: RequiredField,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub missing: Vec<MissingFieldEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    #[serde(default)]
    pub auto_print: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/letters/validate
///
/// Lists every blank required field so the host can highlight them all at once.
pub async fn handle_validate(Json(form): Json<FormData>) -> Json<ValidateResponse> {
    let missing: Vec<MissingFieldEntry> = missing_required_fields(&form)
        .into_iter()
        .map(|field| MissingFieldEntry {
            field,
            label: field.words(),
        })
        .collect();

    Json(ValidateResponse {
        valid: missing.is_empty(),
        missing,
    })
}

/// POST /api/v1/letters/export
///
/// Returns the print-ready HTML page. 422 with the first blank required field otherwise.
pub async fn handle_export(
    Query(query): Query<ExportQuery>,
    Json(request): Json<LetterRequest>,
) -> Result<Html<String>, AppError> {
    let request = request.with_issue_date_or(today());
    let document = build_print_document(
        &request.form,
        &request.style,
        &request.options,
        query.auto_print,
    )?;
    Ok(Html(document))
}

/// POST /api/v1/logos
///
/// Multipart upload with a single `logo` file part.
pub async fn handle_upload_logo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<LogoUpload>, AppError> {
    let max_bytes = state.config.max_logo_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some(LOGO_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;

        let logo = accept_logo(content_type.as_deref(), &data, max_bytes)?;
        info!("Accepted {} logo ({} bytes)", logo.content_type, logo.bytes);
        return Ok(Json(logo));
    }

    Err(AppError::Validation(format!(
        "Multipart body has no '{LOGO_FIELD}' file"
    )))
}

fn multipart_error(err: MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Logo(LogoError::TooLarge {
            limit_bytes: max_bytes,
        })
    } else {
        AppError::Validation(err.body_text())
    }
}

/// GET /api/v1/presets
pub async fn handle_list_presets() -> Json<Vec<PresetSummary>> {
    Json(list_presets())
}

/// GET /api/v1/presets/:key
pub async fn handle_get_preset(Path(key): Path<String>) -> Result<Json<LetterPreset>, AppError> {
    load_preset(&key, today())
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Preset '{key}' not found")))
}

//! Axum route handlers for PDF export.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExportStatusResponse {
    pub exporting: bool,
}

/// POST /api/v1/export
///
/// Exports the current resume and returns it as a PDF attachment. The file is
/// also kept in the export directory.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    // Snapshot first so the store lock is not held during layout.
    let data = state.store.read().await.snapshot();
    let artifact = state.exporter.export(data).await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        artifact.filename
    ))
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(artifact.bytes),
    )
        .into_response())
}

/// GET /api/v1/export/status
pub async fn handle_export_status(State(state): State<AppState>) -> Json<ExportStatusResponse> {
    Json(ExportStatusResponse {
        exporting: state.exporter.is_exporting(),
    })
}

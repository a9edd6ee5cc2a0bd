//! Axum route handlers for the content generation dialog.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::apply::{apply_generated, AppliedContent};
use crate::generation::generator::{generate_content, GenerationRequest};
use crate::generation::PendingContent;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub pending: PendingContent,
    pub backend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PendingResponse {
    pub pending: Option<PendingContent>,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub applied: AppliedContent,
    pub message: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate
///
/// Produces content for the category and holds it as pending. Nothing is
/// written to the resume until apply.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    // The store lock is never held across the delay.
    let content = generate_content(
        state.generator.as_ref(),
        &request,
        state.config.generation_delay,
    )
    .await?;

    let pending = PendingContent {
        category: request.category,
        job_title: request.job_title,
        content,
    };
    *state.pending.lock().await = Some(pending.clone());

    Ok(Json(GenerateResponse {
        pending,
        backend: state.generator.backend(),
    }))
}

/// GET /api/v1/generate
pub async fn handle_get_pending(State(state): State<AppState>) -> Json<PendingResponse> {
    let pending = state.pending.lock().await.clone();
    Json(PendingResponse { pending })
}

/// POST /api/v1/generate/apply
///
/// Writes the pending content into the resume and clears the slot.
pub async fn handle_apply(
    State(state): State<AppState>,
) -> Result<Json<ApplyResponse>, AppError> {
    let pending = state
        .pending
        .lock()
        .await
        .take()
        .ok_or_else(|| AppError::Validation("No generated content to apply".to_string()))?;

    let applied = {
        let mut store = state.store.write().await;
        apply_generated(
            &mut store,
            pending.category,
            &pending.job_title,
            &pending.content,
        )
    };
    info!("Applied generated {:?} content", pending.category);

    Ok(Json(ApplyResponse {
        message: applied.message(),
        applied,
    }))
}

/// DELETE /api/v1/generate
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    state.pending.lock().await.take();
    StatusCode::NO_CONTENT
}

//! Axum route handlers for the live preview and the template gallery.

use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::template::{TemplateKind, RECOMMENDED_COLORS};
use crate::render::{render, render_document};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TemplateCard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub templates: Vec<TemplateCard>,
    pub selected_color: String,
    pub recommended_colors: Vec<&'static str>,
}

/// GET /preview
///
/// Standalone HTML page for the current resume.
pub async fn handle_preview(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = state.store.read().await;
    let document = render_document(store.data()).map_err(|e| AppError::Internal(e.into()))?;
    Ok(Html(document))
}

/// GET /preview/markup
///
/// Rendered resume fragment only, for embedding in the editor page.
pub async fn handle_preview_markup(State(state): State<AppState>) -> Html<String> {
    let store = state.store.read().await;
    Html(render(store.data()).to_html())
}

/// GET /api/v1/templates
pub async fn handle_gallery(State(state): State<AppState>) -> Json<GalleryResponse> {
    let store = state.store.read().await;
    let data = store.data();
    let templates = TemplateKind::ALL
        .into_iter()
        .map(|kind| TemplateCard {
            id: kind.tag(),
            name: kind.display_name(),
            description: kind.description(),
            selected: kind == data.selected_template,
        })
        .collect();

    Json(GalleryResponse {
        templates,
        selected_color: data.color.to_string(),
        recommended_colors: RECOMMENDED_COLORS.to_vec(),
    })
}

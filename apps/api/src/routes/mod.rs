pub mod health;

use axum::{
    http::Uri,
    routing::{get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::errors::AppError;
use crate::export::handlers as export;
use crate::generation::handlers as generation;
use crate::render::handlers as preview;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(health::home_handler))
        // Resume data
        .route(
            "/api/v1/resume",
            get(editor::handle_get_resume).delete(editor::handle_reset_resume),
        )
        .route("/api/v1/resume/personal", patch(editor::handle_update_personal))
        .route("/api/v1/resume/template", put(editor::handle_set_template))
        .route("/api/v1/resume/color", put(editor::handle_set_color))
        .route("/api/v1/resume/education", post(editor::handle_add_education))
        .route(
            "/api/v1/resume/education/:id",
            patch(editor::handle_update_education).delete(editor::handle_remove_education),
        )
        .route("/api/v1/resume/experience", post(editor::handle_add_experience))
        .route(
            "/api/v1/resume/experience/:id",
            patch(editor::handle_update_experience).delete(editor::handle_remove_experience),
        )
        .route("/api/v1/resume/skills", post(editor::handle_add_skill))
        .route(
            "/api/v1/resume/skills/:id",
            patch(editor::handle_update_skill).delete(editor::handle_remove_skill),
        )
        // Editor session
        .route("/api/v1/editor", get(editor::handle_get_editor))
        .route("/api/v1/editor/tab", put(editor::handle_set_tab))
        .route("/api/v1/editor/new-skill", put(editor::handle_set_new_skill))
        .route(
            "/api/v1/editor/new-skill/commit",
            post(editor::handle_commit_new_skill),
        )
        .route(
            "/api/v1/editor/experience",
            post(editor::handle_add_blank_experience),
        )
        .route(
            "/api/v1/editor/education",
            post(editor::handle_add_blank_education),
        )
        .route(
            "/api/v1/editor/experience/:id/achievements",
            post(editor::handle_add_achievement),
        )
        .route(
            "/api/v1/editor/experience/:id/achievements/:index",
            patch(editor::handle_update_achievement).delete(editor::handle_remove_achievement),
        )
        // Templates and preview
        .route("/api/v1/templates", get(preview::handle_gallery))
        .route("/preview", get(preview::handle_preview))
        .route("/preview/markup", get(preview::handle_preview_markup))
        // Content generation
        .route(
            "/api/v1/generate",
            get(generation::handle_get_pending)
                .post(generation::handle_generate)
                .delete(generation::handle_clear),
        )
        .route("/api/v1/generate/apply", post(generation::handle_apply))
        // Export
        .route("/api/v1/export", post(export::handle_export))
        .route("/api/v1/export/status", get(export::handle_export_status))
        .fallback(not_found)
        .with_state(state)
}

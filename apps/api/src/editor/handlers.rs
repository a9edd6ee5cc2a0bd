//! Axum route handlers for resume editing and the editor session.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::editor::session::{
    add_achievement, add_blank_education, add_blank_experience, remove_achievement,
    update_achievement,
};
use crate::editor::{EditorSession, EditorTab, RowOutcome};
use crate::errors::AppError;
use crate::models::resume::{
    EducationDraft, EducationPatch, EntryId, ExperienceDraft, ExperiencePatch, PersonalInfoPatch,
    ResumeData, SkillDraft, SkillPatch,
};
use crate::models::template::{AccentColor, TemplateKind};
use crate::state::AppState;
use crate::store::ResumeStore;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: EntryId,
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: TemplateKind,
}

#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: EditorTab,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CommitSkillResponse {
    /// None when the buffer was blank and nothing was added.
    pub id: Option<EntryId>,
    pub session: EditorSession,
}

#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub outcome: RowOutcome,
    pub achievements: Vec<String>,
}

fn missing(kind: &str, id: EntryId) -> AppError {
    AppError::NotFound(format!("{kind} entry {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeData> {
    Json(state.store.read().await.snapshot())
}

/// DELETE /api/v1/resume
///
/// Resets every field to its default. The editor session is left alone.
pub async fn handle_reset_resume(State(state): State<AppState>) -> Json<ResumeData> {
    let mut store = state.store.write().await;
    store.reset();
    info!("Resume reset to defaults");
    Json(store.snapshot())
}

/// PATCH /api/v1/resume/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Json<ResumeData> {
    let mut store = state.store.write().await;
    store.update_personal_info(patch);
    Json(store.snapshot())
}

/// PUT /api/v1/resume/template
///
/// Unknown tags resolve to the minimal template rather than failing.
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(request): Json<TemplateRequest>,
) -> Json<ResumeData> {
    let mut store = state.store.write().await;
    store.set_template(request.template);
    info!("Template set to {}", request.template);
    Json(store.snapshot())
}

/// PUT /api/v1/resume/color
pub async fn handle_set_color(
    State(state): State<AppState>,
    Json(request): Json<ColorRequest>,
) -> Result<Json<ResumeData>, AppError> {
    let color = AccentColor::parse(&request.color)?;
    let mut store = state.store.write().await;
    store.set_color(color);
    Ok(Json(store.snapshot()))
}

// ── Education ──────────────────────────────────────────────────────────────

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Json(draft): Json<EducationDraft>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = state.store.write().await.add_education(draft);
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// PATCH /api/v1/resume/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<ResumeData>, AppError> {
    let mut store = state.store.write().await;
    if !store.update_education(id, patch) {
        return Err(missing("Education", id));
    }
    Ok(Json(store.snapshot()))
}

/// DELETE /api/v1/resume/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<StatusCode, AppError> {
    if !state.store.write().await.remove_education(id) {
        return Err(missing("Education", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ── Experience ─────────────────────────────────────────────────────────────

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Json(draft): Json<ExperienceDraft>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = state.store.write().await.add_experience(draft);
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// PATCH /api/v1/resume/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<ResumeData>, AppError> {
    let mut store = state.store.write().await;
    if !store.update_experience(id, patch) {
        return Err(missing("Experience", id));
    }
    Ok(Json(store.snapshot()))
}

/// DELETE /api/v1/resume/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<StatusCode, AppError> {
    if !state.store.write().await.remove_experience(id) {
        return Err(missing("Experience", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ── Skills ─────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(draft): Json<SkillDraft>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = state.store.write().await.add_skill(draft);
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// PATCH /api/v1/resume/skills/:id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Json(patch): Json<SkillPatch>,
) -> Result<Json<ResumeData>, AppError> {
    let mut store = state.store.write().await;
    if !store.update_skill(id, patch) {
        return Err(missing("Skill", id));
    }
    Ok(Json(store.snapshot()))
}

/// DELETE /api/v1/resume/skills/:id
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<StatusCode, AppError> {
    if !state.store.write().await.remove_skill(id) {
        return Err(missing("Skill", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Editor session
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/editor
pub async fn handle_get_editor(State(state): State<AppState>) -> Json<EditorSession> {
    Json(state.editor.lock().await.clone())
}

/// PUT /api/v1/editor/tab
pub async fn handle_set_tab(
    State(state): State<AppState>,
    Json(request): Json<TabRequest>,
) -> Json<EditorSession> {
    let mut editor = state.editor.lock().await;
    editor.set_active_tab(request.tab);
    Json(editor.clone())
}

/// PUT /api/v1/editor/new-skill
pub async fn handle_set_new_skill(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Json<EditorSession> {
    let mut editor = state.editor.lock().await;
    editor.set_new_skill(request.text);
    Json(editor.clone())
}

/// POST /api/v1/editor/new-skill/commit
pub async fn handle_commit_new_skill(State(state): State<AppState>) -> Json<CommitSkillResponse> {
    let mut editor = state.editor.lock().await;
    let id = {
        let mut store = state.store.write().await;
        editor.commit_new_skill(&mut store)
    };
    Json(CommitSkillResponse {
        id,
        session: editor.clone(),
    })
}

/// POST /api/v1/editor/experience
pub async fn handle_add_blank_experience(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = add_blank_experience(&mut *state.store.write().await);
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// POST /api/v1/editor/education
pub async fn handle_add_blank_education(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = add_blank_education(&mut *state.store.write().await);
    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// POST /api/v1/editor/experience/:id/achievements
pub async fn handle_add_achievement(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Json<AchievementsResponse>, AppError> {
    let mut store = state.store.write().await;
    let outcome = add_achievement(&mut store, id);
    row_response(&store, id, outcome)
}

/// PATCH /api/v1/editor/experience/:id/achievements/:index
pub async fn handle_update_achievement(
    State(state): State<AppState>,
    Path((id, index)): Path<(EntryId, usize)>,
    Json(request): Json<TextRequest>,
) -> Result<Json<AchievementsResponse>, AppError> {
    let mut store = state.store.write().await;
    let outcome = update_achievement(&mut store, id, index, request.text);
    row_response(&store, id, outcome)
}

/// DELETE /api/v1/editor/experience/:id/achievements/:index
///
/// Removing the only row is reported as `disabled` and changes nothing.
pub async fn handle_remove_achievement(
    State(state): State<AppState>,
    Path((id, index)): Path<(EntryId, usize)>,
) -> Result<Json<AchievementsResponse>, AppError> {
    let mut store = state.store.write().await;
    let outcome = remove_achievement(&mut store, id, index);
    row_response(&store, id, outcome)
}

fn row_response(
    store: &ResumeStore,
    id: EntryId,
    outcome: RowOutcome,
) -> Result<Json<AchievementsResponse>, AppError> {
    match outcome {
        RowOutcome::MissingEntry => Err(missing("Experience", id)),
        RowOutcome::MissingRow => Err(AppError::NotFound(format!(
            "Experience entry {id} has no such achievement"
        ))),
        RowOutcome::Applied | RowOutcome::Disabled => {
            let achievements = store
                .data()
                .experience
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.achievements.clone())
                .unwrap_or_default();
            Ok(Json(AchievementsResponse {
                outcome,
                achievements,
            }))
        }
    }
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::checklist::{ChecklistCategory, ChecklistItem};
use crate::models::profile::UserProfile;
use crate::normalize::coaching::CoachingResponse;
use crate::session::checklist::{merge_suggestions, progress, toggle, ChecklistProgress};
use crate::session::{
    load_checklist, load_session, save_checklist, save_session, SessionState, SESSION_KEY,
};
use crate::state::AppState;

const REFRESH_FAILURE: &str = "Couldn't reach AI Coach. Showing saved items.";

/// GET /api/session
pub async fn handle_get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionState>, AppError> {
    Ok(Json(load_session(state.store.as_ref()).await?))
}

/// POST /api/session/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<SessionState>, AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("Profile name is required".into()));
    }
    let session = SessionState::logged_in(profile);
    let _guard = state.store_lock.lock().await;
    save_session(state.store.as_ref(), &session).await?;
    info!("session started for {}", session.user_profile.as_ref().map(|p| p.name.as_str()).unwrap_or(""));
    Ok(Json(session))
}

/// POST /api/session/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let _guard = state.store_lock.lock().await;
    state.store.remove(SESSION_KEY).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/session/chat
pub async fn handle_clear_chat(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let _guard = state.store_lock.lock().await;
    let mut session = load_session(state.store.as_ref()).await?;
    session.clear_chat();
    save_session(state.store.as_ref(), &session).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ChecklistQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct ChecklistResponse {
    pub items: Vec<ChecklistItem>,
    pub progress: ChecklistProgress,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub added: usize,
    pub items: Vec<ChecklistItem>,
}

/// GET /api/checklist
/// `category` narrows the items; progress always covers the whole list.
pub async fn handle_get_checklist(
    State(state): State<AppState>,
    Query(query): Query<ChecklistQuery>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let items = load_checklist(state.store.as_ref(), || state.catalog.seed_checklist()).await?;
    let progress = progress(&items);

    let filter = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(label) if label.eq_ignore_ascii_case("all") => None,
        Some(label) => Some(
            ChecklistCategory::from_label(label)
                .ok_or_else(|| AppError::Validation(format!("Unknown category '{label}'")))?,
        ),
    };
    let items = match filter {
        Some(category) => items.into_iter().filter(|i| i.category == category).collect(),
        None => items,
    };

    Ok(Json(ChecklistResponse { items, progress }))
}

/// POST /api/checklist/:id/toggle
pub async fn handle_toggle_item(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ChecklistItem>, AppError> {
    let _guard = state.store_lock.lock().await;
    let mut items = load_checklist(state.store.as_ref(), || state.catalog.seed_checklist()).await?;
    let item = toggle(&mut items, id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Checklist item {id} not found")))?;
    save_checklist(state.store.as_ref(), &items).await?;
    Ok(Json(item))
}

/// POST /api/checklist/refresh
/// Pulls checklist suggestions from the coach and appends the new ones.
pub async fn handle_refresh_checklist(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let data = state
        .upstream
        .coach("")
        .await
        .map_err(|e| AppError::upstream(REFRESH_FAILURE, e))?;
    let suggestions = CoachingResponse::decode(&data).checklist_texts();

    let _guard = state.store_lock.lock().await;
    let mut items = load_checklist(state.store.as_ref(), || state.catalog.seed_checklist()).await?;
    let added = merge_suggestions(&mut items, suggestions);
    if added > 0 {
        save_checklist(state.store.as_ref(), &items).await?;
        info!("added {added} coach suggestions to the checklist");
    } else {
        warn!("coach returned no new checklist items");
    }
    Ok(Json(RefreshResponse { added, items }))
}

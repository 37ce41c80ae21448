use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::coach::{
    improvement_greeting, improvement_plan, improvement_question, offline_reply, welcome,
    DEFAULT_RESUME_FILE,
};
use crate::errors::AppError;
use crate::models::chat::{ChatMessage, ChatRole};
use crate::models::job::Job;
use crate::normalize::coaching::render_coaching;
use crate::scoring::matching::skill_gap;
use crate::session::{load_session, save_session, SessionState};
use crate::state::AppState;
use crate::upstream::job_key;

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct CoachExchange {
    pub user_message: ChatMessage,
    pub coach_message: ChatMessage,
    /// `false` when the upstream coach was unreachable and an offline reply was used.
    pub from_coach: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct StartChatRequest {
    pub job_id: Option<u32>,
}

#[derive(Serialize)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
}

const CHAT_CHANGED: &str = "The conversation changed while the coach was replying";

fn find_job(state: &AppState, id: u32) -> Result<&Job, AppError> {
    state
        .catalog
        .job(id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// POST /api/coach/start
/// Seeds an empty chat with a greeting. Existing conversations are left alone.
pub async fn handle_start_chat(
    State(state): State<AppState>,
    body: Option<Json<StartChatRequest>>,
) -> Result<Json<ChatLog>, AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let job = req.job_id.map(|id| find_job(&state, id)).transpose()?;

    let _guard = state.store_lock.lock().await;
    let mut session = load_session(state.store.as_ref()).await?;
    if session.chat_messages.is_empty() {
        let greeting = welcome(job, session.user_profile.as_ref());
        session.push_message(ChatRole::Coach, greeting);
        save_session(state.store.as_ref(), &session).await?;
    }
    Ok(Json(ChatLog {
        messages: session.chat_messages,
    }))
}

/// Appends `reply` to the stored chat, provided the chat still contains `anchor`.
/// Returns the appended message and the updated session.
/// A logout, login or clear while the upstream call was in flight removes the
/// anchor, and the reply is then refused instead of resurrecting the old chat.
async fn append_reply(
    state: &AppState,
    anchor: &ChatMessage,
    reply: String,
) -> Result<(ChatMessage, SessionState), AppError> {
    let _guard = state.store_lock.lock().await;
    let mut session = load_session(state.store.as_ref()).await?;
    if !session.chat_messages.contains(anchor) {
        return Err(AppError::Conflict(CHAT_CHANGED.into()));
    }
    let message = session.push_message(ChatRole::Coach, reply).clone();
    save_session(state.store.as_ref(), &session).await?;
    Ok((message, session))
}

/// POST /api/coach/messages
pub async fn handle_send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<CoachExchange>, AppError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Message text must not be empty".into()));
    }

    let (user_message, profile) = {
        let _guard = state.store_lock.lock().await;
        let mut session = load_session(state.store.as_ref()).await?;
        let message = session.push_message(ChatRole::User, text).clone();
        save_session(state.store.as_ref(), &session).await?;
        (message, session.user_profile)
    };

    let (reply, from_coach) = match state.upstream.coach(text).await {
        Ok(data) => (render_coaching(&data), true),
        Err(e) => {
            warn!("coach unavailable, using offline reply: {e}");
            (offline_reply(text, profile.as_ref()), false)
        }
    };

    let (coach_message, _) = append_reply(&state, &user_message, reply).await?;

    Ok(Json(CoachExchange {
        user_message,
        coach_message,
        from_coach,
    }))
}

/// POST /api/coach/improve/:job_id
/// Replaces the chat with a greeting and an improvement plan for one listing.
pub async fn handle_improve(
    State(state): State<AppState>,
    Path(job_id): Path<u32>,
) -> Result<Json<ChatLog>, AppError> {
    let job = find_job(&state, job_id)?;
    let student = state.catalog.student();

    let (greeting, name, resume_file, skills) = {
        let _guard = state.store_lock.lock().await;
        let mut session = load_session(state.store.as_ref()).await?;
        let (name, resume_file, skills) = match &session.user_profile {
            Some(profile) => (
                profile.name.clone(),
                if profile.resume_filename.is_empty() {
                    DEFAULT_RESUME_FILE.to_string()
                } else {
                    profile.resume_filename.clone()
                },
                profile.skills.clone(),
            ),
            None => (
                student.name.clone(),
                DEFAULT_RESUME_FILE.to_string(),
                student.skills.clone(),
            ),
        };
        session.clear_chat();
        let greeting = session
            .push_message(ChatRole::Coach, improvement_greeting(job))
            .clone();
        save_session(state.store.as_ref(), &session).await?;
        (greeting, name, resume_file, skills)
    };

    let question = improvement_question(job, &skills);
    let job_key = job_key(&job.title);
    let (resume, coach) = tokio::join!(
        state.upstream.tailor_resume(&name, &resume_file, &job_key),
        state.upstream.coach(&question),
    );
    let resume = resume
        .map_err(|e| warn!("tailor-resume unavailable for job {job_id}: {e}"))
        .ok();
    let coach = coach
        .map_err(|e| warn!("coach unavailable for job {job_id}: {e}"))
        .ok();

    let gap = skill_gap(job, &skills);
    let plan = improvement_plan(job, &gap, resume.as_ref(), coach.as_ref());
    let (_, session) = append_reply(&state, &greeting, plan).await?;

    info!(
        "built improvement plan for job {job_id} (resume: {}, coach: {})",
        resume.is_some(),
        coach.is_some()
    );
    Ok(Json(ChatLog {
        messages: session.chat_messages,
    }))
}

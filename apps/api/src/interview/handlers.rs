use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::interview::{interview_pack, InterviewPack, QuestionKind};
use crate::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct InterviewQuery {
    pub kind: Option<String>,
}

/// GET /api/interview/:job_id
/// `kind` is `technical` (default) or `behavioral`.
pub async fn handle_interview_pack(
    State(state): State<AppState>,
    Path(job_id): Path<u32>,
    Query(query): Query<InterviewQuery>,
) -> Result<Json<InterviewPack>, AppError> {
    let kind = match query.kind.as_deref().map(str::trim) {
        None | Some("") => QuestionKind::default(),
        Some(label) => QuestionKind::from_label(label)
            .ok_or_else(|| AppError::Validation(format!("Unknown question kind '{label}'")))?,
    };
    let job = state
        .catalog
        .job(job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(interview_pack(job, kind)))
}

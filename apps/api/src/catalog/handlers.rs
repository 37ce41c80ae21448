use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::catalog::walkthrough::{walkthrough, WalkthroughStep};
use crate::catalog::{locations, JobFilter};
use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::mentor::Mentor;
use crate::scoring::compatibility::CompatibilityResult;
use crate::scoring::matching::{ats_keywords, best_mentor, rank_jobs, AtsKeywords, ScoredJob};
use crate::session::{load_checklist, load_session};
use crate::state::AppState;

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<ScoredJob>,
    pub total: usize,
    pub locations: Vec<String>,
}

#[derive(Serialize)]
pub struct JobDetailResponse {
    pub job: Job,
    pub compatibility: CompatibilityResult,
    pub ats: AtsKeywords,
    pub mentor: Option<Mentor>,
}

/// Skills to score against: the logged-in profile's, else the demo student's.
pub(crate) async fn current_skills(state: &AppState) -> Result<Vec<String>, AppError> {
    let session = load_session(state.store.as_ref()).await?;
    Ok(session
        .profile_skills()
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| state.catalog.student().skills.clone()))
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<JobListResponse>, AppError> {
    let skills = current_skills(&state).await?;
    let listing = state.catalog.jobs(filter.alt);
    let jobs = rank_jobs(
        listing.iter().filter(|j| filter.matches(j)),
        state.scorer.as_ref(),
        &skills,
    );
    Ok(Json(JobListResponse {
        total: jobs.len(),
        jobs,
        locations: locations(listing),
    }))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = state
        .catalog
        .job(id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    let skills = current_skills(&state).await?;
    Ok(Json(JobDetailResponse {
        compatibility: state.scorer.score(job, &skills),
        ats: ats_keywords(job, &skills),
        mentor: best_mentor(job, state.catalog.mentors()).cloned(),
        job: job.clone(),
    }))
}

/// GET /api/mentors
pub async fn handle_list_mentors(State(state): State<AppState>) -> Json<Vec<Mentor>> {
    Json(state.catalog.mentors().to_vec())
}

/// GET /api/walkthrough
pub async fn handle_walkthrough(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkthroughStep>>, AppError> {
    let checklist = load_checklist(state.store.as_ref(), || state.catalog.seed_checklist()).await?;
    Ok(Json(walkthrough(
        &state.catalog,
        state.scorer.as_ref(),
        &checklist,
    )))
}

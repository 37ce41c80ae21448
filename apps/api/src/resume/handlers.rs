use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::coach::DEFAULT_RESUME_FILE;
use crate::errors::AppError;
use crate::models::job::Job;
use crate::normalize::gap::{normalize_gap_analysis, GapAnalysis};
use crate::resume::{
    enriched_question, gap_based_reply, merge_analysis, resume_filename, tailored_resume_text,
    usable_advice, ResumeAnalysis, ANALYSIS_QUESTION, DEFAULT_TARGET_JOB,
};
use crate::session::load_session;
use crate::state::AppState;
use crate::upstream::job_key;

#[derive(Serialize)]
pub struct GapAnalysisResponse {
    #[serde(flatten)]
    pub analysis: GapAnalysis,
    /// `true` when the static analysis is shown instead of the service's.
    pub fallback: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct AnalysisRequest {
    pub job_id: Option<u32>,
}

#[derive(Deserialize)]
pub struct AdvisorRequest {
    pub message: String,
    #[serde(default)]
    pub gap_analysis: Option<GapAnalysis>,
}

#[derive(Serialize)]
pub struct AdvisorReply {
    pub reply: String,
    pub from_coach: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DownloadRequest {
    pub job_id: Option<u32>,
    pub recommended_courses: Vec<String>,
    pub recommended_certifications: Vec<String>,
}

fn optional_job(state: &AppState, id: Option<u32>) -> Result<Option<&Job>, AppError> {
    id.map(|id| {
        state
            .catalog
            .job(id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    })
    .transpose()
}

/// GET /api/resume/gap-analysis
pub async fn handle_gap_analysis(State(state): State<AppState>) -> Json<GapAnalysisResponse> {
    let analysis = match state.upstream.gap_analysis().await {
        Ok(data) => Some(normalize_gap_analysis(&data)).filter(|a| !a.is_empty()),
        Err(e) => {
            warn!("gap analysis unavailable: {e}");
            None
        }
    };
    Json(match analysis {
        Some(analysis) => GapAnalysisResponse {
            analysis,
            fallback: false,
        },
        None => GapAnalysisResponse {
            analysis: GapAnalysis::fallback(),
            fallback: true,
        },
    })
}

/// POST /api/resume/analysis
/// Runs tailor-resume and coach side by side. Never fails on upstream errors.
pub async fn handle_resume_analysis(
    State(state): State<AppState>,
    body: Option<Json<AnalysisRequest>>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let target = match optional_job(&state, req.job_id)? {
        Some(job) => job_key(&job.title),
        None => DEFAULT_TARGET_JOB.to_string(),
    };

    let session = load_session(state.store.as_ref()).await?;
    let (name, resume_file) = match &session.user_profile {
        Some(p) if !p.name.is_empty() => (
            p.name.clone(),
            Some(p.resume_filename.clone())
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_RESUME_FILE.to_string()),
        ),
        _ => (
            state.catalog.student().name.clone(),
            DEFAULT_RESUME_FILE.to_string(),
        ),
    };

    let (resume, coach) = tokio::join!(
        state.upstream.tailor_resume(&name, &resume_file, &target),
        state.upstream.coach(ANALYSIS_QUESTION),
    );
    let resume = resume
        .map_err(|e| warn!("tailor-resume unavailable: {e}"))
        .ok();
    let coach = coach.map_err(|e| warn!("coach unavailable: {e}")).ok();

    Ok(Json(merge_analysis(resume.as_ref(), coach.as_ref())))
}

/// POST /api/resume/advisor
pub async fn handle_advisor(
    State(state): State<AppState>,
    Json(req): Json<AdvisorRequest>,
) -> Result<Json<AdvisorReply>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("Message must not be empty".into()));
    }
    let gap = req.gap_analysis.as_ref();

    let advice = match state.upstream.coach(&enriched_question(message, gap)).await {
        Ok(data) => usable_advice(&data),
        Err(e) => {
            warn!("advisor falling back to gap-based reply: {e}");
            None
        }
    };
    Ok(Json(match advice {
        Some(reply) => AdvisorReply {
            reply,
            from_coach: true,
        },
        None => AdvisorReply {
            reply: gap_based_reply(message, gap),
            from_coach: false,
        },
    }))
}

/// POST /api/resume/download
/// Plain-text resume aimed at the chosen listing, served as an attachment.
pub async fn handle_download_resume(
    State(state): State<AppState>,
    body: Option<Json<DownloadRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let job = optional_job(&state, req.job_id)?;
    let student = state.catalog.student();

    let text = tailored_resume_text(
        student,
        job,
        &req.recommended_courses,
        &req.recommended_certifications,
    );
    let disposition = format!(
        "attachment; filename=\"{}\"",
        resume_filename(student, job)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::state_with_upstream;
    use crate::upstream::testing::{spawn_stub, unreachable_base};
    use axum::{routing::post, Router};
    use serde_json::{json, Value};
    use std::time::Duration;

    async fn offline_state() -> AppState {
        state_with_upstream(unreachable_base().await, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_gap_analysis_falls_back_offline() {
        let Json(response) = handle_gap_analysis(State(offline_state().await)).await;
        assert!(response.fallback);
        assert_eq!(response.analysis, GapAnalysis::fallback());
    }

    #[tokio::test]
    async fn test_empty_gap_analysis_uses_fallback() {
        let stub = Router::new().route("/analyze-gap", post(|| async { Json(json!({ "status": "ok" })) }));
        let state = state_with_upstream(spawn_stub(stub).await, Duration::from_secs(5));
        let Json(response) = handle_gap_analysis(State(state)).await;
        assert!(response.fallback);
    }

    #[tokio::test]
    async fn test_gap_analysis_from_service() {
        let stub = Router::new().route(
            "/analyze-gap",
            post(|| async { Json(json!({ "gap_analysis": { "missing_skills": ["Docker"] } })) }),
        );
        let state = state_with_upstream(spawn_stub(stub).await, Duration::from_secs(5));
        let Json(response) = handle_gap_analysis(State(state)).await;
        assert!(!response.fallback);
        assert_eq!(response.analysis.gaps, vec!["Docker"]);
    }

    #[tokio::test]
    async fn test_analysis_offline_uses_static_lists() {
        let Json(analysis) = handle_resume_analysis(State(offline_state().await), None)
            .await
            .unwrap();
        assert_eq!(analysis.recommended_courses.len(), 3);
        assert_eq!(
            analysis.summary,
            "Analysis complete with long-term growth recommendations."
        );
    }

    #[tokio::test]
    async fn test_analysis_targets_selected_job() {
        let stub = Router::new()
            .route(
                "/tailor-resume",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({ "analysis": { "summary": body["job_id"].clone(), "matching_skills": [body["student_name"].clone()] } }))
                }),
            )
            .route("/coach", post(|| async { Json(json!({})) }));
        let state = state_with_upstream(spawn_stub(stub).await, Duration::from_secs(5));
        let Json(analysis) = handle_resume_analysis(
            State(state),
            Some(Json(AnalysisRequest { job_id: Some(2) })),
        )
        .await
        .unwrap();
        assert_eq!(analysis.summary, "Full-Stack_Developer_Intern");
        assert_eq!(analysis.matching_skills, vec!["Maya Rodriguez"]);
    }

    #[tokio::test]
    async fn test_advisor_offline_reply_uses_gap_context() {
        let req = AdvisorRequest {
            message: "Best FSU courses for my career?".into(),
            gap_analysis: Some(GapAnalysis {
                summary: String::new(),
                gaps: vec!["Kubernetes".into()],
                strengths: vec!["SQL".into()],
            }),
        };
        let Json(reply) = handle_advisor(State(offline_state().await), Json(req)).await.unwrap();
        assert!(!reply.from_coach);
        assert!(reply.reply.contains("Based on your gaps in Kubernetes:"));
    }

    #[tokio::test]
    async fn test_advisor_sends_enriched_question() {
        let stub = Router::new().route(
            "/coach",
            post(|Json(body): Json<Value>| async move {
                let question = body["question"].as_str().unwrap_or("").to_string();
                Json(json!({ "short_term_checklist": [question, "Schedule a mock interview at the Career Center"] }))
            }),
        );
        let state = state_with_upstream(spawn_stub(stub).await, Duration::from_secs(5));
        let req = AdvisorRequest {
            message: "What now?".into(),
            gap_analysis: Some(GapAnalysis {
                summary: String::new(),
                gaps: vec!["Docker".into()],
                strengths: Vec::new(),
            }),
        };
        let Json(reply) = handle_advisor(State(state), Json(req)).await.unwrap();
        assert!(reply.from_coach);
        assert!(reply
            .reply
            .contains("1. What now? (Context from my skill gap analysis: My skill gaps are: Docker.)"));
    }

    #[tokio::test]
    async fn test_download_unknown_job_is_not_found() {
        let req = DownloadRequest {
            job_id: Some(77),
            ..Default::default()
        };
        let result = handle_download_resume(State(offline_state().await), Some(Json(req))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::catalog::handlers::current_skills;
use crate::errors::AppError;
use crate::models::checklist::ChecklistItem;
use crate::normalize::matches::{normalize_matches, MatchSummary};
use crate::scoring::matching::{rank_jobs, ScoredJob};
use crate::session::checklist::{next_open, progress, ChecklistProgress};
use crate::session::{load_checklist, load_session};
use crate::state::AppState;

const LOCAL_MATCH_COUNT: usize = 3;
const TODAY_TASK_COUNT: usize = 3;
const MATCHING_UNREACHABLE: &str = "Couldn't reach AI matching service. Showing local matches.";

#[derive(Serialize)]
pub struct DashboardResponse {
    pub first_name: String,
    pub focus_track: String,
    /// Remote matches, or `None` when the service returned none.
    pub ai_matches: Option<Vec<MatchSummary>>,
    pub notice: Option<String>,
    pub local_matches: Vec<ScoredJob>,
    pub checklist: ChecklistProgress,
    pub today_tasks: Vec<ChecklistItem>,
}

/// GET /api/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let (ai_matches, notice) = match state.upstream.job_matches().await {
        Ok(data) => {
            let digest = normalize_matches(&data);
            let notice = digest.notice();
            let matches = Some(digest.matches).filter(|m| !m.is_empty());
            (matches, notice)
        }
        Err(e) => {
            warn!("match service unavailable: {e}");
            (None, Some(MATCHING_UNREACHABLE.to_string()))
        }
    };

    let session = load_session(state.store.as_ref()).await?;
    let student = state.catalog.student();
    let profile = session.user_profile.as_ref();
    let first_name = profile
        .map(|p| p.first_name())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| student.name.split_whitespace().next().unwrap_or(""))
        .to_string();
    let focus_track = profile
        .map(|p| p.career_track.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(&student.focus_track)
        .to_string();

    let skills = current_skills(&state).await?;
    let mut local_matches = rank_jobs(state.catalog.jobs(false), state.scorer.as_ref(), &skills);
    local_matches.truncate(LOCAL_MATCH_COUNT);

    let items = load_checklist(state.store.as_ref(), || state.catalog.seed_checklist()).await?;

    Ok(Json(DashboardResponse {
        first_name,
        focus_track,
        ai_matches,
        notice,
        local_matches,
        checklist: progress(&items),
        today_tasks: next_open(&items, TODAY_TASK_COUNT),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::state_with_upstream;
    use crate::upstream::testing::{spawn_stub, unreachable_base};
    use axum::{routing::post, Router};
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_dashboard_offline_shows_local_matches() {
        let state = state_with_upstream(unreachable_base().await, Duration::from_secs(5));
        let Json(dashboard) = handle_dashboard(State(state)).await.unwrap();
        assert!(dashboard.ai_matches.is_none());
        assert_eq!(dashboard.notice.as_deref(), Some(MATCHING_UNREACHABLE));
        assert_eq!(dashboard.local_matches.len(), 3);
        assert_eq!(dashboard.first_name, "Maya");
        assert_eq!(dashboard.focus_track, "Front-End SWE Intern");
        assert_eq!(dashboard.checklist.percent, 20);
        assert_eq!(dashboard.today_tasks.len(), 3);
    }

    #[tokio::test]
    async fn test_dashboard_normalizes_service_matches() {
        let stub = Router::new().route(
            "/match",
            post(|| async {
                Json(json!({
                    "top_match": { "title": "Security Intern", "company": "Acme", "match_score": 88 },
                    "total_matches": 1
                }))
            }),
        );
        let state = state_with_upstream(spawn_stub(stub).await, Duration::from_secs(5));
        let Json(dashboard) = handle_dashboard(State(state)).await.unwrap();
        let matches = dashboard.ai_matches.unwrap();
        assert_eq!(matches[0].job_title, "Security Intern");
        assert!(dashboard.notice.is_none());
    }

    #[tokio::test]
    async fn test_dashboard_counts_without_matches_show_notice() {
        let stub = Router::new().route("/match", post(|| async { Json(json!({ "total_matches": 4 })) }));
        let state = state_with_upstream(spawn_stub(stub).await, Duration::from_secs(5));
        let Json(dashboard) = handle_dashboard(State(state)).await.unwrap();
        assert!(dashboard.ai_matches.is_none());
        assert_eq!(
            dashboard.notice.as_deref(),
            Some("AI found 4 matches. Showing local matches.")
        );
    }
}

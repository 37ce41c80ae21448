pub mod dashboard;
pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::coach::handlers as coach;
use crate::interview::handlers as interview;
use crate::proxy;
use crate::resume::handlers as resume;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let relay = proxy::router(proxy::proxy_routes(state.upstream.bounded_timeout()));

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/jobs", get(catalog::handle_list_jobs))
        .route("/api/jobs/:id", get(catalog::handle_get_job))
        .route("/api/mentors", get(catalog::handle_list_mentors))
        .route("/api/walkthrough", get(catalog::handle_walkthrough))
        .route("/api/dashboard", get(dashboard::handle_dashboard))
        // Session
        .route("/api/session", get(session::handle_get_session))
        .route("/api/session/login", post(session::handle_login))
        .route("/api/session/logout", post(session::handle_logout))
        .route("/api/session/chat", delete(session::handle_clear_chat))
        // Coach
        .route("/api/coach/start", post(coach::handle_start_chat))
        .route("/api/coach/messages", post(coach::handle_send_message))
        .route("/api/coach/improve/:job_id", post(coach::handle_improve))
        // Checklist
        .route("/api/checklist", get(session::handle_get_checklist))
        .route("/api/checklist/refresh", post(session::handle_refresh_checklist))
        .route("/api/checklist/:id/toggle", post(session::handle_toggle_item))
        // Interview practice
        .route("/api/interview/:job_id", get(interview::handle_interview_pack))
        // Resume tools
        .route("/api/resume/gap-analysis", get(resume::handle_gap_analysis))
        .route("/api/resume/analysis", post(resume::handle_resume_analysis))
        .route("/api/resume/advisor", post(resume::handle_advisor))
        .route("/api/resume/download", post(resume::handle_download_resume))
        // Upstream relay
        .merge(relay)
        .with_state(state)
}

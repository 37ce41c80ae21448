/// Upstream client: the single point of entry for calls to the external coaching
/// and matching service.
///
/// No other module may issue HTTP requests to the service directly. The relay
/// routes and the application handlers both go through `forward`.
use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://1fdhytb3jl.execute-api.us-east-1.amazonaws.com/prod";
pub const DEFAULT_QUESTION: &str = "What should I do to achieve my career goals?";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub const MATCH_PATH: &str = "/match";
pub const COACH_PATH: &str = "/coach";
pub const ANALYZE_GAP_PATH: &str = "/analyze-gap";
pub const TAILOR_RESUME_PATH: &str = "/tailor-resume";
pub const AGGREGATE_JOBS_PATH: &str = "/aggregate-jobs";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("non-JSON response (status {status}): {source}")]
    Parse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode request body: {0}")]
    Encode(serde_json::Error),
}

#[derive(Debug, Serialize)]
struct UserRequest<'a> {
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
struct CoachRequest<'a> {
    user_id: &'a str,
    question: &'a str,
}

#[derive(Debug, Serialize)]
struct TailorResumeRequest<'a> {
    student_name: &'a str,
    resume_file: &'a str,
    job_id: &'a str,
}

/// Thin reqwest wrapper around one upstream base URL.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    user_id: String,
    bounded_timeout: Duration,
}

impl UpstreamClient {
    /// `bounded_timeout` applies to the coach and gap-analysis calls only.
    pub fn new(
        base_url: impl Into<String>,
        user_id: impl Into<String>,
        bounded_timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_id: user_id.into(),
            bounded_timeout,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn bounded_timeout(&self) -> Duration {
        self.bounded_timeout
    }

    /// POSTs `body` verbatim to `path` and parses the reply as JSON. An empty body
    /// is sent as `{}`. Any status with a JSON body counts as success; non-2xx
    /// replies are only logged. `timeout` bounds the whole exchange, body included.
    pub async fn forward(
        &self,
        path: &str,
        body: Bytes,
        timeout: Option<Duration>,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        let body = if body.is_empty() {
            Bytes::from_static(b"{}")
        } else {
            body
        };

        let exchange = async {
            let response = self
                .client
                .post(&url)
                .header("content-type", "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status();
            let raw = response.bytes().await?;
            Ok::<_, UpstreamError>((status.as_u16(), status.is_success(), raw))
        };

        let (status, success, raw) = match timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| UpstreamError::Timeout(limit))??,
            None => exchange.await?,
        };

        let value: Value = serde_json::from_slice(&raw)
            .map_err(|source| UpstreamError::Parse { status, source })?;

        if success {
            debug!("upstream {path} returned {status}");
        } else {
            warn!("upstream {path} returned {status} with a JSON body; relaying it");
        }
        Ok(value)
    }

    /// Serializes `body` and forwards it to `path`.
    pub async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> Result<Value, UpstreamError> {
        let body = serde_json::to_vec(body).map_err(UpstreamError::Encode)?;
        self.forward(path, Bytes::from(body), timeout).await
    }

    pub async fn job_matches(&self) -> Result<Value, UpstreamError> {
        let body = UserRequest {
            user_id: &self.user_id,
        };
        self.post_json(MATCH_PATH, &body, None).await
    }

    /// Falls back to a general career question when `question` is blank.
    pub async fn coach(&self, question: &str) -> Result<Value, UpstreamError> {
        let question = if question.trim().is_empty() {
            DEFAULT_QUESTION
        } else {
            question
        };
        let body = CoachRequest {
            user_id: &self.user_id,
            question,
        };
        self.post_json(COACH_PATH, &body, Some(self.bounded_timeout))
            .await
    }

    pub async fn gap_analysis(&self) -> Result<Value, UpstreamError> {
        let body = UserRequest {
            user_id: &self.user_id,
        };
        self.post_json(ANALYZE_GAP_PATH, &body, Some(self.bounded_timeout))
            .await
    }

    pub async fn tailor_resume(
        &self,
        student_name: &str,
        resume_file: &str,
        job_id: &str,
    ) -> Result<Value, UpstreamError> {
        let body = TailorResumeRequest {
            student_name,
            resume_file,
            job_id,
        };
        self.post_json(TAILOR_RESUME_PATH, &body, None).await
    }
}

/// Upstream job identifiers are listing titles with whitespace replaced by `_`.
pub fn job_key(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("_")
}

//! Relay routes: five POST paths forwarded verbatim to the upstream service.
//!
//! The table below is the only per-route configuration. Every entry shares
//! `relay`, which rejects malformed request bodies with a 400 and returns the
//! upstream JSON as-is or a flat 502.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    routing::post,
    Json, Router,
};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::state::AppState;
use crate::upstream::{
    AGGREGATE_JOBS_PATH, ANALYZE_GAP_PATH, COACH_PATH, MATCH_PATH, TAILOR_RESUME_PATH,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyRoute {
    pub path: &'static str,
    pub upstream_path: &'static str,
    pub timeout: Option<Duration>,
    pub failure_message: &'static str,
}

/// The relay table. Coach and gap analysis are slow upstream and get `bounded`.
pub fn proxy_routes(bounded: Duration) -> Vec<ProxyRoute> {
    vec![
        ProxyRoute {
            path: "/api/aws/match",
            upstream_path: MATCH_PATH,
            timeout: None,
            failure_message: "Failed to reach AWS match endpoint",
        },
        ProxyRoute {
            path: "/api/aws/coach",
            upstream_path: COACH_PATH,
            timeout: Some(bounded),
            failure_message: "Failed to reach AWS coach endpoint",
        },
        ProxyRoute {
            path: "/api/aws/analyze-gap",
            upstream_path: ANALYZE_GAP_PATH,
            timeout: Some(bounded),
            failure_message: "Failed to reach AWS analyze-gap endpoint",
        },
        ProxyRoute {
            path: "/api/aws/tailor-resume",
            upstream_path: TAILOR_RESUME_PATH,
            timeout: None,
            failure_message: "Failed to reach AWS tailor-resume endpoint",
        },
        ProxyRoute {
            path: "/api/aws/aggregate-jobs",
            upstream_path: AGGREGATE_JOBS_PATH,
            timeout: None,
            failure_message: "Failed to reach AWS aggregate-jobs endpoint",
        },
    ]
}

/// Request bodies must be a JSON object or array. A blank body relays as `{}`.
fn parse_body(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Ok(value),
        Ok(_) => Err(AppError::Validation(
            "Request body must be a JSON object or array".into(),
        )),
        Err(e) => Err(AppError::Validation(format!("Malformed JSON body: {e}"))),
    }
}

async fn relay(state: &AppState, route: &ProxyRoute, body: Bytes) -> Result<Json<Value>, AppError> {
    let body = parse_body(&body)?;
    state
        .upstream
        .post_json(route.upstream_path, &body, route.timeout)
        .await
        .map(Json)
        .map_err(|e| AppError::upstream(route.failure_message, e))
}

/// One POST route per table entry.
pub fn router(routes: Vec<ProxyRoute>) -> Router<AppState> {
    routes.into_iter().fold(Router::new(), |router, route| {
        let path = route.path;
        router.route(
            path,
            post(move |State(state): State<AppState>, body: Bytes| {
                let route = route.clone();
                async move { relay(&state, &route, body).await }
            }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::state_with_upstream;
    use crate::upstream::testing::{spawn_stub, unreachable_base};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
        post_raw(app, path, body.to_string()).await
    }

    async fn post_raw(app: Router, path: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post(path)
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn app(base: String, timeout: Duration) -> Router {
        let state = state_with_upstream(base, timeout);
        router(proxy_routes(state.upstream.bounded_timeout())).with_state(state)
    }

    #[test]
    fn test_only_coach_and_gap_are_bounded() {
        let routes = proxy_routes(Duration::from_secs(55));
        assert_eq!(routes.len(), 5);
        for route in &routes {
            let bounded = matches!(route.path, "/api/aws/coach" | "/api/aws/analyze-gap");
            assert_eq!(route.timeout.is_some(), bounded, "{}", route.path);
            if bounded {
                assert_eq!(route.timeout, Some(Duration::from_secs(55)));
            }
        }
    }

    #[tokio::test]
    async fn test_upstream_json_is_passed_through() {
        let stub = Router::new().route(
            "/tailor-resume",
            post(|Json(body): Json<Value>| async move {
                Json(json!({ "received": body, "match_score": 82 }))
            }),
        );
        let base = spawn_stub(stub).await;
        let request = json!({ "student_name": "Maya Rodriguez", "job_id": "AI_Security" });
        let (status, body) = post_json(
            app(base, Duration::from_secs(5)),
            "/api/aws/tailor-resume",
            request.clone(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "received": request, "match_score": 82 }));
    }

    #[tokio::test]
    async fn test_every_route_reports_its_own_message_when_unreachable() {
        let base = unreachable_base().await;
        for route in proxy_routes(Duration::from_secs(5)) {
            let (status, body) = post_json(
                app(base.clone(), Duration::from_secs(5)),
                route.path,
                json!({ "user_id": "user_12345" }),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_GATEWAY, "{}", route.path);
            assert_eq!(body, json!({ "error": route.failure_message }));
        }
    }

    /// Every upstream path answers after 300ms, past a 100ms bound.
    fn slow_upstream() -> Router {
        proxy_routes(Duration::ZERO)
            .into_iter()
            .fold(Router::new(), |stub, route| {
                let upstream_path = route.upstream_path;
                stub.route(
                    upstream_path,
                    post(move || async move {
                        tokio::time::sleep(Duration::from_millis(300)).await;
                        Json(json!({ "path": upstream_path }))
                    }),
                )
            })
    }

    #[tokio::test]
    async fn test_only_bounded_routes_time_out() {
        let base = spawn_stub(slow_upstream()).await;
        for route in proxy_routes(Duration::from_millis(100)) {
            let (status, body) = post_json(
                app(base.clone(), Duration::from_millis(100)),
                route.path,
                json!({}),
            )
            .await;
            if route.timeout.is_some() {
                assert_eq!(status, StatusCode::BAD_GATEWAY, "{}", route.path);
                assert_eq!(body, json!({ "error": route.failure_message }));
            } else {
                assert_eq!(status, StatusCode::OK, "{}", route.path);
                assert_eq!(body, json!({ "path": route.upstream_path }));
            }
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_before_relay() {
        // Nothing listens upstream, so a relayed request would come back as 502.
        let base = unreachable_base().await;
        for raw in ["{\"user_id\": ", "not json", "42", "\"text\""] {
            let (status, body) =
                post_raw(app(base.clone(), Duration::from_secs(5)), "/api/aws/match", raw).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_blank_body_is_relayed_as_empty_object() {
        let stub = Router::new().route(
            "/match",
            post(|Json(body): Json<Value>| async move { Json(json!({ "received": body })) }),
        );
        let base = spawn_stub(stub).await;
        let (status, body) =
            post_raw(app(base, Duration::from_secs(5)), "/api/aws/match", "  ").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "received": {} }));
    }

    #[tokio::test]
    async fn test_body_is_reserialized_compactly() {
        let stub = Router::new().route(
            "/coach",
            post(|body: Bytes| async move {
                Json(json!({ "raw": String::from_utf8_lossy(&body).into_owned() }))
            }),
        );
        let base = spawn_stub(stub).await;
        let (status, body) = post_raw(
            app(base, Duration::from_secs(5)),
            "/api/aws/coach",
            "{ \"question\" :  \"hi\" }",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "raw": "{\"question\":\"hi\"}" }));
    }

    #[tokio::test]
    async fn test_non_json_upstream_is_502() {
        let stub = Router::new().route("/aggregate-jobs", post(|| async { "<html>oops</html>" }));
        let base = spawn_stub(stub).await;
        let (status, body) = post_json(
            app(base, Duration::from_secs(5)),
            "/api/aws/aggregate-jobs",
            json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Failed to reach AWS aggregate-jobs endpoint");
    }
}

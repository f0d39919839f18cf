pub mod health;
pub mod run;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/run", post(run::handle_run))
        .route("/run_sse", post(run::handle_run_sse))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::evaluators::LlmScorer;
    use crate::llm_client::LlmClient;
    use crate::models::plan::InterviewPlan;
    use crate::sessions::InMemorySessionStore;
    use crate::store;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn make_state(dir: &TempDir) -> AppState {
        let llm = LlmClient::new("test-key".to_string());
        AppState {
            scoring: Arc::new(LlmScorer::new(llm.clone())),
            llm,
            sessions: Arc::new(InMemorySessionStore::new()),
            config: Config {
                anthropic_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                plan_path: dir.path().join("interview_plan.json"),
                session_path: dir.path().join("interview_session.json"),
            },
        }
    }

    fn run_body(app_name: &str, text: &str) -> Body {
        Body::from(format!(
            r#"{{"app_name": "{app_name}", "userId": "u1", "sessionId": "s1",
                "newMessage": {{"role": "user", "parts": [{{"text": "{text}"}}]}}}}"#
        ))
    }

    fn post_json(uri: &str, body: Body) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let dir = TempDir::new().unwrap();
        let app = build_router(make_state(&dir));

        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["service"], "greenroom-api");
    }

    #[tokio::test]
    async fn test_run_rejects_unknown_agent() {
        let dir = TempDir::new().unwrap();
        let app = build_router(make_state(&dir));

        let resp = app
            .oneshot(post_json("/run", run_body("no_such_agent", "hi")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let err: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(err["error"]["code"], "UNKNOWN_AGENT");
    }

    #[tokio::test]
    async fn test_run_sse_rejects_unknown_agent() {
        let dir = TempDir::new().unwrap();
        let app = build_router(make_state(&dir));

        let resp = app
            .oneshot(post_json("/run_sse", run_body("no_such_agent", "hi")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_run_rejects_malformed_body() {
        let dir = TempDir::new().unwrap();
        let app = build_router(make_state(&dir));

        let resp = app
            .oneshot(post_json("/run", Body::from("{not json")))
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn test_run_interviewer_without_plan_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = build_router(make_state(&dir));

        let resp = app
            .oneshot(post_json("/run", run_body("main_interviewer_agent", "hi")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_run_interviewer_first_turn_returns_question_events() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);
        let plan: InterviewPlan = serde_json::from_str(
            r#"{"role": "r", "jobDescription": "jd", "informationAboutCompany": "c",
                "questions": [{"id": "t1", "title": "T", "question": "Q?"}]}"#,
        )
        .unwrap();
        store::save_value(&plan, &state.config.plan_path).unwrap();
        let app = build_router(state);

        let resp = app
            .oneshot(post_json("/run", run_body("main_interviewer_agent", "ready")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let run: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let events = run["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["type"], "text");
        assert!(events[0]["text"].as_str().unwrap().contains("Q?"));
    }
}

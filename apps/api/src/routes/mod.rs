pub mod health;

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.match_timeout_secs);

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analyze/resume",
            post(handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/analyze/position",
            post(handlers::handle_analyze_position),
        )
        // Matching API
        .route("/api/v1/matches", post(handlers::handle_match_texts))
        .route(
            "/api/v1/matches/profiles",
            post(handlers::handle_match_profiles),
        )
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::KeywordCatalog;
    use crate::config::Config;
    use crate::llm_client::stub::ScriptedGenerator;
    use crate::matching::aggregator::MatchEngine;
    use crate::scoring::regions::RegionTiers;
    use crate::scoring::similarity::EditDistanceSimilarity;

    fn test_state(llm: ScriptedGenerator) -> AppState {
        let engine = MatchEngine::new(
            Arc::new(llm),
            Arc::new(KeywordCatalog::builtin()),
            Arc::new(RegionTiers::builtin()),
            Arc::new(EditDistanceSimilarity::default()),
        );
        AppState {
            engine: Arc::new(engine),
            config: Config {
                anthropic_api_key: "test-key".to_string(),
                llm_model: "test-model".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                keyword_catalog_path: None,
                region_tiers_path: None,
                match_timeout_secs: 5,
            },
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let app = build_router(test_state(ScriptedGenerator::new()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "match-api");
    }

    #[tokio::test]
    async fn test_empty_texts_are_rejected() {
        let app = build_router(test_state(ScriptedGenerator::new()));

        let response = app
            .clone()
            .oneshot(post_json("/api/v1/analyze/resume", json!({"text": "   "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");

        let response = app
            .oneshot(post_json(
                "/api/v1/matches",
                json!({"resume_text": "a resume", "position_text": ""}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_resume_degrades_to_default_profile() {
        // No scripted route: every call comes back empty.
        let app = build_router(test_state(ScriptedGenerator::new()));
        let response = app
            .oneshot(post_json("/api/v1/analyze/resume", json!({"text": "Dana, Haifa"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["candidate"]["seniority"], "mid");
    }

    #[tokio::test]
    async fn test_match_texts_returns_envelope() {
        let llm = ScriptedGenerator::new()
            .respond("RELEVANCE ASSESSMENT", "SCORE: 6\nREASON: adjacent field")
            .respond("RESUME TO ANALYZE:", r#"{"personalInfo": {"city": "Haifa"}}"#)
            .respond("JOB POSTING TO ANALYZE:", r#"{"basicInfo": {"location": "Haifa"}}"#);
        let app = build_router(test_state(llm));

        let response = app
            .oneshot(post_json(
                "/api/v1/matches",
                json!({"resume_text": "my resume", "position_text": "the posting"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(body["match_id"].is_string());
        assert!(body["computed_at"].is_string());
        assert_eq!(body["candidate"]["personalInfo"]["city"], "Haifa");
        assert_eq!(body["result"]["breakdown"]["location"], 10);
        assert_eq!(body["result"]["breakdown"]["aiLogic"], 6);
        assert_eq!(body["result"]["humanReadingDegraded"], true);
        let total = body["result"]["totalScore"].as_u64().unwrap();
        assert!(total <= 100);
    }

    #[tokio::test]
    async fn test_match_profiles_accepts_partial_profiles() {
        let app = build_router(test_state(ScriptedGenerator::new()));
        let response = app
            .oneshot(post_json(
                "/api/v1/matches/profiles",
                json!({
                    "candidate": {"skills": {"technical": "Python, SQL"}},
                    "position": {"requirements": {"mustHave": ["Python"]}}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["result"]["details"]["matchedSkills"][0], "Python");
        assert!(body.get("candidate").is_none());
    }
}

//! HTTP routes under `/api`

mod summarize;
mod system;

use actix_web::web;

use crate::error::json_error_handler;

/// Register the `/api` scope
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(system::health)
            .service(summarize::summarize),
    );
}

/// JSON body extractor settings
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::types::{ErrorResponse, HealthResponse, SummarizeResponse, MISSING_TEXT_MESSAGE};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::DateTime;
    use notesync_common::{AppConfig, NoteSyncError, Result};
    use notesync_llm::{
        fallback_summary, parse_summary_reply, Summarizer, Summary, SummaryProvider,
    };
    use serde_json::json;
    use std::sync::Arc;

    /// Provider replying with a fixed model output, parsed like a real reply
    struct ScriptedProvider(&'static str);

    #[async_trait]
    impl SummaryProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn summarize(&self, _notes: &str) -> Result<Summary> {
            parse_summary_reply(self.0).map_err(|e| NoteSyncError::llm(e.to_string()))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl SummaryProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn summarize(&self, _notes: &str) -> Result<Summary> {
            Err(NoteSyncError::network("connection reset"))
        }
    }

    struct PanickingProvider;

    #[async_trait]
    impl SummaryProvider for PanickingProvider {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn summarize(&self, _notes: &str) -> Result<Summary> {
            panic!("provider bug")
        }
    }

    macro_rules! test_app {
        ($summarizer:expr) => {
            test_app!($summarizer, AppConfig::default().json_limit_bytes)
        };
        ($summarizer:expr, $limit:expr) => {{
            let state = web::Data::new(AppState::with_summarizer(AppConfig::default(), $summarizer));
            test::init_service(
                App::new()
                    .app_data(state)
                    .app_data(json_config($limit))
                    .configure(configure_api),
            )
            .await
        }};
    }

    fn with_provider(provider: impl SummaryProvider + 'static) -> Summarizer {
        Summarizer::new(Some(Arc::new(provider)))
    }

    fn summarize_request(body: serde_json::Value) -> test::TestRequest {
        test::TestRequest::post().uri("/api/summarize").set_json(body)
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test_app!(Summarizer::fallback_only());
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "ok");
        assert!(DateTime::parse_from_rfc3339(&body.time).is_ok());
    }

    #[actix_web::test]
    async fn test_fallback_without_credentials() {
        let app = test_app!(Summarizer::fallback_only());
        let notes = "Discussed hiring. ".repeat(20);

        let resp = test::call_service(&app, summarize_request(json!({ "text": notes })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: SummarizeResponse = test::read_body_json(resp).await;
        assert_eq!(body.summary, fallback_summary(&notes));
        assert!(body.summary.overview.ends_with('…'));
    }

    #[actix_web::test]
    async fn test_fallback_response_has_all_fields() {
        let app = test_app!(Summarizer::fallback_only());
        let resp = test::call_service(&app, summarize_request(json!({ "text": "Quick sync" })).to_request()).await;

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"summary": {"overview": "Quick sync", "actionItems": [], "decisions": [], "topics": []}})
        );
    }

    #[actix_web::test]
    async fn test_blank_text_is_rejected() {
        let app = test_app!(Summarizer::fallback_only());

        for body in [json!({}), json!({ "text": "" }), json!({ "text": "   \n" }), json!({ "text": 12 })] {
            let resp = test::call_service(&app, summarize_request(body.clone()).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {body}");

            let err: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(err.error, MISSING_TEXT_MESSAGE);
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_body_is_rejected() {
        let app = test_app!(Summarizer::fallback_only());
        let req = test::TestRequest::post()
            .uri("/api/summarize")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let err: ErrorResponse = test::read_body_json(resp).await;
        assert!(err.error.starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn test_non_json_body_is_rejected() {
        let app = test_app!(Summarizer::fallback_only());

        for (content_type, payload) in [
            ("text/plain", "Standup notes"),
            ("application/x-www-form-urlencoded", "text=Standup+notes"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/summarize")
                .insert_header(("content-type", content_type))
                .set_payload(payload)
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{content_type}");
            let err: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(err.error, "Request body must be JSON.");
        }
    }

    #[actix_web::test]
    async fn test_oversized_body_is_rejected() {
        let app = test_app!(Summarizer::fallback_only(), 64);

        let resp = test::call_service(&app, summarize_request(json!({ "text": "x".repeat(200) })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn test_well_formed_reply_is_returned_verbatim() {
        let reply = r#"{"overview":"Roadmap review.","actionItems":["Update board"],"decisions":["Defer mobile app"],"topics":["roadmap","mobile"]}"#;
        let app = test_app!(with_provider(ScriptedProvider(reply)));

        let resp = test::call_service(&app, summarize_request(json!({ "text": "notes" })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let expected: serde_json::Value = serde_json::from_str(reply).unwrap();
        assert_eq!(body["summary"], expected);
    }

    #[actix_web::test]
    async fn test_reply_wrapped_in_prose_is_recovered() {
        let reply = r#"Here is your summary: {"overview":"Retro.","actionItems":[],"decisions":["Keep Friday demos"],"topics":["retro"]} Hope this helps!"#;
        let app = test_app!(with_provider(ScriptedProvider(reply)));

        let resp = test::call_service(&app, summarize_request(json!({ "text": "notes" })).to_request()).await;
        let body: SummarizeResponse = test::read_body_json(resp).await;
        assert_eq!(body.summary.overview, "Retro.");
        assert_eq!(body.summary.decisions, vec!["Keep Friday demos"]);
    }

    #[actix_web::test]
    async fn test_unparseable_reply_falls_back() {
        let app = test_app!(with_provider(ScriptedProvider("no json here")));

        let resp = test::call_service(&app, summarize_request(json!({ "text": "Budget call" })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: SummarizeResponse = test::read_body_json(resp).await;
        assert_eq!(body.summary, fallback_summary("Budget call"));
    }

    #[actix_web::test]
    async fn test_provider_error_falls_back() {
        let app = test_app!(with_provider(FailingProvider));

        let resp = test::call_service(&app, summarize_request(json!({ "text": "Budget call" })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: SummarizeResponse = test::read_body_json(resp).await;
        assert_eq!(body.summary, fallback_summary("Budget call"));
    }

    #[actix_web::test]
    async fn test_panic_is_reported_as_internal_error() {
        let app = test_app!(with_provider(PanickingProvider));

        let resp = test::call_service(&app, summarize_request(json!({ "text": "Budget call" })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let err: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(err.error, "Internal server error");
    }
}

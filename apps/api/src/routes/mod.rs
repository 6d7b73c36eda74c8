pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::design::handlers as design;
use crate::history::handlers as history;
use crate::portfolio::handlers as portfolio;
use crate::resume::{handlers as resume, MAX_RESUME_BYTES};
use crate::skills::handlers as skills;
use crate::state::AppState;

/// Multipart framing around the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalogs and design
        .route("/api/v1/roles", get(design::handle_list_roles))
        .route("/api/v1/roles/:id/themes", get(design::handle_role_themes))
        .route("/api/v1/themes", get(design::handle_list_themes))
        .route("/api/v1/themes/suggest", post(design::handle_suggest_themes))
        .route("/api/v1/design/:role", get(design::handle_design_preview))
        .route("/api/v1/skills/classify", post(skills::handle_classify))
        // Setup wizard and portfolios
        .route("/api/v1/wizard/steps", get(portfolio::handle_wizard_steps))
        .route("/api/v1/wizard/next", get(portfolio::handle_wizard_next))
        .route("/api/v1/portfolios", post(portfolio::handle_save_portfolio))
        .route("/api/v1/portfolios/me", get(portfolio::handle_get_own_portfolio))
        .route("/api/v1/portfolios/:id", get(portfolio::handle_get_portfolio_page))
        .route("/p/:id", get(portfolio::handle_share_page))
        // Résumé import
        .route(
            "/api/v1/resumes/import",
            post(resume::handle_import_resume)
                .layer(DefaultBodyLimit::max(MAX_RESUME_BYTES + MULTIPART_OVERHEAD)),
        )
        // Browsing history
        .route(
            "/api/v1/history",
            get(history::handle_list_history)
                .post(history::handle_record_visit)
                .delete(history::handle_clear_history),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::design::engine::resolve;
    use crate::design::VariantGenerator;
    use crate::history::memory::MemoryHistory;
    use crate::resume::testing::StubParser;
    use crate::resume::ParsedResume;
    use crate::store::memory::MemoryStore;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            redis_url: "redis://unused".to_string(),
            s3_bucket: "folio-test".to_string(),
            s3_endpoint: "http://unused".to_string(),
            aws_access_key_id: "test".to_string(),
            aws_secret_access_key: "test".to_string(),
            anthropic_api_key: "test".to_string(),
            port: 8080,
            rust_log: "debug".to_string(),
            public_base_url: "https://folio.test".to_string(),
            variant_seed: Some(42),
        }
    }

    fn test_app(parsed: Option<ParsedResume>) -> Router {
        build_router(AppState {
            store: Arc::new(MemoryStore::new()),
            history: Arc::new(MemoryHistory::default()),
            resume_parser: Arc::new(StubParser { result: parsed }),
            variants: Arc::new(VariantGenerator::seeded(42)),
            config: test_config(),
        })
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = send(app, request).await;
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn portfolio_body(user_id: Uuid) -> Value {
        json!({
            "user_id": user_id,
            "job_role": "frontend-developer",
            "profile": {
                "full_name": "Ada <Lovelace>",
                "profession": "Frontend Developer",
                "bio": "I build interfaces.",
                "email": "ada@example.com"
            },
            "skills": ["React", " ", "react"],
            "projects": [{"title": "Engine"}],
            "education": [{"degree": "BSc", "institution": "London"}]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send_json(&test_app(None), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_catalog_routes() {
        let app = test_app(None);

        let (status, roles) = send_json(&app, get("/api/v1/roles")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(roles.as_array().unwrap().len(), 16);

        let (_, themes) = send_json(&app, get("/api/v1/themes")).await;
        assert_eq!(themes.as_array().unwrap().len(), 5);

        let (status, _) = send_json(&app, get("/api/v1/roles/astronaut/themes")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, suggestion) = send_json(
            &app,
            post_json("/api/v1/themes/suggest", json!({"skills": ["Excel"]})),
        )
        .await;
        assert_eq!(suggestion["role_id"], "fresher");

        let (_, buckets) = send_json(
            &app,
            post_json("/api/v1/skills/classify", json!({"skills": ["React", "Teamwork", ""]})),
        )
        .await;
        assert_eq!(buckets["technical_skills"], json!(["React"]));
        assert_eq!(buckets["soft_skills"], json!(["Teamwork"]));
    }

    #[tokio::test]
    async fn test_design_preview_with_variant_query() {
        let app = test_app(None);
        let (status, preview) = send_json(
            &app,
            get("/api/v1/design/backend-developer?layout=split&colorAccent=ember&animationStyle=fade&backgroundStyle=mesh&typographyWeight=bold"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(preview["known_role"], true);
        assert_eq!(preview["variant"]["colorAccent"], "ember");
        assert_eq!(preview["design"]["layout"], "split");
    }

    #[tokio::test]
    async fn test_design_preview_ignores_unknown_axis_value() {
        let (status, preview) = send_json(
            &test_app(None),
            get("/api/v1/design/frontend-developer?colorAccent=rainbow"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(preview["variant"], Value::Null);
        assert_eq!(
            preview["design"],
            serde_json::to_value(resolve("frontend-developer", None)).unwrap()
        );
    }

    #[tokio::test]
    async fn test_wizard_steps_for_fresher() {
        let (_, plan) = send_json(&test_app(None), get("/api/v1/wizard/steps?role=fresher")).await;
        let steps = plan["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 7);
        assert!(!steps.contains(&json!("achievements")));
    }

    #[tokio::test]
    async fn test_wizard_next_and_previous() {
        let app = test_app(None);

        let (status, moved) = send_json(
            &app,
            get("/api/v1/wizard/next?role=fresher&current=education&event=continue"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(moved["next"], "theme");
        assert_eq!(moved["previous"], "projects");

        let (_, moved) = send_json(
            &app,
            get("/api/v1/wizard/next?role=backend-developer&current=resume&event=resume_skipped"),
        )
        .await;
        assert_eq!(moved["next"], "personal_info");
        assert_eq!(moved["previous"], "role");

        let (_, moved) =
            send_json(&app, get("/api/v1/wizard/next?role=data-analyst&current=theme")).await;
        assert_eq!(moved["next"], Value::Null);

        let (status, _) = send(&app, get("/api/v1/wizard/next?role=fresher&current=payment")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_then_share() {
        let app = test_app(None);
        let user_id = Uuid::new_v4();

        let (status, record) =
            send_json(&app, post_json("/api/v1/portfolios", portfolio_body(user_id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(record["technical_skills"], json!(["React"]));
        assert_eq!(record["soft_skills"], json!([]));
        assert!(record["design_variant"]["layout"].is_string());
        let id = record["id"].as_str().unwrap().to_string();
        assert_eq!(record["share_url"], format!("https://folio.test/p/{id}"));

        let (status, page) = send_json(&app, get(&format!("/api/v1/portfolios/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        let sections: Vec<&str> = page["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["section"].as_str().unwrap())
            .collect();
        assert_eq!(sections, vec!["about", "projects", "skills", "education", "contact"]);

        let (status, html) = send(&app, get(&format!("/p/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(html).unwrap();
        assert!(html.contains("Ada &lt;Lovelace&gt;"));

        let (status, own) =
            send_json(&app, get(&format!("/api/v1/portfolios/me?user_id={user_id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(own["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_share_page_drops_script_links() {
        let app = test_app(None);
        let mut body = portfolio_body(Uuid::new_v4());
        body["profile"]["website_url"] = json!("javascript:alert(document.cookie)");
        body["profile"]["github_url"] = json!("github.com/ada");
        body["projects"][0]["project_url"] = json!("javascript:alert(1)");

        let (status, record) = send_json(&app, post_json("/api/v1/portfolios", body)).await;
        assert_eq!(status, StatusCode::OK);
        let id = record["id"].as_str().unwrap().to_string();

        let (status, html) = send(&app, get(&format!("/p/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(html).unwrap();
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"https://github.com/ada\""));
    }

    #[tokio::test]
    async fn test_invalid_portfolio_is_rejected() {
        let app = test_app(None);
        let user_id = Uuid::new_v4();
        let mut body = portfolio_body(user_id);
        body["profile"]["email"] = json!("");

        let (status, error) = send_json(&app, post_json("/api/v1/portfolios", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"]["code"], "VALIDATION_ERROR");

        let (status, _) =
            send_json(&app, get(&format!("/api/v1/portfolios/me?user_id={user_id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_share_page_is_not_found() {
        let (status, _) = send(&test_app(None), get(&format!("/p/{}", Uuid::new_v4()))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_history_round() {
        let app = test_app(None);
        let user_id = Uuid::new_v4();
        for path in ["/dashboard", "/dashboard", "/history"] {
            send_json(
                &app,
                post_json("/api/v1/history", json!({"user_id": user_id, "path": path})),
            )
            .await;
        }

        let uri = format!("/api/v1/history?user_id={user_id}");
        let (_, entries) = send_json(&app, get(&uri)).await;
        let titles: Vec<&str> = entries
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Browsing History", "Dashboard"]);

        let delete = Request::builder()
            .method("DELETE")
            .uri(&uri)
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, entries) = send_json(&app, get(&uri)).await;
        assert_eq!(entries, json!([]));
    }

    fn multipart_request(user_id: &str, file_name: &str, contents: &str) -> Request<Body> {
        let boundary = "folio-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"user_id\"\r\n\r\n\
             {user_id}\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {contents}\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/import")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_resume_import_prefills_wizard() {
        let parsed = ParsedResume {
            full_name: "Ada Lovelace".to_string(),
            skills: vec!["React".to_string(), "Tailwind".to_string()],
            ..ParsedResume::default()
        };
        let app = test_app(Some(parsed));
        let (status, import) = send_json(
            &app,
            multipart_request(&Uuid::new_v4().to_string(), "cv.txt", "Ada Lovelace"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(import["profile"]["full_name"], "Ada Lovelace");
        assert_eq!(import["skills"]["technical_skills"], json!(["React", "Tailwind"]));
        assert_eq!(import["theme_suggestion"]["role_id"], "frontend-developer");
        assert_eq!(import["next_step"], "personal_info");
    }

    #[tokio::test]
    async fn test_resume_parse_failure_is_unprocessable() {
        let app = test_app(None);
        let (status, error) = send_json(
            &app,
            multipart_request(&Uuid::new_v4().to_string(), "cv.txt", "garbage"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error["error"]["code"], "RESUME_PARSE_FAILED");
    }

    #[tokio::test]
    async fn test_resume_import_requires_user_id() {
        let app = test_app(None);
        let (status, _) = send_json(&app, multipart_request("not-a-uuid", "cv.txt", "x")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

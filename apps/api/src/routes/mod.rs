pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::letter::handlers;
use crate::preview::handlers as preview;
use crate::state::AppState;

/// Room for multipart boundaries and part headers around the logo bytes.
const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

pub fn build_router(state: AppState) -> Router {
    let logo_limit = state.config.max_logo_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Letter API
        .route("/api/v1/letters/preview", post(preview::handle_preview))
        .route("/api/v1/letters/validate", post(handlers::handle_validate))
        .route("/api/v1/letters/export", post(handlers::handle_export))
        .route(
            "/api/v1/logos",
            post(handlers::handle_upload_logo).layer(DefaultBodyLimit::max(logo_limit)),
        )
        .route("/api/v1/presets", get(handlers::handle_list_presets))
        .route("/api/v1/presets/:key", get(handlers::handle_get_preset))
        // Preview sessions
        .route(
            "/api/v1/preview/sessions",
            post(preview::handle_open_session),
        )
        .route(
            "/api/v1/preview/sessions/:id",
            get(preview::handle_snapshot)
                .put(preview::handle_submit)
                .delete(preview::handle_close_session),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    fn complete_letter() -> Value {
        json!({
            "form": {
                "companyName": "TechCorp Solutions",
                "candidateName": "Alex Johnson",
                "position": "Senior Software Engineer",
                "salary": "95000",
                "startDate": "2025-06-01"
            },
            "style": { "layout": "formal", "colorScheme": "green" },
            "options": { "issueDate": "2025-05-01" }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["previewSessions"], 0);
    }

    #[tokio::test]
    async fn test_preview_renders_formatted_values() {
        let response = app()
            .oneshot(json_request("POST", "/api/v1/letters/preview", complete_letter()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["placeholder"], false);
        let html = body["html"].as_str().unwrap();
        assert!(html.contains("$95,000"));
        assert!(html.contains("June 1, 2025"));
        assert!(html.contains("Dear Alex,"));
        assert!(html.contains("#4CAF50"));
    }

    #[tokio::test]
    async fn test_preview_of_empty_form_is_placeholder() {
        let response = app()
            .oneshot(json_request("POST", "/api/v1/letters/preview", json!({})))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["placeholder"], true);
    }

    #[tokio::test]
    async fn test_preview_font_size_is_read_leniently_and_clamped() {
        let app = app();
        for (font_size, expected) in [
            (json!(300), "font-size: 32px;"),
            (json!("14"), "font-size: 14px;"),
            (json!("18px"), "font-size: 18px;"),
            (json!(14.5), "font-size: 15px;"),
            (json!(2), "font-size: 8px;"),
        ] {
            let mut letter = complete_letter();
            letter["options"]["fontSize"] = font_size.clone();
            let response = app
                .clone()
                .oneshot(json_request("POST", "/api/v1/letters/preview", letter))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "fontSize {font_size}");
            let body = body_json(response).await;
            assert!(
                body["html"].as_str().unwrap().contains(expected),
                "fontSize {font_size} should render {expected}"
            );
        }
    }

    #[tokio::test]
    async fn test_validate_lists_all_missing_fields() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/v1/letters/validate",
                json!({ "companyName": "Acme" }),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["missing"].as_array().unwrap().len(), 4);
        assert_eq!(body["missing"][0]["field"], "candidateName");
        assert_eq!(body["missing"][0]["label"], "candidate name");
    }

    #[tokio::test]
    async fn test_export_returns_print_page() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/v1/letters/export?autoPrint=true",
                complete_letter(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>OFFER LETTER - Alex Johnson</title>"));
        assert!(html.contains("window.print();"));
    }

    #[tokio::test]
    async fn test_export_rejects_missing_required_field() {
        let mut letter = complete_letter();
        letter["form"]["startDate"] = json!("");
        let response = app()
            .oneshot(json_request("POST", "/api/v1/letters/export", letter))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "MISSING_FIELD");
        assert_eq!(body["error"]["field"], "startDate");
        assert_eq!(body["error"]["message"], "Please fill in the start date field.");
    }

    #[tokio::test]
    async fn test_presets_list_and_load() {
        let app = app();
        let response = app
            .clone()
            .oneshot(Request::get("/api/v1/presets").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let list = body_json(response).await;
        assert!(list
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p["key"] == "designer" && p["letterType"] == "Creative Offer"));

        let response = app
            .clone()
            .oneshot(Request::get("/api/v1/presets/designer").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let preset = body_json(response).await;
        assert_eq!(preset["form"]["candidateName"], "Emma Rodriguez");
        assert_eq!(preset["style"]["layout"], "creative");

        let response = app
            .oneshot(Request::get("/api/v1/presets/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn multipart_request(content_type: &str, data: &[u8]) -> Request<Body> {
        let boundary = "letterhead-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"logo\"; filename=\"logo.bin\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/logos")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_logo_upload_returns_data_url() {
        let response = app()
            .oneshot(multipart_request("image/png", b"\x89PNG"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["dataUrl"], "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn test_logo_upload_rejects_non_images() {
        let response = app()
            .oneshot(multipart_request("text/plain", b"hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Please select a valid image file");
    }

    #[tokio::test]
    async fn test_logo_upload_rejects_oversized_files() {
        let config = Config {
            max_logo_bytes: 1024,
            ..Config::default()
        };
        let response = build_router(AppState::new(config))
            .oneshot(multipart_request("image/png", &[0u8; 2048]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "LOGO_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_preview_session_lifecycle() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/preview/sessions", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let session_id = body_json(response).await["sessionId"]
            .as_str()
            .unwrap()
            .to_string();
        let uri = format!("/api/v1/preview/sessions/{session_id}");

        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, complete_letter()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let response = app
            .clone()
            .oneshot(
                Request::get(format!("{uri}?after=0&waitMs=5000"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let snapshot = body_json(response).await;
        assert_eq!(snapshot["revision"], 1);
        assert_eq!(snapshot["placeholder"], false);
        assert!(snapshot["html"].as_str().unwrap().contains("TechCorp Solutions"));

        let response = app
            .clone()
            .oneshot(Request::delete(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(Request::get(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

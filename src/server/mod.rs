// Server module - Serves a rendered page and collects component updates
//
// Routes:
//   GET  /        rendered page (placeholder when none is configured)
//   POST /update  {componentId, data} from the client runtime's sendUpdate
//
// The page is shared read-only; the only mutable state is the map of last
// update payloads, guarded by a mutex held just long enough to insert.

mod error;
mod handlers;
mod state;

pub use error::ApiError;
pub use handlers::{UpdateRequest, UpdateResponse};
pub use state::{ServerState, SharedComponentStates};

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

/// Build the router for a server state
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/update", post(handlers::update))
        .with_state(state)
}

/// Start the page server and run until `shutdown_rx` fires
pub async fn start_server(
    bind_addr: SocketAddr,
    state: ServerState,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<()> {
    let app = router(state);

    tracing::info!("Starting page server on {}", bind_addr);

    let listener = TcpListener::bind(bind_addr)
        .await
        .context("Failed to bind to address")?;

    tracing::info!("Page server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("Page server shut down gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Button;
    use crate::render::Page;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn post_update(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/update")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_serves_rendered_page() {
        let page = Page::new("Served").with_component(Button::new("Click"));
        let app = router(ServerState::new(Some(page)));

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let html = body_string(response).await;
        assert!(html.contains("<title>Served</title>"));
        assert!(html.contains(">Click</button>"));
    }

    #[tokio::test]
    async fn test_home_without_page_serves_placeholder() {
        let app = router(ServerState::new(None));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("No page is configured"));
    }

    #[tokio::test]
    async fn test_update_records_state() {
        let state = ServerState::new(Some(Page::default()));
        let app = router(state.clone());

        let response = app
            .oneshot(post_update(
                r#"{"componentId": "input_1_0", "data": {"value": "hi"}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({"success": true, "message": "component updated"}));
        assert_eq!(state.component_state("input_1_0"), Some(json!({"value": "hi"})));
    }

    #[tokio::test]
    async fn test_update_without_data_stores_empty_object() {
        let state = ServerState::new(None);
        let response = router(state.clone())
            .oneshot(post_update(r#"{"componentId": "b"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.component_state("b"), Some(json!({})));
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_body() {
        for body in ["not json", r#"{"componentId": 5}"#, r#"{"data": {}}"#] {
            let response = router(ServerState::new(None))
                .oneshot(post_update(body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let response = router(ServerState::new(None))
            .oneshot(Request::get("/update").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

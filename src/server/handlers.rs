//! Request handlers for the page server

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::ServerState;

/// Served at `/` when the server runs without a page
pub(super) const PLACEHOLDER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>tailpage</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 min-h-screen">
    <div class="container mx-auto px-4 py-8">
        <h1 class="text-3xl font-bold text-gray-900 mb-8">tailpage</h1>
        <div class="bg-white shadow rounded-lg p-6">
            <p class="text-gray-600">No page is configured for this server.</p>
        </div>
    </div>
</body>
</html>
"#;

/// Request body for POST /update
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(rename = "componentId")]
    pub component_id: String,
    #[serde(default)]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Response body for POST /update
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
    /// Component descriptors for the client to re-apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<serde_json::Value>>,
}

/// GET / - the rendered page
pub async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    match state.page() {
        Some(page) => Html(page.render()),
        None => {
            tracing::debug!("No page configured, serving placeholder");
            Html(PLACEHOLDER_PAGE.to_string())
        }
    }
}

/// POST /update - record a component's client-side state
pub async fn update(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<UpdateResponse>, ApiError> {
    let request: UpdateRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid update body: {}", e)))?;

    let data = serde_json::Value::Object(request.data.unwrap_or_default());
    tracing::info!(
        component_id = %request.component_id,
        data = %data,
        "Component update"
    );

    state
        .record_update(&request.component_id, data)
        .map_err(ApiError::Internal)?;

    Ok(Json(UpdateResponse {
        success: true,
        message: "component updated".to_string(),
        components: None,
    }))
}

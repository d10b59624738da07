use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use hearth_core::ai::generate_nostalgia_story;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required_text;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NostalgiaStoryRequest {
    #[serde(default)]
    pub dish_name: Option<String>,
    /// A memory the story should be built around.
    #[serde(default)]
    pub memory: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NostalgiaStoryResponse {
    pub story: String,
    pub success: bool,
}

#[utoipa::path(
    post,
    path = "/api/ai/nostalgia-story",
    tag = "ai",
    request_body = NostalgiaStoryRequest,
    responses(
        (status = 200, description = "A short nostalgic story", body = NostalgiaStoryResponse),
        (status = 400, description = "Missing dish name", body = ErrorResponse),
        (status = 500, description = "AI request failed", body = ErrorResponse)
    )
)]
pub async fn nostalgia_story(
    State(state): State<AppState>,
    payload: Result<Json<NostalgiaStoryRequest>, JsonRejection>,
) -> Result<Json<NostalgiaStoryResponse>, ApiError> {
    let Json(request) = payload?;
    let dish_name = required_text(request.dish_name, "dishName")?;
    let memory = request
        .memory
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let result = generate_nostalgia_story(state.ai.as_ref(), &dish_name, memory).await?;

    Ok(Json(NostalgiaStoryResponse {
        story: result.story,
        success: true,
    }))
}

#[cfg(test)]
mod tests {
    use crate::state::test_support::{json_request, send, Fakes};
    use axum::http::StatusCode;
    use hearth_core::ai::FakeAiClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_story() {
        let (status, body) = send(
            Fakes::default().app(),
            json_request("POST", "/api/ai/nostalgia-story", json!({"dishName": "Japchae"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["story"].as_str().unwrap().starts_with("The kitchen was small"));
    }

    #[tokio::test]
    async fn test_blank_story_is_500() {
        let fakes = Fakes::default().with_ai(FakeAiClient::new().with_default_response("   "));
        let (status, body) = send(
            fakes.app(),
            json_request("POST", "/api/ai/nostalgia-story", json!({"dishName": "Japchae"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_dish_name_is_400() {
        let (status, _) = send(
            Fakes::default().app(),
            json_request("POST", "/api/ai/nostalgia-story", json!({"memory": "summer"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

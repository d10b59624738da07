use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use hearth_core::ai::generate_emotion_tags;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required_text;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmotionTagsRequest {
    #[serde(default)]
    pub dish_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmotionTagsResponse {
    pub tags: Vec<String>,
    pub dish_name: String,
}

#[utoipa::path(
    post,
    path = "/api/ai/emotion-tags",
    tag = "ai",
    request_body = EmotionTagsRequest,
    responses(
        (status = 200, description = "Suggested emotion tags", body = EmotionTagsResponse),
        (status = 400, description = "Missing dish name", body = ErrorResponse),
        (status = 500, description = "AI request failed", body = ErrorResponse)
    )
)]
pub async fn emotion_tags(
    State(state): State<AppState>,
    payload: Result<Json<EmotionTagsRequest>, JsonRejection>,
) -> Result<Json<EmotionTagsResponse>, ApiError> {
    let Json(request) = payload?;
    let dish_name = required_text(request.dish_name, "dishName")?;
    let note = request.note.as_deref().map(str::trim).filter(|n| !n.is_empty());

    let result = generate_emotion_tags(state.ai.as_ref(), &dish_name, note).await?;

    Ok(Json(EmotionTagsResponse {
        tags: result.tags,
        dish_name,
    }))
}

#[cfg(test)]
mod tests {
    use crate::state::test_support::{json_request, send, Fakes};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_tags_for_dish() {
        let fakes = Fakes::default();
        let (status, body) = send(
            fakes.app(),
            json_request(
                "POST",
                "/api/ai/emotion-tags",
                json!({"dishName": " Grandma's dumplings ", "note": "Lunar new year"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dishName"], "Grandma's dumplings");
        assert_eq!(
            body["tags"],
            json!(["nostalgic", "comforting", "warm", "family"])
        );
    }

    #[tokio::test]
    async fn test_missing_dish_name_is_400() {
        let fakes = Fakes::default();
        let (status, body) = send(
            fakes.app(),
            json_request("POST", "/api/ai/emotion-tags", json!({"note": "something"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "dishName is required");
        assert_eq!(fakes.ai.calls(), 0);
    }
}

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::errors::ServiceError;
use service::messages::{CreateMessageInput, Message};
use tracing::debug;

use crate::errors::ApiError;
use crate::openapi::MessageDoc;
use crate::observability::{LOOKUPS_TOTAL, LOOKUP_MISSES_TOTAL, MESSAGES_CREATED_TOTAL};
use crate::state::AppState;
use crate::validation::ValidatedJson;

#[utoipa::path(get, path = "/messages", tag = "messages", responses((status = 200, description = "All messages keyed by id", body = HashMap<String, MessageDoc>)))]
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<HashMap<String, Message>>, ApiError> {
    let messages = state.messages.find_all().await?;
    Ok(Json(messages))
}

#[utoipa::path(post, path = "/messages", tag = "messages", request_body = crate::openapi::CreateMessageDoc, responses((status = 201, description = "Created", body = crate::openapi::MessageDoc), (status = 400, description = "content must be a string")))]
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateMessageInput>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    debug!(?body, "create message");
    let message = state.messages.create(&body.content).await?;
    MESSAGES_CREATED_TOTAL.inc();
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(get, path = "/messages/{id}", tag = "messages", params(("id" = String, Path, description = "Message id")), responses((status = 200, description = "OK", body = crate::openapi::MessageDoc), (status = 404, description = "Message not found")))]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    debug!(%id, "get message");
    LOOKUPS_TOTAL.inc();
    match state.messages.find_one(&id).await? {
        Some(message) => Ok(Json(message)),
        None => {
            LOOKUP_MISSES_TOTAL.inc();
            Err(ServiceError::not_found("Message").into())
        }
    }
}

use std::sync::Arc;

use axum::{Json, extract};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::AppError,
    models::{
        ChatRequest, ChatResponse, ContactRequest, Feedback, FeedbackRecord, RecommendRequest,
        StatusResponse, TestRequest, TestResponse,
    },
    state::State,
    utils::{Payload, with_store},
};

pub const HOME_MESSAGE: &str = "Skill Barter Backend Running";
pub const FEEDBACK_SUBMITTED: &str = "Feedback submitted successfully!";

pub async fn home_handler() -> &'static str {
    HOME_MESSAGE
}

pub async fn test_handler(Payload(payload): Payload<TestRequest>) -> Json<TestResponse> {
    info!("Received data: {payload:?}");

    Json(TestResponse {
        message: payload.greeting(),
    })
}

pub async fn recommend_handler(
    extract::State(state): extract::State<Arc<State>>,
    Payload(payload): Payload<RecommendRequest>,
) -> Result<Json<Value>, AppError> {
    debug!("Recommending for {} skills", payload.skills.len());

    let result = state
        .recommender
        .recommend(&payload.skills)
        .map_err(AppError::RecommendFailed)?;

    Ok(Json(result))
}

pub async fn chat_handler(
    extract::State(state): extract::State<Arc<State>>,
    Payload(payload): Payload<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = state
        .chatbot
        .reply(&payload.message)
        .map_err(AppError::ChatFailed)?;

    Ok(Json(ChatResponse { reply }))
}

pub async fn contact_handler(
    extract::State(state): extract::State<Arc<State>>,
    Payload(payload): Payload<ContactRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let feedback = Feedback::try_from(payload)?;

    let id = with_store(&state, move |store| store.append(&feedback))
        .await?
        .map_err(AppError::submit)?;
    info!("Feedback {id} submitted");

    Ok(Json(StatusResponse::success(FEEDBACK_SUBMITTED)))
}

pub async fn feedback_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> Result<Json<Vec<FeedbackRecord>>, AppError> {
    let records = with_store(&state, |store| store.list_all())
        .await?
        .map_err(AppError::FetchFailed)?;

    Ok(Json(records))
}

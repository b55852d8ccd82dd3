use std::sync::Arc;

use axum::extract::FromRequest;
use tokio::task::spawn_blocking;

use crate::{database::FeedbackStore, error::AppError, state::State};

/// JSON body whose rejections are reported as [`AppError::MalformedPayload`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);

/// Runs a blocking store call off the async workers.
///
/// The outer error is the join failure, the inner result is the store's own.
pub async fn with_store<F, T>(state: &Arc<State>, task: F) -> Result<T, AppError>
where
    F: FnOnce(&FeedbackStore) -> T + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();

    Ok(spawn_blocking(move || task(&store)).await?)
}

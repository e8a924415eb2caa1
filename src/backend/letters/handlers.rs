//! Letter HTTP Handlers
//!
//! Letters are private: every endpoint only ever reads the caller's own
//! letters.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath, ApiQuery};
use crate::backend::letters::db::LetterStore;
use crate::backend::middleware::AuthUser;
use crate::shared::error::SharedError;
use crate::shared::letters::{
    Letter, ListLettersResponse, PageParams, PostLetterRequest, PostLetterResponse,
    DEFAULT_LETTER_PAGE_SIZE,
};

/// Write a letter
///
/// # Errors
///
/// * `400 Bad Request` - The content is blank
pub async fn post_letter(
    State(letters): State<Arc<dyn LetterStore>>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<PostLetterRequest>,
) -> Result<(StatusCode, Json<PostLetterResponse>), BackendError> {
    if request.content.trim().is_empty() {
        return Err(SharedError::validation("content", "Letter content must not be blank").into());
    }

    let letter = Letter::new(caller.user_id, request.content);
    letters.create_letter(&letter).await?;

    tracing::info!("Letter {} written by {}", letter.id, caller.user_id);

    Ok((StatusCode::CREATED, Json(PostLetterResponse { letter_id: letter.id })))
}

/// One page of the caller's letters, newest first
pub async fn list_letters(
    State(letters): State<Arc<dyn LetterStore>>,
    AuthUser(caller): AuthUser,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<ListLettersResponse>, BackendError> {
    let (page, size) = params.resolve(DEFAULT_LETTER_PAGE_SIZE);
    let (limit, offset) = params.limit_offset(DEFAULT_LETTER_PAGE_SIZE);

    // One extra row tells whether another page follows.
    let mut found = letters.list_for_user(caller.user_id, limit + 1, offset).await?;
    let has_more = found.len() as i64 > limit;
    found.truncate(limit as usize);

    Ok(Json(ListLettersResponse {
        letters: found,
        page,
        size,
        has_more,
    }))
}

/// Letter detail
///
/// # Errors
///
/// * `404 LETTER_NOT_FOUND` - No such letter
/// * `403 Forbidden` - The letter belongs to someone else
pub async fn get_letter(
    State(letters): State<Arc<dyn LetterStore>>,
    AuthUser(caller): AuthUser,
    ApiPath(letter_id): ApiPath<Uuid>,
) -> Result<Json<Letter>, BackendError> {
    let letter = letters
        .find_letter(letter_id)
        .await?
        .ok_or_else(|| BackendError::not_found("LETTER_NOT_FOUND", "Letter not found"))?;

    if letter.user_id != caller.user_id {
        tracing::warn!("User {} tried to read letter {}", caller.user_id, letter_id);
        return Err(BackendError::forbidden("Letter belongs to another user"));
    }

    Ok(Json(letter))
}

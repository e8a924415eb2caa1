//! Comment HTTP Handlers
//!
//! Every route is nested under `/api/articles/{article_id}/comments`. A
//! comment addressed through the wrong article is reported as missing.

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::comments::{Comment, CommentRequest, ListCommentsResponse};
use crate::shared::error::SharedError;

fn validate(request: &CommentRequest) -> Result<(), SharedError> {
    if request.content.trim().is_empty() {
        return Err(SharedError::validation("content", "Comment must not be blank"));
    }
    Ok(())
}

async fn ensure_article(state: &AppState, article_id: Uuid) -> Result<(), BackendError> {
    match state.articles.find_article(article_id).await? {
        Some(_) => Ok(()),
        None => Err(BackendError::not_found("ARTICLE_NOT_FOUND", "Article not found")),
    }
}

/// Load a comment of `article_id` that the caller wrote
async fn find_own_comment(
    state: &AppState,
    caller: Uuid,
    article_id: Uuid,
    comment_id: Uuid,
) -> Result<Comment, BackendError> {
    let comment = state
        .comments
        .find_comment(comment_id)
        .await?
        .filter(|comment| comment.article_id == article_id)
        .ok_or_else(|| BackendError::not_found("COMMENT_NOT_FOUND", "Comment not found"))?;

    if comment.user_id != caller {
        tracing::warn!("User {} tried to modify comment {}", caller, comment_id);
        return Err(BackendError::forbidden("Comment belongs to another user"));
    }
    Ok(comment)
}

/// Comments on an article, newest first
///
/// # Errors
///
/// * `404 ARTICLE_NOT_FOUND` - No such article
pub async fn list_comments(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    ApiPath(article_id): ApiPath<Uuid>,
) -> Result<Json<ListCommentsResponse>, BackendError> {
    ensure_article(&state, article_id).await?;
    let comments = state.comments.list_for_article(article_id).await?;
    Ok(Json(ListCommentsResponse { comments }))
}

/// Comment on an article
///
/// # Errors
///
/// * `400 Bad Request` - Blank comment
/// * `404 ARTICLE_NOT_FOUND` - No such article
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(article_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<CommentRequest>,
) -> Result<(StatusCode, Json<Comment>), BackendError> {
    validate(&request)?;
    ensure_article(&state, article_id).await?;

    let comment = Comment::new(article_id, caller.user_id, request.content);
    state.comments.create_comment(&comment).await?;

    tracing::info!("Comment {} on article {} by {}", comment.id, article_id, caller.user_id);

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Edit a comment
///
/// # Errors
///
/// * `400 Bad Request` - Blank comment
/// * `404 COMMENT_NOT_FOUND` - No such comment on this article
/// * `403 Forbidden` - The caller did not write the comment
pub async fn update_comment(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath((article_id, comment_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<CommentRequest>,
) -> Result<Json<Comment>, BackendError> {
    find_own_comment(&state, caller.user_id, article_id, comment_id).await?;
    validate(&request)?;

    let comment = state
        .comments
        .update_comment(comment_id, &request.content)
        .await?
        .ok_or_else(|| BackendError::not_found("COMMENT_NOT_FOUND", "Comment not found"))?;

    Ok(Json(comment))
}

/// Delete a comment
///
/// # Errors
///
/// * `404 COMMENT_NOT_FOUND` - No such comment on this article
/// * `403 Forbidden` - The caller did not write the comment
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath((article_id, comment_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, BackendError> {
    find_own_comment(&state, caller.user_id, article_id, comment_id).await?;

    if !state.comments.delete_comment(comment_id).await? {
        return Err(BackendError::not_found("COMMENT_NOT_FOUND", "Comment not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

//! Article HTTP Handlers
//!
//! Any signed-in user may read an article or list someone's articles. Only
//! the author may edit or delete one.

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath, ApiQuery};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::articles::{
    Article, ArticleRequest, CreateArticleResponse, ListArticlesResponse,
    DEFAULT_ARTICLE_PAGE_SIZE, MAX_ARTICLE_TITLE_LEN,
};
use crate::shared::error::SharedError;
use crate::shared::letters::PageParams;

/// Trimmed title and content, or the first validation failure
fn validate(request: &ArticleRequest) -> Result<(String, String), SharedError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(SharedError::validation("title", "Title must not be blank"));
    }
    if title.chars().count() > MAX_ARTICLE_TITLE_LEN {
        return Err(SharedError::validation(
            "title",
            format!("Title must be at most {} characters", MAX_ARTICLE_TITLE_LEN),
        ));
    }
    if request.content.trim().is_empty() {
        return Err(SharedError::validation("content", "Content must not be blank"));
    }
    Ok((title.to_string(), request.content.clone()))
}

async fn find_article(state: &AppState, article_id: Uuid) -> Result<Article, BackendError> {
    state
        .articles
        .find_article(article_id)
        .await?
        .ok_or_else(|| BackendError::not_found("ARTICLE_NOT_FOUND", "Article not found"))
}

/// Load an article the caller is allowed to change
async fn find_owned_article(
    state: &AppState,
    caller: Uuid,
    article_id: Uuid,
) -> Result<Article, BackendError> {
    let article = find_article(state, article_id).await?;
    if article.user_id != caller {
        tracing::warn!("User {} tried to modify article {}", caller, article_id);
        return Err(BackendError::forbidden("Article belongs to another user"));
    }
    Ok(article)
}

/// Share a memory
///
/// # Errors
///
/// * `400 Bad Request` - Blank or overlong title, blank content
pub async fn create_article(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiJson(request): ApiJson<ArticleRequest>,
) -> Result<(StatusCode, Json<CreateArticleResponse>), BackendError> {
    let (title, content) = validate(&request)?;

    let article = Article::new(caller.user_id, title, content);
    state.articles.create_article(&article).await?;

    tracing::info!("Article {} created by {}", article.id, caller.user_id);

    Ok((
        StatusCode::CREATED,
        Json(CreateArticleResponse { article_id: article.id }),
    ))
}

/// Article detail
///
/// # Errors
///
/// * `404 ARTICLE_NOT_FOUND` - No such article
pub async fn get_article(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    ApiPath(article_id): ApiPath<Uuid>,
) -> Result<Json<Article>, BackendError> {
    Ok(Json(find_article(&state, article_id).await?))
}

/// Edit an article
///
/// # Errors
///
/// * `400 Bad Request` - Blank or overlong title, blank content
/// * `404 ARTICLE_NOT_FOUND` - No such article
/// * `403 Forbidden` - The caller is not the author
pub async fn update_article(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(article_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<ArticleRequest>,
) -> Result<Json<Article>, BackendError> {
    find_owned_article(&state, caller.user_id, article_id).await?;
    let (title, content) = validate(&request)?;

    let article = state
        .articles
        .update_article(article_id, &title, &content)
        .await?
        .ok_or_else(|| BackendError::not_found("ARTICLE_NOT_FOUND", "Article not found"))?;

    Ok(Json(article))
}

/// Delete an article together with its comments
///
/// # Errors
///
/// * `404 ARTICLE_NOT_FOUND` - No such article
/// * `403 Forbidden` - The caller is not the author
pub async fn delete_article(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(article_id): ApiPath<Uuid>,
) -> Result<StatusCode, BackendError> {
    find_owned_article(&state, caller.user_id, article_id).await?;

    let removed_comments = state.comments.delete_for_article(article_id).await?;
    if !state.articles.delete_article(article_id).await? {
        return Err(BackendError::not_found("ARTICLE_NOT_FOUND", "Article not found"));
    }

    tracing::info!(
        "Article {} deleted by {} with {} comments",
        article_id,
        caller.user_id,
        removed_comments
    );

    Ok(StatusCode::NO_CONTENT)
}

/// One page of a user's articles, newest first
///
/// # Errors
///
/// * `404 USER_NOT_FOUND` - No such user
pub async fn list_user_articles(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<ListArticlesResponse>, BackendError> {
    if !state.users.identity_exists(user_id).await? {
        return Err(BackendError::not_found("USER_NOT_FOUND", "User not found"));
    }

    let (page, size) = params.resolve(DEFAULT_ARTICLE_PAGE_SIZE);
    let (limit, offset) = params.limit_offset(DEFAULT_ARTICLE_PAGE_SIZE);

    let mut found = state.articles.list_for_user(user_id, limit + 1, offset).await?;
    let has_more = found.len() as i64 > limit;
    found.truncate(limit as usize);

    Ok(Json(ListArticlesResponse {
        articles: found,
        page,
        size,
        has_more,
    }))
}

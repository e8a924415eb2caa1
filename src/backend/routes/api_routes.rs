/**
 * API Route Handlers
 *
 * This module defines the API routes:
 * - Authentication endpoints (signup, login, get current user)
 * - Profile endpoints (edit, search by pet name)
 * - Friend endpoints (add, list, check, remove)
 * - Letter endpoints (write, list, detail)
 * - Article endpoints (create, detail, edit, delete, list by author)
 * - Comment endpoints nested under an article
 * - Community endpoints (create, detail, edit, delete, join)
 *
 * # Authentication
 *
 * Only `/api/auth/signup` and `/api/auth/login` are public. Every other API
 * route sits behind `auth_middleware`.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::articles::{
    create_article, delete_article, get_article, list_user_articles, update_article,
};
use crate::backend::auth::{get_me, login, search_users, signup, update_profile};
use crate::backend::comments::{create_comment, delete_comment, list_comments, update_comment};
use crate::backend::communities::{
    create_community, delete_community, get_community, join_community, update_community,
};
use crate::backend::letters::{get_letter, list_letters, post_letter};
use crate::backend::middleware::auth_middleware;
use crate::backend::relationships::{add_friend, friendship_status, list_friends, remove_friend};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// ## Public Routes
/// - `POST /api/auth/signup` - User registration
/// - `POST /api/auth/login` - User login
///
/// ## Protected Routes
/// - `GET /api/auth/me` - Current user
/// - `PUT /api/users/me` - Edit pet name
/// - `GET /api/users/search` - Search by pet name
/// - `POST /api/friends`, `GET /api/friends` - Add and list friends
/// - `GET /api/friends/{friend_id}`, `DELETE /api/friends/{friend_id}` - Check and remove
/// - `POST /api/letters`, `GET /api/letters` - Write and list letters
/// - `GET /api/letters/{letter_id}` - Letter detail
/// - `POST /api/articles` - Share an article
/// - `GET|PUT|DELETE /api/articles/{article_id}` - Detail, edit, delete
/// - `GET /api/users/{user_id}/articles` - A user's articles
/// - `GET|POST /api/articles/{article_id}/comments` - List and write comments
/// - `PUT|DELETE /api/articles/{article_id}/comments/{comment_id}` - Edit and delete
/// - `POST /api/communities` - Create a community
/// - `GET|PUT|DELETE /api/communities/{community_id}` - Detail, edit, delete
/// - `POST /api/communities/{community_id}/join` - Join
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/users/me", put(update_profile))
        .route("/api/users/search", get(search_users))
        .route("/api/friends", post(add_friend).get(list_friends))
        .route(
            "/api/friends/{friend_id}",
            get(friendship_status).delete(remove_friend),
        )
        .route("/api/letters", post(post_letter).get(list_letters))
        .route("/api/letters/{letter_id}", get(get_letter))
        .route("/api/articles", post(create_article))
        .route(
            "/api/articles/{article_id}",
            get(get_article).put(update_article).delete(delete_article),
        )
        .route("/api/users/{user_id}/articles", get(list_user_articles))
        .route(
            "/api/articles/{article_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/api/articles/{article_id}/comments/{comment_id}",
            put(update_comment).delete(delete_comment),
        )
        .route("/api/communities", post(create_community))
        .route(
            "/api/communities/{community_id}",
            get(get_community).put(update_community).delete(delete_community),
        )
        .route("/api/communities/{community_id}/join", post(join_community))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .merge(protected)
}

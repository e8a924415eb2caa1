/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is assembled once in `init` and handed to the router. It
 * owns every collaborator a handler may need:
 * - the user directory
 * - the relationship ledger
 * - the letter, article, comment and community stores
 * - token and hashing settings
 *
 * Each store sits behind an `Arc<dyn Trait>`, so the same handlers run on
 * Postgres in production and on in-memory stores in tests.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::articles::db::{ArticleStore, MemoryArticleStore, PgArticleStore};
use crate::backend::auth::users::{MemoryUserDirectory, PgUserDirectory, UserDirectory};
use crate::backend::comments::db::{CommentStore, MemoryCommentStore, PgCommentStore};
use crate::backend::communities::db::{CommunityStore, MemoryCommunityStore, PgCommunityStore};
use crate::backend::letters::db::{LetterStore, MemoryLetterStore, PgLetterStore};
use crate::backend::relationships::db::PgEdgeStore;
use crate::backend::server::config::AuthConfig;
use crate::ledger::{MemoryEdgeStore, RelationshipLedger};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// User accounts
    pub users: Arc<dyn UserDirectory>,

    /// Friendship graph
    pub ledger: RelationshipLedger,

    /// Private letters
    pub letters: Arc<dyn LetterStore>,

    /// Shared memories
    pub articles: Arc<dyn ArticleStore>,

    /// Comments on articles
    pub comments: Arc<dyn CommentStore>,

    /// Communities and their members
    pub communities: Arc<dyn CommunityStore>,

    /// Token and password hashing settings
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn with_postgres(pool: PgPool, auth: AuthConfig) -> Self {
        Self {
            users: Arc::new(PgUserDirectory::new(pool.clone())),
            ledger: RelationshipLedger::new(Arc::new(PgEdgeStore::new(pool.clone()))),
            letters: Arc::new(PgLetterStore::new(pool.clone())),
            articles: Arc::new(PgArticleStore::new(pool.clone())),
            comments: Arc::new(PgCommentStore::new(pool.clone())),
            communities: Arc::new(PgCommunityStore::new(pool)),
            auth: Arc::new(auth),
        }
    }

    /// State backed by in-memory stores
    pub fn in_memory(auth: AuthConfig) -> Self {
        Self {
            users: Arc::new(MemoryUserDirectory::new()),
            ledger: RelationshipLedger::new(Arc::new(MemoryEdgeStore::new())),
            letters: Arc::new(MemoryLetterStore::new()),
            articles: Arc::new(MemoryArticleStore::new()),
            comments: Arc::new(MemoryCommentStore::new()),
            communities: Arc::new(MemoryCommunityStore::new()),
            auth: Arc::new(auth),
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserDirectory> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for RelationshipLedger {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.ledger.clone()
    }
}

impl FromRef<AppState> for Arc<dyn LetterStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.letters.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ArticleStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.articles.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CommentStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.comments.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CommunityStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.communities.clone()
    }
}

impl FromRef<AppState> for Arc<AuthConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

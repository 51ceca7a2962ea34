// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use chrono_tz::Tz;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, auth::AuthService},
        ports::{
            security::PasswordHasher, sessions::SessionStore, time::Clock, util::SlugGenerator,
        },
        queries::articles::{ArticleQueryService, FeedMeta},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        tag::{TagRepository, TagResolver},
    },
};

/// Everything the HTTP layer needs, wired once at boot.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub auth: Arc<AuthService>,
}

pub struct AuthConfig {
    pub admin_email: String,
    pub admin_password_hash: String,
    pub session_ttl: Duration,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        time_zone: Tz,
        feed_meta: FeedMeta,
        auth_config: AuthConfig,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));
        let tag_resolver = Arc::new(TagResolver::new(Arc::clone(&tag_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&tag_repo),
            slug_service,
            tag_resolver,
            Arc::clone(&clock),
            time_zone,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
            feed_meta,
        ));

        let auth = Arc::new(AuthService::new(
            auth_config.admin_email,
            auth_config.admin_password_hash,
            password_hasher,
            session_store,
            clock,
            auth_config.session_ttl,
        ));

        Self {
            article_commands,
            article_queries,
            auth,
        }
    }
}

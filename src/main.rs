use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tinta_core::application::{
    ports::{security::PasswordHasher, sessions::SessionStore, time::Clock, util::SlugGenerator},
    queries::articles::FeedMeta,
    services::{ApplicationServices, AuthConfig},
};
use tinta_core::config::AppConfig;
use tinta_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    tag::TagRepository,
};
use tinta_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresTagRepository,
    },
    security::{password::Argon2PasswordHasher, session_store::InMemorySessionStore},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use tinta_core::presentation::http::{HttpState, build_router};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let feed_meta = FeedMeta {
        site_title: config.site_title().to_string(),
        site_url: config.site_url().to_string(),
        site_description: config.site_description().to_string(),
        author: config.site_author().to_string(),
    };
    let auth_config = AuthConfig {
        admin_email: config.admin_email().to_string(),
        admin_password_hash: config.admin_password_hash().to_string(),
        session_ttl: config.session_ttl(),
    };

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        tag_repo,
        password_hasher,
        session_store,
        clock,
        slugger,
        config.time_zone(),
        feed_meta,
        auth_config,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

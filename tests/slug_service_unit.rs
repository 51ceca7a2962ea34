// tests/slug_service_unit.rs
mod support;

use std::sync::Arc;

use support::{ArticleBuilder, InMemoryArticles, InMemoryTags};
use tinta_core::application::ports::util::SlugGenerator;
use tinta_core::domain::article::services::ArticleSlugService;
use tinta_core::domain::article::{ArticleId, ArticleReadRepository, ArticleTitle};
use tinta_core::domain::errors::DomainError;
use tinta_core::infrastructure::util::DefaultSlugGenerator;

fn service_over(articles: &Arc<InMemoryArticles>) -> ArticleSlugService {
    let read: Arc<dyn ArticleReadRepository> = articles.clone();
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());
    ArticleSlugService::new(read, slugger)
}

fn store() -> Arc<InMemoryArticles> {
    Arc::new(InMemoryArticles::new(Arc::new(InMemoryTags::new())))
}

#[tokio::test]
async fn free_base_is_used_as_is() {
    let articles = store();
    let service = service_over(&articles);

    let slug = service
        .generate_unique_slug(&ArticleTitle::new("Hello World").unwrap(), None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "hello-world");
}

#[tokio::test]
async fn taken_base_gets_the_lowest_free_suffix() {
    let articles = store();
    articles.seed(ArticleBuilder::new(1).slug("hello-world").build());
    articles.seed(ArticleBuilder::new(2).slug("hello-world-1").build());
    let service = service_over(&articles);

    let slug = service
        .generate_unique_slug(&ArticleTitle::new("Hello World").unwrap(), None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "hello-world-2");
}

#[tokio::test]
async fn suffix_gap_is_skipped_when_base_is_taken() {
    let articles = store();
    articles.seed(ArticleBuilder::new(1).slug("hello-world").build());
    articles.seed(ArticleBuilder::new(2).slug("hello-world-2").build());
    let service = service_over(&articles);

    let slug = service
        .generate_unique_slug(&ArticleTitle::new("Hello World").unwrap(), None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "hello-world-1");
}

#[tokio::test]
async fn own_slug_does_not_count_as_a_collision() {
    let articles = store();
    articles.seed(
        ArticleBuilder::new(7)
            .title("Hello World")
            .slug("hello-world")
            .build(),
    );
    let service = service_over(&articles);

    let slug = service
        .generate_unique_slug(
            &ArticleTitle::new("Hello World").unwrap(),
            Some(ArticleId::new(7).unwrap()),
        )
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "hello-world");
}

#[tokio::test]
async fn accented_titles_collide_with_their_ascii_form() {
    let articles = store();
    articles.seed(ArticleBuilder::new(1).slug("cafe-culture").build());
    let service = service_over(&articles);

    let slug = service
        .generate_unique_slug(&ArticleTitle::new("Café Culture").unwrap(), None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "cafe-culture-1");
}

#[tokio::test]
async fn symbol_only_title_is_rejected() {
    let articles = store();
    let service = service_over(&articles);

    let err = service
        .generate_unique_slug(&ArticleTitle::new("!!!").unwrap(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
}

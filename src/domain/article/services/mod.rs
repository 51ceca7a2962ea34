// src/domain/article/services/mod.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service producing unique slugs for articles.
///
/// Resolution is a single bulk read of every slug sharing the
/// parameterized base, followed by an in-memory scan: the cost stays one
/// query no matter how many collisions exist.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Derive a unique slug from `title` for the article identified by
    /// `ignore_id` (absent for creations). A blank title yields a
    /// validation error; persist-time validation would reject the
    /// missing slug anyway.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return Err(DomainError::Validation(
                "slug can't be derived from title".into(),
            ));
        }

        let taken: HashSet<String> = self
            .read_repo
            .slugs_with_prefix(&base, ignore_id)
            .await?
            .into_iter()
            .collect();

        if !taken.contains(&base) {
            return ArticleSlug::new(base);
        }

        // Lowest free integer suffix, starting at 1. Gaps freed by
        // renames get reclaimed before a new high suffix is minted.
        let mut counter = 1u64;
        loop {
            let candidate = format!("{base}-{counter}");
            if !taken.contains(&candidate) {
                return ArticleSlug::new(candidate);
            }
            counter += 1;
        }
    }
}

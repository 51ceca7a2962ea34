// src/application/commands/articles/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{
    application::{
        error::{ApplicationResult, ValidationErrors},
        ports::time::Clock,
    },
    domain::{
        article::{
            ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        tag::{TagRepository, TagResolver},
    },
};

use super::input::{ArticleInput, parse_published_at};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) tag_resolver: Arc<TagResolver>,
    pub(super) clock: Arc<dyn Clock>,
    /// Zone for interpreting zone-less `published_at` form input.
    pub(super) time_zone: Tz,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<ArticleSlugService>,
        tag_resolver: Arc<TagResolver>,
        clock: Arc<dyn Clock>,
        time_zone: Tz,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_repo,
            slug_service,
            tag_resolver,
            clock,
            time_zone,
        }
    }

    /// Shared validation for the write path. Collects every field
    /// problem before rejecting so the form re-render shows them all.
    pub(super) async fn validate_input(
        &self,
        input: &ArticleInput,
        exclude: Option<ArticleId>,
        current_slug: Option<ArticleSlug>,
    ) -> ApplicationResult<ValidatedInput> {
        let mut errors = ValidationErrors::new();

        let title = match ArticleTitle::new(input.title.clone()) {
            Ok(title) => {
                if self.read_repo.title_taken(&title, exclude).await? {
                    errors.add("title", "has already been taken");
                }
                Some(title)
            }
            Err(_) => {
                errors.add("title", "can't be blank");
                None
            }
        };

        // An explicit slug is taken verbatim. A blank one keeps the
        // stored slug on update; only creation derives from the title,
        // so later title edits never rename the article's URL.
        let slug = match input.slug.as_deref().map(str::trim) {
            Some(explicit) if !explicit.is_empty() => {
                let slug = ArticleSlug::new(explicit)?;
                if self.slug_taken(&slug, exclude).await? {
                    errors.add("slug", "has already been taken");
                }
                Some(slug)
            }
            _ => match (current_slug, &title) {
                (Some(current), _) => Some(current),
                (None, Some(title)) => Some(
                    self.slug_service
                        .generate_unique_slug(title, exclude)
                        .await?,
                ),
                (None, None) => {
                    errors.add("slug", "can't be blank");
                    None
                }
            },
        };

        let published_at = match input.published_at.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => match parse_published_at(raw, self.time_zone) {
                Ok(at) => Some(at),
                Err(msg) => {
                    errors.add("published_at", msg);
                    None
                }
            },
            _ => None,
        };

        errors.into_result()?;

        // Both unwraps guarded by into_result above.
        Ok(ValidatedInput {
            title: title.expect("validated"),
            slug: slug.expect("validated"),
            published_at,
        })
    }

    async fn slug_taken(
        &self,
        slug: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> ApplicationResult<bool> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) => Ok(exclude != Some(existing.id)),
            None => Ok(false),
        }
    }
}

pub(super) struct ValidatedInput {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub published_at: Option<DateTime<Utc>>,
}

// src/domain/tag/services/mod.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::entity::{Tag, TagName};
use crate::domain::tag::repository::TagRepository;
use crate::domain::tag::tag_list::parse_tag_list;

/// Domain service turning a free-text tag list into persisted `Tag`
/// records, creating the missing ones idempotently.
pub struct TagResolver {
    repo: Arc<dyn TagRepository>,
}

impl TagResolver {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    /// Resolve a comma-separated list into tags, ordered by first
    /// occurrence in the input. Blank input resolves to an empty set and
    /// touches nothing.
    pub async fn resolve(&self, tag_list: &str) -> DomainResult<Vec<Tag>> {
        let mut tags = Vec::new();
        for name in parse_tag_list(tag_list) {
            tags.push(self.find_or_create(&name).await?);
        }
        Ok(tags)
    }

    /// Lookup, then create, then re-lookup on a unique-constraint loss.
    /// A concurrent resolver winning the insert race is recovered here
    /// and never surfaces to the caller.
    async fn find_or_create(&self, name: &TagName) -> DomainResult<Tag> {
        if let Some(tag) = self.repo.find_by_name(name).await? {
            return Ok(tag);
        }

        match self.repo.insert(name).await {
            Ok(tag) => Ok(tag),
            Err(DomainError::Conflict(_)) => {
                tracing::debug!(tag = %name, "lost tag create race, re-reading");
                self.repo.find_by_name(name).await?.ok_or_else(|| {
                    DomainError::Persistence(format!(
                        "tag '{name}' vanished after conflicting insert"
                    ))
                })
            }
            Err(other) => Err(other),
        }
    }
}

// src/domain/tag/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

/// Tag name, normalized on construction: surrounding whitespace trimmed
/// and lowercased. Uniqueness is enforced post-normalization, so inputs
/// differing only by case or padding resolve to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = value.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::Validation("tag name can't be blank".into()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_normalized_on_construction() {
        let name = TagName::new("  Ruby On Rails  ").unwrap();
        assert_eq!(name.as_str(), "ruby on rails");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(TagName::new("").is_err());
        assert!(TagName::new("   ").is_err());
    }

    #[test]
    fn case_variants_normalize_to_the_same_name() {
        assert_eq!(TagName::new("RUST").unwrap(), TagName::new(" rust").unwrap());
    }
}

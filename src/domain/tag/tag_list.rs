// src/domain/tag/tag_list.rs
//
// Pure pieces of the tag subsystem: comma-separated list parsing and the
// association set difference. Both are exercised heavily by the resolver
// and deliberately free of IO.

use crate::domain::tag::entity::{Tag, TagId, TagName};
use std::collections::HashSet;

/// Split a free-text comma-separated tag list into normalized names,
/// empty pieces dropped, deduplicated in first-occurrence order.
pub fn parse_tag_list(input: &str) -> Vec<TagName> {
    let mut seen = HashSet::new();
    input
        .split(',')
        .filter_map(|piece| TagName::new(piece).ok())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Render current associations back to the interface representation.
/// No ordering guarantee: callers get the names as stored.
pub fn render_tag_list(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wholesale-replacement diff: which tag ids to attach and which join
/// rows to drop so `current` becomes exactly `desired`. Applying the
/// result twice is a no-op, which is what makes resolution idempotent.
pub fn association_diff(desired: &[TagId], current: &[TagId]) -> (Vec<TagId>, Vec<TagId>) {
    let desired_set: HashSet<TagId> = desired.iter().copied().collect();
    let current_set: HashSet<TagId> = current.iter().copied().collect();

    let to_add = desired
        .iter()
        .copied()
        .filter(|id| !current_set.contains(id))
        .collect();
    let to_remove = current
        .iter()
        .copied()
        .filter(|id| !desired_set.contains(id))
        .collect();
    (to_add, to_remove)
}

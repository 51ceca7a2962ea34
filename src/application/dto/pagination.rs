use serde::{Deserialize, Serialize};

/// Offset-paginated result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total_count: u64) -> Self {
        let total_pages = if total_count == 0 {
            1
        } else {
            total_count.div_ceil(per_page as u64) as u32
        };
        Self {
            items,
            page,
            per_page,
            total_count,
            total_pages,
        }
    }
}

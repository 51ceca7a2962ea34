pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, EXCERPT_CHARS, NewArticle};
pub use listing::{
    ArticleCounts, ArticleListQuery, ArticleSort, PageRequest, StatusFilter,
    compare_for_sort, published_at_nulls_last,
};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};

mod dashboard;
mod feed;
mod get;
mod list;
mod service;

pub use dashboard::RECENT_ARTICLES;
pub use feed::{FEED_ITEMS, FeedMeta};
pub use get::{GetArticleByIdQuery, GetPublishedArticleQuery};
pub use list::{ADMIN_PER_PAGE, AdminListQuery, PUBLIC_PER_PAGE, PublicListQuery};
pub use service::ArticleQueryService;

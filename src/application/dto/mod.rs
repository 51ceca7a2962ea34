pub mod articles;
pub mod dashboard;
pub mod feed;
pub mod pagination;

pub use articles::ArticleDto;
pub use dashboard::DashboardDto;
pub use feed::{FeedDto, FeedItemDto};
pub use pagination::Page;

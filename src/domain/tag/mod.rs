pub mod entity;
pub mod repository;
pub mod services;
pub mod tag_list;

pub use entity::{Tag, TagId, TagName};
pub use repository::TagRepository;
pub use services::TagResolver;
pub use tag_list::{association_diff, parse_tag_list, render_tag_list};

// src/presentation/http/controllers/mod.rs
pub mod admin_articles;
pub mod articles;
pub mod dashboard;
pub mod feed;
pub mod sessions;

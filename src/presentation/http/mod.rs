// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::HttpState;

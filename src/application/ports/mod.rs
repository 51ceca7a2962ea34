// src/application/ports/mod.rs
pub mod security;
pub mod sessions;
pub mod time;
pub mod util;

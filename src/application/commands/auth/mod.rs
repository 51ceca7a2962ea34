// src/application/commands/auth/mod.rs
mod service;

pub use service::{AuthService, LoginCommand};

//! Biblioteca Library Catalog API
//!
//! A Rust implementation of the Biblioteca REST server, exposing plain
//! CRUD endpoints for books, members, authors, categories and loans.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}

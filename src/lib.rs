//! Randevu appointment availability service
//!
//! Answers "which delivery/service/moving/pickup windows are free on a
//! given date" by merging active commitments from four independent
//! record sources into one calendar view.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod sources;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

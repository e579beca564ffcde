//! BOBODDY Brainstorm Engine
//!
//! A small web service that generates random uppercase acronyms and fills in
//! per-letter definitions from a corporate-jargon word bank or a fixed list of
//! Creed Bratton quotes.

pub mod api;
pub mod banks;
pub mod config;
pub mod engine;
pub mod error;

pub use error::{AppError, Result};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<RwLock<config::Settings>>,
}

//! Story Server - themed short stories for young readers
//!
//! Validates keyword requests, asks a text generation API for a story and
//! memoizes the result by keyword set.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod story;

pub use api::{create_router, AppState};
pub use config::Config;

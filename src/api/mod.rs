//! API Module
//!
//! HTTP handlers and routing for the story server REST API.
//!
//! # Endpoints
//! - `GET /keywords` - List allowed keywords by category
//! - `POST /generate-story` - Generate a story from keywords
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

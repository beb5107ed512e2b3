//! API Module
//!
//! HTTP handlers and routing for the mapping service REST API.
//!
//! # Endpoints
//! - `POST /shorten` - Create a short token for a URL
//! - `GET /:short_url` - Redirect a token to its original URL
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

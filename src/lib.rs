//! Linkmap - A minimal URL shortening service
//!
//! Creates 6-character tokens for submitted URLs and resolves them back via
//! HTTP redirect. Persistence is delegated to a pluggable key-value store.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod token;

pub use api::AppState;
pub use config::Config;

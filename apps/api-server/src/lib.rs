//! # Blog API Server
//!
//! Actix-web HTTP surface over the post store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod startup;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use startup::Application;
pub use state::AppState;

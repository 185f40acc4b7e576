//! Server module for exposing the query engine over HTTP
//!
//! [`ServerBuilder`] wires an engine and a [`ServerConfig`](crate::config::ServerConfig)
//! into an axum router with tracing and CORS layers.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;

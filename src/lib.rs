//! NHL statistics as Model Context Protocol tools
//!
//! This library wraps the public NHL web and stats APIs behind the
//! [`NhlClient`] trait and exposes every query as an MCP tool returning a
//! JSON envelope: `{<result key>: payload}` on success, `{"error": message}`
//! on failure.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nhl_mcp::config::Config;
//! use nhl_mcp::error::AppError;
//! use nhl_mcp::nhl_client::HttpNhlClient;
//! use nhl_mcp::tools::ToolRegistry;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let registry = ToolRegistry::new(Arc::new(HttpNhlClient::new(&config)?));
//!
//!     let envelope = registry
//!         .call("get_nhl_standings", json!({"season": "20232024"}))
//!         .await
//!         .expect("tool is registered");
//!     println!("{}", serde_json::to_string_pretty(&envelope)?);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod mcp;
pub mod nhl_client;
pub mod testing_utils;
pub mod tools;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use nhl_client::{HttpNhlClient, NhlClient};
pub use tools::{Envelope, ToolRegistry};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! MCP tools over the NHL statistics provider.
//!
//! Each tool is an async function taking a `&dyn NhlClient` and returning an
//! [`Envelope`]. Tools never fail: provider errors become `{"error": ...}`.
//! [`ToolRegistry`] binds them to names and JSON input schemas.

pub mod args;
pub mod dates;
pub mod envelope;
pub mod invoke;
pub mod players;
pub mod registry;
pub mod schedule;
pub mod schema;
pub mod standings;
pub mod stats;
pub mod teams;

pub use envelope::{ERROR_KEY, Envelope};
pub use invoke::{invoke, normalize};
pub use registry::{ToolRegistry, ToolSpec};
pub use schema::{Param, ParamKind, object_schema};

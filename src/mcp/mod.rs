//! Model Context Protocol server: JSON-RPC messages, dispatch and transport.

pub mod jsonrpc;
pub mod server;
pub mod stdio;

pub use server::McpServer;
pub use stdio::serve_stdio;

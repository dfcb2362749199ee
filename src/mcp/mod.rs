//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes translation lookups to AI assistants and test harnesses over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TrmergeMcpServer, run_server};

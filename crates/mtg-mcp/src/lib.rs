//! MCP Server for Magic: The Gathering
//!
//! This crate exposes card search and Comprehensive Rules lookup via the
//! Model Context Protocol (MCP), so that assistants can answer card and
//! rules questions from authoritative sources.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ mtg-mcp (server, tools, resources) ]
//!        |
//!        +--> [ mtg-scryfall ] --> api.scryfall.com
//!        +--> [ mtg-corpus ]   --> <data_root>/{index.txt, rules/, glossary/}
//! ```
//!
//! # Tools
//!
//! - Card database: `lookup_card`, `search_cards`, `random_card`,
//!   `search_syntax_guide`
//! - Comprehensive Rules: `get_rule`, `get_glossary_term`, `get_rules_index`
//!
//! # Resources
//!
//! - `mtg://rules/index` - Rules table of contents
//! - `mtg://glossary/terms` - All glossary terms

pub mod config;
pub mod corpus_build;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod resource_handlers;
pub mod resources;
pub mod server;
pub mod syntax_guide;
pub mod tools;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use handlers::{ToolContext, handle_tool_call};
pub use server::MtgMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};

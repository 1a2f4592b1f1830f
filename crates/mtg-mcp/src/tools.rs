//! MCP Tool definitions
//!
//! Static name, description and input schema for every tool the server
//! registers. Handlers live in [`crate::handlers`].
//!
//! # Tool Categories
//!
//! ## Card Database (Scryfall)
//! - `lookup_card` - Look up a card by exact or fuzzy name
//! - `search_cards` - Full-text search with sort order and direction
//! - `random_card` - A random card, optionally filtered
//! - `search_syntax_guide` - Reference for the Scryfall query language
//!
//! ## Comprehensive Rules
//! - `get_rule` - A rule by its three-digit number
//! - `get_glossary_term` - A glossary definition, with suggestions on a miss
//! - `get_rules_index` - The rules table of contents

use mtg_scryfall::{MAX_SEARCH_LIMIT, SortDirection, SortOrder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::syntax_guide::GuideCategory;

/// Longest accepted search query, in characters
pub const MAX_QUERY_LENGTH: usize = 1000;

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }

    /// Whether the result is flagged as a failure
    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// The text of the single content block
    pub fn text_content(&self) -> &str {
        match self.content.first() {
            Some(ToolContent::Text { text }) => text,
            None => "",
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    let orders: Vec<&str> = SortOrder::ALL.iter().map(|o| o.as_str()).collect();
    let directions: Vec<&str> = SortDirection::ALL.iter().map(|d| d.as_str()).collect();
    let categories: Vec<&str> = GuideCategory::ALL.iter().map(|c| c.as_str()).collect();

    vec![
        // Card Database
        ToolDefinition {
            name: "lookup_card".to_string(),
            description: "Look up a Magic: The Gathering card by name using Scryfall API"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "minLength": 1,
                        "description": "The name of the card to look up"
                    },
                    "exact": {
                        "type": "boolean",
                        "description": "Whether to use exact name matching (default: false for fuzzy search)"
                    }
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: "search_cards".to_string(),
            description:
                "Search for Magic: The Gathering cards using full-text search with Scryfall API"
                    .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "minLength": 1,
                        "maxLength": MAX_QUERY_LENGTH,
                        "description": "Full-text search query (max 1000 characters)"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": MAX_SEARCH_LIMIT,
                        "description": "Maximum number of cards to return (default: 10)"
                    },
                    "order": {
                        "type": "string",
                        "enum": orders,
                        "description": "Sort order (default: name)"
                    },
                    "dir": {
                        "type": "string",
                        "enum": directions,
                        "description": "Sort direction (default: auto)"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "random_card".to_string(),
            description: "Get a random Magic: The Gathering card using Scryfall API".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "q": {
                        "type": "string",
                        "description": "Optional search query to filter the random card pool (e.g., \"is:commander\", \"color:red\")"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "search_syntax_guide".to_string(),
            description: "Provides guidance on Scryfall search syntax for constructing effective card search queries".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "enum": categories,
                        "description": "Specific category of search syntax to explain (default: overview)"
                    }
                }
            }),
        },
        // Comprehensive Rules
        ToolDefinition {
            name: "get_rule".to_string(),
            description: "Retrieves a specific Magic: The Gathering rule by its number (e.g., 100, 205, 701). If you have a longer rule number (like 105.2f), only submit the first three digits.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "rule_number": {
                        "type": "string",
                        "description": "The rule number to retrieve (e.g., \"100\", \"205\", \"701\"). If you have a longer rule number (like 105.2f), only submit the first three digits."
                    }
                },
                "required": ["rule_number"]
            }),
        },
        ToolDefinition {
            name: "get_glossary_term".to_string(),
            description: "Retrieves a Magic: The Gathering glossary definition by term name"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "term": {
                        "type": "string",
                        "description": "The glossary term to look up (e.g., \"Ability\", \"Activate\", \"Combat Damage\")"
                    }
                },
                "required": ["term"]
            }),
        },
        ToolDefinition {
            name: "get_rules_index".to_string(),
            description:
                "Retrieves the complete index of Magic: The Gathering comprehensive rules"
                    .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}

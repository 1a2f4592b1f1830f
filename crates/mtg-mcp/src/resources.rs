//! MCP Resource definitions
//!
//! Resources give read-only access to the rules corpus as whole documents.
//!
//! # Available Resources
//!
//! | URI | Description | Content-Type |
//! |-----|-------------|--------------|
//! | `mtg://rules/index` | Comprehensive Rules table of contents | text/plain |
//! | `mtg://glossary/terms` | Every glossary term, one per line | text/plain |

use serde::{Deserialize, Serialize};

pub const RULES_INDEX_URI: &str = "mtg://rules/index";
pub const GLOSSARY_TERMS_URI: &str = "mtg://glossary/terms";

/// Resource definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// Content returned from reading a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// Get all resource definitions
pub fn get_resource_definitions() -> Vec<ResourceDefinition> {
    vec![
        ResourceDefinition {
            uri: RULES_INDEX_URI.to_string(),
            name: "Comprehensive Rules Index".to_string(),
            description: "Table of contents of the Magic: The Gathering Comprehensive Rules"
                .to_string(),
            mime_type: "text/plain".to_string(),
        },
        ResourceDefinition {
            uri: GLOSSARY_TERMS_URI.to_string(),
            name: "Glossary Terms".to_string(),
            description: "All terms defined in the Comprehensive Rules glossary".to_string(),
            mime_type: "text/plain".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_use_mtg_scheme() {
        let resources = get_resource_definitions();
        assert_eq!(resources.len(), 2);
        for resource in &resources {
            assert!(resource.uri.starts_with("mtg://"), "{}", resource.uri);
            assert_eq!(resource.mime_type, "text/plain");
            assert!(!resource.description.is_empty());
        }
    }
}

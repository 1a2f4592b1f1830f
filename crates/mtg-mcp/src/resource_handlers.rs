//! MCP Resource Handlers
//!
//! Read-only access to the rules corpus as whole documents.

use mtg_corpus::Corpus;
use tracing::warn;

use crate::resources::{GLOSSARY_TERMS_URI, RULES_INDEX_URI, ResourceContent};
use crate::{Error, Result};

/// Read a resource by URI
///
/// # Errors
///
/// Returns `Error::UnknownResource` if the URI is not recognized, and
/// `Error::Corpus` / `Error::Io` when the backing files cannot be read.
pub async fn read_resource(corpus: &Corpus, uri: &str) -> Result<ResourceContent> {
    match uri {
        RULES_INDEX_URI => read_rules_index(corpus).await,
        GLOSSARY_TERMS_URI => read_glossary_terms(corpus).await,
        _ => Err(Error::UnknownResource(uri.to_string())),
    }
}

async fn read_rules_index(corpus: &Corpus) -> Result<ResourceContent> {
    Ok(ResourceContent {
        uri: RULES_INDEX_URI.to_string(),
        mime_type: "text/plain".to_string(),
        text: corpus.index()?,
    })
}

async fn read_glossary_terms(corpus: &Corpus) -> Result<ResourceContent> {
    let terms = corpus.glossary_terms().inspect_err(|e| {
        warn!(dir = %corpus.glossary_dir().display(), error = %e, "Failed to list glossary");
    })?;

    Ok(ResourceContent {
        uri: GLOSSARY_TERMS_URI.to_string(),
        mime_type: "text/plain".to_string(),
        text: terms.join("\n"),
    })
}

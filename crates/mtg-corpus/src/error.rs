//! Error types for mtg-corpus

use std::path::PathBuf;

/// Result type for corpus lookups
pub type Result<T> = std::result::Result<T, LookupError>;

/// What to tell the caller after a glossary miss
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Stored terms that contain the requested term or are contained by it
    Suggestions(Vec<String>),

    /// No near match; the first few stored terms in alphabetical order
    Available { terms: Vec<String>, truncated: bool },

    /// The glossary directory itself could not be listed
    Unavailable,
}

/// Failures of a corpus lookup.
///
/// The `Display` output is the message shown to the end user.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(
        "Invalid rule number format. Please provide a 3-digit rule number (e.g., \"100\", \"205\", \"701\")"
    )]
    InvalidRuleNumber { input: String },

    #[error("Rule {number} not found. Please check the rule number and try again.")]
    RuleNotFound { number: String },

    #[error("{}", render_term_miss(term, hint))]
    TermNotFound { term: String, hint: Hint },

    #[error("Error reading {subject}: {reason}")]
    Io { subject: String, reason: String },

    #[error("Failed to write corpus file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LookupError {
    pub fn io(subject: impl Into<String>, source: &std::io::Error) -> Self {
        Self::Io {
            subject: subject.into(),
            reason: source.to_string(),
        }
    }

    /// Whether the lookup was well-formed but nothing was stored under the key
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RuleNotFound { .. } | Self::TermNotFound { .. })
    }
}

fn render_term_miss(term: &str, hint: &Hint) -> String {
    match hint {
        Hint::Suggestions(suggestions) => {
            let list: Vec<String> = suggestions.iter().map(|s| format!("- {s}")).collect();
            format!(
                "Glossary term \"{term}\" not found.\n\nDid you mean one of these?\n{}",
                list.join("\n")
            )
        }
        Hint::Available { terms, truncated } => format!(
            "Glossary term \"{term}\" not found.\n\nAvailable terms include: {}{}",
            terms.join(", "),
            if *truncated { "..." } else { "" }
        ),
        Hint::Unavailable => {
            format!("Glossary term \"{term}\" not found and unable to list available terms.")
        }
    }
}

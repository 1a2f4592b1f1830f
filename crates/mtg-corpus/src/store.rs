//! Lookup store accessor
//!
//! Resolves rule numbers and glossary terms to files under the data root.
//! Rule lookups are validated before touching the disk and never produce
//! suggestions. Glossary misses enumerate the store for near matches.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Hint, LookupError, Result};
use crate::io::read_file_bounded;
use crate::suggest::{MAX_AVAILABLE_TERMS, display_form, normalize_term, suggest};

/// Rule numbers are exactly three ASCII digits (`"100"`, `"702"`).
static RULE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

pub const RULES_DIR: &str = "rules";
pub const GLOSSARY_DIR: &str = "glossary";
pub const INDEX_FILE: &str = "index.txt";

/// Whether `input` is a well-formed rule number
pub fn is_rule_number(input: &str) -> bool {
    RULE_NUMBER_PATTERN.is_match(input)
}

/// Read-only view of a corpus directory
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rules_dir(&self) -> PathBuf {
        self.root.join(RULES_DIR)
    }

    pub fn glossary_dir(&self) -> PathBuf {
        self.root.join(GLOSSARY_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Fetch the full text of a rule.
    ///
    /// # Errors
    ///
    /// - `InvalidRuleNumber` if `number` is not three digits (no disk access)
    /// - `RuleNotFound` if no file exists for the number
    /// - `Io` for any other read failure
    pub fn rule(&self, number: &str) -> Result<String> {
        if !is_rule_number(number) {
            return Err(LookupError::InvalidRuleNumber {
                input: number.to_string(),
            });
        }

        let path = self.rules_dir().join(format!("{number}.txt"));
        debug!(path = %path.display(), "Reading rule");

        match read_file_bounded(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(LookupError::RuleNotFound {
                number: number.to_string(),
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read rule");
                Err(LookupError::io(format!("rule {number}"), &e))
            }
        }
    }

    /// Fetch the definition of a glossary term.
    ///
    /// On a miss the error carries a [`Hint`]: near matches when any exist,
    /// otherwise the first terms of the glossary. Near matches are substring
    /// matches first, then terms within two edits; the generic list appears
    /// only when neither finds anything.
    pub fn glossary_term(&self, term: &str) -> Result<String> {
        let path = self
            .glossary_dir()
            .join(format!("{}.txt", normalize_term(term)));
        debug!(path = %path.display(), "Reading glossary term");

        match read_file_bounded(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(LookupError::TermNotFound {
                term: term.to_string(),
                hint: self.hint_for(term),
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read glossary term");
                Err(LookupError::io(format!("glossary term \"{term}\""), &e))
            }
        }
    }

    /// Fetch the rules table of contents
    pub fn index(&self) -> Result<String> {
        let path = self.index_path();
        read_file_bounded(&path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to read rules index");
            LookupError::io("rules index", &e)
        })
    }

    /// Display forms of every stored glossary term, sorted alphabetically
    pub fn glossary_terms(&self) -> std::io::Result<Vec<String>> {
        let mut terms = Vec::new();
        for entry in std::fs::read_dir(self.glossary_dir())? {
            let entry = entry?;
            if let Some(term) = display_form(&entry.file_name().to_string_lossy()) {
                terms.push(term);
            }
        }
        terms.sort();
        Ok(terms)
    }

    fn hint_for(&self, term: &str) -> Hint {
        let available = match self.glossary_terms() {
            Ok(terms) => terms,
            Err(e) => {
                warn!(error = %e, "Unable to list glossary terms");
                return Hint::Unavailable;
            }
        };

        let suggestions = suggest(term, &available);
        if !suggestions.is_empty() {
            return Hint::Suggestions(suggestions);
        }

        let truncated = available.len() > MAX_AVAILABLE_TERMS;
        Hint::Available {
            terms: available.into_iter().take(MAX_AVAILABLE_TERMS).collect(),
            truncated,
        }
    }
}

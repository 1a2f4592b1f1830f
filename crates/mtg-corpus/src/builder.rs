//! Corpus builder
//!
//! Splits the published Comprehensive Rules text into the on-disk corpus
//! read by [`Corpus`](crate::Corpus). The text is consumed line by line
//! through four sections:
//!
//! 1. **Index** - everything between `Contents` and the first `Glossary`
//! 2. **Rules** - from `1. Game Concepts`, grouped by three-digit rule number
//! 3. **Glossary** - blank-line separated blocks, term first, definition after
//! 4. **Finished** - after `Credits`; remaining lines are ignored

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{LookupError, Result};
use crate::io::write_atomic;
use crate::store::{GLOSSARY_DIR, INDEX_FILE, RULES_DIR};
use crate::suggest::normalize_term;

/// Default download location of the Comprehensive Rules text
pub const DEFAULT_RULES_URL: &str =
    "https://media.wizards.com/2025/downloads/MagicCompRules%2020250919.txt";

static RULE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{3})\.").unwrap());
static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\. \S").unwrap());

const CONTENTS_MARKER: &str = "Contents";
const GLOSSARY_MARKER: &str = "Glossary";
const RULES_START_MARKER: &str = "1. Game Concepts";
const CREDITS_MARKER: &str = "Credits";

#[derive(Debug)]
enum Section {
    Index { found_contents: bool },
    Rules { started: bool, current: Option<String> },
    Glossary { current_term: Option<String> },
    Finished,
}

/// Result of parsing the rules text
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedRules {
    /// Table of contents lines
    pub index: Vec<String>,
    /// Rule number to rule text lines
    pub rules: BTreeMap<String, Vec<String>>,
    /// Glossary terms and their definition lines, in document order
    pub glossary: Vec<(String, Vec<String>)>,
}

/// Counts reported after writing a corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusSummary {
    pub rules: usize,
    pub glossary_terms: usize,
}

/// Line-oriented parser for the Comprehensive Rules text
#[derive(Debug)]
pub struct CorpusBuilder {
    section: Section,
    buffer: Vec<String>,
    parsed: ParsedRules,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self {
            section: Section::Index {
                found_contents: false,
            },
            buffer: Vec::new(),
            parsed: ParsedRules::default(),
        }
    }

    /// Parse a complete rules document
    pub fn parse(text: &str) -> ParsedRules {
        let mut builder = Self::new();
        for line in text.trim_start_matches('\u{feff}').lines() {
            builder.consume(line);
        }
        builder.finish()
    }

    /// Feed one line of the document. Surrounding whitespace is ignored.
    pub fn consume(&mut self, line: &str) {
        let line = line.trim();
        match self.section {
            Section::Index { .. } => self.consume_index(line),
            Section::Rules { .. } => self.consume_rules(line),
            Section::Glossary { .. } => self.consume_glossary(line),
            Section::Finished => {}
        }
    }

    /// Flush any partially collected entry and return the parse result
    pub fn finish(mut self) -> ParsedRules {
        match std::mem::replace(&mut self.section, Section::Finished) {
            Section::Rules {
                current: Some(number),
                ..
            } => self.flush_rule(number),
            Section::Glossary {
                current_term: Some(term),
            } => self.flush_term(term),
            _ => {}
        }
        self.parsed
    }

    fn consume_index(&mut self, line: &str) {
        let Section::Index { found_contents } = &mut self.section else {
            return;
        };
        if line.is_empty() {
            return;
        }
        if !*found_contents {
            *found_contents = line == CONTENTS_MARKER;
            return;
        }
        if line == GLOSSARY_MARKER {
            self.parsed.index = std::mem::take(&mut self.buffer);
            debug!(lines = self.parsed.index.len(), "Collected rules index");
            self.section = Section::Rules {
                started: false,
                current: None,
            };
            return;
        }
        self.buffer.push(line.to_string());
    }

    fn consume_rules(&mut self, line: &str) {
        let Section::Rules { started, current } = &mut self.section else {
            return;
        };
        if line.is_empty() {
            return;
        }
        if !*started {
            *started = line == RULES_START_MARKER;
            return;
        }

        if let Some(captures) = RULE_LINE.captures(line) {
            let number = captures[1].to_string();
            match current.replace(number.clone()) {
                Some(previous) if previous != number => {
                    self.flush_rule(previous);
                }
                _ => {}
            }
            self.buffer.push(line.to_string());
            return;
        }

        if line == GLOSSARY_MARKER {
            if let Some(previous) = current.take() {
                self.flush_rule(previous);
            }
            self.section = Section::Glossary { current_term: None };
            return;
        }

        if SECTION_HEADING.is_match(line) {
            return;
        }
        if current.is_some() {
            self.buffer.push(line.to_string());
        }
    }

    fn consume_glossary(&mut self, line: &str) {
        let Section::Glossary { current_term } = &mut self.section else {
            return;
        };
        if line == CREDITS_MARKER {
            if let Some(term) = current_term.take() {
                self.flush_term(term);
            }
            self.section = Section::Finished;
            return;
        }
        if line.is_empty() {
            if let Some(term) = current_term.take() {
                self.flush_term(term);
            }
            return;
        }
        if current_term.is_none() {
            *current_term = Some(line.to_string());
        } else {
            self.buffer.push(line.to_string());
        }
    }

    fn flush_rule(&mut self, number: String) {
        let lines = std::mem::take(&mut self.buffer);
        self.parsed.rules.entry(number).or_default().extend(lines);
    }

    fn flush_term(&mut self, term: String) {
        let lines = std::mem::take(&mut self.buffer);
        self.parsed.glossary.push((term, lines));
    }
}

impl ParsedRules {
    /// Write `index.txt`, `rules/` and `glossary/` under `root`.
    ///
    /// Existing files with the same names are replaced; other files are
    /// left alone.
    pub fn write_to(&self, root: &Path) -> Result<CorpusSummary> {
        write_file(&root.join(INDEX_FILE), &self.index.join("\n"))?;

        let rules_dir = root.join(RULES_DIR);
        for (number, lines) in &self.rules {
            write_file(&rules_dir.join(format!("{number}.txt")), &lines.join("\n"))?;
        }

        let glossary_dir = root.join(GLOSSARY_DIR);
        for (term, lines) in &self.glossary {
            let path = glossary_dir.join(format!("{}.txt", normalize_term(term)));
            write_file(&path, &lines.join("\n"))?;
        }

        let summary = CorpusSummary {
            rules: self.rules.len(),
            glossary_terms: self.glossary.len(),
        };
        info!(
            root = %root.display(),
            rules = summary.rules,
            glossary_terms = summary.glossary_terms,
            "Wrote rules corpus"
        );
        Ok(summary)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content).map_err(|source| LookupError::Write {
        path: path.to_path_buf(),
        source,
    })
}

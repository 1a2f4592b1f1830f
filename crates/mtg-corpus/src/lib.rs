//! Comprehensive Rules corpus access
//!
//! The corpus is a read-only directory tree:
//!
//! ```text
//! <data root>/
//!   index.txt              table of contents
//!   rules/<NNN>.txt        one file per three-digit rule
//!   glossary/<term>.txt    one file per glossary term (normalized name)
//! ```
//!
//! [`Corpus`] resolves lookup keys against that tree. Glossary misses fall
//! back to [`suggest`] so callers can offer near matches. The
//! [`builder`] module produces the tree from the published rules text.

pub mod builder;
pub mod error;
mod io;
pub mod store;
pub mod suggest;

pub use builder::{CorpusBuilder, CorpusSummary, DEFAULT_RULES_URL, ParsedRules};
pub use error::{Hint, LookupError, Result};
pub use store::{Corpus, is_rule_number};
pub use suggest::{display_form, normalize_term, suggest};

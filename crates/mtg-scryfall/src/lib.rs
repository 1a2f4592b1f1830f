//! Scryfall card-database access
//!
//! [`ScryfallClient`] issues the three read queries the server needs
//! (named lookup, full-text search, random card) and decodes the JSON into
//! [`Card`] and [`SearchPage`]. The [`format`] module turns those into the
//! plain-text blocks returned to MCP clients.
//!
//! A `404` from Scryfall means "no match" and is reported as `Ok(None)`;
//! every other non-success status is an [`Error::Upstream`].

pub mod card;
pub mod client;
pub mod error;
pub mod format;

pub use card::{Card, SearchPage};
pub use client::{
    DEFAULT_BASE_URL, DEFAULT_SEARCH_LIMIT, DEFAULT_USER_AGENT, MAX_SEARCH_LIMIT, ScryfallClient,
    ScryfallConfig, SearchRequest, SortDirection, SortOrder,
};
pub use error::{Error, Result};
pub use format::{format_card, format_search};

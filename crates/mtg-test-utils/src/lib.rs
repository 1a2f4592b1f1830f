//! Shared test utilities for the mtg-mcp workspace.
//!
//! This crate provides standardised corpus fixtures so crate test suites
//! do not each hand-build `rules/` and `glossary/` trees. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`corpus`] - [`TestCorpus`] builder for on-disk rules corpora
//! - [`cards`] - canned Scryfall JSON payloads

pub mod cards;
pub mod corpus;

pub use corpus::TestCorpus;

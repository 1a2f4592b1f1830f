//! Decoded Scryfall objects

use serde::Deserialize;

/// One card as returned by `/cards/named`, `/cards/random` and inside
/// search pages. Only the fields the formatter renders are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub set_name: String,
    #[serde(rename = "set", default)]
    pub set_code: String,
    #[serde(rename = "scryfall_uri", default)]
    pub detail_uri: Option<String>,
}

/// A `/cards/search` list envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    pub total_cards: usize,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub data: Vec<Card>,
}

/// Treat an empty string the same as a missing field
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

//! Plain-text rendering of cards and search results
//!
//! Field order is fixed: name, cost, type, text, P/T, loyalty, set, link.
//! Absent or empty optional fields are dropped rather than rendered blank.

use crate::card::{Card, SearchPage, present};

/// Oracle text longer than this is cut in search listings
pub const LISTING_TEXT_LIMIT: usize = 100;

/// Render a single card with its Scryfall link
pub fn format_card(card: &Card) -> String {
    let mut lines = card_lines(card, "", None);
    if let Some(uri) = present(&card.detail_uri) {
        lines.push(format!("[View on Scryfall]({uri})"));
    }
    lines.join("\n")
}

/// Render a search page as a ranked listing.
///
/// A trailer is appended when the query matched more cards than the page
/// holds.
pub fn format_search(query: &str, page: &SearchPage) -> String {
    let shown = &page.data;

    let mut out = vec![
        format!(
            "Found {} cards matching \"{}\" (showing {}):",
            page.total_cards,
            query,
            shown.len()
        ),
        String::new(),
    ];

    for (rank, card) in shown.iter().enumerate() {
        let mut lines = card_lines(card, "   ", Some(LISTING_TEXT_LIMIT));
        let heading = format!("{}. {}", rank + 1, lines[0].trim_start());
        lines[0] = heading;
        out.push(lines.join("\n"));
    }

    let remaining = page.total_cards.saturating_sub(shown.len());
    if remaining > 0 {
        out.push(String::new());
        out.push(format!(
            "... and {remaining} more cards. Use a more specific query to narrow results."
        ));
    }

    out.join("\n")
}

fn card_lines(card: &Card, indent: &str, text_limit: Option<usize>) -> Vec<String> {
    let mut lines = vec![
        format!("{indent}**{}**", card.name),
        format!("{indent}Cost: {}", present(&card.mana_cost).unwrap_or("N/A")),
        format!("{indent}Type: {}", card.type_line),
    ];

    if let Some(text) = present(&card.oracle_text) {
        let text = match text_limit {
            Some(limit) => truncate(text, limit),
            None => text.to_string(),
        };
        lines.push(format!("{indent}Text: {text}"));
    }
    if let (Some(power), Some(toughness)) = (present(&card.power), present(&card.toughness)) {
        lines.push(format!("{indent}P/T: {power}/{toughness}"));
    }
    if let Some(loyalty) = present(&card.loyalty) {
        lines.push(format!("{indent}Loyalty: {loyalty}"));
    }
    lines.push(format!(
        "{indent}Set: {} ({})",
        card.set_name,
        card.set_code.to_uppercase()
    ));

    lines
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

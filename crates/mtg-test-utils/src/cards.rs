//! Canned Scryfall payloads shaped like real API responses.

/// A `/cards/named` response for Lightning Bolt.
pub fn lightning_bolt() -> String {
    r#"{
        "object": "card",
        "name": "Lightning Bolt",
        "mana_cost": "{R}",
        "type_line": "Instant",
        "oracle_text": "Lightning Bolt deals 3 damage to any target.",
        "set": "lea",
        "set_name": "Limited Edition Alpha",
        "scryfall_uri": "https://scryfall.com/card/lea/161/lightning-bolt"
    }"#
    .to_string()
}

/// A creature card with power and toughness.
pub fn grizzly_bears() -> String {
    r#"{
        "object": "card",
        "name": "Grizzly Bears",
        "mana_cost": "{1}{G}",
        "type_line": "Creature — Bear",
        "power": "2",
        "toughness": "2",
        "set": "m10",
        "set_name": "Magic 2010",
        "scryfall_uri": "https://scryfall.com/card/m10/175/grizzly-bears"
    }"#
    .to_string()
}

/// A planeswalker with loyalty and no link.
pub fn planeswalker() -> String {
    r#"{
        "object": "card",
        "name": "Jace Beleren",
        "mana_cost": "{1}{U}{U}",
        "type_line": "Legendary Planeswalker — Jace",
        "oracle_text": "+2: Each player draws a card.",
        "loyalty": "3",
        "set": "lrw",
        "set_name": "Lorwyn"
    }"#
    .to_string()
}

/// A `/cards/search` list envelope with `count` generated cards.
pub fn search_page(count: usize, total_cards: usize, has_more: bool) -> String {
    let cards: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"object":"card","name":"Card {i}","mana_cost":"{{{i}}}","type_line":"Creature — Test","oracle_text":"Ability {i}.","power":"{i}","toughness":"{i}","set":"tst","set_name":"Test Set"}}"#
            )
        })
        .collect();
    format!(
        r#"{{"object":"list","total_cards":{total_cards},"has_more":{has_more},"data":[{}]}}"#,
        cards.join(",")
    )
}

/// A Scryfall error object as returned with non-2xx statuses.
pub fn error_body(status: u16, details: &str) -> String {
    format!(r#"{{"object":"error","code":"not_found","status":{status},"details":"{details}"}}"#)
}

//! End-to-end integration test for the full pipeline
//!
//! Rules text -> corpus on disk -> MCP session over an in-memory transport,
//! with Scryfall replaced by a mock server.

use std::fs;

use httpmock::prelude::*;
use mtg_corpus::Corpus;
use mtg_mcp::corpus_build::{RulesSource, build_corpus};
use mtg_mcp::{MtgMcpServer, ServerConfig, ToolContext};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

const RULES_TEXT: &str = "\u{feff}Magic: The Gathering Comprehensive Rules

Contents

1. Game Concepts
100. General
105. Colors
7. Additional Rules
702. Keyword Abilities
Glossary
Credits

1. Game Concepts

100. General

100.1. These Magic rules apply to any Magic game with two or more players.

105. Colors

105.1. There are five colors in the Magic game: white, blue, black, red, and green.

7. Additional Rules

702. Keyword Abilities

702.9. Flying

702.9a Flying is an evasion ability.

Glossary

First Strike
A keyword ability that alters the combat damage step. See rule 702.7, \"First Strike.\"

Flying
A keyword ability that restricts how a creature may be blocked. See rule 702.9, \"Flying.\"

Flash
A keyword ability that lets a player cast a spell any time they could cast an instant.

Credits

Magic: The Gathering Original Game Design: Richard Garfield
";

/// Build a corpus from `RULES_TEXT` under a temp dir and return a config for it.
async fn setup_corpus(temp: &TempDir, scryfall_url: String) -> ServerConfig {
    let input = temp.path().join("MagicCompRules.txt");
    fs::write(&input, RULES_TEXT).unwrap();
    let data_root = temp.path().join("data");
    build_corpus(&RulesSource::File(input), &data_root)
        .await
        .unwrap();

    let mut config = ServerConfig::default();
    config.data_root = data_root;
    config.scryfall.base_url = scryfall_url;
    config
}

async fn run_session(config: &ServerConfig, requests: &[Value]) -> Vec<Value> {
    let mut server = MtgMcpServer::new(ToolContext::from_config(config).unwrap());
    server.initialize();

    let input: String = requests.iter().map(|r| format!("{r}\n")).collect();
    let mut output = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn tool_call(id: u64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    })
}

fn text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[tokio::test]
async fn test_built_corpus_has_expected_layout() {
    let temp = TempDir::new().unwrap();
    let config = setup_corpus(&temp, "http://127.0.0.1:9".to_string()).await;
    let corpus = Corpus::new(&config.data_root);

    assert_eq!(
        corpus.index().unwrap(),
        "1. Game Concepts\n100. General\n105. Colors\n7. Additional Rules\n702. Keyword Abilities"
    );
    assert_eq!(
        corpus.rule("702").unwrap(),
        "702. Keyword Abilities\n702.9. Flying\n702.9a Flying is an evasion ability."
    );
    assert_eq!(
        corpus.glossary_terms().unwrap(),
        vec!["first strike", "flash", "flying"]
    );
}

#[tokio::test]
async fn test_rules_session_against_built_corpus() {
    let temp = TempDir::new().unwrap();
    let config = setup_corpus(&temp, "http://127.0.0.1:9".to_string()).await;

    let responses = run_session(
        &config,
        &[
            tool_call(1, "get_rule", json!({"rule_number": "105"})),
            tool_call(2, "get_rule", json!({"rule_number": "999"})),
            tool_call(3, "get_glossary_term", json!({"term": "first strike"})),
            tool_call(4, "get_glossary_term", json!({"term": "Fly"})),
            json!({"jsonrpc": "2.0", "id": 5, "method": "resources/read", "params": {"uri": "mtg://glossary/terms"}}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 5);
    assert!(text(&responses[0]).starts_with("105. Colors\n105.1. There are five colors"));

    assert_eq!(responses[1]["result"]["isError"], true);
    assert_eq!(
        text(&responses[1]),
        "Rule 999 not found. Please check the rule number and try again."
    );

    assert!(text(&responses[2]).starts_with("A keyword ability that alters the combat damage step."));

    assert_eq!(
        text(&responses[3]),
        "Glossary term \"Fly\" not found.\n\nDid you mean one of these?\n- flying"
    );

    assert_eq!(
        responses[4]["result"]["contents"][0]["text"],
        "first strike\nflash\nflying"
    );
}

#[tokio::test]
async fn test_card_and_rules_tools_share_a_session() {
    let scryfall = MockServer::start_async().await;
    scryfall
        .mock_async(|when, then| {
            when.method(GET)
                .path("/cards/random")
                .query_param("q", "kw:flying");
            then.status(200).body(
                r#"{"name":"Serra Angel","mana_cost":"{3}{W}{W}","type_line":"Creature — Angel",
                    "oracle_text":"Flying, vigilance","power":"4","toughness":"4",
                    "set":"lea","set_name":"Limited Edition Alpha"}"#,
            );
        })
        .await;
    let temp = TempDir::new().unwrap();
    let config = setup_corpus(&temp, scryfall.base_url()).await;

    let responses = run_session(
        &config,
        &[
            tool_call(1, "random_card", json!({"q": "kw:flying"})),
            tool_call(2, "get_glossary_term", json!({"term": "Flying"})),
        ],
    )
    .await;

    assert_eq!(
        text(&responses[0]),
        "**Serra Angel**\nCost: {3}{W}{W}\nType: Creature — Angel\nText: Flying, vigilance\nP/T: 4/4\nSet: Limited Edition Alpha (LEA)"
    );
    assert!(text(&responses[1]).contains("restricts how a creature may be blocked"));
}

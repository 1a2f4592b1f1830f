//! MCP Protocol Compliance Integration Tests
//!
//! Tests that the MCP server correctly implements JSON-RPC 2.0 and
//! MCP protocol requirements: ID preservation, error codes, the result
//! envelope, and end-to-end tool execution against a mock Scryfall.

use httpmock::prelude::*;
use mtg_corpus::Corpus;
use mtg_mcp::{MtgMcpServer, ToolContext};
use mtg_scryfall::{ScryfallClient, ScryfallConfig};
use mtg_test_utils::{TestCorpus, cards};
use serde_json::{Value, json};

/// Create an initialized server over `corpus`, talking to `scryfall_url`.
fn setup_server(corpus: &TestCorpus, scryfall_url: String) -> MtgMcpServer {
    let scryfall = ScryfallClient::new(ScryfallConfig {
        base_url: scryfall_url,
        ..ScryfallConfig::default()
    })
    .unwrap();
    let mut server = MtgMcpServer::new(ToolContext::new(Corpus::new(corpus.root()), scryfall));
    server.initialize();
    server
}

/// Server whose Scryfall address is never contacted.
fn offline_server(corpus: &TestCorpus) -> MtgMcpServer {
    setup_server(corpus, "http://127.0.0.1:9".to_string())
}

async fn send(server: &MtgMcpServer, request: &str) -> Value {
    serde_json::from_str(&server.handle_message(request).await.unwrap()).unwrap()
}

async fn call_tool(server: &MtgMcpServer, name: &str, arguments: Value) -> Value {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    });
    let response = send(server, &request.to_string()).await;
    assert!(
        response.get("error").is_none(),
        "tools/call must answer with a result envelope, got: {response}"
    );
    response["result"].clone()
}

fn text_of(result: &Value) -> &str {
    result["content"][0]["text"].as_str().unwrap()
}

// ==========================================================================
// JSON-RPC 2.0 ID Preservation
// ==========================================================================

#[tokio::test]
async fn test_numeric_id_preserved_in_response() {
    let corpus = TestCorpus::new();
    let server = offline_server(&corpus);

    let response = send(
        &server,
        r#"{"jsonrpc":"2.0","id":42,"method":"initialize","params":{}}"#,
    )
    .await;

    assert_eq!(response["id"], 42, "Numeric ID must be echoed back exactly");
    assert_eq!(response["jsonrpc"], "2.0");
}

#[tokio::test]
async fn test_string_id_preserved_in_error_response() {
    let corpus = TestCorpus::new();
    let server = offline_server(&corpus);

    let response = send(
        &server,
        r#"{"jsonrpc":"2.0","id":"err-test","method":"nonexistent/method","params":{}}"#,
    )
    .await;

    assert_eq!(response["id"], "err-test");
    assert_eq!(response["error"]["code"], -32601);
    assert!(
        response["error"]["message"]
            .as_str()
            .unwrap()
            .contains("nonexistent/method")
    );
}

// ==========================================================================
// Error Codes
// ==========================================================================

#[tokio::test]
async fn test_invalid_json_returns_parse_error_with_null_id() {
    let corpus = TestCorpus::new();
    let server = offline_server(&corpus);

    let response = send(&server, r#"{"not valid json"#).await;
    assert_eq!(response["error"]["code"], -32700);
    assert!(response["id"].is_null());
}

#[tokio::test]
async fn test_missing_method_is_invalid_request() {
    let corpus = TestCorpus::new();
    let server = offline_server(&corpus);

    let response = send(&server, r#"{"jsonrpc":"2.0","id":3,"params":{}}"#).await;
    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(response["id"], 3);
}

#[tokio::test]
async fn test_non_object_tool_params_return_32602() {
    let corpus = TestCorpus::new();
    let server = offline_server(&corpus);

    let response = send(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":"not-an-object"}"#,
    )
    .await;
    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_unknown_resource_uri_returns_32602() {
    let corpus = TestCorpus::populated();
    let server = offline_server(&corpus);

    let response = send(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"resources/read","params":{"uri":"mtg://nonexistent"}}"#,
    )
    .await;

    assert_eq!(response["error"]["code"], -32602);
    let msg = response["error"]["message"].as_str().unwrap();
    assert!(msg.contains("nonexistent"), "got: {msg}");
}

// ==========================================================================
// Tool Envelope
// ==========================================================================

#[tokio::test]
async fn test_invalid_tool_arguments_are_flagged_results() {
    let corpus = TestCorpus::new();
    let server = offline_server(&corpus);

    for (tool, arguments) in [
        ("lookup_card", json!({"name": ""})),
        ("search_cards", json!({"query": "bears", "limit": 500})),
        ("search_cards", json!({"query": "bears", "order": "popularity"})),
        ("search_syntax_guide", json!({"category": "lore"})),
        ("get_glossary_term", json!({})),
    ] {
        let result = call_tool(&server, tool, arguments).await;
        assert_eq!(result["isError"], true, "{tool} should reject its arguments");
    }
}

#[tokio::test]
async fn test_successful_result_omits_error_flag() {
    let corpus = TestCorpus::populated();
    let server = offline_server(&corpus);

    let result = call_tool(&server, "get_rules_index", json!({})).await;
    assert!(result.get("isError").is_none());
    assert_eq!(result["content"][0]["type"], "text");
    assert!(text_of(&result).contains("100. General"));
}

// ==========================================================================
// End-to-end Tool Execution
// ==========================================================================

#[tokio::test]
async fn test_lookup_card_end_to_end() {
    let scryfall = MockServer::start_async().await;
    scryfall
        .mock_async(|when, then| {
            when.method(GET)
                .path("/cards/named")
                .query_param("fuzzy", "bolt");
            then.status(200).body(cards::lightning_bolt());
        })
        .await;
    let corpus = TestCorpus::new();
    let server = setup_server(&corpus, scryfall.base_url());

    let result = call_tool(&server, "lookup_card", json!({"name": "bolt"})).await;
    assert_eq!(
        text_of(&result),
        "**Lightning Bolt**\n\
         Cost: {R}\n\
         Type: Instant\n\
         Text: Lightning Bolt deals 3 damage to any target.\n\
         Set: Limited Edition Alpha (LEA)\n\
         [View on Scryfall](https://scryfall.com/card/lea/161/lightning-bolt)"
    );
}

#[tokio::test]
async fn test_search_cards_forwards_sort_options() {
    let scryfall = MockServer::start_async().await;
    let mock = scryfall
        .mock_async(|when, then| {
            when.method(GET)
                .path("/cards/search")
                .query_param("q", "c:red")
                .query_param("order", "cmc")
                .query_param("dir", "desc");
            then.status(200).body(cards::search_page(2, 2, false));
        })
        .await;
    let corpus = TestCorpus::new();
    let server = setup_server(&corpus, scryfall.base_url());

    let result = call_tool(
        &server,
        "search_cards",
        json!({"query": "c:red", "order": "cmc", "dir": "desc"}),
    )
    .await;

    mock.assert_async().await;
    let text = text_of(&result);
    assert!(text.starts_with("Found 2 cards matching \"c:red\" (showing 2):\n\n1. **Card 1**"));
    assert!(!text.contains("more cards"));
}

#[tokio::test]
async fn test_glossary_miss_lists_available_terms() {
    let corpus = TestCorpus::populated();
    let server = offline_server(&corpus);

    let result = call_tool(&server, "get_glossary_term", json!({"term": "mulligan"})).await;
    assert_eq!(result["isError"], true);
    assert_eq!(
        text_of(&result),
        "Glossary term \"mulligan\" not found.\n\nAvailable terms include: ability, combat damage, first strike, flying"
    );
}

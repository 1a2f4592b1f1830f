//! MCP Tool Handlers
//!
//! Each handler decodes its arguments, calls the corpus or the Scryfall
//! client, and shapes the outcome into a [`ToolResult`]. Domain failures
//! (a missing rule, an upstream error) become error-flagged results here;
//! only argument and dispatch problems are returned as `Err`.

use mtg_corpus::Corpus;
use mtg_scryfall::{
    MAX_SEARCH_LIMIT, ScryfallClient, SearchRequest, SortDirection, SortOrder, format_card,
    format_search,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::syntax_guide::GuideCategory;
use crate::tools::{MAX_QUERY_LENGTH, ToolResult};
use crate::{Error, Result};

/// Shared collaborators for tool handlers
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub corpus: Corpus,
    pub scryfall: ScryfallClient,
}

impl ToolContext {
    pub fn new(corpus: Corpus, scryfall: ScryfallClient) -> Self {
        Self { corpus, scryfall }
    }

    /// Build the corpus view and HTTP client described by `config`
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let scryfall = ScryfallClient::new(config.scryfall.client_config())?;
        Ok(Self::new(Corpus::new(&config.data_root), scryfall))
    }
}

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(
    ctx: &ToolContext,
    tool_name: &str,
    arguments: Value,
) -> Result<ToolResult> {
    info!(tool = tool_name, "Tool call");

    match tool_name {
        // Card Database
        "lookup_card" => handle_lookup_card(ctx, arguments).await,
        "search_cards" => handle_search_cards(ctx, arguments).await,
        "random_card" => handle_random_card(ctx, arguments).await,
        "search_syntax_guide" => handle_search_syntax_guide(arguments),

        // Comprehensive Rules
        "get_rule" => handle_get_rule(ctx, arguments),
        "get_glossary_term" => handle_get_glossary_term(ctx, arguments),
        "get_rules_index" => handle_get_rules_index(ctx),

        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Decode tool arguments; a missing `arguments` member counts as `{}`.
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArgument(e.to_string()))
}

// ============================================================================
// Card Database Handlers
// ============================================================================

/// Arguments for lookup_card
#[derive(Debug, Deserialize)]
struct LookupCardArgs {
    name: String,
    #[serde(default)]
    exact: Option<bool>,
}

/// Handle lookup_card - Look up one card by name
async fn handle_lookup_card(ctx: &ToolContext, arguments: Value) -> Result<ToolResult> {
    let args: LookupCardArgs = parse_args(arguments)?;
    if args.name.is_empty() {
        return Err(Error::InvalidArgument(
            "Card name must not be empty".to_string(),
        ));
    }

    let exact = args.exact.unwrap_or(false);
    Ok(match ctx.scryfall.named(&args.name, exact).await {
        Ok(Some(card)) => ToolResult::text(format_card(&card)),
        Ok(None) => ToolResult::text(format!("No card found with name: \"{}\"", args.name)),
        Err(e) => {
            warn!(name = %args.name, error = %e, "Card lookup failed");
            ToolResult::error(format!("Error looking up card: {e}"))
        }
    })
}

/// Arguments for search_cards
#[derive(Debug, Deserialize)]
struct SearchCardsArgs {
    query: String,
    #[serde(default)]
    limit: Option<u64>,
    #[serde(default)]
    order: Option<SortOrder>,
    #[serde(default)]
    dir: Option<SortDirection>,
}

impl SearchCardsArgs {
    fn into_request(self) -> Result<SearchRequest> {
        let length = self.query.chars().count();
        if length == 0 || length > MAX_QUERY_LENGTH {
            return Err(Error::InvalidArgument(format!(
                "Search query must be between 1 and {MAX_QUERY_LENGTH} characters"
            )));
        }

        let mut request = SearchRequest::new(self.query);
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_SEARCH_LIMIT as u64 {
                return Err(Error::InvalidArgument(format!(
                    "Limit must be between 1 and {MAX_SEARCH_LIMIT}"
                )));
            }
            request.limit = limit as usize;
        }
        request.order = self.order.unwrap_or_default();
        request.direction = self.dir.unwrap_or_default();
        Ok(request)
    }
}

/// Handle search_cards - Full-text card search
async fn handle_search_cards(ctx: &ToolContext, arguments: Value) -> Result<ToolResult> {
    let args: SearchCardsArgs = parse_args(arguments)?;
    let request = args.into_request()?;
    let no_match = || {
        ToolResult::text(format!(
            "No cards found matching query: \"{}\"",
            request.query
        ))
    };

    Ok(match ctx.scryfall.search(&request).await {
        Ok(Some(page)) if !page.data.is_empty() => {
            ToolResult::text(format_search(&request.query, &page))
        }
        Ok(_) => no_match(),
        Err(e) => {
            warn!(query = %request.query, error = %e, "Card search failed");
            ToolResult::error(format!("Error searching cards: {e}"))
        }
    })
}

/// Arguments for random_card
#[derive(Debug, Deserialize)]
struct RandomCardArgs {
    #[serde(default)]
    q: Option<String>,
}

/// Handle random_card - A random card, optionally filtered
async fn handle_random_card(ctx: &ToolContext, arguments: Value) -> Result<ToolResult> {
    let args: RandomCardArgs = parse_args(arguments)?;
    let query = args.q.as_deref().filter(|q| !q.is_empty());

    Ok(match ctx.scryfall.random(query).await {
        Ok(Some(card)) => ToolResult::text(format_card(&card)),
        Ok(None) => ToolResult::text(match query {
            Some(q) => format!("No random card found matching query: \"{q}\""),
            None => "No random card found".to_string(),
        }),
        Err(e) => {
            warn!(query = ?query, error = %e, "Random card request failed");
            ToolResult::error(format!("Error getting random card: {e}"))
        }
    })
}

/// Arguments for search_syntax_guide
#[derive(Debug, Deserialize)]
struct SyntaxGuideArgs {
    #[serde(default)]
    category: Option<GuideCategory>,
}

/// Handle search_syntax_guide - Canned query-language reference
fn handle_search_syntax_guide(arguments: Value) -> Result<ToolResult> {
    let args: SyntaxGuideArgs = parse_args(arguments)?;
    Ok(ToolResult::text(args.category.unwrap_or_default().guide()))
}

// ============================================================================
// Comprehensive Rules Handlers
// ============================================================================

/// Arguments for get_rule
#[derive(Debug, Deserialize)]
struct GetRuleArgs {
    rule_number: String,
}

/// Handle get_rule - A rule by its three-digit number
fn handle_get_rule(ctx: &ToolContext, arguments: Value) -> Result<ToolResult> {
    let args: GetRuleArgs = parse_args(arguments)?;
    Ok(match ctx.corpus.rule(&args.rule_number) {
        Ok(text) => ToolResult::text(text),
        Err(e) => ToolResult::error(e.to_string()),
    })
}

/// Arguments for get_glossary_term
#[derive(Debug, Deserialize)]
struct GetGlossaryTermArgs {
    term: String,
}

/// Handle get_glossary_term - A glossary definition, suggestions on a miss
fn handle_get_glossary_term(ctx: &ToolContext, arguments: Value) -> Result<ToolResult> {
    let args: GetGlossaryTermArgs = parse_args(arguments)?;
    Ok(match ctx.corpus.glossary_term(&args.term) {
        Ok(text) => ToolResult::text(text),
        Err(e) => ToolResult::error(e.to_string()),
    })
}

/// Handle get_rules_index - The rules table of contents
fn handle_get_rules_index(ctx: &ToolContext) -> Result<ToolResult> {
    Ok(match ctx.corpus.index() {
        Ok(text) => ToolResult::text(text),
        Err(e) => ToolResult::error(e.to_string()),
    })
}

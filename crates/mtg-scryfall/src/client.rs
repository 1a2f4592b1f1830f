//! Scryfall HTTP client
//!
//! Every request carries a fixed `User-Agent` and `Accept: application/json`
//! as Scryfall asks of API consumers. No retries are attempted and no
//! timeout is set unless configured.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::card::{Card, SearchPage};
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";
pub const DEFAULT_USER_AGENT: &str = "MTG-MCP-Server/1.0.0";

/// Default number of cards shown from a search
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Largest page Scryfall returns, and so the largest useful limit
pub const MAX_SEARCH_LIMIT: usize = 175;

/// Connection settings for [`ScryfallClient`]
#[derive(Debug, Clone)]
pub struct ScryfallConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for ScryfallConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Sort order accepted by `/cards/search`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Name,
    Set,
    Released,
    Rarity,
    Color,
    Usd,
    Tix,
    Eur,
    Cmc,
    Power,
    Toughness,
    Edhrec,
    Penny,
    Artist,
    Review,
}

impl SortOrder {
    pub const ALL: [SortOrder; 15] = [
        Self::Name,
        Self::Set,
        Self::Released,
        Self::Rarity,
        Self::Color,
        Self::Usd,
        Self::Tix,
        Self::Eur,
        Self::Cmc,
        Self::Power,
        Self::Toughness,
        Self::Edhrec,
        Self::Penny,
        Self::Artist,
        Self::Review,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Set => "set",
            Self::Released => "released",
            Self::Rarity => "rarity",
            Self::Color => "color",
            Self::Usd => "usd",
            Self::Tix => "tix",
            Self::Eur => "eur",
            Self::Cmc => "cmc",
            Self::Power => "power",
            Self::Toughness => "toughness",
            Self::Edhrec => "edhrec",
            Self::Penny => "penny",
            Self::Artist => "artist",
            Self::Review => "review",
        }
    }
}

/// Sort direction accepted by `/cards/search`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
    #[default]
    Auto,
}

impl SortDirection {
    pub const ALL: [SortDirection; 3] = [Self::Asc, Self::Desc, Self::Auto];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::Auto => "auto",
        }
    }
}

/// A full-text search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub limit: usize,
    pub order: SortOrder,
    pub direction: SortDirection,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_SEARCH_LIMIT,
            order: SortOrder::default(),
            direction: SortDirection::default(),
        }
    }
}

/// Client for the Scryfall REST API
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScryfallClient {
    pub fn new(config: ScryfallConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up one card by name, exactly or fuzzily.
    ///
    /// Returns `Ok(None)` when Scryfall has no card by that name.
    pub async fn named(&self, name: &str, exact: bool) -> Result<Option<Card>> {
        let mode = if exact { "exact" } else { "fuzzy" };
        self.get_json("/cards/named", &[(mode, name)]).await
    }

    /// Run a full-text search and keep at most `request.limit` cards.
    ///
    /// Returns `Ok(None)` when nothing matched.
    pub async fn search(&self, request: &SearchRequest) -> Result<Option<SearchPage>> {
        let params = [
            ("q", request.query.as_str()),
            ("order", request.order.as_str()),
            ("dir", request.direction.as_str()),
        ];
        let page: Option<SearchPage> = self.get_json("/cards/search", &params).await?;

        Ok(page.map(|mut page| {
            page.data.truncate(request.limit.min(page.total_cards));
            page
        }))
    }

    /// Fetch a random card, optionally restricted by a search query.
    ///
    /// Returns `Ok(None)` when the query matches no cards.
    pub async fn random(&self, query: Option<&str>) -> Result<Option<Card>> {
        let params: Vec<(&str, &str)> = query.map(|q| ("q", q)).into_iter().collect();
        self.get_json("/cards/random", &params).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "Requesting Scryfall");

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "Scryfall reported no match");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }
}

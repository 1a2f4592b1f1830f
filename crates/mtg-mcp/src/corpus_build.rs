//! `build-corpus` support
//!
//! Fetches the published Comprehensive Rules text and splits it into the
//! on-disk corpus the rules tools read.

use std::path::{Path, PathBuf};

use mtg_corpus::{CorpusBuilder, CorpusSummary};
use mtg_scryfall::DEFAULT_USER_AGENT;
use tracing::info;

use crate::{Error, Result};

/// Where the rules text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    File(PathBuf),
    Url(String),
}

impl RulesSource {
    /// Load the full rules text
    pub async fn fetch(&self) -> Result<String> {
        match self {
            Self::File(path) => {
                info!(path = %path.display(), "Reading rules text");
                Ok(std::fs::read_to_string(path)?)
            }
            Self::Url(url) => {
                info!(%url, "Downloading rules text");
                let client = reqwest::Client::builder()
                    .user_agent(DEFAULT_USER_AGENT)
                    .build()?;
                let response = client.get(url).send().await?.error_for_status()?;
                let bytes = response.bytes().await?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

/// Fetch the rules text from `source` and write the corpus under `out`
pub async fn build_corpus(source: &RulesSource, out: &Path) -> Result<CorpusSummary> {
    let text = source.fetch().await?;
    let parsed = CorpusBuilder::parse(&text);
    if parsed.rules.is_empty() {
        return Err(Error::InvalidArgument(
            "no rules found in the supplied text".to_string(),
        ));
    }
    Ok(parsed.write_to(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use mtg_corpus::Corpus;
    use tempfile::TempDir;

    const RULES_TEXT: &str = "Contents
1. Game Concepts
100. General
Glossary

1. Game Concepts
100. General
100.1. These Magic rules apply to any Magic game with two or more players.

Glossary

Flying
A keyword ability that restricts how a creature may be blocked.

Credits
";

    #[tokio::test]
    async fn builds_from_file() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("rules.txt");
        std::fs::write(&input, RULES_TEXT).unwrap();
        let out = temp.path().join("data");

        let summary = build_corpus(&RulesSource::File(input), &out).await.unwrap();
        assert_eq!(summary.rules, 1);
        assert_eq!(summary.glossary_terms, 1);

        let corpus = Corpus::new(&out);
        assert!(corpus.rule("100").unwrap().starts_with("100. General"));
        assert_eq!(
            corpus.glossary_term("flying").unwrap(),
            "A keyword ability that restricts how a creature may be blocked."
        );
    }

    #[tokio::test]
    async fn builds_from_url() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/rules.txt");
                then.status(200).body(RULES_TEXT);
            })
            .await;
        let temp = TempDir::new().unwrap();

        let source = RulesSource::Url(server.url("/rules.txt"));
        build_corpus(&source, temp.path()).await.unwrap();

        mock.assert_async().await;
        assert!(temp.path().join("rules/100.txt").exists());
    }

    #[tokio::test]
    async fn download_failure_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rules.txt");
                then.status(503);
            })
            .await;
        let temp = TempDir::new().unwrap();

        let result = build_corpus(&RulesSource::Url(server.url("/rules.txt")), temp.path()).await;
        assert!(matches!(result, Err(Error::Download(_))));
    }

    #[tokio::test]
    async fn text_without_rules_is_rejected() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("empty.txt");
        std::fs::write(&input, "nothing to see here\n").unwrap();

        let result = build_corpus(&RulesSource::File(input), temp.path()).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}

use crate::boards::{decode_listings, http_client, read_body};
use crate::config::Web3Config;
use crate::listing::JobListing;
use crate::traits::{BoardError, BoardId, JobBoard, ProviderQuery};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Position of the listings array in web3.career's fixed-shape response.
const LISTINGS_INDEX: usize = 2;

pub struct Web3Board {
    client: reqwest::Client,
    config: Web3Config,
}

impl Web3Board {
    pub fn new(config: Web3Config, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            config,
        }
    }
}

/// The response is a JSON array whose third element holds the listings.
/// Shorter arrays mean no results.
pub fn parse_listings(body: &str) -> Result<Vec<JobListing>, BoardError> {
    let mut parts: Vec<Value> = serde_json::from_str(body)?;
    if parts.len() <= LISTINGS_INDEX {
        return Ok(Vec::new());
    }
    let listings: Vec<Value> = serde_json::from_value(parts.swap_remove(LISTINGS_INDEX))?;
    Ok(decode_listings(listings, BoardId::Web3))
}

#[async_trait]
impl JobBoard for Web3Board {
    fn id(&self) -> BoardId {
        BoardId::Web3
    }

    async fn fetch(&self, query: &ProviderQuery) -> Result<Vec<JobListing>, BoardError> {
        if self.config.token.trim().is_empty() {
            return Err(BoardError::MissingCredential("web3.career token"));
        }

        let mut params = query.clone();
        params.insert("token".into(), self.config.token.clone());
        debug!(tag = ?params.get("tag"), country = ?params.get("country"), "querying web3.career");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await?;

        let body = read_body(response).await?;
        parse_listings(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_third_element() {
        let body = r#"[
            "https://web3.career/terms",
            "Please link back to web3.career",
            [
                {"id": 7, "title": "Solidity Dev", "company": "DAO Inc", "location": "Remote", "apply_url": "https://web3.career/solidity-dev/7", "tags": ["solidity"]}
            ]
        ]"#;

        let jobs = parse_listings(body).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].display_title(), "Solidity Dev");
        assert_eq!(
            jobs[0].identifying_url(),
            Some("https://web3.career/solidity-dev/7")
        );
        assert_eq!(jobs[0].source, Some(BoardId::Web3));
    }

    #[test]
    fn short_response_is_empty() {
        assert!(parse_listings(r#"["terms", "notice"]"#).unwrap().is_empty());
        assert!(parse_listings("[]").unwrap().is_empty());
    }

    #[test]
    fn object_response_is_a_parse_error() {
        assert!(matches!(
            parse_listings(r#"{"error": "invalid token"}"#),
            Err(BoardError::Parse(_))
        ));
    }
}

use crate::boards::{decode_listings, http_client, read_body};
use crate::config::JoobleConfig;
use crate::listing::JobListing;
use crate::traits::{BoardError, BoardId, JobBoard, ProviderQuery};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct JoobleResponse {
    #[serde(default)]
    jobs: Vec<Value>,
}

pub struct JoobleBoard {
    client: reqwest::Client,
    config: JoobleConfig,
}

impl JoobleBoard {
    pub fn new(config: JoobleConfig, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            config,
        }
    }

    /// The API key is part of the path.
    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_key
        )
    }
}

pub fn parse_listings(body: &str) -> Result<Vec<JobListing>, BoardError> {
    let response: JoobleResponse = serde_json::from_str(body)?;
    Ok(decode_listings(response.jobs, BoardId::Jooble))
}

#[async_trait]
impl JobBoard for JoobleBoard {
    fn id(&self) -> BoardId {
        BoardId::Jooble
    }

    async fn fetch(&self, query: &ProviderQuery) -> Result<Vec<JobListing>, BoardError> {
        if self.config.api_key.trim().is_empty() {
            return Err(BoardError::MissingCredential("jooble api key"));
        }

        debug!(fields = query.len(), "querying jooble");

        let response = self
            .client
            .post(self.endpoint())
            .json(query)
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
    fn endpoint_is_key_scoped() {
        let board = JoobleBoard::new(
            JoobleConfig {
                api_key: "abc-123".into(),
                base_url: "https://jooble.org/api/".into(),
            },
            Duration::from_secs(1),
        );
        assert_eq!(board.endpoint(), "https://jooble.org/api/abc-123");
    }

    #[test]
    fn parses_jobs_field() {
        let body = r#"{
            "totalCount": 1,
            "jobs": [
                {"title": "Backend Developer", "location": "Bangalore", "snippet": "...", "source": "x", "type": "Full-time", "link": "https://jooble.org/desc/42", "company": "Initech", "updated": "2024-01-01", "id": 42}
            ]
        }"#;

        let jobs = parse_listings(body).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].display_company(), "Initech");
        assert_eq!(jobs[0].identifying_url(), Some("https://jooble.org/desc/42"));
        assert_eq!(jobs[0].source, Some(BoardId::Jooble));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            parse_listings("<html>rate limited</html>"),
            Err(BoardError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_searches_soft() {
        let board = JoobleBoard::new(JoobleConfig::default(), Duration::from_secs(1));
        assert!(board.search(&ProviderQuery::new()).await.is_empty());
    }
}

use crate::boards::{decode_listings, http_client, read_body};
use crate::config::CareerjetConfig;
use crate::listing::JobListing;
use crate::traits::{BoardError, BoardId, JobBoard, ProviderQuery};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CareerjetResponse {
    /// Absent for `LOCATIONS` (ambiguous place) and error responses.
    #[serde(default)]
    jobs: Vec<Value>,
}

pub struct CareerjetBoard {
    client: reqwest::Client,
    config: CareerjetConfig,
}

impl CareerjetBoard {
    pub fn new(config: CareerjetConfig, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            config,
        }
    }

    /// The caller's query plus the fixed affiliate and caller fields.
    pub fn build_params(&self, query: &ProviderQuery) -> ProviderQuery {
        let mut params = query.clone();
        params.insert("affid".into(), self.config.affid.clone());
        params.insert("user_ip".into(), self.config.user_ip.clone());
        params.insert("user_agent".into(), self.config.user_agent.clone());
        params.insert("url".into(), self.config.referer_url.clone());
        params.insert("locale_code".into(), self.config.locale.clone());
        params
    }
}

pub fn parse_listings(body: &str) -> Result<Vec<JobListing>, BoardError> {
    let response: CareerjetResponse = serde_json::from_str(body)?;
    Ok(decode_listings(response.jobs, BoardId::Careerjet))
}

#[async_trait]
impl JobBoard for CareerjetBoard {
    fn id(&self) -> BoardId {
        BoardId::Careerjet
    }

    async fn fetch(&self, query: &ProviderQuery) -> Result<Vec<JobListing>, BoardError> {
        if self.config.affid.trim().is_empty() {
            return Err(BoardError::MissingCredential("careerjet affid"));
        }

        let params = self.build_params(query);
        debug!(keywords = ?params.get("keywords"), location = ?params.get("location"), "querying careerjet");

        let response = self
            .client
            .get(&self.config.base_url)
            .header("Referer", &self.config.referer_url)
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
    fn params_include_affiliate_fields() {
        let board = CareerjetBoard::new(
            CareerjetConfig {
                affid: "aff-1".into(),
                ..Default::default()
            },
            Duration::from_secs(1),
        );
        let query = ProviderQuery::from([("keywords".to_string(), "rust".to_string())]);

        let params = board.build_params(&query);

        assert_eq!(params["keywords"], "rust");
        assert_eq!(params["affid"], "aff-1");
        assert_eq!(params["user_ip"], "1.2.3.4");
        assert_eq!(params["url"], "https://jobscout.local/jobs");
        assert_eq!(params["locale_code"], "en_IN");
        assert!(params["user_agent"].starts_with("jobscout/"));
    }

    #[test]
    fn parses_jobs_field() {
        let body = r#"{
            "type": "JOBS",
            "hits": 2,
            "jobs": [
                {"title": "Rust Engineer", "company": "Acme", "locations": "Bangalore", "url": "https://jobviewtrack.com/1", "salary": ""},
                {"title": "Go Engineer", "company": "Beta", "locations": "Pune", "url": "https://jobviewtrack.com/2"}
            ]
        }"#;

        let jobs = parse_listings(body).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].display_location(), "Bangalore");
        assert_eq!(jobs[1].identifying_url(), Some("https://jobviewtrack.com/2"));
        assert!(jobs.iter().all(|j| j.source == Some(BoardId::Careerjet)));
    }

    #[test]
    fn one_odd_listing_does_not_empty_the_board() {
        let body = r#"{
            "type": "JOBS",
            "jobs": [
                {"title": 1234, "company": "Acme", "url": "https://jobviewtrack.com/1"},
                "garbage",
                {"title": "Go Engineer", "company": {"name": "Beta"}, "url": "https://jobviewtrack.com/2"}
            ]
        }"#;

        let jobs = parse_listings(body).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].display_title(), "1234");
        assert_eq!(jobs[1].display_company(), "N/A");
    }

    #[test]
    fn locations_response_has_no_jobs() {
        let body = r#"{"type": "LOCATIONS", "solveLocations": [{"name": "Springfield, IL"}]}"#;
        assert!(parse_listings(body).unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_affid_fails_without_a_request() {
        let board = CareerjetBoard::new(CareerjetConfig::default(), Duration::from_secs(1));
        let err = board.fetch(&ProviderQuery::new()).await.unwrap_err();
        assert!(matches!(err, BoardError::MissingCredential(_)));
    }
}

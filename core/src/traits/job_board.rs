use crate::listing::JobListing;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Provider-specific parameter name to value.
pub type ProviderQuery = BTreeMap<String, String>;

/// The job boards jobscout knows how to query, in fan-out order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardId {
    Careerjet,
    Jooble,
    Web3,
}

impl BoardId {
    pub const ALL: [BoardId; 3] = [BoardId::Careerjet, BoardId::Jooble, BoardId::Web3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Careerjet => "careerjet",
            Self::Jooble => "jooble",
            Self::Web3 => "web3",
        }
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
}

#[async_trait]
pub trait JobBoard: Send + Sync {
    fn id(&self) -> BoardId;

    async fn fetch(&self, query: &ProviderQuery) -> Result<Vec<JobListing>, BoardError>;

    /// Fail-soft search: any error degrades this board to zero listings.
    async fn search(&self, query: &ProviderQuery) -> Vec<JobListing> {
        match self.fetch(query).await {
            Ok(listings) => {
                debug!(board = %self.id(), count = listings.len(), "board search succeeded");
                listings
            }
            Err(e) => {
                warn!(board = %self.id(), error = %e, "board search failed");
                Vec::new()
            }
        }
    }
}

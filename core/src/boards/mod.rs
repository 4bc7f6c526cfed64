//! Job board adapters. Each translates a [`ProviderQuery`] into one
//! provider's request shape and parses its listings.

pub mod careerjet;
pub mod jooble;
pub mod web3;

pub use careerjet::CareerjetBoard;
pub use jooble::JoobleBoard;
pub use web3::Web3Board;

use crate::config::Config;
use crate::listing::JobListing;
use crate::traits::{BoardError, BoardId, JobBoard};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(5))
        .build()
        .unwrap_or_default()
}

/// Non-2xx responses become [`BoardError::Api`].
pub(crate) async fn read_body(response: reqwest::Response) -> Result<String, BoardError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(BoardError::Api {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(body)
}

/// Decodes listings one at a time so a malformed entry only drops itself.
/// Each kept listing is tagged with the board it came from.
pub(crate) fn decode_listings(items: Vec<Value>, source: BoardId) -> Vec<JobListing> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<JobListing>(item) {
            Ok(job) => Some(job.with_source(source)),
            Err(e) => {
                debug!(board = %source, error = %e, "skipping malformed listing");
                None
            }
        })
        .collect()
}

/// All boards in fan-out order: Careerjet, Jooble, web3.career.
pub fn create_boards(config: &Config) -> Vec<Arc<dyn JobBoard>> {
    let timeout = Duration::from_secs(config.search.timeout_secs.max(1));
    vec![
        Arc::new(CareerjetBoard::new(config.careerjet.clone(), timeout)),
        Arc::new(JoobleBoard::new(config.jooble.clone(), timeout)),
        Arc::new(Web3Board::new(config.web3.clone(), timeout)),
    ]
}

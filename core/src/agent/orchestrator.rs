use crate::agent::format::{CLARIFY_MESSAGE, NO_RESULTS_MESSAGE, format_listings};
use crate::aggregate::{aggregate, count_by_source};
use crate::boards::create_boards;
use crate::config::Config;
use crate::extract::SlotExtractor;
use crate::listing::JobListing;
use crate::providers::{create_provider, sampling_from};
use crate::session::{DEFAULT_MAX_HISTORY, Session};
use crate::traits::JobBoard;
use anyhow::Result;
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_BOARD_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_MAX_RESULTS: usize = 5;

/// Runs one user session: extract, merge, fan out, aggregate, format.
///
/// Turns take `&mut self`, so a session's state is never mutated concurrently.
pub struct Orchestrator {
    extractor: SlotExtractor,
    boards: Vec<Arc<dyn JobBoard>>,
    session: Session,
    board_timeout: Duration,
    max_results: usize,
}

impl Orchestrator {
    pub fn new(extractor: SlotExtractor, boards: Vec<Arc<dyn JobBoard>>) -> Self {
        Self {
            extractor,
            boards,
            session: Session::new(DEFAULT_MAX_HISTORY),
            board_timeout: DEFAULT_BOARD_TIMEOUT,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = create_provider(&config.llm)?;
        let extractor = SlotExtractor::new(provider).with_sampling(sampling_from(&config.llm));

        Ok(Self::new(extractor, create_boards(config))
            .with_board_timeout(Duration::from_secs(config.search.timeout_secs.max(1)))
            .with_max_results(config.search.max_results)
            .with_max_history(config.search.max_history))
    }

    pub fn with_board_timeout(mut self, timeout: Duration) -> Self {
        self.board_timeout = timeout;
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max.max(1);
        self
    }

    /// Starts a fresh session with the given history bound.
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.session = Session::new(max);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn handle(&mut self, message: &str) -> String {
        self.session.history.truncate();
        let history = self.session.history.recent();
        let extracted = self.extractor.extract(message, &history).await;

        if extracted.is_empty() {
            info!(session = %self.session.id, "no slots extracted, asking for clarification");
            return CLARIFY_MESSAGE.to_string();
        }

        let merged = self.session.record_turn(message, extracted);
        debug!(session = %self.session.id, slots = ?merged.present(), "context updated");

        let results = self.search_all().await;
        let jobs = aggregate(results);

        info!(
            session = %self.session.id,
            unique = jobs.len(),
            sources = ?count_by_source(&jobs),
            "turn aggregated"
        );

        if jobs.is_empty() {
            return NO_RESULTS_MESSAGE.to_string();
        }

        format_listings(&jobs, self.max_results)
    }

    /// Queries every board concurrently; results keep board order.
    async fn search_all(&self) -> Vec<Vec<JobListing>> {
        let timeout = self.board_timeout;
        let searches = self.boards.iter().map(|board| {
            let query = self.session.context.to_provider_params(board.id());
            async move {
                match tokio::time::timeout(timeout, board.search(&query)).await {
                    Ok(listings) => listings,
                    Err(_) => {
                        warn!(
                            board = %board.id(),
                            ?timeout,
                            "board search timed out"
                        );
                        Vec::new()
                    }
                }
            }
        });

        join_all(searches).await
    }
}

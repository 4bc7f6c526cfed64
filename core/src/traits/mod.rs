pub mod job_board;
pub mod provider;

pub use job_board::{BoardError, BoardId, JobBoard, ProviderQuery};
pub use provider::{ChatMessage, ChatRequest, ChatResponse, Provider, Sampling};

pub mod format;
pub mod orchestrator;

pub use format::{CLARIFY_MESSAGE, NO_RESULTS_MESSAGE, REFINE_PROMPT, format_listings};
pub use orchestrator::Orchestrator;

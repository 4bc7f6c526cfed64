pub mod agent;
pub mod aggregate;
pub mod boards;
pub mod config;
pub mod extract;
pub mod listing;
pub mod providers;
pub mod session;
pub mod slots;
pub mod traits;

pub use agent::Orchestrator;
pub use aggregate::aggregate;
pub use config::*;
pub use extract::SlotExtractor;
pub use listing::JobListing;
pub use session::{ConversationContext, History, HistoryEntry, Session};
pub use slots::{Keywords, Slots};
pub use traits::*;

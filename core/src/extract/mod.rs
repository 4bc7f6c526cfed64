//! Slot extraction: regex patterns first, language model as fallback.

pub mod patterns;
pub mod prompts;

pub use patterns::match_patterns;

use crate::session::HistoryEntry;
use crate::slots::Slots;
use crate::traits::{ChatMessage, ChatRequest, Provider, Sampling};
use prompts::{SLOT_EXTRACTION_SYSTEM, build_slot_prompt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// History entries forwarded to the model.
pub const PROMPT_HISTORY_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] anyhow::Error),

    #[error("LLM returned empty content")]
    EmptyCompletion,

    #[error("LLM output is not a slot object: {0}")]
    Malformed(String),
}

pub struct SlotExtractor {
    provider: Arc<dyn Provider>,
    sampling: Sampling,
}

impl SlotExtractor {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            sampling: Sampling::default(),
        }
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Never fails: any model or parse error yields empty slots.
    pub async fn extract(&self, utterance: &str, history: &[HistoryEntry]) -> Slots {
        if let Some(slots) = match_patterns(utterance) {
            debug!(?slots, "slots matched by pattern");
            return slots;
        }

        match self.extract_with_model(utterance, history).await {
            Ok(slots) => {
                debug!(?slots, provider = self.provider.name(), "slots extracted by model");
                slots
            }
            Err(e) => {
                warn!(error = %e, "slot extraction failed");
                Slots::default()
            }
        }
    }

    pub async fn extract_with_model(
        &self,
        utterance: &str,
        history: &[HistoryEntry],
    ) -> Result<Slots, ExtractError> {
        let recent = &history[history.len().saturating_sub(PROMPT_HISTORY_LIMIT)..];
        let messages = [
            ChatMessage::system(SLOT_EXTRACTION_SYSTEM),
            ChatMessage::user(build_slot_prompt(recent, utterance)),
        ];
        let request = ChatRequest {
            messages: &messages,
            sampling: self.sampling,
        };

        let response = self.provider.chat(request).await?;
        let text = response.text_or_empty().trim();
        if text.is_empty() {
            return Err(ExtractError::EmptyCompletion);
        }

        parse_slots(text)
    }
}

/// Validates a completion against the slot schema.
pub fn parse_slots(text: &str) -> Result<Slots, ExtractError> {
    let text = strip_json_fences(text);
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ExtractError::Malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(ExtractError::Malformed(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    let slots: Slots =
        serde_json::from_value(value).map_err(|e| ExtractError::Malformed(e.to_string()))?;
    Ok(slots.without_blanks())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Strips ```json ... ``` or ``` ... ``` fences models like to add.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}
